// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Encoder edge period capture via STM32F7 timers in reset slave mode.
//!
//! Each motor's encoder pulse train goes to channel 1 of its own timer (TIM2, TIM3, TIM9, TIM12).
//! The timer counts at `ENC_SAMPLE_HZ` and is reset by every rising edge on TI1FP1, so CCR1 holds
//! the number of ticks between the last two edges. `URS` keeps the slave reset from raising the
//! update flag; an update flag therefore means the counter wrapped with no edge. What is reported
//! from the flags is decided by [`CaptureLatch`].

use stm32f7xx_hal::pac;

use crate::config::ENC_PRESCALER;
use crate::drivers::CaptureLatch;

pub struct EncoderCapture<TIM> {
    tim: TIM,
    latch: CaptureLatch,
}

macro_rules! encoder_capture {
    ($($TIM:ident: $ctor:ident,)+) => {
        $(
            impl EncoderCapture<pac::$TIM> {
                #[doc = concat!("Configure ", stringify!($TIM), " for edge period capture.")]
                pub fn $ctor(tim: pac::$TIM) -> Self {
                    // Disable counter while configuring
                    tim.cr1.modify(|_, w| w.cen().clear_bit());

                    tim.psc.write(|w| unsafe { w.bits(ENC_PRESCALER - 1) });
                    tim.arr.write(|w| unsafe { w.bits(0xFFFF) });

                    // IC1 on TI1, rising edge, reset the counter on TI1FP1
                    tim.ccmr1_input().modify(|_, w| w.cc1s().ti1());
                    tim.ccer.modify(|_, w| w.cc1e().set_bit());
                    tim.smcr.modify(|_, w| unsafe { w.sms().bits(0b100).ts().bits(0b101) });

                    // Load the prescaler, then drop the flags that raised
                    tim.cr1.modify(|_, w| w.urs().set_bit());
                    tim.egr.write(|w| w.ug().set_bit());
                    tim.sr.modify(|_, w| w.uif().clear_bit().cc1if().clear_bit());
                    tim.cnt.write(|w| unsafe { w.bits(0) });

                    tim.cr1.modify(|_, w| w.cen().set_bit());

                    Self {
                        tim,
                        latch: CaptureLatch::new(),
                    }
                }

                /// Ticks between the two most recent edges, 0 while stalled.
                pub fn period(&mut self) -> u16 {
                    let sr = self.tim.sr.read();
                    let overflow = sr.uif().bit_is_set();
                    if overflow {
                        self.tim.sr.modify(|_, w| w.uif().clear_bit());
                    }

                    // Reading CCR1 clears CC1IF
                    let edge = if sr.cc1if().bit_is_set() {
                        Some(self.tim.ccr1.read().bits() as u16)
                    } else {
                        None
                    };
                    self.latch.update(edge, overflow)
                }
            }
        )+
    };
}

encoder_capture! {
    TIM2: tim2,
    TIM3: tim3,
    TIM9: tim9,
    TIM12: tim12,
}
