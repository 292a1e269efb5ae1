// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Control tick timebase on basic timer TIM6.
//!
//! Counts on the same `ENC_SAMPLE_HZ` timebase as the encoder captures and raises its update
//! interrupt (`TIM6_DAC`) every `TICK_TIMER_PERIOD` ticks.

use cortex_m::peripheral::NVIC;
use stm32f7xx_hal::pac::{self, Interrupt};

use crate::config::{ENC_PRESCALER, TICK_TIMER_PERIOD};

pub struct TickTimer {
    tim: pac::TIM6,
}

impl TickTimer {
    /// Configure TIM6. The counter stays stopped until [`start`](Self::start).
    pub fn tim6(tim: pac::TIM6) -> Self {
        tim.cr1.modify(|_, w| w.cen().clear_bit().urs().set_bit());
        tim.psc.write(|w| unsafe { w.bits(ENC_PRESCALER - 1) });
        tim.arr.write(|w| unsafe { w.bits(TICK_TIMER_PERIOD) });

        // Latch the prescaler; URS keeps this from setting UIF
        tim.egr.write(|w| w.ug().set_bit());
        tim.sr.modify(|_, w| w.uif().clear_bit());

        Self { tim }
    }

    /// Enable the update interrupt, start counting and unmask `TIM6_DAC` in the NVIC.
    pub fn start(&mut self) {
        self.tim.dier.modify(|_, w| w.uie().set_bit());
        self.tim.cr1.modify(|_, w| w.cen().set_bit());

        // SAFETY: the handler only touches state behind a critical section.
        unsafe { NVIC::unmask(Interrupt::TIM6_DAC) };
    }

    /// Acknowledge the update interrupt. Call first thing in the handler.
    #[inline]
    pub fn clear_interrupt(&mut self) {
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }
}
