// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Dual H-bridge PWM on one four-channel timer.
//!
//! TIM4 drives bridges A (CH1/CH2) and B (CH3/CH4); TIM1 drives C and D the same way. All four
//! channels run edge-aligned PWM mode 1 with compare preload, so a new duty only takes effect at
//! the next update event. [`BridgePwm::write`] sets `UDIS` around the two compare writes so both
//! halves of a bridge latch on the same period boundary.

use stm32f7xx_hal::pac;

use crate::config::PWM_PERIOD;
use crate::drivers::BridgeDuty;

/// OCxM = PWM mode 1
const OCM_PWM1: u8 = 0b110;

/// Which channel pair of the timer a bridge sits on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Half {
    /// CH1 = IN1, CH2 = IN2
    Low,
    /// CH3 = IN1, CH4 = IN2
    High,
}

pub struct BridgePwm<TIM> {
    tim: TIM,
}

/// Shared register setup. Leaves every compare at 0 and the counter running.
macro_rules! configure_pwm {
    ($tim:expr) => {{
        let tim = $tim;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Count at the timer kernel clock, wrap after PWM_PERIOD ticks
        tim.psc.write(|w| unsafe { w.bits(0) });
        tim.arr.write(|w| unsafe { w.bits(PWM_PERIOD as u32 - 1) });

        tim.ccmr1_output().modify(|_, w| unsafe {
            w.oc1m()
                .bits(OCM_PWM1)
                .oc1pe()
                .set_bit()
                .oc2m()
                .bits(OCM_PWM1)
                .oc2pe()
                .set_bit()
        });
        tim.ccmr2_output().modify(|_, w| unsafe {
            w.oc3m()
                .bits(OCM_PWM1)
                .oc3pe()
                .set_bit()
                .oc4m()
                .bits(OCM_PWM1)
                .oc4pe()
                .set_bit()
        });

        tim.ccr1.write(|w| unsafe { w.bits(0) });
        tim.ccr2.write(|w| unsafe { w.bits(0) });
        tim.ccr3.write(|w| unsafe { w.bits(0) });
        tim.ccr4.write(|w| unsafe { w.bits(0) });

        // Active high outputs
        tim.ccer.modify(|_, w| {
            w.cc1e()
                .set_bit()
                .cc2e()
                .set_bit()
                .cc3e()
                .set_bit()
                .cc4e()
                .set_bit()
        });

        // Load the preloaded values, then run
        tim.egr.write(|w| w.ug().set_bit());
        tim.cr1.modify(|_, w| w.arpe().set_bit().cen().set_bit());
    }};
}

/// Latched write of one bridge's compare pair.
macro_rules! write_pair {
    ($tim:expr, $half:expr, $duty:expr) => {{
        let tim = $tim;
        let duty: BridgeDuty = $duty;

        tim.cr1.modify(|_, w| w.udis().set_bit());
        match $half {
            Half::Low => {
                tim.ccr1.write(|w| unsafe { w.bits(duty.in1 as u32) });
                tim.ccr2.write(|w| unsafe { w.bits(duty.in2 as u32) });
            }
            Half::High => {
                tim.ccr3.write(|w| unsafe { w.bits(duty.in1 as u32) });
                tim.ccr4.write(|w| unsafe { w.bits(duty.in2 as u32) });
            }
        }
        tim.cr1.modify(|_, w| w.udis().clear_bit());
    }};
}

impl BridgePwm<pac::TIM4> {
    /// Configure TIM4 for bridges A and B.
    pub fn tim4(tim4: pac::TIM4) -> Self {
        configure_pwm!(&tim4);
        Self { tim: tim4 }
    }

    #[inline]
    pub fn write(&mut self, half: Half, duty: BridgeDuty) {
        write_pair!(&self.tim, half, duty);
    }
}

impl BridgePwm<pac::TIM1> {
    /// Configure TIM1 for bridges C and D. The advanced timer also needs its main output enable.
    pub fn tim1(tim1: pac::TIM1) -> Self {
        configure_pwm!(&tim1);
        tim1.bdtr.modify(|_, w| w.moe().set_bit());
        Self { tim: tim1 }
    }

    #[inline]
    pub fn write(&mut self, half: Half, duty: BridgeDuty) {
        write_pair!(&self.tim, half, duty);
    }
}
