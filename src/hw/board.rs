// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The drive's view of the board: four capture timers and two bridge PWM timers.

use stm32f7xx_hal::pac;

use crate::drivers::{BridgeDuty, MotorHardware};
use crate::hw::pins::{BridgePins, EncoderPins};
use crate::hw::pwm::{BridgePwm, Half};
use crate::hw::EncoderCapture;
use crate::motors::MotorId;

/// Timer peripherals consumed by [`Board::new`].
pub struct BoardTimers {
    pub tim1: pac::TIM1,
    pub tim2: pac::TIM2,
    pub tim3: pac::TIM3,
    pub tim4: pac::TIM4,
    pub tim9: pac::TIM9,
    pub tim12: pac::TIM12,
}

pub struct Board {
    pwm_ab: BridgePwm<pac::TIM4>,
    pwm_cd: BridgePwm<pac::TIM1>,
    enc_a: EncoderCapture<pac::TIM2>,
    enc_b: EncoderCapture<pac::TIM3>,
    enc_c: EncoderCapture<pac::TIM9>,
    enc_d: EncoderCapture<pac::TIM12>,
    _bridges: BridgePins,
    _encoders: EncoderPins,
}

impl Board {
    /// Configure every timer. Timer clocks must already be enabled (see
    /// [`enable_timer_clocks`](crate::hw::enable_timer_clocks)).
    pub fn new(timers: BoardTimers, bridges: BridgePins, encoders: EncoderPins) -> Self {
        Self {
            pwm_ab: BridgePwm::tim4(timers.tim4),
            pwm_cd: BridgePwm::tim1(timers.tim1),
            enc_a: EncoderCapture::tim2(timers.tim2),
            enc_b: EncoderCapture::tim3(timers.tim3),
            enc_c: EncoderCapture::tim9(timers.tim9),
            enc_d: EncoderCapture::tim12(timers.tim12),
            _bridges: bridges,
            _encoders: encoders,
        }
    }
}

impl MotorHardware for Board {
    fn capture_period(&mut self, motor: MotorId) -> u16 {
        match motor {
            MotorId::A => self.enc_a.period(),
            MotorId::B => self.enc_b.period(),
            MotorId::C => self.enc_c.period(),
            MotorId::D => self.enc_d.period(),
        }
    }

    fn write_bridge(&mut self, motor: MotorId, duty: BridgeDuty) {
        match motor {
            MotorId::A => self.pwm_ab.write(Half::Low, duty),
            MotorId::B => self.pwm_ab.write(Half::High, duty),
            MotorId::C => self.pwm_cd.write(Half::Low, duty),
            MotorId::D => self.pwm_cd.write(Half::High, duty),
        }
    }
}
