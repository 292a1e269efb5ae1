// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers. Only built for the target.

pub mod board;
pub mod console;
pub mod encoder;
pub mod logger;
pub mod pins;
pub mod pwm;
pub mod tick_timer;
pub mod usart;

pub use board::{Board, BoardTimers};
pub use console::Console;
pub use encoder::EncoderCapture;
pub use logger::SerialLogger;
pub use pins::BoardPins;
pub use pwm::BridgePwm;
pub use tick_timer::TickTimer;
pub use usart::{Usart, UsartRx};

use stm32f7xx_hal::pac;

/// Clock the PWM, capture and tick timers. Call before `RCC` is handed to the HAL.
pub fn enable_timer_clocks(rcc: &pac::RCC) {
    rcc.apb1enr.modify(|_, w| {
        w.tim2en()
            .set_bit()
            .tim3en()
            .set_bit()
            .tim4en()
            .set_bit()
            .tim6en()
            .set_bit()
            .tim12en()
            .set_bit()
    });
    rcc.apb2enr
        .modify(|_, w| w.tim1en().set_bit().tim9en().set_bit());
}
