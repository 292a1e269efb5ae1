// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Quad Motor Controller Firmware
//!
//! Closed-loop speed control for four brushed DC motors, written in Rust, targeting an STM32F777
//! MCU. Each motor has an encoder whose edge period is captured in hardware and an H-bridge driven
//! by two PWM outputs. A periodic timer interrupt runs one integer PID step per motor and a text
//! console on USART1 lets an operator drive, tune and inspect every channel.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Clock, PWM, sampling and default tuning constants |
//! | [`control`] | PID regulator, sample recorder and the periodic drive tick |
//! | [`drivers`] | Encoder period to speed, direction + duty to bridge compare values |
//! | [`motors`] | Per-motor channel state |
//! | [`protocol`] | Console line editing, command parsing and execution |
//! | `hw` | MCU wrappers for the PWM, capture and tick timers and the USART (target only) |
//!
//! Everything except `hw` is plain `core` code and is unit tested on the host.
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod motors;
pub mod protocol;

#[cfg(target_os = "none")]
pub mod hw;
