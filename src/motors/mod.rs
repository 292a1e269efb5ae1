// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motor Channels
//!
//! Per-motor state that sits above the device-level translation in `drivers`.
//!
//! ## Modules
//!
//! - [`channel`] - one motor: controller, commanded drive and step-response recorder.

pub mod channel;

pub use channel::{ChannelStatus, MotorChannel, MotorId};
