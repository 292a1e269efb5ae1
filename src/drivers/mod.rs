// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Level Translation
//!
//! This module sits between the raw `hw/` register layer and the control logic. It turns encoder
//! captures into speeds and drive commands into bridge compare values, and defines the
//! [`MotorHardware`] seam the control loop talks to.
//!
//! ## Modules
//!
//! - [`encoder`] – capture latch and period to speed conversion
//! - [`hbridge`] – direction + duty to dual-input bridge compare values

pub mod encoder;
pub mod hbridge;

pub use encoder::{speed_from_period, CaptureLatch};
pub use hbridge::{BridgeDuty, Direction};

use crate::motors::MotorId;

/// Register-level access to the four motor channels.
///
/// Implementations must be cheap and non-blocking: both methods are called from the control tick
/// interrupt.
pub trait MotorHardware {
    /// Ticks between the two most recent encoder edges of `motor`, or 0 if no edge was seen in
    /// the current capture window.
    fn capture_period(&mut self, motor: MotorId) -> u16;

    /// Load both compare values of `motor`'s bridge so they take effect on the same PWM period
    /// boundary.
    fn write_bridge(&mut self, motor: MotorId, duty: BridgeDuty);
}
