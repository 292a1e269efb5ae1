// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! This module provides the closed-loop speed control for the four drive motors.
//!
//! ## Modules
//!
//! - [`pid`] - Integer PID speed regulator.
//! - [`samples`] - Fill-once step response recorder.
//! - [`drive`] - The periodic control tick and the console-facing operations.
//! - [`shared`] - Interrupt-safe home for the drive.

pub mod drive;
pub mod pid;
pub mod samples;
pub mod shared;

pub use drive::Drive;
pub use pid::{Gains, Pid};
pub use samples::{Sample, SampleBuffer, SampleReport};
pub use shared::SharedDrive;
