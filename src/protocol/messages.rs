// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command language spoken on the debug console.

use crate::control::Gains;
use crate::motors::MotorId;

/// Printed once at start-up.
pub const BANNER: &str = "Quad motor controller\r\nType \"help\" for a list of available commands.";

/// Printed before every input line.
pub const PROMPT: &str = "> ";

/// Reply to `help`, one command per line.
pub const HELP: &[&str] = &[
    "gains [a|b|c|d] [p] [i] [d]",
    "heading [angle]",
    "help",
    "pwm [a|b|c|d] [-10000..10000]",
    "samples [a|b|c|d]",
    "set [a|b|c|d] [speed]",
    "status [a|b|c|d]",
    "stop [a|b|c|d]",
];

/// A parsed console command.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Help,
    /// Open-loop drive; the sign selects the direction.
    Pwm { motor: MotorId, duty: i32 },
    /// Closed-loop target speed.
    Set { motor: MotorId, setpoint: i32 },
    /// Dump the step response recorder.
    Samples { motor: MotorId },
    Status { motor: MotorId },
    Gains { motor: MotorId, gains: Gains },
    Stop { motor: MotorId },
    Heading,
}
