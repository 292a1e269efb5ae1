// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

use core::fmt;

/// Reasons a console command is refused. The `Display` text is the reply printed to the console.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CommandError {
    /// Unknown keyword, missing argument or non-numeric argument.
    BadCommand,
    /// Motor argument missing or not one of `a`..`d`.
    BadMotor,
    /// Recognised keyword with no implementation behind it.
    NotImplemented,
    /// The drive has not been handed to the shared slot yet.
    Offline,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommandError::BadCommand => "Bad command.",
            CommandError::BadMotor => "Bad motor.",
            CommandError::NotImplemented => "Not implemented.",
            CommandError::Offline => "Drive offline.",
        })
    }
}
