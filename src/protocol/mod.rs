// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Text command protocol spoken on the debug console.

pub mod error;
pub mod messages;
pub mod parser;
pub mod shell;

pub use error::CommandError;
pub use messages::Command;
pub use parser::{parse, LineEditor};
pub use shell::Shell;
