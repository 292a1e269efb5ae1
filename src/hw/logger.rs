// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! [`log`] backend that prints to the debug console.
//!
//! Initialize once at start-up, after the console transmitter is installed:
//!
//! ```ignore
//! hw::console::install(tx);
//! hw::logger::init(LevelFilter::Info).ok();
//! ```
//!
//! Each record is written as
//!
//! ```text
//! INFO quadmotor::control::drive: motor A: closed loop, setpoint 100
//! ```
//!
//! Never log from the control tick interrupt: a record blocks on the USART.

use core::fmt::Write;

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::hw::Console;

pub struct SerialLogger;

static LOGGER: SerialLogger = SerialLogger;

impl log::Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = write!(
                Console,
                "{} {}: {}\r\n",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Install the serial logger as the global `log` backend.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
