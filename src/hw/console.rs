// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Shared debug console transmitter.
//!
//! The shell and the [`SerialLogger`](crate::hw::SerialLogger) both print to USART1. The transmit
//! half lives in a static so either can reach it. Only the register write of each byte runs in a
//! critical section; waiting for the line to drain happens with interrupts enabled, so printing
//! never delays the control tick by more than one register access.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;
use stm32f7xx_hal::pac::USART1;

use crate::hw::Usart;

static TX: Mutex<RefCell<Option<Usart<USART1>>>> = Mutex::new(RefCell::new(None));

/// Hand the transmitter to the console.
pub fn install(tx: Usart<USART1>) {
    critical_section::with(|cs| TX.borrow_ref_mut(cs).replace(tx));
}

/// `fmt::Write` handle onto the console. Output is dropped until [`install`] has run.
#[derive(Copy, Clone, Default)]
pub struct Console;

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &b in s.as_bytes() {
            while !critical_section::with(|cs| match TX.borrow_ref_mut(cs).as_mut() {
                Some(tx) => tx.try_write_byte(b),
                None => true,
            }) {}
        }
        Ok(())
    }
}
