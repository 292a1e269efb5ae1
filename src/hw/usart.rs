// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART abstraction layer.
//!
//! Split into a transmit half, which the console and the logger share, and a receive half owned
//! by the foreground shell loop. Formatted output goes through [`Console`](crate::hw::Console).
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{self, Instance, Pins, Rx, Serial, Tx},
};

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

pub struct UsartRx<U: Instance> {
    rx: Rx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn split<PINS: Pins<U>>(serial: Serial<U, PINS>) -> (Self, UsartRx<U>) {
        let (tx, rx) = serial.split();
        (Self { tx }, UsartRx { rx })
    }

    /// Queue one byte if the transmit register is free. Never waits.
    #[inline]
    pub fn try_write_byte(&mut self, b: u8) -> bool {
        self.tx.write(b).is_ok()
    }
}

impl<U: Instance> UsartRx<U> {
    /// Block until a byte arrives.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, serial::Error> {
        block!(self.rx.read())
    }
}
