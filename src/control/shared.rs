// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Drive state shared between the console and the control tick interrupt.
//!
//! The interrupt preempts the foreground but never the other way round, so masking it for the
//! length of a foreground operation is enough to make that operation atomic. Every access goes
//! through a critical section; keep the closures short.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::control::Drive;
use crate::drivers::MotorHardware;

/// A [`Drive`] that can live in a `static` and be reached from both contexts.
pub struct SharedDrive<HW> {
    inner: Mutex<RefCell<Option<Drive<HW>>>>,
}

impl<HW> SharedDrive<HW> {
    /// An empty slot. Ticks are ignored until [`install`](Self::install) is called.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Hand the drive over to the shared slot, returning the previous one if any.
    pub fn install(&self, drive: Drive<HW>) -> Option<Drive<HW>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(drive))
    }

    /// Run `f` with the tick masked. Returns `None` if no drive is installed.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Drive<HW>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// True while a caller is inside [`lock`](Self::lock).
    #[cfg(test)]
    pub(crate) fn is_locked(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).try_borrow_mut().is_err())
    }
}

impl<HW: MotorHardware> SharedDrive<HW> {
    /// Interrupt entry point.
    #[inline]
    pub fn tick(&self) {
        self.lock(Drive::tick);
    }
}

impl<HW> Default for SharedDrive<HW> {
    fn default() -> Self {
        Self::new()
    }
}
