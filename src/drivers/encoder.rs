// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Encoder period to speed conversion.
//!
//! The capture timers report the number of timebase ticks between two rising edges of the encoder
//! signal. Speed is the reciprocal of that period, expressed in edges per second.
//!
//! [`CaptureLatch`] turns the raw capture and overflow flags into the period the control loop
//! sees.

use crate::config::ENC_SAMPLE_HZ;

/// Convert a raw captured period into a speed estimate.
///
/// A period of zero means no edge was seen in the capture window, so the motor is reported as
/// stopped instead of infinitely fast. Integer division truncates toward zero.
#[inline]
pub const fn speed_from_period(period: u16) -> u32 {
    if period == 0 {
        0
    } else {
        ENC_SAMPLE_HZ / period as u32
    }
}

/// Period reported for one capture timer between control ticks.
///
/// The timer is reset by every encoder edge, so an overflow means a full counter span passed
/// without one. From then on the motor is stalled and reports 0. The first capture after a stall
/// measures from an arbitrary point of the wrapped counter, so it only re-arms the latch; the edge
/// after it gives the next real period.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CaptureLatch {
    last: u16,
    stalled: bool,
}

impl CaptureLatch {
    /// Starts stalled: the first edge after power-on has no earlier edge to measure from.
    pub const fn new() -> Self {
        Self {
            last: 0,
            stalled: true,
        }
    }

    /// Fold one poll of the timer into the reported period.
    ///
    /// `edge` is the captured value if a capture happened since the last poll, `overflow` whether
    /// the counter wrapped. An edge seen together with an overflow may hold a wrapped value and
    /// counts as a stall.
    pub fn update(&mut self, edge: Option<u16>, overflow: bool) -> u16 {
        if overflow {
            self.stalled = true;
            self.last = 0;
        } else if let Some(period) = edge {
            if self.stalled {
                self.stalled = false;
            } else {
                self.last = period;
            }
        }
        self.last
    }

    #[cfg(test)]
    fn is_stalled(&self) -> bool {
        self.stalled
    }
}

impl Default for CaptureLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Latch that has already seen one edge and reports `period`.
    fn running(period: u16) -> CaptureLatch {
        let mut latch = CaptureLatch::new();
        latch.update(Some(1), false);
        assert_eq!(latch.update(Some(period), false), period);
        latch
    }

    #[test]
    fn first_edge_after_power_on_is_discarded() {
        let mut latch = CaptureLatch::new();
        assert_eq!(latch.update(None, false), 0);
        assert_eq!(latch.update(Some(40_000), false), 0);
        assert!(!latch.is_stalled());
        assert_eq!(latch.update(Some(312), false), 312);
    }

    #[test]
    fn idle_poll_keeps_last_period() {
        let mut latch = running(500);
        assert_eq!(latch.update(None, false), 500);
        assert_eq!(latch.update(None, false), 500);
    }

    #[test]
    fn overflow_only_reports_zero() {
        let mut latch = running(500);
        assert_eq!(latch.update(None, true), 0);
        assert!(latch.is_stalled());
        assert_eq!(latch.update(None, false), 0);
    }

    #[test]
    fn edge_with_overflow_reports_zero() {
        let mut latch = running(500);
        assert_eq!(latch.update(Some(123), true), 0);
        assert!(latch.is_stalled());
    }

    #[test]
    fn first_edge_after_stall_is_discarded() {
        let mut latch = running(500);
        latch.update(None, true);

        // Wrapped count since the overflow
        assert_eq!(latch.update(Some(9_000), false), 0);
        assert!(!latch.is_stalled());
        assert_eq!(latch.update(None, false), 0);

        assert_eq!(latch.update(Some(700), false), 700);
    }

    #[test]
    fn repeated_overflows_stay_stalled() {
        let mut latch = running(500);
        for _ in 0..5 {
            assert_eq!(latch.update(None, true), 0);
        }
        assert_eq!(latch.update(Some(10), false), 0);
        assert_eq!(latch.update(Some(20), false), 20);
    }

    #[test]
    fn zero_period_is_stopped() {
        assert_eq!(speed_from_period(0), 0);
    }

    #[test]
    fn period_one_is_full_timebase() {
        assert_eq!(speed_from_period(1), ENC_SAMPLE_HZ);
    }

    #[test]
    fn division_truncates() {
        assert_eq!(ENC_SAMPLE_HZ, 31_250);
        assert_eq!(speed_from_period(312), 100);
        assert_eq!(speed_from_period(313), 99);
        assert_eq!(speed_from_period(u16::MAX), 0);
    }

    #[test]
    fn speed_never_increases_with_period() {
        let mut prev = speed_from_period(1);
        for p in 2..=u16::MAX {
            let v = speed_from_period(p);
            assert!(v <= prev, "period {p}: {v} > {prev}");
            prev = v;
        }
    }
}
