// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fill-once step response recorder.
//!
//! After a setpoint change the control tick appends one `(pwm, speed)` pair per sample until the
//! buffer is full, then the buffer is frozen until the next setpoint change rewinds it.

/// One recorded controller sample.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Sample {
    /// Duty magnitude commanded on this tick.
    pub pwm: u16,
    /// Speed measured on this tick.
    pub speed: u32,
}

impl Sample {
    pub const ZERO: Self = Self { pwm: 0, speed: 0 };
}

/// Result of reading a recorder from the foreground.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SampleReport<const N: usize> {
    /// Still recording; data is not returned until the buffer is full.
    Filling { collected: usize, capacity: usize },
    /// A complete copy of the buffer.
    Full([Sample; N]),
}

/// Bounded recorder holding `N` samples.
#[derive(Clone, Debug)]
pub struct SampleBuffer<const N: usize> {
    samples: [Sample; N],
    cursor: usize,
}

impl<const N: usize> SampleBuffer<N> {
    pub const fn new() -> Self {
        Self {
            samples: [Sample::ZERO; N],
            cursor: 0,
        }
    }

    /// Rewind the cursor. Old contents stay in place and are overwritten as new samples arrive.
    #[inline]
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Append a sample if there is room. Returns `false` once the buffer is full.
    #[inline]
    pub fn record(&mut self, sample: Sample) -> bool {
        match self.samples.get_mut(self.cursor) {
            Some(slot) => {
                *slot = sample;
                self.cursor += 1;
                true
            }
            None => false,
        }
    }

    /// Number of samples recorded since the last reset.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursor >= N
    }

    /// Samples recorded since the last reset.
    #[inline]
    pub fn recorded(&self) -> &[Sample] {
        &self.samples[..self.cursor]
    }

    /// Copy the buffer out if it is full, otherwise report progress.
    pub fn report(&self) -> SampleReport<N> {
        if self.is_full() {
            SampleReport::Full(self.samples)
        } else {
            SampleReport::Filling {
                collected: self.cursor,
                capacity: N,
            }
        }
    }
}

impl<const N: usize> Default for SampleBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
