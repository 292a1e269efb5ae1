// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Build-time configuration for the drive electronics.
//!
//! Everything here is a plain `const` so the interrupt path never touches configuration storage.
//! Gains and integrator limits are only the power-on defaults; each channel keeps its own copy in
//! [`Pid`](crate::control::Pid) and can be re-tuned at runtime from the console.

/// Timer kernel clock in Hz. The HAL default clock tree runs everything from the 16 MHz HSI.
pub const TIMER_CLK_HZ: u32 = 16_000_000;

/// PWM timer top value. A compare value of `PWM_PERIOD` is 100% duty.
pub const PWM_PERIOD: u16 = 10_000;

/// Prescaler shared by the encoder capture timers and the control tick timer.
pub const ENC_PRESCALER: u32 = 512;

/// Frequency of the timebase the encoder capture timers count on.
pub const ENC_SAMPLE_HZ: u32 = TIMER_CLK_HZ / ENC_PRESCALER;

/// Control tick period in units of 500 timebase ticks (16 ms each at 31.25 kHz).
pub const MS_TIMER_PER: u32 = 1;

/// Auto-reload value of the control tick timer.
pub const TICK_TIMER_PERIOD: u32 = 500 * MS_TIMER_PER;

/// Number of `(pwm, speed)` pairs captured after every setpoint change.
pub const NUM_SAMPLES: usize = 100;

/// Default proportional gain.
pub const DEFAULT_P: i32 = 20;
/// Default integral gain.
pub const DEFAULT_I: i32 = 2;
/// Default derivative gain.
pub const DEFAULT_D: i32 = 5;

/// Integrator clamp.
pub const I_SUM_MIN: i32 = -10_000_000;
pub const I_SUM_MAX: i32 = 10_000_000;

/// Debug console baud rate.
pub const CONSOLE_BAUD: u32 = 115_200;

/// Longest command line the console accepts, not counting the terminating CR.
pub const LINE_CAPACITY: usize = 32;

const _: () = assert!(ENC_SAMPLE_HZ <= u16::MAX as u32);
const _: () = assert!(TICK_TIMER_PERIOD >= 1 && TICK_TIMER_PERIOD <= u16::MAX as u32);
const _: () = assert!(ENC_PRESCALER >= 1 && ENC_PRESCALER <= 65_536);
const _: () = assert!(I_SUM_MIN <= 0 && I_SUM_MAX >= 0);
const _: () = assert!(NUM_SAMPLES > 0);
