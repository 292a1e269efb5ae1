// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Integer PID speed regulator.
//!
//! Works in `no_std`, does not allocate and uses no floating point, so it can run inside the
//! control tick interrupt. One call to [`Pid::update`] is one fixed-rate sample; the sample period
//! is folded into the gains.
//!
//! The output is a one-quadrant duty magnitude: the loop can only add or remove drive in the
//! direction already commanded, it never reverses the motor.

use crate::config::{DEFAULT_D, DEFAULT_I, DEFAULT_P, I_SUM_MAX, I_SUM_MIN, PWM_PERIOD};

/// Proportional, integral and derivative gains. Units are empirical.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Gains {
    pub p: i32,
    pub i: i32,
    pub d: i32,
}

impl Gains {
    pub const fn new(p: i32, i: i32, d: i32) -> Self {
        Self { p, i, d }
    }
}

impl Default for Gains {
    fn default() -> Self {
        Self::new(DEFAULT_P, DEFAULT_I, DEFAULT_D)
    }
}

/// PID controller with tunable gains, integrator clamping and output clamping.
#[derive(Clone, Debug)]
pub struct Pid {
    gains: Gains,

    /// Integrator state
    i_sum: i32,
    i_sum_min: i32,
    i_sum_max: i32,

    /// Error seen on the previous update (for the derivative term)
    prev_error: i64,

    /// Output clamp
    out_min: u16,
    out_max: u16,

    setpoint: i32,
    enabled: bool,
}

impl Pid {
    /// Create a disabled controller with zero setpoint, the default integrator window and an output
    /// range of `[0, PWM_PERIOD]`.
    pub const fn new(gains: Gains) -> Self {
        Self {
            gains,
            i_sum: 0,
            i_sum_min: I_SUM_MIN,
            i_sum_max: I_SUM_MAX,
            prev_error: 0,
            out_min: 0,
            out_max: PWM_PERIOD,
            setpoint: 0,
            enabled: false,
        }
    }

    /// Replace the gains.
    pub fn with_gains(mut self, gains: Gains) -> Self {
        self.gains = gains;
        self
    }

    /// Set integrator limits for anti-windup. The bounds may be given in either order.
    pub fn with_integral_limits(mut self, a: i32, b: i32) -> Self {
        self.i_sum_min = a.min(b);
        self.i_sum_max = a.max(b);
        self.i_sum = self.i_sum.clamp(self.i_sum_min, self.i_sum_max);
        self
    }

    /// Set output limits. Both bounds are capped at `PWM_PERIOD`.
    pub fn with_output_limits(mut self, a: u16, b: u16) -> Self {
        self.out_min = a.min(b).min(PWM_PERIOD);
        self.out_max = a.max(b).min(PWM_PERIOD);
        self
    }

    #[inline]
    pub fn gains(&self) -> Gains {
        self.gains
    }

    #[inline]
    pub fn set_gains(&mut self, gains: Gains) {
        self.gains = gains;
    }

    #[inline]
    pub fn setpoint(&self) -> i32 {
        self.setpoint
    }

    #[inline]
    pub fn set_setpoint(&mut self, setpoint: i32) {
        self.setpoint = setpoint;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    #[inline]
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    #[inline]
    pub fn i_sum(&self) -> i32 {
        self.i_sum
    }

    #[inline]
    pub fn integral_limits(&self) -> (i32, i32) {
        (self.i_sum_min, self.i_sum_max)
    }

    #[inline]
    pub fn prev_error(&self) -> i64 {
        self.prev_error
    }

    /// Reset integrator + derivative history.
    pub fn reset(&mut self) {
        self.i_sum = 0.clamp(self.i_sum_min, self.i_sum_max);
        self.prev_error = 0;
    }

    /// Run one controller sample against the measured speed.
    ///
    /// Returns the new duty magnitude in [`out_min`, `out_max`].
    pub fn update(&mut self, measured: u32) -> u16 {
        let error = self.setpoint as i64 - measured as i64;

        // ----- I state, hard clamped -----
        let i_sum = (self.i_sum as i64 + error).clamp(self.i_sum_min as i64, self.i_sum_max as i64);
        self.i_sum = i_sum as i32;

        // ----- Terms (derivative on error) -----
        let p = (self.gains.p as i64).saturating_mul(error);
        let i = (self.gains.i as i64).saturating_mul(i_sum);
        let d = (self.gains.d as i64).saturating_mul(error - self.prev_error);
        self.prev_error = error;

        // ----- Output clamp -----
        let out = p.saturating_add(i).saturating_add(d);
        out.clamp(self.out_min as i64, self.out_max as i64) as u16
    }
}

impl Default for Pid {
    fn default() -> Self {
        Self::new(Gains::default())
    }
}
