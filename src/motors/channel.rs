// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One motor channel: its speed controller, the drive it currently commands and the step response
//! recorder.
//!
//! A channel never touches hardware itself. The tick driver feeds it captured encoder periods and
//! writes the [`BridgeDuty`] it produces.

use core::fmt;

use crate::config::{NUM_SAMPLES, PWM_PERIOD};
use crate::control::samples::{Sample, SampleBuffer, SampleReport};
use crate::control::{Gains, Pid};
use crate::drivers::{speed_from_period, BridgeDuty, Direction};

/// Motor identity. Also the fixed order in which the tick visits channels.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MotorId {
    A,
    B,
    C,
    D,
}

impl MotorId {
    pub const ALL: [MotorId; 4] = [MotorId::A, MotorId::B, MotorId::C, MotorId::D];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a console token (`a`..`d`, either case).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "a" | "A" => Some(MotorId::A),
            "b" | "B" => Some(MotorId::B),
            "c" | "C" => Some(MotorId::C),
            "d" | "D" => Some(MotorId::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            MotorId::A => 'A',
            MotorId::B => 'B',
            MotorId::C => 'C',
            MotorId::D => 'D',
        }
    }
}

impl fmt::Display for MotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Snapshot of a channel for the `status` command.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChannelStatus {
    pub id: MotorId,
    pub pwm: u16,
    pub direction: Direction,
    pub enabled: bool,
    pub setpoint: i32,
    pub i_sum: i32,
    pub gains: Gains,
    /// Speed from the last tick's capture. `None` while the loop is off, since ticks skip the
    /// channel and the capture is not refreshed.
    pub speed: Option<u32>,
    pub samples: usize,
}

impl fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "motor {}: pwm {} {}, loop {}, setpoint {}, ",
            self.id,
            self.pwm,
            self.direction.as_str(),
            if self.enabled { "on" } else { "off" },
            self.setpoint,
        )?;
        match self.speed {
            Some(speed) => write!(f, "speed {}, ", speed)?,
            None => f.write_str("speed -, ")?,
        }
        write!(
            f,
            "i_sum {}, gains {}/{}/{}, samples {}/{}",
            self.i_sum,
            self.gains.p,
            self.gains.i,
            self.gains.d,
            self.samples,
            NUM_SAMPLES,
        )
    }
}

/// State of a single motor and its H-bridge.
#[derive(Clone, Debug)]
pub struct MotorChannel {
    id: MotorId,
    pid: Pid,
    direction: Direction,
    pwm: u16,
    /// Raw period seen by the last tick (0 = no edge)
    last_period: u16,
    samples: SampleBuffer<NUM_SAMPLES>,
}

impl MotorChannel {
    /// Power-on state: default gains, loop disabled, braked at zero duty.
    pub fn new(id: MotorId) -> Self {
        Self {
            id,
            pid: Pid::default(),
            direction: Direction::Brake,
            pwm: 0,
            last_period: 0,
            samples: SampleBuffer::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> MotorId {
        self.id
    }

    #[inline]
    pub fn pid(&self) -> &Pid {
        &self.pid
    }

    #[inline]
    pub fn pid_mut(&mut self) -> &mut Pid {
        &mut self.pid
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn pwm(&self) -> u16 {
        self.pwm
    }

    #[inline]
    pub fn last_period(&self) -> u16 {
        self.last_period
    }

    #[inline]
    pub fn samples(&self) -> &SampleBuffer<NUM_SAMPLES> {
        &self.samples
    }

    /// Record a new duty magnitude, clamped to `PWM_PERIOD`.
    #[inline]
    pub fn change_pwm(&mut self, duty: u32) {
        self.pwm = duty.min(PWM_PERIOD as u32) as u16;
    }

    #[inline]
    pub fn change_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Compare values for the currently recorded direction and duty.
    #[inline]
    pub fn bridge_duty(&self) -> BridgeDuty {
        BridgeDuty::for_drive(self.direction, self.pwm)
    }

    /// Set a new target speed and rewind the step response recorder.
    pub fn change_setpoint(&mut self, setpoint: i32) {
        self.pid.set_setpoint(setpoint);
        self.samples.reset();
    }

    /// One controller sample from a raw captured period.
    pub fn compute(&mut self, period: u16) {
        self.last_period = period;
        let speed = speed_from_period(period);

        self.pwm = self.pid.update(speed);
        self.samples.record(Sample {
            pwm: self.pwm,
            speed,
        });
    }

    /// Copy of the recorder if it is full, otherwise progress.
    pub fn read_samples(&self) -> SampleReport<NUM_SAMPLES> {
        self.samples.report()
    }

    pub fn status(&self) -> ChannelStatus {
        let enabled = self.pid.is_enabled();
        ChannelStatus {
            id: self.id,
            pwm: self.pwm,
            direction: self.direction,
            enabled,
            setpoint: self.pid.setpoint(),
            i_sum: self.pid.i_sum(),
            gains: self.pid.gains(),
            speed: enabled.then(|| speed_from_period(self.last_period)),
            samples: self.samples.len(),
        }
    }
}
