// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Four-channel drive: the periodic control tick and the operations the console performs on it.
//!
//! [`Drive::tick`] is meant to be called from the control timer interrupt. Every other method is a
//! foreground operation. When both contexts exist, reach the drive through
//! [`SharedDrive`](crate::control::SharedDrive) so each foreground call runs with the tick masked.
//! Nothing here logs or blocks: the mutating operations return the channel's resulting
//! [`ChannelStatus`] and the caller reports it once the tick is unmasked again.
//!
//! ```ignore
//! drive.set_target(MotorId::A, 100);
//!
//! // timer interrupt
//! drive.tick();
//! ```

use crate::config::NUM_SAMPLES;
use crate::control::samples::SampleReport;
use crate::control::Gains;
use crate::drivers::{Direction, MotorHardware};
use crate::motors::{ChannelStatus, MotorChannel, MotorId};

/// The four motor channels together with the hardware they drive.
pub struct Drive<HW> {
    hw: HW,
    channels: [MotorChannel; 4],
}

impl<HW: MotorHardware> Drive<HW> {
    /// Take ownership of the hardware and brake every bridge.
    pub fn new(hw: HW) -> Self {
        let mut drive = Self {
            hw,
            channels: MotorId::ALL.map(MotorChannel::new),
        };
        for id in MotorId::ALL {
            drive.update_speed(id);
        }
        drive
    }

    /// One control period. Channels are visited in order A, B, C, D; a channel whose loop is
    /// disabled is skipped without touching its state or its hardware.
    pub fn tick(&mut self) {
        for ch in self.channels.iter_mut().filter(|ch| ch.pid().is_enabled()) {
            let period = self.hw.capture_period(ch.id());
            ch.compute(period);
            self.hw.write_bridge(ch.id(), ch.bridge_duty());
        }
    }

    /// Open-loop drive. The sign of `duty` picks the direction (zero brakes) and its magnitude is
    /// clamped to the PWM period. Disables the speed loop on this channel only.
    pub fn select_motor_pwm(&mut self, id: MotorId, duty: i32) -> ChannelStatus {
        let ch = self.channel_mut(id);
        ch.pid_mut().disable();
        ch.change_direction(Direction::from_signed(duty));
        ch.change_pwm(duty.unsigned_abs());
        self.update_speed(id);
        self.status(id)
    }

    /// Close the loop on a new target speed.
    ///
    /// Rewinds the step response recorder. A braked channel is switched to forward, otherwise the
    /// commanded direction is kept.
    pub fn set_target(&mut self, id: MotorId, setpoint: i32) -> ChannelStatus {
        let ch = self.channel_mut(id);
        ch.change_setpoint(setpoint);
        if ch.direction() == Direction::Brake {
            ch.change_direction(Direction::Forward);
        }
        ch.pid_mut().enable();
        self.status(id)
    }

    /// Disable the loop, clear its history and brake.
    pub fn stop(&mut self, id: MotorId) -> ChannelStatus {
        let ch = self.channel_mut(id);
        ch.pid_mut().disable();
        ch.pid_mut().reset();
        ch.change_direction(Direction::Brake);
        ch.change_pwm(0);
        self.update_speed(id);
        self.status(id)
    }

    /// Re-tune one channel. Controller history is kept.
    pub fn set_gains(&mut self, id: MotorId, gains: Gains) -> ChannelStatus {
        self.channel_mut(id).pid_mut().set_gains(gains);
        self.status(id)
    }

    pub fn read_samples(&self, id: MotorId) -> SampleReport<NUM_SAMPLES> {
        self.channel(id).read_samples()
    }

    pub fn status(&self, id: MotorId) -> ChannelStatus {
        self.channel(id).status()
    }

    #[inline]
    pub fn channel(&self, id: MotorId) -> &MotorChannel {
        &self.channels[id.index()]
    }

    #[inline]
    fn channel_mut(&mut self, id: MotorId) -> &mut MotorChannel {
        &mut self.channels[id.index()]
    }

    /// Commit the recorded direction and duty of `id` to its bridge.
    fn update_speed(&mut self, id: MotorId) {
        let duty = self.channel(id).bridge_duty();
        self.hw.write_bridge(id, duty);
    }

    #[cfg(test)]
    pub(crate) fn hardware(&self) -> &HW {
        &self.hw
    }

    #[cfg(test)]
    pub(crate) fn hardware_mut(&mut self) -> &mut HW {
        &mut self.hw
    }
}
