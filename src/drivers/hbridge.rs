// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Dual-input H-bridge drive mapping.
//!
//! Each motor is driven by two PWM outputs, one per bridge input. The table below is the
//! convention used by every channel:
//!
//! | Direction | IN1    | IN2    | Bridge state            |
//! |-----------|--------|--------|-------------------------|
//! | Forward   | duty   | 0      | drive, IN1 side high    |
//! | Reverse   | 0      | duty   | drive, IN2 side high    |
//! | Brake     | 100%   | 100%   | both high sides on      |
//!
//! A direction and a duty are always turned into one [`BridgeDuty`] and written together, so the
//! hardware never sees a direction from one command with the duty of another.

use crate::config::PWM_PERIOD;

/// Logical drive direction for one motor.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Reverse,
    Brake,
}

impl Direction {
    /// Direction implied by the sign of an open-loop duty command.
    #[inline]
    pub fn from_signed(duty: i32) -> Self {
        match duty {
            d if d > 0 => Direction::Forward,
            d if d < 0 => Direction::Reverse,
            _ => Direction::Brake,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
            Direction::Brake => "brake",
        }
    }
}

/// Compare values for the two inputs of one bridge.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BridgeDuty {
    pub in1: u16,
    pub in2: u16,
}

impl BridgeDuty {
    /// Map a direction and duty magnitude onto the two bridge inputs.
    ///
    /// `duty` is clamped to `PWM_PERIOD`. Braking ignores the duty.
    pub fn for_drive(direction: Direction, duty: u16) -> Self {
        let duty = duty.min(PWM_PERIOD);
        match direction {
            Direction::Forward => Self { in1: duty, in2: 0 },
            Direction::Reverse => Self { in1: 0, in2: duty },
            Direction::Brake => Self {
                in1: PWM_PERIOD,
                in2: PWM_PERIOD,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_selects_direction() {
        assert_eq!(Direction::from_signed(5000), Direction::Forward);
        assert_eq!(Direction::from_signed(-3000), Direction::Reverse);
        assert_eq!(Direction::from_signed(0), Direction::Brake);
        assert_eq!(Direction::from_signed(i32::MIN), Direction::Reverse);
    }

    #[test]
    fn forward_drives_in1_only() {
        assert_eq!(
            BridgeDuty::for_drive(Direction::Forward, 2500),
            BridgeDuty { in1: 2500, in2: 0 }
        );
    }

    #[test]
    fn reverse_drives_in2_only() {
        assert_eq!(
            BridgeDuty::for_drive(Direction::Reverse, 2500),
            BridgeDuty { in1: 0, in2: 2500 }
        );
    }

    #[test]
    fn brake_holds_both_inputs_high() {
        for duty in [0, 1234, PWM_PERIOD] {
            assert_eq!(
                BridgeDuty::for_drive(Direction::Brake, duty),
                BridgeDuty {
                    in1: PWM_PERIOD,
                    in2: PWM_PERIOD
                }
            );
        }
    }

    #[test]
    fn duty_is_clamped_to_period() {
        assert_eq!(
            BridgeDuty::for_drive(Direction::Forward, u16::MAX),
            BridgeDuty {
                in1: PWM_PERIOD,
                in2: 0
            }
        );
    }
}
