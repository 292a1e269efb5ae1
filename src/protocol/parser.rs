// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line assembly and command parsing for the debug console.
//!
//! [`LineEditor`] is fed one received byte at a time and tells the caller what to echo.
//! [`parse`] turns a completed line into a [`Command`].

use core::num::IntErrorKind;

use heapless::Vec;

use crate::control::Gains;
use crate::motors::MotorId;
use crate::protocol::error::CommandError;
use crate::protocol::messages::Command;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// What the terminal should see in response to one input byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Edit {
    /// Nothing to do (unprintable byte, or the line is full).
    Ignored,
    /// Echo the byte back.
    Echo(u8),
    /// The last character was removed; rub it out on the terminal.
    Erase,
    /// Carriage return: the line is complete.
    Submit,
}

/// Fixed-capacity line buffer with echo and backspace handling.
///
/// Input is stored lower-cased. Characters past the capacity are dropped.
pub struct LineEditor<const N: usize> {
    buf: Vec<u8, N>,
}

impl<const N: usize> LineEditor<N> {
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Process a single incoming byte.
    pub fn push(&mut self, byte: u8) -> Edit {
        match byte {
            b'\r' => Edit::Submit,
            BACKSPACE | DELETE => {
                if self.buf.pop().is_some() {
                    Edit::Erase
                } else {
                    Edit::Ignored
                }
            }
            b if b.is_ascii_graphic() || b == b' ' => {
                if self.buf.push(b.to_ascii_lowercase()).is_ok() {
                    Edit::Echo(b)
                } else {
                    Edit::Ignored
                }
            }
            _ => Edit::Ignored,
        }
    }

    /// The line typed so far.
    pub fn line(&self) -> &str {
        // Only printable ASCII is ever stored.
        core::str::from_utf8(&self.buf).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<const N: usize> Default for LineEditor<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one complete, non-empty command line.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let mut tokens = line.split_ascii_whitespace();

    let command = match tokens.next().ok_or(CommandError::BadCommand)? {
        "help" => Command::Help,
        "heading" => Command::Heading,
        "pwm" => {
            let motor = motor(tokens.next())?;
            let duty = int(tokens.next())?;
            Command::Pwm { motor, duty }
        }
        "set" => {
            let motor = motor(tokens.next())?;
            let setpoint = int(tokens.next())?;
            Command::Set { motor, setpoint }
        }
        "samples" => Command::Samples {
            motor: motor(tokens.next())?,
        },
        "status" => Command::Status {
            motor: motor(tokens.next())?,
        },
        "stop" => Command::Stop {
            motor: motor(tokens.next())?,
        },
        "gains" => {
            let motor = motor(tokens.next())?;
            let p = int(tokens.next())?;
            let i = int(tokens.next())?;
            let d = int(tokens.next())?;
            Command::Gains {
                motor,
                gains: Gains::new(p, i, d),
            }
        }
        _ => return Err(CommandError::BadCommand),
    };

    Ok(command)
}

fn motor(token: Option<&str>) -> Result<MotorId, CommandError> {
    token
        .and_then(MotorId::from_token)
        .ok_or(CommandError::BadMotor)
}

/// Decimal integer with optional sign. Values beyond `i32` saturate instead of failing.
fn int(token: Option<&str>) -> Result<i32, CommandError> {
    let token = token.ok_or(CommandError::BadCommand)?;
    match token.parse::<i32>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i32::MAX),
            IntErrorKind::NegOverflow => Ok(i32::MIN),
            _ => Err(CommandError::BadCommand),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_line<const N: usize>(editor: &mut LineEditor<N>, text: &str) -> Vec<Edit, 64> {
        text.bytes().map(|b| editor.push(b)).collect()
    }

    #[test]
    fn editor_echoes_and_lowercases() {
        let mut editor = LineEditor::<16>::new();
        let edits = type_line(&mut editor, "PWM A");
        assert!(edits.iter().zip(b"PWM A").all(|(e, b)| *e == Edit::Echo(*b)));
        assert_eq!(editor.line(), "pwm a");
        assert_eq!(editor.push(b'\r'), Edit::Submit);
    }

    #[test]
    fn editor_backspace() {
        let mut editor = LineEditor::<16>::new();
        assert_eq!(editor.push(BACKSPACE), Edit::Ignored);
        type_line(&mut editor, "sex");
        assert_eq!(editor.push(BACKSPACE), Edit::Erase);
        assert_eq!(editor.push(DELETE), Edit::Erase);
        type_line(&mut editor, "et");
        assert_eq!(editor.line(), "set");
    }

    #[test]
    fn editor_drops_input_past_capacity() {
        let mut editor = LineEditor::<4>::new();
        let edits = type_line(&mut editor, "status");
        assert_eq!(edits[3], Edit::Echo(b't'));
        assert_eq!(edits[4], Edit::Ignored);
        assert_eq!(editor.line(), "stat");
    }

    #[test]
    fn editor_ignores_control_bytes() {
        let mut editor = LineEditor::<8>::new();
        assert_eq!(editor.push(b'\n'), Edit::Ignored);
        assert_eq!(editor.push(0x1B), Edit::Ignored);
        assert_eq!(editor.push(0xC3), Edit::Ignored);
        assert_eq!(editor.line(), "");
    }

    #[test]
    fn editor_clear() {
        let mut editor = LineEditor::<8>::new();
        type_line(&mut editor, "help");
        editor.clear();
        assert_eq!(editor.line(), "");
    }

    #[test]
    fn parses_pwm() {
        assert_eq!(
            parse("pwm a 5000"),
            Ok(Command::Pwm {
                motor: MotorId::A,
                duty: 5000
            })
        );
        assert_eq!(
            parse("pwm b -3000"),
            Ok(Command::Pwm {
                motor: MotorId::B,
                duty: -3000
            })
        );
        assert_eq!(
            parse("  pwm   c   0  "),
            Ok(Command::Pwm {
                motor: MotorId::C,
                duty: 0
            })
        );
    }

    #[test]
    fn out_of_range_numbers_saturate() {
        assert_eq!(
            parse("pwm d 99999999999"),
            Ok(Command::Pwm {
                motor: MotorId::D,
                duty: i32::MAX
            })
        );
        assert_eq!(
            parse("set d -99999999999"),
            Ok(Command::Set {
                motor: MotorId::D,
                setpoint: i32::MIN
            })
        );
    }

    #[test]
    fn bad_motor_wins_over_bad_number() {
        assert_eq!(parse("pwm e 100"), Err(CommandError::BadMotor));
        assert_eq!(parse("pwm"), Err(CommandError::BadMotor));
        assert_eq!(parse("status"), Err(CommandError::BadMotor));
        assert_eq!(parse("samples x"), Err(CommandError::BadMotor));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert_eq!(parse("pwm a"), Err(CommandError::BadCommand));
        assert_eq!(parse("pwm a 12x"), Err(CommandError::BadCommand));
        assert_eq!(parse("set a -"), Err(CommandError::BadCommand));
        assert_eq!(parse("gains a 1 2"), Err(CommandError::BadCommand));
    }

    #[test]
    fn parses_the_rest() {
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("heading 90"), Ok(Command::Heading));
        assert_eq!(
            parse("set c 100"),
            Ok(Command::Set {
                motor: MotorId::C,
                setpoint: 100
            })
        );
        assert_eq!(
            parse("samples a"),
            Ok(Command::Samples { motor: MotorId::A })
        );
        assert_eq!(parse("status b"), Ok(Command::Status { motor: MotorId::B }));
        assert_eq!(parse("stop d"), Ok(Command::Stop { motor: MotorId::D }));
        assert_eq!(
            parse("gains a 30 1 -4"),
            Ok(Command::Gains {
                motor: MotorId::A,
                gains: Gains::new(30, 1, -4)
            })
        );
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(parse("servo 1 2 3"), Err(CommandError::BadCommand));
        assert_eq!(parse(""), Err(CommandError::BadCommand));
    }
}
