// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interactive console on top of the command parser.
//!
//! The shell is generic over any `core::fmt::Write` sink so the same code drives the USART on the
//! board and a `String` in tests. Every drive access happens inside one [`SharedDrive::lock`];
//! sample dumps are copied out under the lock and printed after it is released.

use core::fmt::{self, Write};

use log::{debug, info, warn};

use crate::control::{SampleReport, SharedDrive};
use crate::drivers::MotorHardware;
use crate::protocol::error::CommandError;
use crate::protocol::messages::{Command, BANNER, HELP, PROMPT};
use crate::protocol::parser::{parse, Edit, LineEditor};

/// Line-oriented shell with an `N`-byte input buffer.
pub struct Shell<const N: usize> {
    editor: LineEditor<N>,
}

impl<const N: usize> Shell<N> {
    pub const fn new() -> Self {
        Self {
            editor: LineEditor::new(),
        }
    }

    /// Print the banner and the first prompt.
    pub fn start<W: Write>(&mut self, out: &mut W) -> fmt::Result {
        self.editor.clear();
        write!(out, "{}\r\n{}", BANNER, PROMPT)
    }

    /// Feed one received byte. Runs the command when the line is submitted.
    pub fn feed<HW, W>(&mut self, byte: u8, drive: &SharedDrive<HW>, out: &mut W) -> fmt::Result
    where
        HW: MotorHardware,
        W: Write,
    {
        match self.editor.push(byte) {
            Edit::Ignored => Ok(()),
            Edit::Echo(b) => out.write_char(b as char),
            Edit::Erase => out.write_str("\x08 \x08"),
            Edit::Submit => {
                out.write_str("\r\n")?;
                let line = self.editor.line();
                if !line.trim().is_empty() {
                    execute(line, drive, out)?;
                }
                self.editor.clear();
                out.write_str(PROMPT)
            }
        }
    }
}

impl<const N: usize> Default for Shell<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse and run one command line, writing the reply to `out`.
pub fn execute<HW, W>(line: &str, drive: &SharedDrive<HW>, out: &mut W) -> fmt::Result
where
    HW: MotorHardware,
    W: Write,
{
    match parse(line).and_then(|command| run(command, drive, out)) {
        Ok(written) => written,
        Err(e) => {
            warn!("rejected \"{}\": {}", line, e);
            write!(out, "{}\r\n", e)
        }
    }
}

/// The outer result is the command outcome, the inner one the console write.
///
/// Each drive access is one short [`SharedDrive::lock`]; logging and printing happen after it
/// returns, so the tick is never held off by the console.
fn run<HW, W>(
    command: Command,
    drive: &SharedDrive<HW>,
    out: &mut W,
) -> Result<fmt::Result, CommandError>
where
    HW: MotorHardware,
    W: Write,
{
    let written = match command {
        Command::Help => HELP.iter().try_for_each(|line| write!(out, "{}\r\n", line)),

        Command::Heading => return Err(CommandError::NotImplemented),

        Command::Pwm { motor, duty } => {
            let status = drive
                .lock(|d| d.select_motor_pwm(motor, duty))
                .ok_or(CommandError::Offline)?;
            info!(
                "motor {}: open loop, {} at {}",
                motor,
                status.direction.as_str(),
                status.pwm
            );
            Ok(())
        }

        Command::Set { motor, setpoint } => {
            drive
                .lock(|d| d.set_target(motor, setpoint))
                .ok_or(CommandError::Offline)?;
            info!("motor {}: closed loop, setpoint {}", motor, setpoint);
            Ok(())
        }

        Command::Gains { motor, gains } => {
            drive
                .lock(|d| d.set_gains(motor, gains))
                .ok_or(CommandError::Offline)?;
            debug!(
                "motor {}: gains p={} i={} d={}",
                motor, gains.p, gains.i, gains.d
            );
            Ok(())
        }

        Command::Stop { motor } => {
            drive.lock(|d| d.stop(motor)).ok_or(CommandError::Offline)?;
            info!("motor {}: stopped", motor);
            Ok(())
        }

        Command::Status { motor } => {
            let status = drive
                .lock(|d| d.status(motor))
                .ok_or(CommandError::Offline)?;
            write!(out, "{}\r\n", status)
        }

        Command::Samples { motor } => {
            let report = drive
                .lock(|d| d.read_samples(motor))
                .ok_or(CommandError::Offline)?;
            write_samples(&report, out)
        }
    };

    Ok(written)
}

fn write_samples<const S: usize, W: Write>(report: &SampleReport<S>, out: &mut W) -> fmt::Result {
    match report {
        SampleReport::Filling {
            collected,
            capacity,
        } => write!(
            out,
            "The sample buffer is not yet full. Only {} out of {} samples have been collected so \
             far.\r\n",
            collected, capacity
        ),
        SampleReport::Full(samples) => {
            out.write_str("pwm speed\r\n[")?;
            for s in samples.iter() {
                write!(out, "{} {}\r\n", s.pwm, s.speed)?;
            }
            out.write_str("]\r\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::config::{LINE_CAPACITY, NUM_SAMPLES, PWM_PERIOD};
    use crate::control::drive::tests::MockHardware;
    use crate::control::Drive;
    use crate::drivers::Direction;
    use crate::motors::MotorId;

    fn installed() -> SharedDrive<MockHardware> {
        let shared = SharedDrive::new();
        shared.install(Drive::new(MockHardware::default()));
        shared
    }

    fn run_line(shared: &SharedDrive<MockHardware>, line: &str) -> String {
        let mut out = String::new();
        execute(line, shared, &mut out).unwrap();
        out
    }

    #[test]
    fn start_prints_banner_and_prompt() {
        let mut shell = Shell::<LINE_CAPACITY>::new();
        let mut out = String::new();
        shell.start(&mut out).unwrap();
        assert!(out.starts_with(BANNER));
        assert!(out.ends_with(PROMPT));
    }

    #[test]
    fn typed_pwm_command_drives_motor() {
        let shared = installed();
        let mut shell = Shell::<LINE_CAPACITY>::new();
        let mut out = String::new();

        for b in b"PWM A 5000\r" {
            shell.feed(*b, &shared, &mut out).unwrap();
        }

        assert_eq!(out, "PWM A 5000\r\n> ");
        let (pwm, dir, enabled) = shared
            .lock(|d| {
                let ch = d.channel(MotorId::A);
                (ch.pwm(), ch.direction(), ch.pid().is_enabled())
            })
            .unwrap();
        assert_eq!(pwm, 5000);
        assert_eq!(dir, Direction::Forward);
        assert!(!enabled);
    }

    #[test]
    fn empty_line_only_reprompts() {
        let shared = installed();
        let mut shell = Shell::<LINE_CAPACITY>::new();
        let mut out = String::new();
        shell.feed(b' ', &shared, &mut out).unwrap();
        shell.feed(b'\r', &shared, &mut out).unwrap();
        assert_eq!(out, " \r\n> ");
    }

    #[test]
    fn backspace_rubs_out() {
        let shared = installed();
        let mut shell = Shell::<LINE_CAPACITY>::new();
        let mut out = String::new();
        shell.feed(b'x', &shared, &mut out).unwrap();
        shell.feed(0x08, &shared, &mut out).unwrap();
        assert_eq!(out, "x\x08 \x08");
    }

    #[test]
    fn errors_are_reported() {
        let shared = installed();
        assert_eq!(run_line(&shared, "pwm q 10"), "Bad motor.\r\n");
        assert_eq!(run_line(&shared, "pwm a ten"), "Bad command.\r\n");
        assert_eq!(run_line(&shared, "sensors"), "Bad command.\r\n");
        assert_eq!(run_line(&shared, "heading 90"), "Not implemented.\r\n");
    }

    #[test]
    fn bad_motor_changes_nothing() {
        let shared = installed();
        run_line(&shared, "pwm e 10");
        let untouched = shared
            .lock(|d| MotorId::ALL.iter().all(|&id| d.channel(id).pwm() == 0))
            .unwrap();
        assert!(untouched);
    }

    #[test]
    fn offline_drive() {
        let shared = SharedDrive::<MockHardware>::new();
        assert_eq!(run_line(&shared, "status a"), "Drive offline.\r\n");
        assert_eq!(run_line(&shared, "help").lines().count(), HELP.len());
    }

    #[test]
    fn help_lists_commands() {
        let shared = installed();
        let out = run_line(&shared, "help");
        for line in HELP {
            assert!(out.contains(line));
        }
    }

    #[test]
    fn set_then_samples_while_filling() {
        let shared = installed();
        assert_eq!(run_line(&shared, "set b 100"), "");
        for _ in 0..3 {
            shared.tick();
        }
        assert_eq!(
            run_line(&shared, "samples b"),
            format!(
                "The sample buffer is not yet full. Only 3 out of {} samples have been collected so far.\r\n",
                NUM_SAMPLES
            )
        );
    }

    #[test]
    fn samples_dump_when_full() {
        let shared = installed();
        run_line(&shared, "set c 100");
        for _ in 0..NUM_SAMPLES + 5 {
            shared.tick();
        }

        let out = run_line(&shared, "samples c");
        assert!(out.starts_with("pwm speed\r\n[2700 0\r\n"));
        assert!(out.ends_with("]\r\n"));
        assert_eq!(out.matches("\r\n").count(), NUM_SAMPLES + 2);
    }

    #[test]
    fn status_line() {
        let shared = installed();
        run_line(&shared, "set d 100");
        shared.tick();
        assert_eq!(
            run_line(&shared, "status d"),
            format!(
                "motor D: pwm 2700 forward, loop on, setpoint 100, speed 0, i_sum 100, gains 20/2/5, samples 1/{}\r\n",
                NUM_SAMPLES
            )
        );
    }

    #[test]
    fn gains_and_stop() {
        let shared = installed();
        run_line(&shared, "gains a 1 0 0");
        run_line(&shared, "set a 100");
        shared.tick();
        assert_eq!(shared.lock(|d| d.channel(MotorId::A).pwm()), Some(100));

        run_line(&shared, "stop a");
        let (pwm, dir, enabled) = shared
            .lock(|d| {
                let ch = d.channel(MotorId::A);
                (ch.pwm(), ch.direction(), ch.pid().is_enabled())
            })
            .unwrap();
        assert_eq!((pwm, dir, enabled), (0, Direction::Brake, false));
    }

    #[test]
    fn oversized_duty_is_clamped() {
        let shared = installed();
        run_line(&shared, "pwm b -99999999999");
        let pwm = shared.lock(|d| d.channel(MotorId::B).pwm()).unwrap();
        assert_eq!(pwm, PWM_PERIOD);
    }

    static WATCHED: SharedDrive<MockHardware> = SharedDrive::new();
    static RECORDS: AtomicUsize = AtomicUsize::new(0);
    static RECORDS_UNDER_LOCK: AtomicUsize = AtomicUsize::new(0);

    /// Counts log records emitted while [`WATCHED`] is locked.
    struct LockWatch;

    impl log::Log for LockWatch {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, _: &log::Record) {
            RECORDS.fetch_add(1, Ordering::SeqCst);
            if WATCHED.is_locked() {
                RECORDS_UNDER_LOCK.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn flush(&self) {}
    }

    static LOCK_WATCH: LockWatch = LockWatch;

    #[test]
    fn commands_log_after_the_drive_is_released() {
        log::set_logger(&LOCK_WATCH).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
        WATCHED.install(Drive::new(MockHardware::default()));

        for line in [
            "pwm a 5000",
            "set b 100",
            "gains c 1 2 3",
            "stop d",
            "pwm x 1",
        ] {
            let mut out = String::new();
            execute(line, &WATCHED, &mut out).unwrap();
        }

        assert!(RECORDS.load(Ordering::SeqCst) >= 5);
        assert_eq!(RECORDS_UNDER_LOCK.load(Ordering::SeqCst), 0);
    }
}
