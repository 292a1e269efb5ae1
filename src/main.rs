// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
mod firmware {
    use core::cell::RefCell;

    use cortex_m_rt::entry;
    use critical_section::Mutex;
    use log::{info, warn, LevelFilter};
    use panic_halt as _;

    use hal::{
        pac::{self, interrupt},
        prelude::*,
        serial::{Config, Serial},
    };
    use stm32f7xx_hal as hal;

    use quadmotor::config::{CONSOLE_BAUD, ENC_SAMPLE_HZ, LINE_CAPACITY, TICK_TIMER_PERIOD};
    use quadmotor::control::{Drive, SharedDrive};
    use quadmotor::hw::{
        self, console, logger, Board, BoardPins, BoardTimers, Console, TickTimer, Usart,
    };
    use quadmotor::protocol::Shell;

    static DRIVE: SharedDrive<Board> = SharedDrive::new();
    static TICK: Mutex<RefCell<Option<TickTimer>>> = Mutex::new(RefCell::new(None));

    #[entry]
    fn main() -> ! {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();

        // Clocks
        hw::enable_timer_clocks(&dp.RCC);
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();

        // GPIO
        let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);

        // USART1 (DBG)
        let usart_cfg = Config {
            baud_rate: CONSOLE_BAUD.bps(),
            ..Default::default()
        };
        let serial = Serial::new(
            dp.USART1,
            (pins.usart1.tx, pins.usart1.rx),
            &clocks,
            usart_cfg,
        );
        let (tx, mut rx) = Usart::split(serial);
        console::install(tx);
        logger::init(LevelFilter::Info).ok();

        // Motors, braked until commanded
        let timers = BoardTimers {
            tim1: dp.TIM1,
            tim2: dp.TIM2,
            tim3: dp.TIM3,
            tim4: dp.TIM4,
            tim9: dp.TIM9,
            tim12: dp.TIM12,
        };
        let board = Board::new(timers, pins.bridges, pins.encoders);
        DRIVE.install(Drive::new(board));

        // Control tick
        let tick = TickTimer::tim6(dp.TIM6);
        critical_section::with(|cs| {
            let mut slot = TICK.borrow_ref_mut(cs);
            slot.replace(tick);
            if let Some(tick) = slot.as_mut() {
                tick.start();
            }
        });
        info!(
            "control tick every {} ticks at {} Hz",
            TICK_TIMER_PERIOD, ENC_SAMPLE_HZ
        );

        // Console
        let mut out = Console;
        let mut shell = Shell::<LINE_CAPACITY>::new();
        let _ = shell.start(&mut out);

        loop {
            match rx.read_byte() {
                Ok(byte) => {
                    let _ = shell.feed(byte, &DRIVE, &mut out);
                }
                Err(e) => warn!("console receive error: {:?}", e),
            }
        }
    }

    #[interrupt]
    fn TIM6_DAC() {
        critical_section::with(|cs| {
            if let Some(tick) = TICK.borrow_ref_mut(cs).as_mut() {
                tick.clear_interrupt();
            }
        });
        DRIVE.tick();
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("quadmotor is firmware; build it with `--target thumbv7em-none-eabihf`");
}
