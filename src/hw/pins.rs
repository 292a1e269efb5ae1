// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 quad motor board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpiod, gpioe, Alternate},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```rust
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub usart1: Usart1Pins,
    pub bridges: BridgePins,
    pub encoders: EncoderPins,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// H-bridge inputs. Motors A and B on TIM4, C and D on TIM1.
pub struct BridgePins {
    pub a_in1: gpiod::PD12<Alternate<2>>, // TIM4_CH1
    pub a_in2: gpiod::PD13<Alternate<2>>, // TIM4_CH2
    pub b_in1: gpiod::PD14<Alternate<2>>, // TIM4_CH3
    pub b_in2: gpiod::PD15<Alternate<2>>, // TIM4_CH4

    pub c_in1: gpioe::PE9<Alternate<1>>,  // TIM1_CH1
    pub c_in2: gpioe::PE11<Alternate<1>>, // TIM1_CH2
    pub d_in1: gpioe::PE13<Alternate<1>>, // TIM1_CH3
    pub d_in2: gpioe::PE14<Alternate<1>>, // TIM1_CH4
}

/// Encoder pulse inputs, one capture timer channel 1 per motor.
pub struct EncoderPins {
    pub a: gpioa::PA0<Alternate<1>>,  // TIM2_CH1
    pub b: gpioa::PA6<Alternate<2>>,  // TIM3_CH1
    pub c: gpioe::PE5<Alternate<3>>,  // TIM9_CH1
    pub d: gpiob::PB14<Alternate<9>>, // TIM12_CH1
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            bridges: BridgePins {
                a_in1: gpiod.pd12.into_alternate::<2>(),
                a_in2: gpiod.pd13.into_alternate::<2>(),
                b_in1: gpiod.pd14.into_alternate::<2>(),
                b_in2: gpiod.pd15.into_alternate::<2>(),
                c_in1: gpioe.pe9.into_alternate::<1>(),
                c_in2: gpioe.pe11.into_alternate::<1>(),
                d_in1: gpioe.pe13.into_alternate::<1>(),
                d_in2: gpioe.pe14.into_alternate::<1>(),
            },

            encoders: EncoderPins {
                a: gpioa.pa0.into_alternate::<1>(),
                b: gpioa.pa6.into_alternate::<2>(),
                c: gpioe.pe5.into_alternate::<3>(),
                d: gpiob.pb14.into_alternate::<9>(),
            },
        }
    }
}
