// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Console pin map.
//!
//! - Custom STM32F777 board: USART1, TX = PA9, RX = PA10 (AF7).
//! - `devboard` (Nucleo-F767ZI): USART3 on the ST-LINK VCP, TX = PD8, RX = PD9 (AF7).

#[cfg(not(feature = "devboard"))]
use stm32f7xx_hal::gpio::gpioa;
#[cfg(feature = "devboard")]
use stm32f7xx_hal::gpio::gpiod;
use stm32f7xx_hal::{gpio::Alternate, pac, prelude::*};

#[cfg(not(feature = "devboard"))]
pub type ConsoleUsart = pac::USART1;
#[cfg(not(feature = "devboard"))]
pub type ConsoleGpio = pac::GPIOA;

#[cfg(feature = "devboard")]
pub type ConsoleUsart = pac::USART3;
#[cfg(feature = "devboard")]
pub type ConsoleGpio = pac::GPIOD;

#[cfg(not(feature = "devboard"))]
pub struct ConsolePins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

#[cfg(not(feature = "devboard"))]
impl ConsolePins {
    pub fn new(gpio: ConsoleGpio) -> Self {
        let gpioa = gpio.split();
        Self {
            tx: gpioa.pa9.into_alternate(),
            rx: gpioa.pa10.into_alternate(),
        }
    }
}

#[cfg(feature = "devboard")]
pub struct ConsolePins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

#[cfg(feature = "devboard")]
impl ConsolePins {
    pub fn new(gpio: ConsoleGpio) -> Self {
        let gpiod = gpio.split();
        Self {
            tx: gpiod.pd8.into_alternate(),
            rx: gpiod.pd9.into_alternate(),
        }
    }
}
