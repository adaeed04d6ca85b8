// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Demo firmware: brings up the debug console, then reads unmapped memory so the bus fault
//! escalates to HardFault and the handler reports the faulting address.

#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std)]
#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_main)]

#[cfg(all(target_arch = "arm", target_os = "none"))]
mod firmware {
    use core::ptr;

    use cortex_m_rt::entry;
    use panic_halt as _;

    use hal::{
        pac,
        prelude::*,
        serial::{Config, Serial},
    };
    use stm32f7xx_hal as hal;

    use faultline::hw::{ConsolePins, Usart};

    const BAUD: u32 = 115_200;

    /// Reserved region just below the peripheral space; any read raises a precise bus fault.
    const UNMAPPED: u32 = 0x2FFF_FFFC;

    #[entry]
    fn main() -> ! {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();

        // Clocks
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();

        // Console (USART1 on the board, USART3 on the devboard)
        #[cfg(not(feature = "devboard"))]
        let (usart_dev, gpio) = (dp.USART1, dp.GPIOA);
        #[cfg(feature = "devboard")]
        let (usart_dev, gpio) = (dp.USART3, dp.GPIOD);

        let pins = ConsolePins::new(gpio);
        let usart_cfg = Config {
            baud_rate: BAUD.bps(),
            ..Default::default()
        };
        let serial = Serial::new(usart_dev, (pins.tx, pins.rx), &clocks, usart_cfg);
        let mut usart = Usart::new(serial);

        usart.write_str("faultline demo, console at ");
        usart.print_u32(BAUD);
        usart.println(" baud");
        usart.write_str("reading ");
        usart.print_hex_u32(UNMAPPED);
        usart.println(", expect a hard fault");
        usart.flush();

        // SAFETY: deliberately invalid; the resulting fault never returns here.
        let _ = unsafe { ptr::read_volatile(UNMAPPED as *const u32) };

        loop {
            cortex_m::asm::nop();
        }
    }
}

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
fn main() {
    eprintln!("faultline is firmware; build it with --target thumbv7em-none-eabihf");
}
