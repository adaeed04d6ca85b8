// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART console.
//!
//! - `Usart` owns the HAL transmitter and is used from normal code for printing to the attached
//!   debug terminal.
//! - `FaultConsole` writes straight to the console USART registers. It is only for the HardFault
//!   path, where the `Usart` owned by `main` is out of reach.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    pac::usart1,
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

use crate::fault::ByteSink;
use crate::hw::pins::ConsoleUsart;

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }

    /// `0x2FFF_FFFC` style, grouped for reading on the terminal.
    pub fn print_hex_u32(&mut self, n: u32) {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        self.write_str("0x");
        for (i, shift) in (0..=28).rev().step_by(4).enumerate() {
            if i == 4 {
                self.write_byte(b'_');
            }
            self.write_byte(HEX[((n >> shift) & 0xF) as usize]);
        }
    }

    pub fn print_u32(&mut self, mut n: u32) {
        let mut buf = [0u8; 10];
        let mut i = buf.len();
        if n == 0 {
            self.write_byte(b'0');
            return;
        }
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        for &b in &buf[i..] {
            self.write_byte(b);
        }
    }
}

impl<U: Instance> ByteSink for Usart<U> {
    #[inline]
    fn write_byte(&mut self, b: u8) {
        Usart::write_byte(self, b);
    }

    #[inline]
    fn flush(&mut self) {
        Usart::flush(self);
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}

/// Register-level writer for the console USART.
///
/// Does not configure anything: baud rate, pins and clocks are whatever bring-up left. If the
/// peripheral was never enabled the bytes are dropped instead of waiting on a dead TXE flag.
pub struct FaultConsole {
    regs: &'static usart1::RegisterBlock,
}

impl FaultConsole {
    /// # Safety
    ///
    /// Aliases the console USART owned by `main`. Only call once normal execution is over, i.e.
    /// from the HardFault handler.
    pub unsafe fn steal() -> Self {
        Self {
            regs: &*ConsoleUsart::ptr(),
        }
    }

    #[inline]
    fn enabled(&self) -> bool {
        let cr1 = self.regs.cr1.read();
        cr1.ue().bit_is_set() && cr1.te().bit_is_set()
    }
}

impl ByteSink for FaultConsole {
    fn write_byte(&mut self, b: u8) {
        if !self.enabled() {
            return;
        }
        while self.regs.isr.read().txe().bit_is_clear() {}
        self.regs.tdr.write(|w| unsafe { w.tdr().bits(b as u16) });
    }

    fn flush(&mut self) {
        if !self.enabled() {
            return;
        }
        while self.regs.isr.read().tc().bit_is_clear() {}
    }
}
