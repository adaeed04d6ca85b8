// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Byte-oriented output used by the fault reporter.
//!
//! Writes are infallible: on the fault path there is nowhere to report a transport error, so
//! implementations drop them the same way [`crate::hw::Usart`] does.

use core::fmt;

pub trait ByteSink {
    fn write_byte(&mut self, b: u8);

    fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }

    /// Block until everything written so far has left the device.
    fn flush(&mut self) {}
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn write_byte(&mut self, b: u8) {
        (**self).write_byte(b);
    }

    #[inline]
    fn flush(&mut self) {
        (**self).flush();
    }
}

/// Adapter so `write!` can target any [`ByteSink`].
pub struct SinkWriter<'a, S: ByteSink + ?Sized>(pub &'a mut S);

impl<S: ByteSink + ?Sized> fmt::Write for SinkWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_bytes(s.as_bytes());
        Ok(())
    }
}
