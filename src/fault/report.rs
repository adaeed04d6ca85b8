// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fault reporter.
//!
//! The first line is always `Hard fault at address 0x????????\r\n` with the stacked PC as eight
//! upper-case hex digits. [`Verbosity::Registers`] appends the rest of the frame.

use core::fmt::Write;

use super::frame::FaultRecord;
use super::halt::Park;
use super::sink::{ByteSink, SinkWriter};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Verbosity {
    /// Faulting address only.
    #[default]
    Minimal,
    /// Faulting address, stacked registers, EXC_RETURN and stack pointers.
    Registers,
}

/// An unrecoverable fault that has been captured but not yet reported.
///
/// The only way out is [`FaultDetected::halt`] (directly or through
/// [`Reporter::report_and_halt`]), which never returns.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FaultDetected {
    record: FaultRecord,
}

impl FaultDetected {
    pub fn new(record: FaultRecord) -> Self {
        Self { record }
    }

    #[inline]
    pub fn record(&self) -> &FaultRecord {
        &self.record
    }

    pub fn halt<P: Park>(self, park: P) -> ! {
        park.park()
    }
}

pub struct Reporter<S: ByteSink> {
    sink: S,
    verbosity: Verbosity,
}

impl<S: ByteSink> Reporter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            verbosity: Verbosity::Minimal,
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Write the diagnostic for `record` and flush the sink.
    pub fn emit(&mut self, record: &FaultRecord) {
        let mut out = SinkWriter(&mut self.sink);
        // SinkWriter never fails.
        let _ = write!(out, "Hard fault at address 0x{:08X}\r\n", record.pc());

        if self.verbosity == Verbosity::Registers {
            let f = &record.frame;
            let _ = write!(
                out,
                "  r0  0x{:08X}  r1 0x{:08X}  r2   0x{:08X}  r3 0x{:08X}\r\n",
                f.r0(),
                f.r1(),
                f.r2(),
                f.r3()
            );
            let _ = write!(
                out,
                "  r12 0x{:08X}  lr 0x{:08X}  xpsr 0x{:08X}\r\n",
                f.r12(),
                f.lr(),
                f.xpsr()
            );
            let exc = record.exc_return;
            let _ = write!(
                out,
                "  exc_return 0x{:08X} ({}, {} mode, {} frame)\r\n",
                exc.raw(),
                exc.stack().name(),
                if exc.is_thread_mode() { "thread" } else { "handler" },
                if exc.has_fpu_frame() { "fpu" } else { "basic" }
            );
            let _ = write!(
                out,
                "  frame 0x{:08X}  sp 0x{:08X}\r\n",
                record.frame_base,
                record.sp_before_fault()
            );
        }

        self.sink.flush();
    }

    /// Report `fault` and park the core. Never returns.
    pub fn report_and_halt<P: Park>(mut self, fault: FaultDetected, park: P) -> ! {
        self.emit(fault.record());
        fault.halt(park)
    }

    pub fn free(self) -> S {
        self.sink
    }
}
