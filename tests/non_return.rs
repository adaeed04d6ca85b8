// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The fault path must never hand control back. Each test runs the handler on its own thread
//! and checks that the line was printed but the code after the call never ran. The parked
//! threads are left behind and die with the test process.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use faultline::fault::{self, frame, ByteSink, FaultDetected, Park, Spin, Verbosity};

const REPORT_TIMEOUT: Duration = Duration::from_secs(5);
const RESUME_TIMEOUT: Duration = Duration::from_millis(300);

/// Sends everything written so far on each flush.
struct ChannelSink {
    buf: Vec<u8>,
    tx: Sender<Vec<u8>>,
}

impl ByteSink for ChannelSink {
    fn write_byte(&mut self, b: u8) {
        self.buf.push(b);
    }

    fn flush(&mut self) {
        let _ = self.tx.send(self.buf.clone());
    }
}

/// Parks the OS thread instead of spinning.
struct Sleep;

impl Park for Sleep {
    fn park(self) -> ! {
        loop {
            thread::park();
        }
    }
}

#[test]
#[allow(unreachable_code)]
fn handler_never_returns() {
    let (report_tx, report_rx) = mpsc::channel();
    let (resumed_tx, resumed_rx) = mpsc::channel::<()>();

    thread::spawn(move || {
        let mut stack = [0u32; frame::FRAME_WORDS];
        stack[frame::PC] = 0x0800_ABCD;
        let sink = ChannelSink {
            buf: Vec::new(),
            tx: report_tx,
        };
        unsafe {
            fault::handle(
                0xFFFF_FFF9,
                stack.as_ptr() as usize,
                0,
                sink,
                Verbosity::Minimal,
                Spin,
            )
        };
        resumed_tx.send(()).unwrap();
    });

    let line = report_rx.recv_timeout(REPORT_TIMEOUT).unwrap();
    assert_eq!(line, b"Hard fault at address 0x0800ABCD\r\n");
    assert_eq!(
        resumed_rx.recv_timeout(RESUME_TIMEOUT),
        Err(RecvTimeoutError::Timeout)
    );
}

#[test]
#[allow(unreachable_code)]
fn halt_state_has_no_way_out() {
    let (resumed_tx, resumed_rx) = mpsc::channel::<()>();

    thread::spawn(move || {
        let stack = [0u32; frame::FRAME_WORDS];
        let detected: FaultDetected =
            unsafe { fault::diagnose(0xFFFF_FFFD, 0, stack.as_ptr() as usize) };
        detected.halt(Sleep);
        resumed_tx.send(()).unwrap();
    });

    assert_eq!(
        resumed_rx.recv_timeout(RESUME_TIMEOUT),
        Err(RecvTimeoutError::Timeout)
    );
}
