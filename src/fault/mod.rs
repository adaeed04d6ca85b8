// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hard-fault capture
//!
//! Pipeline run from the HardFault vector:
//!
//! 1. `trap` (target only) captures LR (EXC_RETURN), MSP and PSP without touching the stack.
//! 2. [`locate`] picks the stack that holds the exception frame.
//! 3. [`frame::extract`] reads the stacked registers into a [`FaultRecord`].
//! 4. [`Reporter`] prints `Hard fault at address 0x........` and parks the core.
//!
//! Steps 2 and 3 are pure and run on the host in tests.

pub mod exc_return;
pub mod frame;
pub mod halt;
pub mod locate;
pub mod report;
pub mod sink;

#[cfg(all(target_arch = "arm", target_os = "none"))]
pub mod trap;

pub use exc_return::{ExcReturn, StackKind};
pub use frame::{FaultFrame, FaultRecord};
pub use halt::{DefaultPark, Park, Spin};
pub use locate::locate;
pub use report::{FaultDetected, Reporter, Verbosity};
pub use sink::ByteSink;

/// Locate and read the exception frame for the raw register values captured at trap entry.
///
/// # Safety
///
/// The selected stack pointer must point at a readable exception frame. See
/// [`frame::extract`].
pub unsafe fn diagnose(exc_return: u32, msp: usize, psp: usize) -> FaultDetected {
    let base = locate(exc_return, msp, psp);
    FaultDetected::new(frame::extract(exc_return, base))
}

/// Full fault path: diagnose, report to `sink`, park. Never returns.
///
/// # Safety
///
/// Same contract as [`diagnose`].
pub unsafe fn handle<S: ByteSink, P: Park>(
    exc_return: u32,
    msp: usize,
    psp: usize,
    sink: S,
    verbosity: Verbosity,
    park: P,
) -> ! {
    let fault = diagnose(exc_return, msp, psp);
    Reporter::new(sink)
        .with_verbosity(verbosity)
        .report_and_halt(fault, park)
}
