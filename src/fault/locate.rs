// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Exception context locator.
//!
//! Picks the stack pointer that holds the hardware-stacked frame. The raw MSP and PSP values
//! must be read before anything is pushed, otherwise MSP no longer points at the frame. The
//! HardFault entry in `fault::trap` reads them in assembly and passes them in.

use super::exc_return::{ExcReturn, StackKind};

/// Return the frame base address for the exception described by `exc_return`.
///
/// `psp` if bit 2 of `exc_return` is set, `msp` otherwise.
#[inline(always)]
pub fn locate(exc_return: u32, msp: usize, psp: usize) -> usize {
    match ExcReturn::new(exc_return).stack() {
        StackKind::Main => msp,
        StackKind::Process => psp,
    }
}
