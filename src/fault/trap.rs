// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! HardFault vector entry.
//!
//! `HardFault` is defined here in assembly and overrides the weak default that `cortex-m-rt`
//! provides. It must not push anything before MSP is read, so it only copies LR (EXC_RETURN),
//! MSP and PSP into the argument registers and tail-jumps into Rust. The stack selection itself
//! happens in [`crate::fault::locate`].
//!
//! If an older `cortex-m-rt` routes the vector through its own trampoline first, that trampoline
//! branches with `b` and leaves LR, MSP and PSP untouched, so the capture here is still exact.

use core::arch::global_asm;

use crate::fault::{self, DefaultPark, Verbosity};
use crate::hw::FaultConsole;

global_asm!(
    ".section .text.HardFault, \"ax\", %progbits",
    ".global HardFault",
    ".type HardFault, %function",
    ".p2align 1",
    ".thumb_func",
    "HardFault:",
    "    mov r0, lr",
    "    mrs r1, msp",
    "    mrs r2, psp",
    "    ldr r3, ={handler}",
    "    bx  r3",
    "    .ltorg",
    ".size HardFault, . - HardFault",
    handler = sym faultline_trap,
);

#[cfg(feature = "verbose-fault")]
const VERBOSITY: Verbosity = Verbosity::Registers;
#[cfg(not(feature = "verbose-fault"))]
const VERBOSITY: Verbosity = Verbosity::Minimal;

unsafe extern "C" fn faultline_trap(exc_return: u32, msp: usize, psp: usize) -> ! {
    let console = FaultConsole::steal();
    fault::handle(
        exc_return,
        msp,
        psp,
        console,
        VERBOSITY,
        DefaultPark::default(),
    )
}
