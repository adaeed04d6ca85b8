// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Terminal halt after a fault has been reported.
//!
//! Halting is the only transition out of [`super::FaultDetected`] and it never returns. The core
//! is left parked for a debugger or an external watchdog.

use core::sync::atomic::{fence, Ordering};

/// Strategy for parking the core forever.
pub trait Park {
    fn park(self) -> !;
}

/// Busy loop. Works everywhere, including host tests.
#[derive(Copy, Clone, Debug, Default)]
pub struct Spin;

impl Park for Spin {
    #[inline(never)]
    fn park(self) -> ! {
        loop {
            fence(Ordering::SeqCst);
        }
    }
}

/// Sleep between interrupts. A pending watchdog interrupt still wakes the core, but control
/// always returns to the loop.
#[cfg(all(target_arch = "arm", target_os = "none"))]
#[derive(Copy, Clone, Debug, Default)]
pub struct WaitForInterrupt;

#[cfg(all(target_arch = "arm", target_os = "none"))]
impl Park for WaitForInterrupt {
    fn park(self) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }
}

/// Stop at a breakpoint if a debugger is attached. Without one, `bkpt` inside HardFault
/// escalates to lockup, which is also a halt.
#[cfg(all(target_arch = "arm", target_os = "none"))]
#[derive(Copy, Clone, Debug, Default)]
pub struct Breakpoint;

#[cfg(all(target_arch = "arm", target_os = "none"))]
impl Park for Breakpoint {
    fn park(self) -> ! {
        cortex_m::asm::bkpt();
        Spin.park()
    }
}

#[cfg(all(feature = "halt-wfi", feature = "halt-bkpt"))]
compile_error!("features `halt-wfi` and `halt-bkpt` are mutually exclusive");

#[cfg(all(target_arch = "arm", target_os = "none", feature = "halt-wfi"))]
pub type DefaultPark = WaitForInterrupt;

#[cfg(all(target_arch = "arm", target_os = "none", feature = "halt-bkpt"))]
pub type DefaultPark = Breakpoint;

#[cfg(not(all(
    target_arch = "arm",
    target_os = "none",
    any(feature = "halt-wfi", feature = "halt-bkpt")
)))]
pub type DefaultPark = Spin;
