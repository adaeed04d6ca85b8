// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Decoding of the EXC_RETURN value found in LR on exception entry.
//!
//! Only the low five bits carry information on ARMv6-M / ARMv7-M. The upper bits are all ones
//! (`0xFFFF_FFE0`) for a genuine EXC_RETURN, but nothing here depends on that.

/// SPSEL: set when the interrupted context was running on the process stack.
pub const SPSEL_BIT: u32 = 1 << 2;
/// Mode: set when returning to Thread mode, clear for Handler mode.
pub const MODE_BIT: u32 = 1 << 3;
/// FType: clear when the hardware stacked an extended (FPU) frame.
pub const FTYPE_BIT: u32 = 1 << 4;

/// Which stack held the interrupted context.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StackKind {
    /// MSP, used by handlers and by thread code that never switched stacks.
    Main,
    /// PSP, used by RTOS tasks.
    Process,
}

impl StackKind {
    pub fn name(self) -> &'static str {
        match self {
            StackKind::Main => "MSP",
            StackKind::Process => "PSP",
        }
    }
}

/// Raw EXC_RETURN value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ExcReturn(u32);

impl ExcReturn {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Stack that holds the exception frame. Total over every 32-bit value.
    #[inline]
    pub const fn stack(self) -> StackKind {
        if self.0 & SPSEL_BIT != 0 {
            StackKind::Process
        } else {
            StackKind::Main
        }
    }

    /// True if the fault interrupted Thread mode code.
    #[inline]
    pub const fn is_thread_mode(self) -> bool {
        self.0 & MODE_BIT != 0
    }

    /// True if the hardware pushed the 26-word frame with S0-S15 and FPSCR.
    #[inline]
    pub const fn has_fpu_frame(self) -> bool {
        self.0 & FTYPE_BIT == 0
    }
}

impl From<u32> for ExcReturn {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}
