// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hardware exception frame and the fault context extractor.
//!
//! On exception entry the core pushes eight words onto the active stack, lowest address first:
//!
//! | Index | Byte offset | Register |
//! | ----- | ----------- | -------- |
//! | 0     | 0x00        | r0       |
//! | 1     | 0x04        | r1       |
//! | 2     | 0x08        | r2       |
//! | 3     | 0x0C        | r3       |
//! | 4     | 0x10        | r12      |
//! | 5     | 0x14        | lr       |
//! | 6     | 0x18        | pc (return address = faulting instruction) |
//! | 7     | 0x1C        | xPSR     |
//!
//! With the FPU active and lazy stacking enabled the core pushes S0-S15, FPSCR and a reserved
//! word above these, for 26 words in total. The first eight words keep the same layout.

use core::ptr;

use super::exc_return::{ExcReturn, StackKind};

pub const R0: usize = 0;
pub const R1: usize = 1;
pub const R2: usize = 2;
pub const R3: usize = 3;
pub const R12: usize = 4;
pub const LR: usize = 5;
pub const PC: usize = 6;
pub const XPSR: usize = 7;

/// Words in the basic frame.
pub const FRAME_WORDS: usize = 8;
/// Words in the extended frame (basic + S0-S15 + FPSCR + reserved).
pub const FPU_FRAME_WORDS: usize = 26;

/// Byte offset of the stacked PC from the frame base.
pub const PC_OFFSET: usize = PC * 4;

/// xPSR bit 9: the core inserted a padding word to 8-byte align the frame.
const XPSR_STACK_ALIGN: u32 = 1 << 9;

/// Register snapshot stacked by hardware. Index meanings are the constants above.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FaultFrame([u32; FRAME_WORDS]);

impl FaultFrame {
    pub const fn from_words(words: [u32; FRAME_WORDS]) -> Self {
        Self(words)
    }

    /// Read the frame at `base`, one volatile word at a time.
    ///
    /// # Safety
    ///
    /// `base` must point at eight readable, 4-byte aligned words. On the fault path this is not
    /// checked: if the stack itself is corrupt the read faults again and the core locks up.
    pub unsafe fn read(base: *const u32) -> Self {
        let mut words = [0u32; FRAME_WORDS];
        for (i, w) in words.iter_mut().enumerate() {
            *w = ptr::read_volatile(base.add(i));
        }
        Self(words)
    }

    #[inline]
    pub fn words(&self) -> &[u32; FRAME_WORDS] {
        &self.0
    }

    #[inline]
    pub fn r0(&self) -> u32 {
        self.0[R0]
    }

    #[inline]
    pub fn r1(&self) -> u32 {
        self.0[R1]
    }

    #[inline]
    pub fn r2(&self) -> u32 {
        self.0[R2]
    }

    #[inline]
    pub fn r3(&self) -> u32 {
        self.0[R3]
    }

    #[inline]
    pub fn r12(&self) -> u32 {
        self.0[R12]
    }

    /// LR of the interrupted code (not EXC_RETURN).
    #[inline]
    pub fn lr(&self) -> u32 {
        self.0[LR]
    }

    /// Address of the instruction that was executing when the fault was taken.
    #[inline]
    pub fn pc(&self) -> u32 {
        self.0[PC]
    }

    #[inline]
    pub fn xpsr(&self) -> u32 {
        self.0[XPSR]
    }
}

/// Everything the reporter needs to know about one fault.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FaultRecord {
    pub frame: FaultFrame,
    pub exc_return: ExcReturn,
    /// Address the frame was read from.
    pub frame_base: usize,
}

impl FaultRecord {
    pub fn new(frame: FaultFrame, exc_return: ExcReturn, frame_base: usize) -> Self {
        Self {
            frame,
            exc_return,
            frame_base,
        }
    }

    #[inline]
    pub fn pc(&self) -> u32 {
        self.frame.pc()
    }

    #[inline]
    pub fn lr(&self) -> u32 {
        self.frame.lr()
    }

    #[inline]
    pub fn xpsr(&self) -> u32 {
        self.frame.xpsr()
    }

    #[inline]
    pub fn stack(&self) -> StackKind {
        self.exc_return.stack()
    }

    /// Stack pointer of the interrupted code before the core pushed the frame.
    pub fn sp_before_fault(&self) -> usize {
        let words = if self.exc_return.has_fpu_frame() {
            FPU_FRAME_WORDS
        } else {
            FRAME_WORDS
        };
        let pad = if self.frame.xpsr() & XPSR_STACK_ALIGN != 0 {
            4
        } else {
            0
        };
        self.frame_base.wrapping_add(words * 4 + pad)
    }
}

/// Read the frame located at `frame_base` into a [`FaultRecord`].
///
/// # Safety
///
/// Same contract as [`FaultFrame::read`]. A null or wild `frame_base` is not rejected.
pub unsafe fn extract(exc_return: u32, frame_base: usize) -> FaultRecord {
    let frame = FaultFrame::read(frame_base as *const u32);
    FaultRecord::new(frame, ExcReturn::new(exc_return), frame_base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    fn synthetic(pc: u32, fill: u32) -> [u32; FRAME_WORDS] {
        let mut words = [fill; FRAME_WORDS];
        words[PC] = pc;
        words
    }

    #[test]
    fn layout_matches_architecture() {
        assert_eq!(size_of::<FaultFrame>(), 32);
        assert_eq!(align_of::<FaultFrame>(), 4);
        assert_eq!(PC_OFFSET, 0x18);
        assert_eq!(LR * 4, 0x14);
        assert_eq!(XPSR * 4, 0x1C);
        assert_eq!(R12 * 4, 0x10);
    }

    #[test]
    fn extract_returns_stacked_pc() {
        let stack = synthetic(0x0800_1234, 0);
        let rec = unsafe { extract(0xFFFF_FFF9, stack.as_ptr() as usize) };
        assert_eq!(rec.pc(), 0x0800_1234);
        assert_eq!(rec.frame_base, stack.as_ptr() as usize);
    }

    #[test]
    fn pc_is_independent_of_other_slots() {
        for fill in [0, u32::MAX, 0xDEAD_BEEF, 0x0800_1234, 0xA5A5_A5A5] {
            let stack = synthetic(0x0800_4F2C, fill);
            let rec = unsafe { extract(0xFFFF_FFFD, stack.as_ptr() as usize) };
            assert_eq!(rec.pc(), 0x0800_4F2C, "fill = {fill:#010x}");
        }
    }

    #[test]
    fn reads_every_slot_in_order() {
        let stack = [0x10, 0x11, 0x12, 0x13, 0x1C, 0x0800_0101, 0x0800_0200, 0x6100_0000];
        let frame = unsafe { FaultFrame::read(stack.as_ptr()) };
        assert_eq!(frame.r0(), 0x10);
        assert_eq!(frame.r1(), 0x11);
        assert_eq!(frame.r2(), 0x12);
        assert_eq!(frame.r3(), 0x13);
        assert_eq!(frame.r12(), 0x1C);
        assert_eq!(frame.lr(), 0x0800_0101);
        assert_eq!(frame.pc(), 0x0800_0200);
        assert_eq!(frame.xpsr(), 0x6100_0000);
        assert_eq!(frame.words(), &stack);
    }

    #[test]
    fn read_does_not_touch_memory_past_the_frame() {
        // Frame embedded in a larger buffer; neighbours must not leak into the record.
        let mut buf = [0xFFFF_FFFFu32; FRAME_WORDS + 4];
        buf[2..2 + FRAME_WORDS].copy_from_slice(&synthetic(0x0800_0ABC, 7));
        let frame = unsafe { FaultFrame::read(buf.as_ptr().add(2)) };
        assert_eq!(frame, FaultFrame::from_words(synthetic(0x0800_0ABC, 7)));
    }

    #[test]
    fn sp_before_fault_basic_frame() {
        let rec = FaultRecord::new(
            FaultFrame::from_words(synthetic(0, 0)),
            ExcReturn::new(0xFFFF_FFF9),
            0x2000_1000,
        );
        assert_eq!(rec.sp_before_fault(), 0x2000_1020);
    }

    #[test]
    fn sp_before_fault_with_alignment_pad() {
        let mut words = synthetic(0, 0);
        words[XPSR] = 0x0100_0200;
        let rec = FaultRecord::new(
            FaultFrame::from_words(words),
            ExcReturn::new(0xFFFF_FFFD),
            0x2000_1000,
        );
        assert_eq!(rec.sp_before_fault(), 0x2000_1024);
    }

    #[test]
    fn sp_before_fault_fpu_frame() {
        let rec = FaultRecord::new(
            FaultFrame::from_words(synthetic(0, 0)),
            ExcReturn::new(0xFFFF_FFED),
            0x2000_1000,
        );
        assert_eq!(rec.sp_before_fault(), 0x2000_1000 + 26 * 4);
    }

    // A null frame base is an accepted limitation: `extract` performs the raw read and whatever
    // the hardware does with address 0 happens. On the host that would be UB, so only the
    // record arithmetic is exercised here.
    #[test]
    fn null_base_record_arithmetic() {
        let rec = FaultRecord::new(
            FaultFrame::from_words([0; FRAME_WORDS]),
            ExcReturn::new(0xFFFF_FFF9),
            0,
        );
        assert_eq!(rec.frame_base, 0);
        assert_eq!(rec.sp_before_fault(), 32);
    }
}
