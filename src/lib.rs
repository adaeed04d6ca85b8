// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # faultline
//!
//! Hard-fault capture for Cortex-M firmware, targeting the STM32F777 board used by the rest of
//! our firmware. On a HardFault the handler works out which stack holds the exception frame,
//! reads the stacked registers and prints the faulting address on the debug USART before
//! parking the core:
//!
//! ```text
//! Hard fault at address 0x08001A3C
//! ```
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`fault`] | Locator, frame extractor, reporter, halt strategies, HardFault entry |
//! | `hw` | USART console wrappers and board pin map (target only) |
//!
//! The `fault` pipeline is pure apart from the reporter and builds on the host, so it is tested
//! with plain `cargo test`. Everything touching registers is gated on the bare-metal ARM target.
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Flash the demo (prints a banner, then faults on purpose):
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! Features: `devboard` (Nucleo-F767ZI console on USART3), `halt-wfi` / `halt-bkpt`
//! (terminal halt strategy), `verbose-fault` (full register dump).
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod fault;

#[cfg(all(target_arch = "arm", target_os = "none"))]
pub mod hw;
