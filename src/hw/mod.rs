// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod pins;
pub mod usart;

pub use pins::{ConsoleGpio, ConsolePins, ConsoleUsart};
pub use usart::{FaultConsole, Usart};
