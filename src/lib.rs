//! A CHIP-8 virtual machine core.
//!
//! The [`ChipSet`](chip8::ChipSet) holds the full machine state and advances it one
//! instruction at a time, the host is responsible for pacing, input and output.
//! [`Runner`] is a small helper for hosts that want the pacing done for them.

pub mod chip8;
pub mod definitions;
pub mod devices;
pub mod display;
pub mod memory;
pub mod opcode;
pub mod registers;
pub mod stack;
pub mod timer;
mod error;

// reexporting for convinience
mod runner;
pub use chip8::{ChipSet, Quirks, Step};
pub use error::*;
pub use runner::*;
