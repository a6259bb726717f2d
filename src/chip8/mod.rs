//! The full implementation of the chip8 interpreter, from the opcodes to an option to pretty
//! print them.
mod chipset;
mod opcodes;
mod print;
mod quirks;

/// reexport chipset structs and data for simpler usage
pub use chipset::*;
pub use quirks::Quirks;
