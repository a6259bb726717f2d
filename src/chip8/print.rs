//! The multi line state dump of the [`ChipSet`](super::ChipSet).
//!
//! Every listing is split into rows of eight values, each row labeled with
//! the index range it covers. Memory is shown as opcodes, runs of rows holding
//! only zeros are collapsed into a single row.

use std::fmt::{self, Write};

use num_traits::Unsigned;
use once_cell::sync::Lazy;

use super::ChipSet;
use crate::definitions::cpu;

/// The values shown per row
const ROW_LEN: usize = 8;
/// The bytes shown per memory row, two per opcode
const MEMORY_ROW_BYTES: usize = 2 * ROW_LEN;
const ZERO_MARKER: &str = "...";

macro_rules! hex {
    () => {
        // 0x prefix plus four digits
        "{:#06X}"
    };
}

macro_rules! row_label {
    () => {
        concat!("\t\t", hex!(), " - ", hex!(), " :")
    };
}

/// Every cell of a row is padded to this width
static CELL_WIDTH: Lazy<usize> = Lazy::new(|| format!(hex!(), 0u8).len());

/// Stands in for the opcodes of a run of zero rows
static ZERO_RUN: Lazy<String> = Lazy::new(|| {
    let zero = format!(hex!(), 0u8);
    // the marker is centered between the first and the last cell
    let inner = *CELL_WIDTH * (ROW_LEN - 2) + (ROW_LEN - 1);
    let pad = " ".repeat((inner - ZERO_MARKER.len()) / 2);
    format!("{}{}{}{}{}", zero, pad, ZERO_MARKER, pad, zero)
});

fn heading(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    writeln!(f, "\t{} :", name)
}

fn single<T>(f: &mut fmt::Formatter<'_>, value: T) -> fmt::Result
where
    T: fmt::UpperHex + Unsigned,
{
    writeln!(f, concat!("\t\t", hex!()), value)
}

fn hex_rows<T>(f: &mut fmt::Formatter<'_>, data: &[T]) -> fmt::Result
where
    T: fmt::UpperHex + Unsigned,
{
    for (row, chunk) in data.chunks(ROW_LEN).enumerate() {
        let from = row * ROW_LEN;
        write!(f, row_label!(), from, from + chunk.len() - 1)?;
        for value in chunk {
            write!(f, concat!(" ", hex!()), value)?;
        }
        f.write_char('\n')?;
    }
    Ok(())
}

fn key_rows(f: &mut fmt::Formatter<'_>, keys: &[bool]) -> fmt::Result {
    for (row, chunk) in keys.chunks(ROW_LEN).enumerate() {
        let from = row * ROW_LEN;
        write!(f, row_label!(), from, from + chunk.len() - 1)?;
        for (index, pressed) in chunk.iter().enumerate() {
            let cell = if *pressed { "true" } else { "false" };
            if index + 1 == chunk.len() {
                write!(f, " {}", cell)?;
            } else {
                write!(f, " {:width$}", cell, width = *CELL_WIDTH)?;
            }
        }
        f.write_char('\n')?;
    }
    Ok(())
}

fn memory_rows(f: &mut fmt::Formatter<'_>, memory: &[u8]) -> fmt::Result {
    let zero_run = |f: &mut fmt::Formatter<'_>, from: usize, to: usize| {
        write!(f, row_label!(), from, to)?;
        writeln!(f, " {}", *ZERO_RUN)
    };

    let mut zeros_from = None;
    for (row, chunk) in memory.chunks(MEMORY_ROW_BYTES).enumerate() {
        let from = row * MEMORY_ROW_BYTES;

        if chunk.iter().all(|byte| *byte == 0) {
            zeros_from.get_or_insert(from);
            continue;
        }
        if let Some(start) = zeros_from.take() {
            zero_run(f, start, from - 1)?;
        }

        write!(f, row_label!(), from, from + chunk.len() - 1)?;
        for pair in chunk.chunks(2) {
            let low = pair.get(1).copied().unwrap_or(0);
            write!(f, concat!(" ", hex!()), u16::from_be_bytes([pair[0], low]))?;
        }
        f.write_char('\n')?;
    }

    if let Some(start) = zeros_from {
        zero_run(f, start, memory.len() - 1)?;
    }
    Ok(())
}

impl fmt::Display for ChipSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the stack is always shown with all of its slots
        let mut stack = [0u16; cpu::stack::SIZE];
        let entries = self.stack.as_slice();
        stack[..entries.len()].copy_from_slice(entries);

        writeln!(f, "Chipset {{")?;
        heading(f, "Opcode")?;
        single(f, self.opcode)?;
        heading(f, "Program Counter")?;
        single(f, self.registers.program_counter())?;
        heading(f, "Index")?;
        single(f, self.registers.index())?;
        heading(f, "Timers")?;
        hex_rows(f, &[self.timers.delay(), self.timers.sound()])?;
        heading(f, "Memory")?;
        memory_rows(f, self.memory.as_slice())?;
        heading(f, "Keypad")?;
        key_rows(f, self.keypad.get_keys())?;
        heading(f, "Stack")?;
        hex_rows(f, &stack)?;
        heading(f, "Register")?;
        hex_rows(f, self.registers.all())?;
        f.write_char('}')
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests;
    use crate::definitions::keyboard;

    const OUTPUT_PRINT: &str = "\
        Chipset {\n\
            \tOpcode :\n\
                \t\t0x0000\n\
            \tProgram Counter :\n\
                \t\t0x0200\n\
            \tIndex :\n\
                \t\t0x0000\n\
            \tTimers :\n\
                \t\t0x0000 - 0x0001 : 0x0000 0x0000\n\
            \tMemory :\n\
                \t\t0x0000 - 0x000F : 0xF090 0x9090 0xF020 0x6020 0x2070 0xF010 0xF080 0xF0F0\n\
                \t\t0x0010 - 0x001F : 0x10F0 0x10F0 0x9090 0xF010 0x10F0 0x80F0 0x10F0 0xF080\n\
                \t\t0x0020 - 0x002F : 0xF090 0xF0F0 0x1020 0x4040 0xF090 0xF090 0xF0F0 0x90F0\n\
                \t\t0x0030 - 0x003F : 0x10F0 0xF090 0xF090 0x90E0 0x90E0 0x90E0 0xF080 0x8080\n\
                \t\t0x0040 - 0x004F : 0xF0E0 0x9090 0x90E0 0xF080 0xF080 0xF0F0 0x80F0 0x8080\n\
                \t\t0x0050 - 0x01FF : 0x0000                    ...                    0x0000\n\
                \t\t0x0200 - 0x020F : 0x00E0 0x6C00 0x4C00 0x6E0F 0xA203 0x6020 0xF055 0x00E0\n\
                \t\t0x0210 - 0x021F : 0x22BE 0x2276 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000\n\
                \t\t0x0220 - 0x0FFF : 0x0000                    ...                    0x0000\n\
            \tKeypad :\n\
                \t\t0x0000 - 0x0007 : false  true   false  true   false  true   false  true\n\
                \t\t0x0008 - 0x000F : false  true   false  true   false  true   false  true\n\
            \tStack :\n\
                \t\t0x0000 - 0x0007 : 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000\n\
                \t\t0x0008 - 0x000F : 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000\n\
            \tRegister :\n\
                \t\t0x0000 - 0x0007 : 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000\n\
                \t\t0x0008 - 0x000F : 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000\n\
        }";

    const PROGRAM: [u8; 20] = [
        0x00, 0xE0, 0x6C, 0x00, 0x4C, 0x00, 0x6E, 0x0F, 0xA2, 0x03, 0x60, 0x20, 0xF0, 0x55, 0x00,
        0xE0, 0x22, 0xBE, 0x22, 0x76,
    ];

    #[test]
    /// tests if the pretty print output is as expected
    /// this test is mainly for coverage purposes, as
    /// the given module takes up a multitude of lines.
    fn test_full_print() {
        let mut chip = tests::get_default_chip();
        assert_eq!(Ok(()), chip.load(&PROGRAM));

        let mut keys = [false; keyboard::SIZE];
        for (index, key) in keys.iter_mut().enumerate() {
            *key = index % 2 != 0;
        }
        chip.set_keyboard(&keys);

        let actual_full = format!("{}", chip);
        let actual_split: Vec<_> = actual_full.split('\n').collect();
        let expected: Vec<_> = OUTPUT_PRINT.split('\n').collect();

        for (exp, act) in expected.iter().zip(actual_split.iter()) {
            assert_eq!(exp, act);
        }
        assert_eq!(expected.len(), actual_split.len());
    }

    #[test]
    fn test_print_stack_and_timers() {
        let mut chip = tests::get_default_chip();
        chip.stack.push(0x0208).unwrap();
        chip.timers.set_delay(0x3C);
        chip.timers.set_sound(0x05);

        let print = chip.to_string();

        assert!(print.contains(
            "\t\t0x0000 - 0x0007 : 0x0208 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000"
        ));
        assert!(print.contains("\t\t0x0000 - 0x0001 : 0x003C 0x0005"));
    }
}
