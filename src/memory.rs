use crate::{
    definitions::{cpu, display::fontset, memory},
    opcode::Opcode,
    LoadError,
};

/// The ram of the chip.
///
/// - `0x000-0x04F` - The built in `4x5` pixel font set (`0-F`)
/// - `0x050-0x1FF` - Reserved for the interpreter
/// - `0x200-0xFFF` - Program ROM and work RAM
///
/// Every address is reduced into the `4 KiB` space, so no access can
/// leave the ram. Only the bootstrap in [`Memory::reset`] writes below the
/// program start.
pub struct Memory {
    pub(crate) data: Box<[u8; memory::SIZE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        let mut mem = Self {
            data: Box::new([0; memory::SIZE]),
        };
        mem.reset();
        mem
    }

    /// Zeroes the ram and writes the font set.
    pub fn reset(&mut self) {
        self.data.fill(0);
        self.data[fontset::LOCATION..(fontset::LOCATION + fontset::FONTSET.len())]
            .copy_from_slice(&fontset::FONTSET);
    }

    /// Copies the program to the program start.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > cpu::PROGRAM_CAPACITY {
            return Err(LoadError::ProgramTooLarge {
                size: program.len(),
                capacity: cpu::PROGRAM_CAPACITY,
            });
        }

        self.data[cpu::PROGRAM_COUNTER..(cpu::PROGRAM_COUNTER + program.len())]
            .copy_from_slice(program);
        Ok(())
    }

    #[inline]
    fn wrap(address: u16) -> usize {
        (address & memory::ADDRESS_MASK) as usize
    }

    pub fn read(&self, address: u16) -> u8 {
        self.data[Self::wrap(address)]
    }

    /// Writes into the program area. Writes into the reserved area are dropped.
    pub fn write(&mut self, address: u16, value: u8) {
        let address = Self::wrap(address);
        if address < cpu::PROGRAM_COUNTER {
            log::warn!(
                "dropped write of {:#04X} into the reserved area at {:#05X}",
                value,
                address
            );
            return;
        }
        self.data[address] = value;
    }

    /// Builds the big endian opcode stored at `pointer` and `pointer + 1`.
    ///
    /// # Example
    /// ```rust
    /// # use chip::memory::Memory;
    /// let mut memory = Memory::new();
    /// memory.write(0x200, 0x1E);
    /// memory.write(0x201, 0xDA);
    /// assert_eq!(memory.fetch(0x200), 0x1EDA);
    /// ```
    pub fn fetch(&self, pointer: u16) -> Opcode {
        Opcode::from_be_bytes([self.read(pointer), self.read(pointer.wrapping_add(1))])
    }

    /// Will return the full ram
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_writes_fontset() {
        let mut memory = Memory::new();
        memory.data[0x300] = 0xAA;
        memory.reset();

        assert_eq!(&memory.data[..fontset::FONTSET.len()], &fontset::FONTSET[..]);
        assert!(memory.data[fontset::FONTSET.len()..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_load_program() {
        let mut memory = Memory::new();
        let program = [0x12, 0x34, 0x56];

        assert_eq!(Ok(()), memory.load(&program));
        assert_eq!(&memory.data[0x200..0x203], &program);
    }

    #[test]
    fn test_load_fills_whole_capacity() {
        let mut memory = Memory::new();
        let program = vec![0xFF; cpu::PROGRAM_CAPACITY];

        assert_eq!(Ok(()), memory.load(&program));
        assert_eq!(memory.read(0xFFF), 0xFF);
    }

    #[test]
    fn test_load_too_large() {
        let mut memory = Memory::new();
        let program = vec![0xFF; cpu::PROGRAM_CAPACITY + 1];

        assert_eq!(
            Err(LoadError::ProgramTooLarge {
                size: cpu::PROGRAM_CAPACITY + 1,
                capacity: cpu::PROGRAM_CAPACITY,
            }),
            memory.load(&program)
        );
        assert!(memory.data[cpu::PROGRAM_COUNTER..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_reserved_area_is_read_only() {
        let mut memory = Memory::new();
        memory.write(0x0000, 0x12);
        memory.write(0x01FF, 0x34);

        assert_eq!(memory.read(0x0000), fontset::FONTSET[0]);
        assert_eq!(memory.read(0x01FF), 0);
    }

    #[test]
    fn test_addresses_wrap() {
        let mut memory = Memory::new();
        memory.write(0x1300, 0x42);

        assert_eq!(memory.read(0x0300), 0x42);
        assert_eq!(memory.read(0xF300), 0x42);
    }

    #[test]
    fn test_fetch_over_the_end() {
        let mut memory = Memory::new();
        memory.write(0xFFF, 0xAB);

        // the low byte wraps around to the first glyph byte
        assert_eq!(memory.fetch(0xFFF), 0xABF0);
    }
}
