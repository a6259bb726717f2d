use crate::definitions::cpu;

/// `8-bit` data registers named `V0` to `VF` plus the two `16-bit` registers
/// `I` and `PC`.
///
/// The `VF` register doubles as a flag for some instructions; thus, it should
/// be avoided. In an addition operation, `VF` is the carry flag, while in
/// subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set
/// upon pixel collision.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterFile {
    pub(crate) general: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(crate) index: u16,
    /// The program counter has the address of the next instruction to be
    /// executed from memory.
    pub(crate) program_counter: u16,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            general: [0; cpu::register::SIZE],
            index: 0,
            program_counter: cpu::PROGRAM_COUNTER as u16,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn get(&self, register: usize) -> u8 {
        self.general[register]
    }

    #[inline]
    pub fn set(&mut self, register: usize, value: u8) {
        self.general[register] = value;
    }

    /// Writes `VF`
    #[inline]
    pub fn set_flag(&mut self, flag: bool) {
        self.general[cpu::register::LAST] = flag as u8;
    }

    #[inline]
    pub fn flag(&self) -> u8 {
        self.general[cpu::register::LAST]
    }

    /// `V0` up to and including `VX`
    pub fn up_to(&self, register: usize) -> &[u8] {
        &self.general[..=register]
    }

    pub fn up_to_mut(&mut self, register: usize) -> &mut [u8] {
        &mut self.general[..=register]
    }

    pub fn all(&self) -> &[u8] {
        &self.general
    }

    pub fn index(&self) -> u16 {
        self.index
    }

    pub fn set_index(&mut self, index: u16) {
        self.index = index;
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn set_program_counter(&mut self, pointer: u16) {
        self.program_counter = pointer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_register_file() {
        let registers = RegisterFile::new();
        assert_eq!(registers.all(), &[0; cpu::register::SIZE]);
        assert_eq!(registers.index(), 0);
        assert_eq!(registers.program_counter(), 0x200);
    }

    #[test]
    fn test_flag_is_last_register() {
        let mut registers = RegisterFile::new();
        registers.set_flag(true);
        assert_eq!(registers.get(0xF), 1);

        registers.set(0xF, 0x42);
        assert_eq!(registers.flag(), 0x42);

        registers.set_flag(false);
        assert_eq!(registers.flag(), 0);
    }

    #[test]
    fn test_up_to_is_inclusive() {
        let mut registers = RegisterFile::new();
        registers.up_to_mut(2).copy_from_slice(&[1, 2, 3]);
        assert_eq!(registers.up_to(3), &[1, 2, 3, 0]);
    }
}
