use tinyvec::ArrayVec;

use crate::{definitions::cpu, StackError};

/// The stack is only used to store return addresses when subroutines are called. The original
/// [RCA 1802](https://de.wikipedia.org/wiki/RCA1802) version allocated `48` bytes for up to
/// `12` levels of nesting; modern implementations usually have more.
/// (here we are using `16`)
#[derive(Debug, Clone, Default)]
pub struct CallStack {
    entries: ArrayVec<[u16; cpu::stack::SIZE]>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Will push the pointer onto the stack
    pub fn push(&mut self, pointer: u16) -> Result<(), StackError> {
        match self.entries.try_push(pointer) {
            None => Ok(()),
            Some(_) => Err(StackError::Full),
        }
    }

    /// Will pop the last pointer from the stack
    pub fn pop(&mut self) -> Result<u16, StackError> {
        self.entries.pop().ok_or(StackError::Empty)
    }

    /// The depth pointer, the amount of entries on the stack
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[u16] {
        self.entries.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// testing internal functionality of popping and pushing into the stack
    fn test_push_pop_stack() {
        let mut stack = CallStack::new();

        assert!(stack.is_empty());

        let next_counter = 0x0133 + cpu::PROGRAM_COUNTER as u16;

        for i in 0..cpu::stack::SIZE as u16 {
            assert_eq!(Ok(()), stack.push(next_counter + i * 8));
        }
        assert_eq!(Err(StackError::Full), stack.push(next_counter));

        assert_eq!(cpu::stack::SIZE, stack.depth());

        for i in (0..cpu::stack::SIZE as u16).rev() {
            assert_eq!(Ok(next_counter + i * 8), stack.pop());
        }
        assert!(stack.is_empty());

        assert_eq!(Err(StackError::Empty), stack.pop());
    }

    #[test]
    fn test_reset_empties_stack() {
        let mut stack = CallStack::new();
        stack.push(0x200).unwrap();
        stack.push(0x300).unwrap();
        assert_eq!(stack.as_slice(), &[0x200, 0x300]);

        stack.reset();
        assert_eq!(stack.depth(), 0);
    }
}
