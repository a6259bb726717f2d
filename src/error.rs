use thiserror::Error;

use crate::opcode::Opcode;

/// Fatal errors, the run can not be continued after one of these.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ProcessError {
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum OpcodeError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    InvalidOpcode(Opcode),
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Full,
    #[error("Stack is empty!")]
    Empty,
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum LoadError {
    #[error("The program has {size} bytes, but only {capacity} bytes are available.")]
    ProgramTooLarge { size: usize, capacity: usize },
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum KeypadError {
    #[error("There is no key {0:#X} on the keypad.")]
    InvalidKey(usize),
}
