use std::convert::TryFrom;

use rand::RngCore;

use super::Quirks;
use crate::{
    definitions::{display as screen, keyboard},
    devices::Keypad,
    display::Display,
    memory::Memory,
    opcode::{ChipOpcodes, Opcode, Opcodes, Operation, ProgramCounter, ProgramCounterStep},
    registers::RegisterFile,
    stack::CallStack,
    timer::{TimerEvent, Timers},
    KeypadError, LoadError, OpcodeError, ProcessError,
};

/// The report of a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// What the host should do after this step.
    pub operation: Operation,
    /// Set if the fetched opcode could not be decoded, the opcode was skipped.
    pub unknown: Option<OpcodeError>,
}

impl Step {
    fn new(operation: Operation) -> Self {
        Self {
            operation,
            unknown: None,
        }
    }

    fn unknown(err: OpcodeError) -> Self {
        Self {
            operation: Operation::None,
            unknown: Some(err),
        }
    }

    /// The framebuffer was touched during this step.
    pub fn display_changed(&self) -> bool {
        matches!(self.operation, Operation::Draw)
    }

    /// The machine is parked on a key wait.
    pub fn is_waiting(&self) -> bool {
        matches!(self.operation, Operation::Wait)
    }
}

/// The ChipSet struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instant on the
/// Chip8 CPU.
///
/// The chipset is not synchronized, hosts with multiple threads have to
/// serialize all calls themselves.
pub struct ChipSet {
    /// all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    pub(super) memory: Memory,
    pub(super) registers: RegisterFile,
    pub(super) stack: CallStack,
    pub(super) timers: Timers,
    pub(super) display: Display,
    pub(super) keypad: Keypad,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
    pub(super) quirks: Quirks,
}

impl Default for ChipSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ChipSet {
    /// will create a new chipset object in its reset state
    pub fn new() -> Self {
        Self {
            opcode: 0,
            memory: Memory::new(),
            registers: RegisterFile::new(),
            stack: CallStack::new(),
            timers: Timers::new(),
            display: Display::new(),
            keypad: Keypad::new(),
            rng: Box::new(rand::rngs::OsRng),
            quirks: Quirks::default(),
        }
    }

    /// Replaces the random number generator used by `CXNN`.
    pub fn with_rng<R>(mut self, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_quirks(mut self, quirks: Quirks) -> Self {
        self.quirks = quirks;
        self
    }

    /// Zeroes all the state and writes the font set, the random number
    /// generator and the quirks are kept.
    pub fn reset(&mut self) {
        self.opcode = 0;
        self.memory.reset();
        self.registers.reset();
        self.stack.reset();
        self.timers.reset();
        self.display.clear();
        self.keypad.reset();
        log::debug!("chipset reset");
    }

    /// Resets the chipset and loads the program to the program start.
    /// On failure the chipset stays in the reset state.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.reset();
        self.memory.load(program)?;
        log::debug!("loaded program with {} bytes", program.len());
        Ok(())
    }

    /// will advance the program by a single step
    pub fn next(&mut self) -> Result<Step, ProcessError> {
        let pc = self.registers.program_counter();
        self.opcode = self.memory.fetch(pc);

        match Opcodes::try_from(self.opcode) {
            Ok(opcode) => {
                log::trace!("{:#05X}: {:#06X} {}", pc, self.opcode, opcode);
                let operation = self.calc(&opcode)?;
                Ok(Step::new(operation))
            }
            Err(err) => {
                log::warn!("{:#05X}: {}", pc, err);
                self.step(ProgramCounterStep::Next);
                Ok(Step::unknown(err))
            }
        }
    }

    /// Decrements both timers, has to be called at 60 hertz.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        self.timers.tick()
    }

    /// Will write keyboard data into interncal keyboard representation.
    pub fn set_keyboard(&mut self, keys: &[bool; keyboard::SIZE]) {
        self.keypad.set_mult(keys);
    }

    /// Will set the value of the given key
    pub fn set_key(&mut self, key: usize, to: bool) -> Result<(), KeypadError> {
        self.keypad.set_key(key, to)
    }

    /// Will toggle the given key
    pub fn toggle_key(&mut self, key: usize) -> Result<(), KeypadError> {
        self.keypad.toggle_key(key)
    }

    /// Will get the current state of the keyboard
    pub fn get_keyboard(&self) -> &[bool] {
        self.keypad.get_keys()
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.timers.sound()
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.timers.delay()
    }

    pub fn is_sound_active(&self) -> bool {
        self.timers.is_sound_active()
    }

    /// Will return a immutable slice of the current display configuration
    pub fn get_display(&self) -> &[[bool; screen::WIDTH]] {
        self.display.rows()
    }

    pub fn get_program_counter(&self) -> u16 {
        self.registers.program_counter()
    }

    pub fn get_index_register(&self) -> u16 {
        self.registers.index()
    }

    pub fn get_registers(&self) -> &[u8] {
        self.registers.all()
    }

    pub fn get_stack_depth(&self) -> usize {
        self.stack.depth()
    }

    /// The opcode fetched during the last step
    pub fn get_opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn get_memory(&self) -> &[u8] {
        self.memory.as_slice()
    }

    pub fn get_quirks(&self) -> Quirks {
        self.quirks
    }
}

impl ProgramCounter for ChipSet {
    fn step(&mut self, step: ProgramCounterStep) {
        let pc = step.apply(self.registers.program_counter());
        self.registers.set_program_counter(pc);
    }
}
