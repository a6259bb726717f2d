//! Opcode abstractions, functionality and constants.
use std::{
    convert::{TryFrom, TryInto},
    fmt,
};

use crate::{definitions::memory, OpcodeError, ProcessError};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a single byte
const BYTE_SIZE: u16 = 0x8;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// These are special traits used to filter out information
/// from opcodes
pub trait OpcodeTrait {
    /// this is an opcode extractor that will return the
    /// opcode class (the top nibble) of any opcode
    fn t(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `T` is the opcode type
    /// - `NNN` is an address
    fn nnn(&self) -> u16;

    /// this is an opcode extractor for the opcode type `TXNN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `NN` is a constant
    fn xnn(&self) -> (usize, u8);

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a constant nibble or a opcode subtype
    fn xyn(&self) -> (usize, usize, usize);

    /// this is an opcode extractor for the opcode type `TXYT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    fn xy(&self) -> (usize, usize);

    /// this is an opcode extractor for the opcode type `TXTT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    fn x(&self) -> usize;
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1);
    /// ```
    fn t(&self) -> usize {
        ((self & OPCODE_MASK_F000) >> (3 * BYTE_SIZE / 2)) as usize
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> u16 {
        self & OPCODE_MASK_0FFF
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xnn(), (0xE, 0xDA));
    /// ```
    fn xnn(&self) -> (usize, u8) {
        let x = self.x();
        let nn = (self & OPCODE_MASK_00FF) as u8;
        (x, nn)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn xyn(&self) -> (usize, usize, usize) {
        let (x, y) = self.xy();
        let n = (self & OPCODE_MASK_000F) as usize;
        (x, y, n)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xy(), (0xE, 0xD));
    /// ```
    fn xy(&self) -> (usize, usize) {
        let x = self.x();
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        const NIBBLE: u16 = BYTE_SIZE / 2;
        let y = ((self & MASK) >> NIBBLE) as usize;
        (x, y)
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.x(), 0xE);
    /// ```
    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> BYTE_SIZE) as usize
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents the program steps that the chip
/// can take.
pub enum ProgramCounterStep {
    /// Will not change the program counter
    None,
    /// Will move the program counter to the next instruction
    Next,
    /// Will skip over the next instruction
    Skip,
    /// Will simply move the program counter to the given location.
    Jump(u16),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }

    /// Calculates the program counter after taking this step from `pc`.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next.apply(0x200), 0x202);
    /// assert_eq!(ProgramCounterStep::Skip.apply(0x200), 0x204);
    /// assert_eq!(ProgramCounterStep::Jump(0x300).apply(0x200), 0x300);
    /// ```
    #[inline]
    pub fn apply(&self, pc: u16) -> u16 {
        match *self {
            ProgramCounterStep::None => pc,
            ProgramCounterStep::Next => pc.wrapping_add(memory::opcodes::SIZE),
            ProgramCounterStep::Skip => pc.wrapping_add(2 * memory::opcodes::SIZE),
            ProgramCounterStep::Jump(pointer) => pointer,
        }
    }
}

/// Inner is an internally used wrapper used for the implTryInto
/// macro. It is primarly used for converting to the correct type, without
/// disturbing its namespace.
#[repr(transparent)]
struct TryIntoHandler<T>(T);

#[inline]
fn err<T>(value: Opcode) -> Result<T, OpcodeError> {
    Err(OpcodeError::InvalidOpcode(value))
}

#[inline]
fn try_into<To, From>(val: From, value: Opcode) -> Result<To, OpcodeError>
where
    From: TryInto<TryIntoHandler<To>>,
{
    let inner: TryIntoHandler<To> = val.try_into().or_else(|_| err(value))?;
    Ok(inner.0)
}

/// implTryInto is a macro responsible for creating the boilerplate code
/// needed for the opcode convertions.
macro_rules! implTryIntoInner {
    ( $type_name:ty : $type_from:ty : $inner:expr) => {
        impl TryFrom<$type_from> for TryIntoHandler<$type_name> {
            type Error = ();

            fn try_from(value: $type_from) -> Result<Self, Self::Error> {
                let inner = $inner(value)?;
                Ok(Self(inner))
            }
        }
    };
}

macro_rules! implTryIntoEnum {
    ($type_name:ty : $type_from:ty : $( $key:literal => $val:expr ),+ $(,)? ) => {
        implTryIntoInner!(
            $type_name : $type_from :
            |value: $type_from| -> Result<$type_name, ()> {
                match value {
                    $(
                        $key => Ok($val),
                    )+
                    _ => Err(()),
                }
            }
        );
    };
}

macro_rules! implTryIntoXNN {
    ($type_name:ident) => {
        implTryIntoInner!(
            $type_name : Opcode :
            |value: Opcode| -> Result<$type_name, ()> {
                let (x, nn) = value.xnn();
                Ok($type_name { x, nn })
            }
        );
    };
}

macro_rules! implTryIntoNNN {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| -> Result<$type_name, ()> {
                let nnn = value.nnn();
                Ok($type_name { nnn })
            }
        }
    };
}

macro_rules! implTryIntoXY0 {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| -> Result<$type_name, ()> {
                match value.xyn() {
                    (x, y, 0) => Ok($type_name { x, y }),
                    _ => Err(()),
                }
            }
        }
    };
}

macro_rules! implTryIntoXNNE {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| -> Result<$type_name, ()> {
                let (x, nn) = value.xnn();
                let ops = try_into(nn, value).map_err(|_| ())?;
                Ok($type_name { ops, x })
            }
        }
    };
}

macro_rules! implTryIntoXYN {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| -> Result<$type_name, ()> {
                let (x, y, n) = value.xyn();
                Ok($type_name { x, y, n })
            }
        }
    };
}

macro_rules! implTryIntoXYNE {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| -> Result<$type_name, ()> {
                let (x, y, n) = value.xyn();
                let ops = try_into(n, value).map_err(|_| ())?;
                Ok($type_name { ops, x, y })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    /// Clears the display
    Clear,
    /// Returns from the subroutine
    Return,
}

implTryIntoEnum!(System : Opcode :
    // 00E0
    0x00E0 => System::Clear,
    // 00EE
    0x00EE => System::Return,
);

/// `TNNN` with `NNN` being an absolute address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub nnn: u16,
}

implTryIntoNNN!(Address);

/// `TXNN` with `X` a register and `NN` a constant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterConst {
    pub x: usize,
    pub nn: u8,
}

implTryIntoXNN!(RegisterConst);

/// `TXY0` with `X` and `Y` being registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterPair {
    pub x: usize,
    pub y: usize,
}

implTryIntoXY0!(RegisterPair);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Assign,
    Or,
    And,
    Xor,
    Add,
    Sub,
    ShiftRight,
    SubReverse,
    ShiftLeft,
}

implTryIntoEnum!(ArithmeticOp : usize :
    // 8XY0
    0x0 => ArithmeticOp::Assign,
    // 8XY1
    0x1 => ArithmeticOp::Or,
    // 8XY2
    0x2 => ArithmeticOp::And,
    // 8XY3
    0x3 => ArithmeticOp::Xor,
    // 8XY4
    0x4 => ArithmeticOp::Add,
    // 8XY5
    0x5 => ArithmeticOp::Sub,
    // 8XY6
    0x6 => ArithmeticOp::ShiftRight,
    // 8XY7
    0x7 => ArithmeticOp::SubReverse,
    // 8XYE
    0xE => ArithmeticOp::ShiftLeft,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arithmetic {
    pub ops: ArithmeticOp,
    pub x: usize,
    pub y: usize,
}

implTryIntoXYNE!(Arithmetic);

/// `DXYN` the sprite located at `I` with `N` rows drawn at `(VX, VY)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub x: usize,
    pub y: usize,
    pub n: usize,
}

implTryIntoXYN!(Sprite);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOp {
    Pressed,
    NotPressed,
}

implTryIntoEnum!(KeyOp : u8 :
    // EX9E
    0x9E => KeyOp::Pressed,
    // EXA1
    0xA1 => KeyOp::NotPressed,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCheck {
    pub ops: KeyOp,
    pub x: usize,
}

implTryIntoXNNE!(KeyCheck);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscOp {
    GetDelayTimer,
    AwaitKeyPress,
    SetDelayTimer,
    SetSoundTimer,
    AddToIndex,
    SetIndexToGlyph,
    StoreBcd,
    StoreRegisters,
    LoadRegisters,
}

implTryIntoEnum!(MiscOp : u8 :
    // FX07
    0x07 => MiscOp::GetDelayTimer,
    // FX0A
    0x0A => MiscOp::AwaitKeyPress,
    // FX15
    0x15 => MiscOp::SetDelayTimer,
    // FX18
    0x18 => MiscOp::SetSoundTimer,
    // FX1E
    0x1E => MiscOp::AddToIndex,
    // FX29
    0x29 => MiscOp::SetIndexToGlyph,
    // FX33
    0x33 => MiscOp::StoreBcd,
    // FX55
    0x55 => MiscOp::StoreRegisters,
    // FX65
    0x65 => MiscOp::LoadRegisters,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misc {
    pub ops: MiscOp,
    pub x: usize,
}

implTryIntoXNNE!(Misc);

/// A fully decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcodes {
    System(System),
    Jump(Address),
    Call(Address),
    SkipEqual(RegisterConst),
    SkipNotEqual(RegisterConst),
    SkipRegisterEqual(RegisterPair),
    Load(RegisterConst),
    Add(RegisterConst),
    Arithmetic(Arithmetic),
    SkipRegisterNotEqual(RegisterPair),
    SetIndex(Address),
    JumpOffset(Address),
    Random(RegisterConst),
    Draw(Sprite),
    Key(KeyCheck),
    Misc(Misc),
}

impl TryFrom<Opcode> for Opcodes {
    type Error = OpcodeError;

    fn try_from(value: Opcode) -> Result<Self, Self::Error> {
        let res = match value.t() {
            0x0 => Opcodes::System(try_into(value, value)?),
            0x1 => Opcodes::Jump(try_into(value, value)?),
            0x2 => Opcodes::Call(try_into(value, value)?),
            0x3 => Opcodes::SkipEqual(try_into(value, value)?),
            0x4 => Opcodes::SkipNotEqual(try_into(value, value)?),
            0x5 => Opcodes::SkipRegisterEqual(try_into(value, value)?),
            0x6 => Opcodes::Load(try_into(value, value)?),
            0x7 => Opcodes::Add(try_into(value, value)?),
            0x8 => Opcodes::Arithmetic(try_into(value, value)?),
            0x9 => Opcodes::SkipRegisterNotEqual(try_into(value, value)?),
            0xA => Opcodes::SetIndex(try_into(value, value)?),
            0xB => Opcodes::JumpOffset(try_into(value, value)?),
            0xC => Opcodes::Random(try_into(value, value)?),
            0xD => Opcodes::Draw(try_into(value, value)?),
            0xE => Opcodes::Key(try_into(value, value)?),
            0xF => Opcodes::Misc(try_into(value, value)?),
            _ => return err(value),
        };
        Ok(res)
    }
}

/// Renders the conventional assembler mnemonic.
impl fmt::Display for Opcodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Opcodes::System(System::Clear) => write!(f, "CLS"),
            Opcodes::System(System::Return) => write!(f, "RET"),
            Opcodes::Jump(Address { nnn }) => write!(f, "JP {:#05X}", nnn),
            Opcodes::Call(Address { nnn }) => write!(f, "CALL {:#05X}", nnn),
            Opcodes::SkipEqual(RegisterConst { x, nn }) => write!(f, "SE V{:X}, {:#04X}", x, nn),
            Opcodes::SkipNotEqual(RegisterConst { x, nn }) => {
                write!(f, "SNE V{:X}, {:#04X}", x, nn)
            }
            Opcodes::SkipRegisterEqual(RegisterPair { x, y }) => write!(f, "SE V{:X}, V{:X}", x, y),
            Opcodes::Load(RegisterConst { x, nn }) => write!(f, "LD V{:X}, {:#04X}", x, nn),
            Opcodes::Add(RegisterConst { x, nn }) => write!(f, "ADD V{:X}, {:#04X}", x, nn),
            Opcodes::Arithmetic(Arithmetic { ops, x, y }) => {
                let name = match ops {
                    ArithmeticOp::Assign => "LD",
                    ArithmeticOp::Or => "OR",
                    ArithmeticOp::And => "AND",
                    ArithmeticOp::Xor => "XOR",
                    ArithmeticOp::Add => "ADD",
                    ArithmeticOp::Sub => "SUB",
                    ArithmeticOp::SubReverse => "SUBN",
                    ArithmeticOp::ShiftRight => return write!(f, "SHR V{:X}", x),
                    ArithmeticOp::ShiftLeft => return write!(f, "SHL V{:X}", x),
                };
                write!(f, "{} V{:X}, V{:X}", name, x, y)
            }
            Opcodes::SkipRegisterNotEqual(RegisterPair { x, y }) => {
                write!(f, "SNE V{:X}, V{:X}", x, y)
            }
            Opcodes::SetIndex(Address { nnn }) => write!(f, "LD I, {:#05X}", nnn),
            Opcodes::JumpOffset(Address { nnn }) => write!(f, "JP V0, {:#05X}", nnn),
            Opcodes::Random(RegisterConst { x, nn }) => write!(f, "RND V{:X}, {:#04X}", x, nn),
            Opcodes::Draw(Sprite { x, y, n }) => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Opcodes::Key(KeyCheck { ops, x }) => match ops {
                KeyOp::Pressed => write!(f, "SKP V{:X}", x),
                KeyOp::NotPressed => write!(f, "SKNP V{:X}", x),
            },
            Opcodes::Misc(Misc { ops, x }) => match ops {
                MiscOp::GetDelayTimer => write!(f, "LD V{:X}, DT", x),
                MiscOp::AwaitKeyPress => write!(f, "LD V{:X}, K", x),
                MiscOp::SetDelayTimer => write!(f, "LD DT, V{:X}", x),
                MiscOp::SetSoundTimer => write!(f, "LD ST, V{:X}", x),
                MiscOp::AddToIndex => write!(f, "ADD I, V{:X}", x),
                MiscOp::SetIndexToGlyph => write!(f, "LD F, V{:X}", x),
                MiscOp::StoreBcd => write!(f, "LD B, V{:X}", x),
                MiscOp::StoreRegisters => write!(f, "LD [I], V{:X}", x),
                MiscOp::LoadRegisters => write!(f, "LD V{:X}, [I]", x),
            },
        }
    }
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter forward by a step.
    fn step(&mut self, step: ProgramCounterStep);
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents a command from the interpreter up to the host.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// The machine is parked on a key wait,
    /// no key was pressed during this step.
    Wait,
    /// The framebuffer was touched and should be redrawn.
    Draw,
}

/// These are the traits that have to be full filled for a working opcode
/// table.
///
/// This trait requires the implementation of the  [`ProgramCounter`](ProgramCounter) trait for the step
/// functionality has to be implemented as well.
pub trait ChipOpcodes: ProgramCounter {
    /// will calculate the programs step by a single step
    fn calc(&mut self, opcode: &Opcodes) -> Result<Operation, ProcessError> {
        let mut operation = Operation::None;
        let step_op = |(step, op): (ProgramCounterStep, Operation)| {
            operation = op;
            step
        };

        let step = match opcode {
            Opcodes::System(opcode) => self.system(opcode).map(step_op),
            Opcodes::Jump(opcode) => self.jump(opcode),
            Opcodes::Call(opcode) => self.call(opcode),
            Opcodes::SkipEqual(opcode) => self.skip_equal(opcode),
            Opcodes::SkipNotEqual(opcode) => self.skip_not_equal(opcode),
            Opcodes::SkipRegisterEqual(opcode) => self.skip_register_equal(opcode),
            Opcodes::Load(opcode) => self.load(opcode),
            Opcodes::Add(opcode) => self.add(opcode),
            Opcodes::Arithmetic(opcode) => self.arithmetic(opcode),
            Opcodes::SkipRegisterNotEqual(opcode) => self.skip_register_not_equal(opcode),
            Opcodes::SetIndex(opcode) => self.set_index(opcode),
            Opcodes::JumpOffset(opcode) => self.jump_offset(opcode),
            Opcodes::Random(opcode) => self.random(opcode),
            Opcodes::Draw(opcode) => self.draw(opcode).map(step_op),
            Opcodes::Key(opcode) => self.key(opcode),
            Opcodes::Misc(opcode) => self.misc(opcode).map(step_op),
        }?;

        self.step(step);
        Ok(operation)
    }

    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    fn system(&mut self, opcode: &System)
        -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    fn jump(&self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    fn call(&mut self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `3XNN` - Cond     - `if(Vx==NN)`          - Skips the next instruction if `VX` equals `NN`.
    fn skip_equal(&self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError>;

    /// - `4XNN` - Cond     - `if(Vx!=NN)`          - Skips the next instruction if `VX` doesn't equal `NN`.
    fn skip_not_equal(&self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError>;

    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    fn skip_register_equal(&self, opcode: &RegisterPair)
        -> Result<ProgramCounterStep, ProcessError>;

    /// - `6XNN` - Const    - `Vx = NN`             - Sets `VX` to `NN`.
    fn load(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError>;

    /// - `7XNN` - Const    - `Vx += NN`            - Adds `NN` to `VX`. (Carry flag is not changed)
    fn add(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError>;

    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VY` is subtracted from `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - Stores the least significant bit of `VX` in `VF` and then shifts `VX` to the right by `1`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - Sets `VX` to `VY` minus `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - Stores the most significant bit of `VX` in `VF` and then shifts `VX` to the left by `1`.
    fn arithmetic(&mut self, opcode: &Arithmetic) -> Result<ProgramCounterStep, ProcessError>;

    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    fn skip_register_not_equal(
        &self,
        opcode: &RegisterPair,
    ) -> Result<ProgramCounterStep, ProcessError>;

    /// - `ANNN` - MEM      - `I = NNN`             - Sets `I` to the address `NNN`.
    fn set_index(&mut self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `BNNN` - Flow     - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn jump_offset(&self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `CXNN` - Rand     - `Vx=rand()&NN`        - Sets `VX` to a random byte masked with `NN`.
    fn random(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError>;

    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws the `8xN` sprite located at `I` at
    /// coordinate `(VX, VY)`. `VF` is set to `1` if any screen pixels are flipped from set to
    /// unset when the sprite is drawn, and to `0` if that doesn't happen.
    fn draw(&mut self, opcode: &Sprite) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn key(&self, opcode: &KeyCheck) -> Result<ProgramCounterStep, ProcessError>;

    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX0A` - KeyOp    - `Vx = get_key()`      - A key press is awaited, and then stored in `VX`.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` is not affected.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the glyph of the low nibble of `VX`.
    /// - `FX33` - BCD      - `set_BCD(Vx)`         - Stores the hundreds, tens and ones of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` (including `VX`) in memory starting at address `I`.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` (including `VX`) with values from memory starting at address `I`.
    fn misc(&mut self, opcode: &Misc) -> Result<(ProgramCounterStep, Operation), ProcessError>;
}

#[cfg(test)]
mod tests {
    use std::convert::TryInto;

    use super::*;

    #[test]
    fn test_tryfrom_opcode_simple() {
        let value: Opcode = 0x00E0;
        let conv: Result<Opcodes, _> = value.try_into();
        assert_eq!(conv, Ok(Opcodes::System(System::Clear)));
    }

    #[test]
    fn test_tryfrom_opcode_simple_fail() {
        let value: Opcode = 0x00E1;
        let conv: Result<Opcodes, _> = value.try_into();
        assert_eq!(conv, Err(OpcodeError::InvalidOpcode(0x00E1)));
    }

    #[test]
    fn test_tryfrom_opcode_multiple() {
        let arith = |ops: ArithmeticOp| -> Result<Opcodes, ()> {
            Ok(Opcodes::Arithmetic(Arithmetic { ops, x: 0x1, y: 0x2 }))
        };
        let misc = |ops: MiscOp| -> Result<Opcodes, ()> { Ok(Opcodes::Misc(Misc { ops, x: 0x0 })) };
        let tests = [
            (0x00E0, Ok(Opcodes::System(System::Clear))),
            (0x00EE, Ok(Opcodes::System(System::Return))),
            (0x00E1, Err(())),
            (0x0123, Err(())),
            (0x1919, Ok(Opcodes::Jump(Address { nnn: 0x919 }))),
            (0x2222, Ok(Opcodes::Call(Address { nnn: 0x222 }))),
            (
                0x3123,
                Ok(Opcodes::SkipEqual(RegisterConst { x: 0x1, nn: 0x23 })),
            ),
            (
                0x4123,
                Ok(Opcodes::SkipNotEqual(RegisterConst { x: 0x1, nn: 0x23 })),
            ),
            (
                0x5120,
                Ok(Opcodes::SkipRegisterEqual(RegisterPair { x: 0x1, y: 0x2 })),
            ),
            (0x5121, Err(())),
            (0x6123, Ok(Opcodes::Load(RegisterConst { x: 0x1, nn: 0x23 }))),
            (0x7123, Ok(Opcodes::Add(RegisterConst { x: 0x1, nn: 0x23 }))),
            (0x8120, arith(ArithmeticOp::Assign)),
            (0x8121, arith(ArithmeticOp::Or)),
            (0x8122, arith(ArithmeticOp::And)),
            (0x8123, arith(ArithmeticOp::Xor)),
            (0x8124, arith(ArithmeticOp::Add)),
            (0x8125, arith(ArithmeticOp::Sub)),
            (0x8126, arith(ArithmeticOp::ShiftRight)),
            (0x8127, arith(ArithmeticOp::SubReverse)),
            (0x812E, arith(ArithmeticOp::ShiftLeft)),
            (0x8128, Err(())),
            (
                0x9120,
                Ok(Opcodes::SkipRegisterNotEqual(RegisterPair { x: 0x1, y: 0x2 })),
            ),
            (0x9121, Err(())),
            (0xA222, Ok(Opcodes::SetIndex(Address { nnn: 0x222 }))),
            (0xB222, Ok(Opcodes::JumpOffset(Address { nnn: 0x222 }))),
            (0xC123, Ok(Opcodes::Random(RegisterConst { x: 0x1, nn: 0x23 }))),
            (0xD123, Ok(Opcodes::Draw(Sprite { x: 0x1, y: 0x2, n: 0x3 }))),
            (
                0xE19E,
                Ok(Opcodes::Key(KeyCheck {
                    ops: KeyOp::Pressed,
                    x: 0x1,
                })),
            ),
            (
                0xE1A1,
                Ok(Opcodes::Key(KeyCheck {
                    ops: KeyOp::NotPressed,
                    x: 0x1,
                })),
            ),
            (0xE111, Err(())),
            (0xF007, misc(MiscOp::GetDelayTimer)),
            (0xF00A, misc(MiscOp::AwaitKeyPress)),
            (0xF015, misc(MiscOp::SetDelayTimer)),
            (0xF018, misc(MiscOp::SetSoundTimer)),
            (0xF01E, misc(MiscOp::AddToIndex)),
            (0xF029, misc(MiscOp::SetIndexToGlyph)),
            (0xF033, misc(MiscOp::StoreBcd)),
            (0xF055, misc(MiscOp::StoreRegisters)),
            (0xF065, misc(MiscOp::LoadRegisters)),
            (0xF0AA, Err(())),
        ];
        for (value, res) in tests.iter().copied() {
            let conv: Result<Opcodes, _> = value.try_into();
            assert_eq!(
                conv,
                res.map_err(|_| OpcodeError::InvalidOpcode(value)),
                "decoding {:#06X}",
                value
            );
        }
    }

    #[test]
    fn test_mnemonics() {
        let tests: [(Opcode, &str); 12] = [
            (0x00E0, "CLS"),
            (0x00EE, "RET"),
            (0x1300, "JP 0x300"),
            (0x2ABC, "CALL 0xABC"),
            (0x3A0F, "SE VA, 0x0F"),
            (0x6123, "LD V1, 0x23"),
            (0x8AB4, "ADD VA, VB"),
            (0x8A06, "SHR VA"),
            (0xB120, "JP V0, 0x120"),
            (0xD015, "DRW V0, V1, 5"),
            (0xE3A1, "SKNP V3"),
            (0xF555, "LD [I], V5"),
        ];

        for (value, text) in tests.iter() {
            let opcode: Opcodes = (*value).try_into().expect("valid opcode");
            assert_eq!(&opcode.to_string(), text);
        }
    }

    #[test]
    fn test_program_counter_step_wraps() {
        assert_eq!(ProgramCounterStep::Next.apply(0xFFFE), 0x0000);
        assert_eq!(ProgramCounterStep::None.apply(0x0ABC), 0x0ABC);
    }
}
