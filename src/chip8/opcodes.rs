use tinyvec::ArrayVec;

use super::ChipSet;
use crate::{
    definitions::{display, memory},
    opcode::{
        Address, Arithmetic, ArithmeticOp, ChipOpcodes, KeyCheck, KeyOp, Misc, MiscOp, Operation,
        ProgramCounterStep, RegisterConst, RegisterPair, Sprite, System,
    },
    ProcessError,
};

impl ChipOpcodes for ChipSet {
    fn system(&mut self, opcode: &System) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        match opcode {
            System::Clear => {
                self.display.clear();
                Ok((ProgramCounterStep::Next, Operation::Draw))
            }
            System::Return => {
                // the stack holds the address of the call itself
                let pc = self.stack.pop().map_err(|err| {
                    log::error!("return without a matching call: {}", err);
                    err
                })?;
                log::debug!("return to {:#05X}", pc);
                Ok((
                    ProgramCounterStep::Jump(pc.wrapping_add(memory::opcodes::SIZE)),
                    Operation::None,
                ))
            }
        }
    }

    fn jump(&self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError> {
        Ok(ProgramCounterStep::Jump(opcode.nnn))
    }

    fn call(&mut self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError> {
        let pc = self.registers.program_counter();
        self.stack.push(pc).map_err(|err| {
            log::error!("call to {:#05X} from {:#05X}: {}", opcode.nnn, pc, err);
            err
        })?;
        log::debug!("call {:#05X} from {:#05X}", opcode.nnn, pc);
        Ok(ProgramCounterStep::Jump(opcode.nnn))
    }

    fn skip_equal(&self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError> {
        let RegisterConst { x, nn } = *opcode;
        Ok(ProgramCounterStep::cond(self.registers.get(x) == nn))
    }

    fn skip_not_equal(&self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError> {
        let RegisterConst { x, nn } = *opcode;
        Ok(ProgramCounterStep::cond(self.registers.get(x) != nn))
    }

    fn skip_register_equal(
        &self,
        opcode: &RegisterPair,
    ) -> Result<ProgramCounterStep, ProcessError> {
        let RegisterPair { x, y } = *opcode;
        Ok(ProgramCounterStep::cond(
            self.registers.get(x) == self.registers.get(y),
        ))
    }

    fn load(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError> {
        let RegisterConst { x, nn } = *opcode;
        self.registers.set(x, nn);
        Ok(ProgramCounterStep::Next)
    }

    fn add(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError> {
        let RegisterConst { x, nn } = *opcode;
        // let VX overflow, but ignore carry
        self.registers.set(x, self.registers.get(x).wrapping_add(nn));
        Ok(ProgramCounterStep::Next)
    }

    fn arithmetic(&mut self, opcode: &Arithmetic) -> Result<ProgramCounterStep, ProcessError> {
        let Arithmetic { ops, x, y } = *opcode;
        let vx = self.registers.get(x);
        let vy = self.registers.get(y);

        // The flag is written after the result, so it wins if `X` is `F`.
        match ops {
            ArithmeticOp::Assign => self.registers.set(x, vy),
            ArithmeticOp::Or => self.registers.set(x, vx | vy),
            ArithmeticOp::And => self.registers.set(x, vx & vy),
            ArithmeticOp::Xor => self.registers.set(x, vx ^ vy),
            ArithmeticOp::Add => {
                let (res, carry) = vx.overflowing_add(vy);
                self.registers.set(x, res);
                self.registers.set_flag(carry);
            }
            ArithmeticOp::Sub => {
                let (res, borrow) = vx.overflowing_sub(vy);
                self.registers.set(x, res);
                self.registers.set_flag(!borrow);
            }
            ArithmeticOp::SubReverse => {
                let (res, borrow) = vy.overflowing_sub(vx);
                self.registers.set(x, res);
                self.registers.set_flag(!borrow);
            }
            ArithmeticOp::ShiftRight => {
                self.registers.set(x, vx >> 1);
                self.registers.set_flag(vx & 0x01 == 0x01);
            }
            ArithmeticOp::ShiftLeft => {
                const SHIFT_SIGNIFICANT: u8 = 7;
                self.registers.set(x, vx << 1);
                self.registers.set_flag((vx >> SHIFT_SIGNIFICANT) & 0x01 == 0x01);
            }
        }
        Ok(ProgramCounterStep::Next)
    }

    fn skip_register_not_equal(
        &self,
        opcode: &RegisterPair,
    ) -> Result<ProgramCounterStep, ProcessError> {
        let RegisterPair { x, y } = *opcode;
        Ok(ProgramCounterStep::cond(
            self.registers.get(x) != self.registers.get(y),
        ))
    }

    fn set_index(&mut self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError> {
        self.registers.set_index(opcode.nnn);
        Ok(ProgramCounterStep::Next)
    }

    fn jump_offset(&self, opcode: &Address) -> Result<ProgramCounterStep, ProcessError> {
        let v0 = self.registers.get(0) as u16;
        Ok(ProgramCounterStep::Jump(opcode.nnn + v0))
    }

    fn random(&mut self, opcode: &RegisterConst) -> Result<ProgramCounterStep, ProcessError> {
        let RegisterConst { x, nn } = *opcode;
        // using a fill bytes call here, as the trait RngCore does not
        // support random u8.
        let mut rand = [0u8; 1];
        self.rng.fill_bytes(&mut rand);
        self.registers.set(x, rand[0] & nn);
        Ok(ProgramCounterStep::Next)
    }

    fn draw(&mut self, opcode: &Sprite) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let Sprite { x, y, n } = *opcode;
        let index = self.registers.index();

        let rows: ArrayVec<[u8; display::sprite::MAX_HEIGHT]> = (0..n as u16)
            .map(|row| self.memory.read(index.wrapping_add(row)))
            .collect();

        let collision = self.display.draw(
            self.registers.get(x),
            self.registers.get(y),
            &rows,
            self.quirks.sprite_edge,
        );
        self.registers.set_flag(collision);

        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn key(&self, opcode: &KeyCheck) -> Result<ProgramCounterStep, ProcessError> {
        let KeyCheck { ops, x } = *opcode;
        // only the low nibble names a key
        let key = (self.registers.get(x) & 0x0F) as usize;
        let pressed = self.keypad.is_pressed(key).unwrap_or(false);

        let step = match ops {
            KeyOp::Pressed => ProgramCounterStep::cond(pressed),
            KeyOp::NotPressed => ProgramCounterStep::cond(!pressed),
        };
        Ok(step)
    }

    fn misc(&mut self, opcode: &Misc) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let Misc { ops, x } = *opcode;
        let index = self.registers.index();

        match ops {
            MiscOp::GetDelayTimer => {
                self.registers.set(x, self.timers.delay());
            }
            MiscOp::AwaitKeyPress => match self.keypad.first_pressed() {
                Some(key) => self.registers.set(x, key),
                // stay on this opcode until a key is pressed
                None => return Ok((ProgramCounterStep::None, Operation::Wait)),
            },
            MiscOp::SetDelayTimer => {
                self.timers.set_delay(self.registers.get(x));
            }
            MiscOp::SetSoundTimer => {
                self.timers.set_sound(self.registers.get(x));
            }
            MiscOp::AddToIndex => {
                let vx = self.registers.get(x) as u16;
                self.registers.set_index(index.wrapping_add(vx));
            }
            MiscOp::SetIndexToGlyph => {
                let glyph = (self.registers.get(x) & 0x0F) as usize;
                let location = display::fontset::LOCATION + glyph * display::fontset::GLYPH_SIZE;
                self.registers.set_index(location as u16);
            }
            MiscOp::StoreBcd => {
                let r = self.registers.get(x);
                self.memory.write(index, r / 100); // 246u8 / 100 => 2
                self.memory.write(index.wrapping_add(1), r / 10 % 10); // 246u8 / 10 => 24 % 10 => 4
                self.memory.write(index.wrapping_add(2), r % 10); // 246u8 % 10 => 6
            }
            MiscOp::StoreRegisters => {
                for (offset, value) in self.registers.up_to(x).iter().enumerate() {
                    self.memory.write(index.wrapping_add(offset as u16), *value);
                }
                self.advance_index_after_transfer(x);
            }
            MiscOp::LoadRegisters => {
                for offset in 0..=x {
                    let value = self.memory.read(index.wrapping_add(offset as u16));
                    self.registers.set(offset, value);
                }
                self.advance_index_after_transfer(x);
            }
        }
        Ok((ProgramCounterStep::Next, Operation::None))
    }
}

impl ChipSet {
    fn advance_index_after_transfer(&mut self, x: usize) {
        if self.quirks.bulk_transfer_advances_index {
            let index = self.registers.index();
            self.registers.set_index(index.wrapping_add(x as u16 + 1));
        }
    }
}
