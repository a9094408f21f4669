//! Instruction semantics: the single-step algorithm and opcode handlers.
//!
//! This module implements the fetch-decode-execute step of the golden
//! model. It performs the following:
//! 1. **Fetch:** Reads the word at the current PC after the overflow check.
//! 2. **Dispatch:** An exhaustive match from the 3-bit opcode to its handler.
//! 3. **Retire:** Each handler applies its full state transition before the
//!    next fetch; all offset arithmetic uses the pre-increment PC.
//!
//! Correctness here is binary: every masking, sign-extension, and ordering
//! detail below is part of the comparison surface against hardware RTL.

use tracing::debug;

use super::Cpu;
use crate::common::{PC_MAX, SimError};
use crate::isa::decode::{decode_ri, decode_rri, decode_rrr};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// Outcome of executing a single instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction retired and architectural state advanced.
    Executed,
    /// The halt encoding was reached; no state changed, the PC did not move.
    Halted,
}

impl Cpu {
    /// Executes a single instruction at the current PC.
    ///
    /// # Errors
    ///
    /// * [`SimError::ProgramCounterOverflow`] if the PC left the 16-bit
    ///   range before this fetch.
    /// * [`SimError::UnsupportedOpcode`] if dispatch finds no handler
    ///   (defensive; unreachable with all eight opcodes implemented).
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        if self.pc > PC_MAX {
            return Err(SimError::ProgramCounterOverflow { pc: self.pc });
        }
        let pc = self.pc as u16;
        let word = self.mem.read(pc);
        debug!("step: pc={pc:#06x} word={word:#06x} inst={}", disassemble(word));

        let outcome = match word.opcode() {
            opcodes::OP_ADD => self.exec_add(word),
            opcodes::OP_ADDI => self.exec_addi(word),
            opcodes::OP_NAND => self.exec_nand(word),
            opcodes::OP_LUI => self.exec_lui(word),
            opcodes::OP_SW => self.exec_sw(word),
            opcodes::OP_LW => self.exec_lw(word),
            opcodes::OP_BEQ => self.exec_beq(word),
            opcodes::OP_JALR => self.exec_jalr(word),
            opcode => return Err(SimError::UnsupportedOpcode { opcode, pc }),
        };

        if outcome == StepOutcome::Executed {
            self.stats.record(word);
        }
        Ok(outcome)
    }

    /// ADD: `reg[A] = reg[B] + reg[C]` mod 2^16.
    fn exec_add(&mut self, word: u16) -> StepOutcome {
        let inst = decode_rrr(word);
        let sum = self
            .regs
            .read(inst.reg_b)
            .wrapping_add(self.regs.read(inst.reg_c));
        self.regs.write(inst.reg_a, sum);
        self.pc += 1;
        StepOutcome::Executed
    }

    /// ADDI: `reg[A] = reg[B] + imm7` mod 2^16.
    fn exec_addi(&mut self, word: u16) -> StepOutcome {
        let inst = decode_rri(word);
        let sum = self.regs.read(inst.reg_b).wrapping_add_signed(inst.imm);
        self.regs.write(inst.reg_a, sum);
        self.pc += 1;
        StepOutcome::Executed
    }

    /// NAND: `reg[A] = !(reg[B] & reg[C])`.
    fn exec_nand(&mut self, word: u16) -> StepOutcome {
        let inst = decode_rrr(word);
        let val = !(self.regs.read(inst.reg_b) & self.regs.read(inst.reg_c));
        self.regs.write(inst.reg_a, val);
        self.pc += 1;
        StepOutcome::Executed
    }

    /// LUI: `reg[A] = imm10 << 6` (upper 10 bits loaded, low 6 bits zero).
    fn exec_lui(&mut self, word: u16) -> StepOutcome {
        let inst = decode_ri(word);
        self.regs.write(inst.reg_a, inst.imm << 6);
        self.pc += 1;
        StepOutcome::Executed
    }

    /// SW: `mem[reg[B] + imm7] = reg[A]`.
    fn exec_sw(&mut self, word: u16) -> StepOutcome {
        let inst = decode_rri(word);
        let addr = self.regs.read(inst.reg_b).wrapping_add_signed(inst.imm);
        self.mem.write(addr, self.regs.read(inst.reg_a));
        self.pc += 1;
        StepOutcome::Executed
    }

    /// LW: `reg[A] = mem[reg[B] + imm7]`.
    fn exec_lw(&mut self, word: u16) -> StepOutcome {
        let inst = decode_rri(word);
        let addr = self.regs.read(inst.reg_b).wrapping_add_signed(inst.imm);
        let val = self.mem.read(addr);
        self.regs.write(inst.reg_a, val);
        self.pc += 1;
        StepOutcome::Executed
    }

    /// BEQ: if `reg[A] == reg[B]`, `PC += imm7` before the default advance.
    ///
    /// A taken branch lands at `PC_old + imm7 + 1`. The offset is applied to
    /// the wide PC without clamping; a target outside the 16-bit range
    /// surfaces as an overflow error at the next fetch.
    fn exec_beq(&mut self, word: u16) -> StepOutcome {
        let inst = decode_rri(word);
        if self.regs.read(inst.reg_a) == self.regs.read(inst.reg_b) {
            self.pc = self.pc.wrapping_add_signed(i32::from(inst.imm));
        }
        self.pc = self.pc.wrapping_add(1);
        StepOutcome::Executed
    }

    /// JALR: link then jump, or halt on the `regA == regB == 0` encoding.
    ///
    /// The link write precedes the target read, so `jalr r, r` jumps to the
    /// freshly written link value.
    fn exec_jalr(&mut self, word: u16) -> StepOutcome {
        let inst = decode_rri(word);
        if inst.reg_a == 0 && inst.reg_b == 0 {
            // Halt is this operand pattern of JALR, not a ninth opcode.
            self.halted = true;
            return StepOutcome::Halted;
        }
        self.regs.write(inst.reg_a, (self.pc + 1) as u16);
        self.pc = u32::from(self.regs.read(inst.reg_b));
        StepOutcome::Executed
    }
}
