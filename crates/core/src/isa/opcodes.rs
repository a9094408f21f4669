//! RiSC-16 Opcodes.
//!
//! Defines the major opcodes (bits 15-13) for the RiSC-16 instruction set.
//! All eight values of the 3-bit field are assigned; there is no reserved
//! encoding space, so every 16-bit word decodes to exactly one opcode.

/// Add register-register (RRR format).
pub const OP_ADD: u16 = 0b000;

/// Add immediate (RRI format, signed 7-bit immediate).
pub const OP_ADDI: u16 = 0b001;

/// Bitwise NAND register-register (RRR format).
pub const OP_NAND: u16 = 0b010;

/// Load upper immediate (RI format, unsigned 10-bit immediate).
pub const OP_LUI: u16 = 0b011;

/// Store word (RRI format).
pub const OP_SW: u16 = 0b100;

/// Load word (RRI format).
pub const OP_LW: u16 = 0b101;

/// Branch if equal (RRI format).
pub const OP_BEQ: u16 = 0b110;

/// Jump and link register (RRI format). The `regA == regB == 0` operand
/// pattern is the architected halt encoding.
pub const OP_JALR: u16 = 0b111;
