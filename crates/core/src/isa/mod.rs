//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for the RiSC-16 opcodes, the instruction field
//! layout, the addressing-mode decoders, and the disassembler.
//!
//! # Formats
//!
//! * `RRR`: three register operands (ADD, NAND).
//! * `RRI`: two registers and a signed 7-bit immediate (ADDI, SW, LW, BEQ, JALR).
//! * `RI`: one register and an unsigned 10-bit immediate (LUI).

/// Addressing-mode views and immediate decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field masks and bit extraction utilities.
pub mod instruction;

/// RiSC-16 opcode constants.
pub mod opcodes;
