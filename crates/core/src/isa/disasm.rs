//! Instruction Disassembler for RiSC-16.
//!
//! Converts a 16-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! Pseudo-mnemonic resolution (`nop`, `lli`, `halt`) is presentation-layer
//! only: it relabels specific operand patterns of real opcodes for
//! readability. The execution engine never consults this module; the one
//! pattern with real semantics (the JALR halt encoding) is detected by an
//! explicit operand predicate inside the JALR handler.
//!
//! # Usage
//!
//! ```
//! use r16sim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x0000), "nop");
//! assert_eq!(disassemble(0x3001), "addi r4, r0, 1");
//! ```

use crate::isa::decode::{decode_ri, decode_rri, decode_rrr};
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// Register names for r0-r7.
const REG_NAMES: [&str; 8] = ["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7"];

/// Returns the name for a register index.
#[inline]
fn reg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("r?")
}

/// Disassembles a 16-bit RiSC-16 instruction into a human-readable string.
///
/// Returns a mnemonic like `"add r1, r2, r3"`, substituting the pseudo
/// forms `nop`, `lli`, and `halt` where their operand patterns match.
///
/// # Arguments
///
/// * `word` - The raw 16-bit instruction encoding.
pub fn disassemble(word: u16) -> String {
    match word.opcode() {
        // ── RRR arithmetic ────────────────────────────────
        opcodes::OP_ADD => {
            let i = decode_rrr(word);
            if i.reg_a == 0 && i.reg_b == 0 && i.reg_c == 0 {
                "nop".to_string()
            } else {
                format!("add {}, {}, {}", reg(i.reg_a), reg(i.reg_b), reg(i.reg_c))
            }
        }
        opcodes::OP_NAND => {
            let i = decode_rrr(word);
            format!("nand {}, {}, {}", reg(i.reg_a), reg(i.reg_b), reg(i.reg_c))
        }

        // ── RRI arithmetic ────────────────────────────────
        opcodes::OP_ADDI => {
            let i = decode_rri(word);
            if i.reg_a == i.reg_b && i.imm > 0 {
                format!("lli {}, {}", reg(i.reg_a), i.imm)
            } else {
                format!("addi {}, {}, {}", reg(i.reg_a), reg(i.reg_b), i.imm)
            }
        }

        // ── Upper immediate ───────────────────────────────
        opcodes::OP_LUI => {
            let i = decode_ri(word);
            format!("lui {}, {}", reg(i.reg_a), i.imm)
        }

        // ── Loads and stores ──────────────────────────────
        opcodes::OP_SW => {
            let i = decode_rri(word);
            format!("sw {}, {}, {}", reg(i.reg_a), reg(i.reg_b), i.imm)
        }
        opcodes::OP_LW => {
            let i = decode_rri(word);
            format!("lw {}, {}, {}", reg(i.reg_a), reg(i.reg_b), i.imm)
        }

        // ── Control flow ──────────────────────────────────
        opcodes::OP_BEQ => {
            let i = decode_rri(word);
            format!("beq {}, {}, {}", reg(i.reg_a), reg(i.reg_b), i.imm)
        }
        opcodes::OP_JALR => {
            let i = decode_rri(word);
            if i.reg_a == 0 && i.reg_b == 0 {
                "halt".to_string()
            } else {
                format!("jalr {}, {}", reg(i.reg_a), reg(i.reg_b))
            }
        }

        // All eight 3-bit opcodes are matched above.
        _ => "unknown".to_string(),
    }
}
