//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the RiSC-16 simulator. It
//! provides:
//! 1. **Step counting:** Total instructions retired.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Elapsed time:** Wall-clock duration of the run for throughput numbers.

use std::time::Instant;

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// Execution statistics for a simulation run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions retired.
    pub steps_retired: u64,
    /// Count of ALU instructions retired (ADD, ADDI, NAND, LUI).
    pub inst_alu: u64,
    /// Count of load instructions retired (LW).
    pub inst_load: u64,
    /// Count of store instructions retired (SW).
    pub inst_store: u64,
    /// Count of branch instructions retired (BEQ).
    pub inst_branch: u64,
    /// Count of jump instructions retired (JALR).
    pub inst_jump: u64,
}

impl SimStats {
    /// Records one retired instruction, classifying it by opcode.
    ///
    /// The halt encoding never retires (it changes no architectural state),
    /// so it is never recorded.
    pub fn record(&mut self, word: u16) {
        self.steps_retired += 1;
        match word.opcode() {
            opcodes::OP_LW => self.inst_load += 1,
            opcodes::OP_SW => self.inst_store += 1,
            opcodes::OP_BEQ => self.inst_branch += 1,
            opcodes::OP_JALR => self.inst_jump += 1,
            _ => self.inst_alu += 1,
        }
    }

    /// Resets all counters and restarts the elapsed-time clock.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Prints a summary of the run to stdout.
    pub fn print(&self) {
        let secs = self.start_time.elapsed().as_secs_f64();
        println!("Steps retired: {}", self.steps_retired);
        println!(
            "  alu: {}  load: {}  store: {}  branch: {}  jump: {}",
            self.inst_alu, self.inst_load, self.inst_store, self.inst_branch, self.inst_jump
        );
        if secs > 0.0 {
            println!(
                "Elapsed: {:.3}s ({:.0} steps/s)",
                secs,
                self.steps_retired as f64 / secs
            );
        }
    }
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
        }
    }
}
