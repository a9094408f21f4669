//! Architectural-state snapshot.
//!
//! Captures the comparison surface diffed against hardware RTL traces:
//! final PC, halt flag, registers r1-r7, and the sparse memory contents.
//! The snapshot serializes deterministically (ordered memory map) so two
//! runs of the same program produce byte-identical JSON.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::constants::NUM_REGS;
use crate::core::Cpu;

/// Snapshot of all externally observable simulator state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArchState {
    /// Final program counter.
    pub pc: u32,
    /// Whether the halt encoding retired.
    pub halted: bool,
    /// Registers r1-r7 in index order (r0 is architecturally zero).
    pub regs: [u16; NUM_REGS - 1],
    /// Sparse memory contents in address order.
    pub mem: BTreeMap<u16, u16>,
}

impl ArchState {
    /// Captures the current architectural state of `cpu`.
    pub fn capture(cpu: &Cpu) -> Self {
        Self {
            pc: cpu.pc,
            halted: cpu.halted,
            regs: cpu.regs.snapshot(),
            mem: cpu.mem.words().collect(),
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error on serialization failure.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
