//! Simulation error definitions.
//!
//! This module defines the fatal error taxonomy for the simulator. There are
//! no retries and no degraded modes: a golden model is only useful when its
//! state is bit-exact, so any of these conditions aborts the run and is
//! surfaced to the caller unchanged.

use std::io;

use thiserror::Error;

/// Fatal simulation errors.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program counter left the 16-bit addressable range before a fetch.
    ///
    /// Real hardware would wrap or fault here; the golden model treats it as
    /// a runaway-program signal and aborts instead of wrapping silently. A
    /// branch that would move the PC below zero surfaces through the same
    /// check, because the wrapped wide value also exceeds the limit.
    #[error("program counter overflow: {pc:#x} exceeds the 16-bit range")]
    ProgramCounterOverflow {
        /// The out-of-range program counter value.
        pc: u32,
    },

    /// A decoded opcode had no execution handler.
    ///
    /// All eight 3-bit opcodes are implemented, so this is a defensive
    /// invariant check that should be unreachable.
    #[error("unsupported opcode {opcode:#05b} at pc {pc:#06x}")]
    UnsupportedOpcode {
        /// The 3-bit opcode value that failed to dispatch.
        opcode: u16,
        /// The program counter of the offending fetch.
        pc: u16,
    },

    /// A program image line was not a 16-bit hexadecimal word.
    #[error("malformed program image at line {line}: {text:?}")]
    MalformedProgramImage {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line text, trimmed.
        text: String,
    },

    /// The program image holds more words than the 16-bit address space.
    #[error("program image exceeds the 16-bit address space ({words} words)")]
    ImageTooLarge {
        /// Number of words in the image.
        words: usize,
    },

    /// The program image file could not be read.
    #[error("failed to read program image {path:?}")]
    ImageRead {
        /// Path of the image file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
