//! Simulated data/instruction memory.
//!
//! This module implements the 16-bit-addressed, 16-bit-word memory model.
//! It provides:
//! 1. **Sparse Storage:** Only nonzero words are materialized; absent
//!    addresses read as zero.
//! 2. **Bulk Load:** Replacing the whole store from a parsed program image.
//! 3. **Observability:** Deterministic iteration for dumps and snapshots.

use std::collections::BTreeMap;

use tracing::trace;

/// A program image: the address→word mapping produced by the loader.
///
/// Addresses run from 0 upward, one per image line; zero-valued words are
/// never materialized, matching the sparse representation of [`Memory`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramImage {
    words: BTreeMap<u16, u16>,
}

impl ProgramImage {
    /// Creates an empty image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `word` at `addr`. Zero words are skipped.
    pub fn set(&mut self, addr: u16, word: u16) {
        if word != 0 {
            let _ = self.words.insert(addr, word);
        }
    }

    /// Iterates over the materialized (address, word) pairs in address order.
    pub fn words(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.words.iter().map(|(&addr, &word)| (addr, word))
    }

    /// Number of materialized (nonzero) words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the image holds no nonzero words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Sparse 16-bit-addressed memory of 16-bit words.
///
/// An address that was never written, or whose last write was zero, reads
/// back as zero; the two cases are observably identical. Using `u16` for
/// both addresses and values makes the 16-bit masking invariant inherent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    words: BTreeMap<u16, u16>,
}

impl Memory {
    /// Creates an empty memory; every address reads as zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the word at `addr`, or 0 if the address is not materialized.
    ///
    /// Never fails.
    pub fn read(&self, addr: u16) -> u16 {
        let val = self.words.get(&addr).copied().unwrap_or(0);
        trace!("mem read: addr={addr:#06x} val={val:#06x}");
        val
    }

    /// Writes `val` at `addr`.
    ///
    /// Writing zero removes any existing entry instead of storing it, so an
    /// explicit-zero address stays indistinguishable from an absent one.
    pub fn write(&mut self, addr: u16, val: u16) {
        trace!("mem write: addr={addr:#06x} val={val:#06x}");
        if val == 0 {
            let _ = self.words.remove(&addr);
        } else {
            let _ = self.words.insert(addr, val);
        }
    }

    /// Replaces the entire store with the given program image.
    ///
    /// Equivalent to resetting memory to the initial program state.
    pub fn load(&mut self, image: &ProgramImage) {
        self.words = image.words().collect();
    }

    /// Iterates over the materialized (address, word) pairs in address order.
    ///
    /// This is the memory half of the comparison surface diffed against
    /// hardware RTL traces.
    pub fn words(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.words.iter().map(|(&addr, &word)| (addr, word))
    }

    /// Number of materialized (nonzero) words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no address is materialized.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
