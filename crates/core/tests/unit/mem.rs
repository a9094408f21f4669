//! # Memory Model Tests
//!
//! Verifies the sparse word store: default-zero reads, the sparse-zero
//! equivalence (an explicit zero write is indistinguishable from an address
//! never written), and bulk loading from a program image.

use proptest::prelude::*;
use r16sim_core::mem::{Memory, ProgramImage};

/// An address never written reads as zero.
#[test]
fn default_reads_zero() {
    let mem = Memory::new();
    assert_eq!(mem.read(0x0000), 0);
    assert_eq!(mem.read(0xFFFF), 0);
}

/// A written word reads back.
#[test]
fn write_and_read() {
    let mut mem = Memory::new();
    mem.write(0x0042, 0xBEEF);
    assert_eq!(mem.read(0x0042), 0xBEEF);
}

/// Writing zero removes the entry instead of materializing it.
#[test]
fn zero_write_is_not_materialized() {
    let mut mem = Memory::new();
    mem.write(0x0010, 0);
    assert!(mem.is_empty());
    assert_eq!(mem.read(0x0010), 0);
}

/// Overwriting a word with zero frees the slot.
#[test]
fn zero_write_removes_existing_entry() {
    let mut mem = Memory::new();
    mem.write(0x0010, 0x1234);
    assert_eq!(mem.len(), 1);
    mem.write(0x0010, 0);
    assert!(mem.is_empty());
    assert_eq!(mem.read(0x0010), 0);
}

/// Loading an image replaces the whole store.
#[test]
fn load_replaces_store() {
    let mut image = ProgramImage::new();
    image.set(0, 0x1111);
    image.set(2, 0x2222);

    let mut mem = Memory::new();
    mem.write(0x0500, 0xAAAA);
    mem.load(&image);

    assert_eq!(mem.read(0), 0x1111);
    assert_eq!(mem.read(1), 0);
    assert_eq!(mem.read(2), 0x2222);
    assert_eq!(mem.read(0x0500), 0, "pre-load contents must be gone");
    assert_eq!(mem.len(), 2);
}

/// Iteration is in address order, making dumps deterministic.
#[test]
fn words_iterate_in_address_order() {
    let mut mem = Memory::new();
    mem.write(0x0300, 3);
    mem.write(0x0100, 1);
    mem.write(0x0200, 2);
    let words: Vec<(u16, u16)> = mem.words().collect();
    assert_eq!(words, vec![(0x0100, 1), (0x0200, 2), (0x0300, 3)]);
}

/// The image type itself never materializes zero words.
#[test]
fn image_skips_zero_words() {
    let mut image = ProgramImage::new();
    image.set(0, 0);
    image.set(1, 0x5555);
    assert_eq!(image.len(), 1);
}

proptest! {
    /// Write-then-read returns the written word at any address.
    #[test]
    fn write_read_roundtrip(addr in any::<u16>(), val in any::<u16>()) {
        let mut mem = Memory::new();
        mem.write(addr, val);
        prop_assert_eq!(mem.read(addr), val);
    }

    /// A zero write leaves memory observably identical to a fresh one.
    #[test]
    fn sparse_zero_equivalence(addr in any::<u16>(), probe in any::<u16>()) {
        let mut written = Memory::new();
        written.write(addr, 0);
        let fresh = Memory::new();
        prop_assert_eq!(written.read(probe), fresh.read(probe));
        prop_assert_eq!(written.len(), fresh.len());
    }
}
