//! # Register File Tests
//!
//! Unit tests for the `RegisterFile` structure, ensuring the 8 general
//! registers behave per the RiSC-16 architectural rules: all registers
//! start at zero, `r0` is hardwired to zero, and `r1`-`r7` hold independent
//! 16-bit values.

use proptest::prelude::*;
use r16sim_core::common::RegisterFile;

/// Ensures that all registers are initialized to zero upon creation.
#[test]
fn initial_values_are_zero() {
    let regs = RegisterFile::new();
    for i in 0..8 {
        assert_eq!(regs.read(i), 0, "r{} should be 0 initially", i);
    }
}

/// Verifies that a value written to a register can be correctly read back.
#[test]
fn write_and_read() {
    let mut regs = RegisterFile::new();
    regs.write(1, 42);
    assert_eq!(regs.read(1), 42);
}

/// Ensures that register `r0` remains zero regardless of any values written
/// to it.
#[test]
fn r0_always_zero() {
    let mut regs = RegisterFile::new();
    regs.write(0, 0xBEEF);
    assert_eq!(regs.read(0), 0, "r0 must always read as 0");
}

/// Verifies that registers `r1`-`r7` hold independent values simultaneously
/// while `r0` stays zero.
#[test]
fn write_all_registers() {
    let mut regs = RegisterFile::new();
    for i in 0..8 {
        regs.write(i, i as u16 * 100);
    }
    assert_eq!(regs.read(0), 0, "r0 must remain 0");
    for i in 1..8 {
        assert_eq!(regs.read(i), i as u16 * 100);
    }
}

/// Verifies that writing a new value to a register overwrites the previous
/// value.
#[test]
fn overwrite() {
    let mut regs = RegisterFile::new();
    regs.write(5, 100);
    assert_eq!(regs.read(5), 100);
    regs.write(5, 200);
    assert_eq!(regs.read(5), 200);
}

/// Verifies that registers can store the maximum 16-bit value.
#[test]
fn max_value() {
    let mut regs = RegisterFile::new();
    regs.write(7, u16::MAX);
    assert_eq!(regs.read(7), u16::MAX);
}

/// Verifies that reset returns every mutable register to zero.
#[test]
fn reset_clears_all() {
    let mut regs = RegisterFile::new();
    for i in 1..8 {
        regs.write(i, 0xAAAA);
    }
    regs.reset();
    for i in 0..8 {
        assert_eq!(regs.read(i), 0);
    }
}

/// Verifies that the snapshot exposes `r1`-`r7` in index order.
#[test]
fn snapshot_is_r1_through_r7() {
    let mut regs = RegisterFile::new();
    for i in 1..8 {
        regs.write(i, i as u16);
    }
    assert_eq!(regs.snapshot(), [1, 2, 3, 4, 5, 6, 7]);
}

proptest! {
    /// Any 16-bit value round-trips through any mutable register.
    #[test]
    fn mutable_register_roundtrip(reg in 1usize..8, val in any::<u16>()) {
        let mut regs = RegisterFile::new();
        regs.write(reg, val);
        prop_assert_eq!(regs.read(reg), val);
    }

    /// No value ever becomes observable through `r0`.
    #[test]
    fn zero_register_discards_writes(val in any::<u16>()) {
        let mut regs = RegisterFile::new();
        regs.write(0, val);
        prop_assert_eq!(regs.read(0), 0);
    }
}
