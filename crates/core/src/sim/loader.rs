//! Program-image loader.
//!
//! This module parses the text program format into a [`ProgramImage`]. It
//! performs:
//! 1. **Parsing:** One hexadecimal 16-bit word per line, loaded from
//!    address 0 upward; no `0x` prefix, surrounding whitespace ignored.
//! 2. **Sparsity:** Zero-valued lines advance the address without
//!    materializing an entry.
//! 3. **Validation:** Non-hex lines, words wider than 16 bits, and images
//!    larger than the address space are fatal load-time errors, reported
//!    before any execution begins.

use std::fs;
use std::path::Path;

use crate::common::SimError;
use crate::mem::ProgramImage;

/// Parses program text into an image.
///
/// # Errors
///
/// * [`SimError::MalformedProgramImage`] for a line that is not a 16-bit
///   hexadecimal word, with its 1-based line number.
/// * [`SimError::ImageTooLarge`] when the line count exceeds the 16-bit
///   address space.
pub fn parse_image(text: &str) -> Result<ProgramImage, SimError> {
    let mut image = ProgramImage::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        let word = u16::from_str_radix(trimmed, 16).map_err(|_| {
            SimError::MalformedProgramImage {
                line: idx + 1,
                text: trimmed.to_string(),
            }
        })?;
        let Ok(addr) = u16::try_from(idx) else {
            return Err(SimError::ImageTooLarge {
                words: text.lines().count(),
            });
        };
        image.set(addr, word);
    }
    Ok(image)
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// * [`SimError::ImageRead`] if the file cannot be read.
/// * Any error of [`parse_image`].
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ProgramImage, SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::ImageRead {
        path: path.display().to_string(),
        source,
    })?;
    parse_image(&text)
}
