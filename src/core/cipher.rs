//! The shift transform: additive byte cipher with well-defined wraparound.
//!
//! Every byte is shifted by the same offset. The shift is reduced modulo
//! 256 on the unsigned interpretation, so `shift`, `shift + 256`, and
//! `shift - 256` produce identical output, and negative shifts are valid.
//! This replaces the unguarded native signed-char arithmetic of older
//! Caesar tools with one documented rule.

use crate::error::{Error, Result};
use crate::types::Mode;

/// Maximum accepted length of a single text unit (a line or a literal
/// argument), in bytes. Buffers grow dynamically up to this cap; a longer
/// unit fails the whole invocation with [`Error::InputTooLong`] rather
/// than being truncated.
pub const MAX_UNIT_BYTES: usize = 1024 * 1024;

/// Reduce an arbitrary signed shift to its effective byte offset.
fn effective_offset(shift: i32) -> u8 {
    shift.rem_euclid(256) as u8
}

/// Apply the Caesar shift to `input`, returning a freshly allocated buffer.
///
/// Encrypt adds the offset to each byte, decrypt subtracts it; both wrap
/// modulo 256, so `shift_bytes(shift_bytes(s, k, Encrypt), k, Decrypt)`
/// recovers `s` for every `s` and `k`.
pub fn shift_bytes(input: &[u8], shift: i32, mode: Mode) -> Vec<u8> {
    let k = effective_offset(shift);
    match mode {
        Mode::Encrypt => input.iter().map(|b| b.wrapping_add(k)).collect(),
        Mode::Decrypt => input.iter().map(|b| b.wrapping_sub(k)).collect(),
    }
}

/// Length-checked entry point used by the pipelines.
///
/// Rejects units longer than [`MAX_UNIT_BYTES`]; otherwise identical to
/// [`shift_bytes`].
pub fn transform_unit(input: &[u8], shift: i32, mode: Mode) -> Result<Vec<u8>> {
    if input.len() > MAX_UNIT_BYTES {
        return Err(Error::InputTooLong {
            len: input.len(),
            max: MAX_UNIT_BYTES,
        });
    }
    Ok(shift_bytes(input, shift, mode))
}
