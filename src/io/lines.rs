//! Line-unit reading that keeps terminators intact.
//!
//! The file pipeline must write every line back with exactly the
//! terminator it came with, so units are read with `read_until` rather
//! than `BufRead::lines` (which drops terminators and insists on UTF-8).

use std::io::BufRead;

/// Read the next line unit, terminator included, into `buf`.
///
/// `buf` is cleared first; a unit is everything up to and including the
/// next `\n`, or the remaining bytes of the stream if it ends without one.
/// Returns `false` at end of stream.
pub fn read_unit<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<bool> {
    buf.clear();
    let n = reader.read_until(b'\n', buf)?;
    Ok(n > 0)
}

/// Split a unit into its body and trailing terminator.
///
/// `\r\n` and `\n` each count as one terminator; a unit without one
/// yields an empty terminator slice.
pub fn split_terminator(unit: &[u8]) -> (&[u8], &[u8]) {
    if unit.ends_with(b"\r\n") {
        unit.split_at(unit.len() - 2)
    } else if unit.ends_with(b"\n") {
        unit.split_at(unit.len() - 1)
    } else {
        (unit, &[])
    }
}
