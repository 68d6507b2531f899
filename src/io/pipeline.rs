//! Line pipelines driving the shift transform over streams and files.
//!
//! Two flavours with different terminator rules:
//! - interactive ([`transform_lines`]): one trailing terminator is stripped
//!   per line and each result is emitted with a plain `\n`;
//! - file ([`transform_stream`]): the line body is transformed and the
//!   original terminator bytes are written through unchanged, so the
//!   output file keeps the input's exact line structure.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::core::cipher::transform_unit;
use crate::error::{Error, Result};
use crate::io::lines::{read_unit, split_terminator};
use crate::types::Mode;

/// Interactive pipeline: read lines until end of stream, strip exactly one
/// trailing terminator, transform, print the result followed by a newline.
pub fn transform_lines<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    shift: i32,
    mode: Mode,
) -> Result<()> {
    let mut unit = Vec::new();
    while read_unit(input, &mut unit)? {
        let (body, _) = split_terminator(&unit);
        let transformed = transform_unit(body, shift, mode)?;
        output.write_all(&transformed)?;
        output.write_all(b"\n")?;
    }
    output.flush()?;
    Ok(())
}

/// File pipeline: transform each line body, preserving terminators.
pub fn transform_stream<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    shift: i32,
    mode: Mode,
) -> Result<()> {
    let mut unit = Vec::new();
    let mut units = 0u64;
    while read_unit(input, &mut unit)? {
        let (body, term) = split_terminator(&unit);
        let transformed = transform_unit(body, shift, mode)?;
        output.write_all(&transformed)?;
        output.write_all(term)?;
        units += 1;
    }
    output.flush()?;
    debug!("transformed {} line units", units);
    Ok(())
}

/// Transform `input_path` into `output_path`.
///
/// The input is opened before the output is created, so an unreadable
/// input never leaves an empty output file behind. An existing output
/// file is truncated. Both handles close on every exit path.
pub fn transform_file(input_path: &Path, output_path: &Path, shift: i32, mode: Mode) -> Result<()> {
    let in_file = File::open(input_path).map_err(|source| Error::FileOpen {
        path: input_path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(in_file);
    let mut writer = BufWriter::new(File::create(output_path)?);
    transform_stream(&mut reader, &mut writer, shift, mode)
}
