//! High-level, ergonomic library API: transform an in-memory string or a
//! whole file, with output-path resolution matching the CLI. Prefer these
//! entrypoints over the low-level `core`/`io` modules when embedding the
//! cipher in another application.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::cipher::transform_unit;
use crate::core::params::CipherParams;
use crate::error::Result;
use crate::io::pipeline::transform_file;
use crate::types::Mode;

/// Transform a single in-memory string, returning the shifted bytes.
pub fn transform_text(text: &str, shift: i32, mode: Mode) -> Result<Vec<u8>> {
    transform_unit(text.as_bytes(), shift, mode)
}

/// Output path used when none is given: the full input path with `_encr`
/// (encrypt) or `_decr` (decrypt) appended, extension included.
pub fn default_output_path(input: &Path, mode: Mode) -> PathBuf {
    let mut os: OsString = input.as_os_str().to_os_string();
    os.push(mode.output_suffix());
    PathBuf::from(os)
}

/// Transform a file and return the path that was written.
///
/// An explicit `output` wins; otherwise the path is derived with
/// [`default_output_path`]. The input file is opened before the output is
/// created (see [`transform_file`]).
pub fn transform_file_to_path(
    input: &Path,
    output: Option<&Path>,
    params: &CipherParams,
) -> Result<PathBuf> {
    let resolved = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, params.mode),
    };
    info!("{}ing {:?} -> {:?}", params.mode, input, resolved);
    transform_file(input, &resolved, params.shift, params.mode)?;
    Ok(resolved)
}
