#![doc = r#"
caesar — a classical Caesar (additive byte shift) cipher for strings,
streams, and files.

This crate provides a typed API for shifting every byte of a text unit by a
fixed offset, the transform behind the `caesar` command-line tool. It is a
toy cipher with exact, documented wraparound semantics, not a secure one.

Semantics
---------
The shift is reduced modulo 256 on the unsigned byte interpretation, so any
`i32` shift is valid, negative shifts included, and `shift + 256` is always
equivalent to `shift`. Decrypting applies the negated offset, which makes
encrypt-then-decrypt an exact round trip for arbitrary bytes.

Quick start: transform a string
-------------------------------
```rust
use caesar::{transform_text, Mode};

fn main() -> caesar::Result<()> {
    let shifted = transform_text("Hello", 3, Mode::Encrypt)?;
    assert_eq!(shifted, b"Khoor");

    let back = caesar::shift_bytes(&shifted, 3, Mode::Decrypt);
    assert_eq!(back, b"Hello");
    Ok(())
}
```

Transform a file
----------------
```rust,no_run
use std::path::Path;
use caesar::{transform_file_to_path, CipherParams, Mode};

fn main() -> caesar::Result<()> {
    let params = CipherParams { mode: Mode::Encrypt, shift: 13 };

    // No explicit output path: writes `notes.txt_encr` next to the input
    // and returns that path.
    let written = transform_file_to_path(Path::new("notes.txt"), None, &params)?;
    println!("wrote {}", written.display());
    Ok(())
}
```

Streaming over readers and writers
----------------------------------
```rust
use std::io::Cursor;
use caesar::{transform_lines, Mode};

fn main() -> caesar::Result<()> {
    let mut input = Cursor::new(b"Hello\nworld\n".to_vec());
    let mut output = Vec::new();
    transform_lines(&mut input, &mut output, 3, Mode::Encrypt)?;
    assert_eq!(output, b"Khoor\nzruog\n");
    Ok(())
}
```

Error handling
--------------
All fallible functions return `caesar::Result<T>`; match on `caesar::Error`
to handle specific cases, e.g. an unreadable input file or an oversized
input unit (see `MAX_UNIT_BYTES`).

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the shift transform and serializable parameters.
- [`io`] — line-unit reading and the stream/file pipelines.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::CipherParams;
pub use crate::error::{Error, Result};
pub use crate::types::{Mode, Source};

// Transform primitives
pub use crate::core::cipher::{MAX_UNIT_BYTES, shift_bytes, transform_unit};

// Pipelines
pub use crate::io::pipeline::{transform_file, transform_lines, transform_stream};

// High-level API re-exports
pub use crate::api::{default_output_path, transform_file_to_path, transform_text};
