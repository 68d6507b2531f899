//! I/O layer for the cipher pipelines.
//! Provides terminator-aware line reading (`lines`) and the interactive and
//! file `pipeline` drivers that run the shift transform over streams.
pub mod lines;
pub use lines::{read_unit, split_terminator};

pub mod pipeline;
pub use pipeline::{transform_file, transform_lines, transform_stream};
