//! Shared types and enums used across the crate.
//! Includes the cipher `Mode` and the input `Source` selector.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Suffix appended to the input path when no explicit output path is
    /// given in file mode.
    pub fn output_suffix(self) -> &'static str {
        match self {
            Mode::Encrypt => "_encr",
            Mode::Decrypt => "_decr",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Encrypt => write!(f, "encrypt"),
            Mode::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Where the text to transform comes from. When several selectors are
/// supplied on the command line, the highest-priority one wins:
/// file over stdin over literal text.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Source {
    File,
    Stdin,
    Literal,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File => write!(f, "file"),
            Source::Stdin => write!(f, "stdin"),
            Source::Literal => write!(f, "literal"),
        }
    }
}
