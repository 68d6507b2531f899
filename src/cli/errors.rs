use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot encrypt and decrypt at the same time")]
    ModeConflict,

    #[error("don't know whether to encrypt or decrypt (pass -e or -d)")]
    ModeMissing,

    #[error("shift size not provided")]
    MissingShift,

    #[error("invalid shift size: {value}")]
    InvalidShift { value: String },

    #[error("no text to transform")]
    MissingText,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cipher(#[from] caesar::Error),
}
