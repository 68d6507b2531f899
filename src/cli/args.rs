use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "caesar",
    version,
    about = "Encrypt and decrypt text with a Caesar (additive byte shift) cipher"
)]
pub struct CliArgs {
    /// Encrypt plain text
    #[arg(short = 'e', long)]
    pub encrypt: bool,

    /// Decrypt Caesar cipher text
    #[arg(short = 'd', long)]
    pub decrypt: bool,

    /// Encrypt/decrypt the given file (takes priority over --stdin and TEXT)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Read input line by line from stdin (takes priority over TEXT)
    #[arg(short = 'I', long = "stdin")]
    pub stdin: bool,

    /// Output file name (file mode only; defaults to <FILE>_encr or <FILE>_decr)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Literal text to transform (ignored when a file or stdin source is selected)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Shift size: the offset added (encrypt) or subtracted (decrypt) from
    /// each byte, modulo 256. In file and stdin modes the single positional
    /// argument is the shift.
    #[arg(value_name = "SHIFT", allow_hyphen_values = true)]
    pub shift: Option<String>,
}
