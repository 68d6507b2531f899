use std::io::{self, Write};

use tracing::info;

use caesar::core::params::CipherParams;
use caesar::types::{Mode, Source};
use caesar::{api, transform_lines};

use super::args::CliArgs;
use super::errors::AppError;

fn resolve_mode(args: &CliArgs) -> Result<Mode, AppError> {
    match (args.encrypt, args.decrypt) {
        (true, true) => Err(AppError::ModeConflict),
        (true, false) => Ok(Mode::Encrypt),
        (false, true) => Ok(Mode::Decrypt),
        (false, false) => Err(AppError::ModeMissing),
    }
}

/// Strict source precedence: file over stdin over literal text.
/// Selectors for lower-priority sources are ignored, never an error.
fn resolve_source(args: &CliArgs) -> Source {
    if args.file.is_some() {
        Source::File
    } else if args.stdin {
        Source::Stdin
    } else {
        Source::Literal
    }
}

fn parse_shift(token: Option<&str>) -> Result<i32, AppError> {
    let token = token.ok_or(AppError::MissingShift)?;
    token.parse().map_err(|_| AppError::InvalidShift {
        value: token.to_string(),
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let mode = resolve_mode(&args)?;
    let source = resolve_source(&args);
    info!("mode: {}, source: {}", mode, source);

    match source {
        Source::File => {
            // resolve_source only selects File when --file carries a path
            let input = args.file.as_deref().expect("file source without a path");

            // The sole positional is the shift here; a token that landed in
            // the TEXT slot doubles as the shift when SHIFT itself is absent.
            let shift = parse_shift(args.shift.as_deref().or(args.text.as_deref()))?;
            let params = CipherParams { mode, shift };

            let written = api::transform_file_to_path(input, args.output.as_deref(), &params)?;
            println!("Done!");
            println!("Output file: {}", written.display());
        }
        Source::Stdin => {
            let shift = parse_shift(args.shift.as_deref().or(args.text.as_deref()))?;

            let stdin = io::stdin();
            let stdout = io::stdout();
            transform_lines(&mut stdin.lock(), &mut stdout.lock(), shift, mode)?;
        }
        Source::Literal => {
            let text = args.text.as_deref().ok_or(AppError::MissingText)?;
            let shift = parse_shift(args.shift.as_deref())?;

            let transformed = api::transform_text(text, shift, mode)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(&transformed)?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn mode_resolution() {
        assert!(matches!(
            resolve_mode(&parse(&["caesar", "-e", "hi", "3"])),
            Ok(Mode::Encrypt)
        ));
        assert!(matches!(
            resolve_mode(&parse(&["caesar", "-d", "hi", "3"])),
            Ok(Mode::Decrypt)
        ));
        assert!(matches!(
            resolve_mode(&parse(&["caesar", "-e", "-d", "hi", "3"])),
            Err(AppError::ModeConflict)
        ));
        assert!(matches!(
            resolve_mode(&parse(&["caesar", "hi", "3"])),
            Err(AppError::ModeMissing)
        ));
    }

    #[test]
    fn source_precedence_is_file_then_stdin_then_literal() {
        let args = parse(&["caesar", "-e", "-f", "in.txt", "-I", "text", "3"]);
        assert_eq!(resolve_source(&args), Source::File);

        let args = parse(&["caesar", "-e", "-I", "text", "3"]);
        assert_eq!(resolve_source(&args), Source::Stdin);

        let args = parse(&["caesar", "-e", "text", "3"]);
        assert_eq!(resolve_source(&args), Source::Literal);
    }

    #[test]
    fn shift_parsing() {
        assert_eq!(parse_shift(Some("3")).unwrap(), 3);
        assert_eq!(parse_shift(Some("-13")).unwrap(), -13);
        assert!(matches!(parse_shift(None), Err(AppError::MissingShift)));
        assert!(matches!(
            parse_shift(Some("three")),
            Err(AppError::InvalidShift { .. })
        ));
    }

    #[test]
    fn file_mode_takes_shift_from_sole_positional() {
        let args = parse(&["caesar", "-e", "-f", "input.txt", "3"]);
        assert_eq!(
            parse_shift(args.shift.as_deref().or(args.text.as_deref())).unwrap(),
            3
        );
    }
}
