// src/cli/handlers.rs
use std::io::{self, BufRead};
use thiserror::Error;

use crate::cli::GenerateArgs;
use crate::generators::{analyze_password_strength, PasswordGenerator, StrengthBand, ValidationError};
use crate::models::PasswordGenerationOptions;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Count must be at least 1")]
    InvalidCount,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

// Handlers for CLI commands

/// Turns the `generate` flags into options. Every class is on unless its
/// `--no-*` flag is given.
pub fn generation_options(args: &GenerateArgs, default_length: usize) -> PasswordGenerationOptions {
    PasswordGenerationOptions {
        length: args.length.unwrap_or(default_length),
        include_uppercase: !args.no_upper,
        include_lowercase: !args.no_lower,
        include_numbers: !args.no_digits,
        include_symbols: !args.no_special,
    }
}

/// Returns one output line per password.
pub fn handle_generate(
    options: &PasswordGenerationOptions,
    count: usize,
    show_strength: bool,
) -> Result<Vec<String>, CliError> {
    if count == 0 {
        return Err(CliError::InvalidCount);
    }

    let generator = PasswordGenerator::new();
    (0..count)
        .map(|_| -> Result<String, CliError> {
            let password = generator.generate_password(options)?;
            Ok(if show_strength {
                format_scored(&password)
            } else {
                password
            })
        })
        .collect()
}

pub fn handle_score(password: &str) -> String {
    let score = analyze_password_strength(password);
    format!("{} ({})", score, StrengthBand::from_score(score))
}

/// Reads the password to score from `reader`, dropping the line ending.
pub fn read_password<R: BufRead>(mut reader: R) -> Result<String, CliError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn format_scored(password: &str) -> String {
    format!("{}\t{}", password, handle_score(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, CliCommand};
    use clap::Parser;

    fn parse_generate(argv: &[&str]) -> GenerateArgs {
        let args = Args::try_parse_from(argv).unwrap();
        match args.command {
            Some(CliCommand::Generate(generate)) => generate,
            other => panic!("expected generate, got {:?}", other),
        }
    }

    #[test]
    fn flags_map_to_options() {
        let args = parse_generate(&["passforge", "generate", "--no-lower", "-n", "3"]);
        assert_eq!(args.count, 3);
        assert!(!args.strength);

        let options = generation_options(&args, 18);
        assert_eq!(
            options,
            PasswordGenerationOptions {
                length: 18,
                include_uppercase: true,
                include_lowercase: false,
                include_numbers: true,
                include_symbols: true,
            }
        );
    }

    #[test]
    fn explicit_length_overrides_default() {
        let args = parse_generate(&[
            "passforge",
            "generate",
            "-l",
            "20",
            "--no-upper",
            "--no-digits",
            "--no-special",
            "--strength",
        ]);
        assert!(args.strength);
        assert_eq!(args.count, 1);

        let options = generation_options(&args, 12);
        assert_eq!(options.length, 20);
        assert!(options.include_lowercase);
        assert!(!options.include_uppercase);
        assert!(!options.include_numbers);
        assert!(!options.include_symbols);
    }

    #[test]
    fn all_flags_off_is_a_validation_error() {
        let args = parse_generate(&[
            "passforge",
            "generate",
            "--no-upper",
            "--no-lower",
            "--no-digits",
            "--no-special",
        ]);
        let options = generation_options(&args, 12);
        let err = handle_generate(&options, args.count, args.strength).unwrap_err();
        assert!(matches!(
            err,
            CliError::Validation(ValidationError::NoCharacterClasses)
        ));
    }

    #[test]
    fn bare_invocation_has_no_command() {
        let args = Args::try_parse_from(["passforge"]).unwrap();
        assert_eq!(args.command, None);
        let args = Args::try_parse_from(["passforge", "serve", "-p", "8080"]).unwrap();
        assert_eq!(args.command, Some(CliCommand::Serve { port: Some(8080) }));
    }

    #[test]
    fn generates_requested_count() {
        let options = PasswordGenerationOptions {
            length: 10,
            ..Default::default()
        };
        let lines = handle_generate(&options, 5, false).unwrap();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|p| p.len() == 10));
    }

    #[test]
    fn appends_strength_when_asked() {
        let options = PasswordGenerationOptions {
            length: 16,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };
        let lines = handle_generate(&options, 1, true).unwrap();
        let (password, score) = lines[0].split_once('\t').unwrap();
        assert_eq!(password.len(), 16);
        // 16 / 4 = 4, lowercase 15, length bonus 10
        assert_eq!(score, "29 (Weak)");
    }

    #[test]
    fn zero_count_rejected() {
        let options = PasswordGenerationOptions::default();
        assert!(matches!(
            handle_generate(&options, 0, false),
            Err(CliError::InvalidCount)
        ));
    }

    #[test]
    fn validation_errors_surface() {
        let options = PasswordGenerationOptions {
            length: 2,
            ..Default::default()
        };
        let err = handle_generate(&options, 1, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password length must be between 4 and 64 characters"
        );
    }

    #[test]
    fn scores_with_band() {
        assert_eq!(handle_score(""), "0 (Weak)");
        assert_eq!(handle_score("Aa1!Aa1!Aa1!"), "68 (Good)");
    }

    #[test]
    fn reads_single_line() {
        let input = io::Cursor::new("hunter2\r\nsecond line\n");
        assert_eq!(read_password(input).unwrap(), "hunter2");
        assert_eq!(read_password(io::Cursor::new("")).unwrap(), "");
    }
}
