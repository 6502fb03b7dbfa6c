//! Internly CLI - run portal form validation from the shell
//!
//! Usage:
//!   internly check [FILE]        Validate one submission (JSON, stdin when FILE is omitted)
//!   internly words <N>           Print the applicant phrase for N
//!   internly --log-level debug check form.json
//!
//! Exit codes: 0 = valid, 1 = some field failed, 2 = bad input

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use internly_validation::{
    applicant_count_phrase, try_number_to_words, FieldErrors, FormSubmission, FormValidator,
};

#[derive(Parser, Debug)]
#[command(name = "internly")]
#[command(about = "Internly form validation", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a form submission and print its report
    Check {
        /// Submission JSON file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Spell out an applicant count
    Words {
        /// Count between 1 and 1,000,000
        n: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let exit_code = match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            2
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Commands) -> Result<i32> {
    match command {
        Commands::Check { file } => run_check(file.as_deref()),
        Commands::Words { n } => run_words(n),
    }
}

/// Returns exit code: 0 = valid, 1 = at least one field failed
fn run_check(file: Option<&Path>) -> Result<i32> {
    let input = read_input(file)?;
    let submission =
        FormSubmission::from_json(&input).context("Failed to decode form submission")?;
    tracing::info!(form = submission.name(), "checking submission");

    let report = FormValidator::new().validate_submission(&submission);
    let rendered = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
    println!("{rendered}");

    Ok(if report.is_valid() { 0 } else { 1 })
}

fn run_words(n: u64) -> Result<i32> {
    try_number_to_words(n)?;
    println!("{}", applicant_count_phrase(n));
    Ok(0)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok(); // Ignore error if already initialized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_with_file() {
        let cli = Cli::try_parse_from(["internly", "check", "form.json"]).unwrap();
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Commands::Check { file } => assert_eq!(file, Some(PathBuf::from("form.json"))),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_log_level() {
        let cli = Cli::try_parse_from(["internly", "words", "3", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Commands::Words { n: 3 }));
    }

    #[test]
    fn test_words_rejects_non_numbers() {
        assert!(Cli::try_parse_from(["internly", "words", "three"]).is_err());
    }

    #[test]
    fn test_run_words_range() {
        assert_eq!(run_words(1).unwrap(), 0);
        assert!(run_words(0).is_err());
    }

    #[test]
    fn test_run_check_reports_failure() {
        let path = std::env::temp_dir().join(format!("internly-check-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"form": "reset_password", "password": "Abcdef1!"}"#).unwrap();

        let code = run_check(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(code, 1);
    }

    #[test]
    fn test_run_check_missing_file() {
        let err = run_check(Some(Path::new("/nonexistent/internly.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
