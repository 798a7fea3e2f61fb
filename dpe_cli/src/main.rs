//! # OpenDPE CLI
//!
//! Thin command-line harness around `dpe_core`: reads a dwelling snapshot
//! as JSON from the file given as first argument (or from stdin), runs
//! the assessment, prints the report as JSON on stdout.
//!
//! ```text
//! dpe_cli dwelling.json
//! cat dwelling.json | dpe_cli
//! ```
//!
//! The insufficient-data outcome is reported as a structured JSON object
//! on stdout as well, with a non-zero exit code, so scripted callers can
//! distinguish it from a malformed snapshot.

use std::io::Read;
use std::process::ExitCode;

use dpe_core::{assess, Dwelling, DpeError};

fn read_input() -> Result<String, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).map_err(|e| format!("cannot read '{path}': {e}"))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            Ok(buffer)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let input = match read_input() {
        Ok(input) => input,
        Err(message) => {
            eprintln!("dpe_cli: {message}");
            return ExitCode::from(2);
        }
    };

    let dwelling: Dwelling = match serde_json::from_str(&input) {
        Ok(dwelling) => dwelling,
        Err(e) => {
            eprintln!("dpe_cli: invalid snapshot: {e}");
            return ExitCode::from(2);
        }
    };

    match assess(&dwelling) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report).expect("report is serializable"));
            ExitCode::SUCCESS
        }
        Err(err @ DpeError::InsufficientFloorArea { .. }) => {
            println!("{}", serde_json::to_string_pretty(&err).expect("error is serializable"));
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("dpe_cli: {err}");
            ExitCode::from(2)
        }
    }
}
