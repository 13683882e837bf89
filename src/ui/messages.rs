//! User-facing notifications. Diagnostics go through `tracing` instead.

use crate::errors::{AppError, FieldError, GatewayError};
use serde::Serialize;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}\n{}", FG_BLUE, BOLD, msg, RESET);
}

/// One line per invalid field, on stderr.
pub fn field_errors(errors: &[FieldError]) {
    for e in errors {
        eprintln!("  {FG_RED}•{RESET} {BOLD}{}{RESET}: {}", e.field, e.message);
    }
}

/// Report a failed command. Validation and not-found get their own shape;
/// everything else is printed verbatim.
pub fn report(err: &AppError) {
    match err {
        AppError::Validation(errors) => {
            error("Please fix the following fields:");
            field_errors(errors);
        }
        AppError::Gateway(GatewayError::NotFound(id)) => {
            warning(format!("No entry with id {id}."));
        }
        other => error(format!("Error: {other}")),
    }
}

/// Machine-readable output for `--json`.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    println!("{text}");
    Ok(())
}
