//! Rendering lookup outcomes for the terminal.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::config::SEPARATOR_WIDTH;
use crate::error_handling::LookupFailure;
use crate::models::LookupResult;

/// Either shape a lookup can produce, serialized without a wrapper:
/// the result object, or `{"error": "<reason>"}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report<'a> {
    Found(&'a LookupResult),
    Failed(&'a LookupFailure),
}

impl<'a> From<&'a Result<LookupResult, LookupFailure>> for Report<'a> {
    fn from(outcome: &'a Result<LookupResult, LookupFailure>) -> Self {
        match outcome {
            Ok(result) => Report::Found(result),
            Err(failure) => Report::Failed(failure),
        }
    }
}

/// Writes the outcome as pretty-printed JSON (two-space indent).
pub fn render_json<W: Write>(
    outcome: &Result<LookupResult, LookupFailure>,
    out: &mut W,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Report::from(outcome))?;
    writeln!(out)
}

/// Writes the outcome as colored, human-readable text.
pub fn render_human<W: Write>(
    outcome: &Result<LookupResult, LookupFailure>,
    out: &mut W,
) -> io::Result<()> {
    let result = match outcome {
        Ok(result) => result,
        Err(failure) => {
            return writeln!(out, "{} {}", "[ERROR]".bright_red(), failure.reason);
        }
    };

    if result.is_clean() {
        return writeln!(
            out,
            "{} No breaches found for {}",
            "[OK]".bright_green(),
            result.email.bright_cyan()
        );
    }

    writeln!(
        out,
        "{} Breaches found for {}: {}",
        "[!]".bright_yellow(),
        result.email.bright_cyan(),
        result.breach_count.to_string().bright_yellow()
    )?;
    let rule = "-".repeat(SEPARATOR_WIDTH);
    writeln!(out, "{rule}")?;

    for (index, breach) in result.breaches.iter().enumerate() {
        writeln!(
            out,
            "{}",
            format!("{}. {}", index + 1, breach.name).bright_cyan()
        )?;
        writeln!(out, "   Date        : {}", breach.date)?;
        writeln!(out, "   Exposed Data: {}", breach.exposed_fields.join(", "))?;
        writeln!(out, "{rule}")?;
    }
    Ok(())
}
