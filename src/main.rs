//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `breach_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Banner and prompt
//! - User-facing output formatting
//!
//! All lookup functionality is implemented in the library crate.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use breach_check::app::{prompt_for_email, render_human, render_json, show_banner, BannerPacing};
use breach_check::initialization::init_logger_with;
use breach_check::{LookupService, Opt};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("breach_check error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let opt = Opt::parse();
    let config = opt.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opt.show_banner() {
        show_banner(&mut out, BannerPacing::default())
            .await
            .context("Failed to write banner")?;
    }

    let email = match opt.email.as_deref() {
        Some(email) => email.to_string(),
        None => prompt_for_email(&mut io::stdin().lock(), &mut out)
            .context("Failed to read email from stdin")?,
    };

    let service = LookupService::new(&config).context("Failed to initialize HTTP client")?;
    log::info!("Checking {email} against {}", service.endpoint());
    let outcome = service.check(&email).await;

    let rendered = if opt.json {
        render_json(&outcome, &mut out)
    } else {
        render_human(&outcome, &mut out)
    };
    rendered.context("Failed to write output")?;
    out.flush().context("Failed to flush output")?;

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
