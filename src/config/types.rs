//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_USER_AGENT, LEAKCHECK_PUBLIC_URL, LOOKUP_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Everything the lookup service needs to issue its one request. The defaults
/// point at the LeakCheck public API with a 15 second timeout.
///
/// # Examples
///
/// ```no_run
/// use breach_check::Config;
///
/// let config = Config {
///     endpoint: "http://127.0.0.1:8080/api/public".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Lookup endpoint URL (without query string)
    pub endpoint: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: LEAKCHECK_PUBLIC_URL.to_string(),
            timeout_seconds: LOOKUP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Check one address
/// breach_check someone@example.com
///
/// # Raw JSON output, suitable for piping into jq
/// breach_check someone@example.com --json
///
/// # No argument: prompt for the address
/// breach_check
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "breach_check",
    version,
    about = "LeakCheck Public Breach Checker CLI"
)]
pub struct Opt {
    /// Email to search (prompted for when omitted)
    pub email: Option<String>,

    /// Raw JSON output
    #[arg(long)]
    pub json: bool,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Lookup endpoint URL
    #[arg(long, default_value = LEAKCHECK_PUBLIC_URL)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = LOOKUP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Extracts the library configuration from the parsed options.
    pub fn config(&self) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }

    /// Whether the animated banner should be printed.
    ///
    /// JSON output is meant for machines, so it never gets a banner.
    pub fn show_banner(&self) -> bool {
        !self.no_banner && !self.json
    }
}
