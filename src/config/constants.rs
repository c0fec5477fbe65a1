//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the upstream endpoint, timeouts and rendering parameters.

use std::time::Duration;

/// LeakCheck public API endpoint.
///
/// The email is passed as the `check` query parameter:
/// `GET https://leakcheck.io/api/public?check=<email>`
pub const LEAKCHECK_PUBLIC_URL: &str = "https://leakcheck.io/api/public";

/// Query parameter carrying the email address.
pub const CHECK_QUERY_PARAM: &str = "check";

/// Per-request timeout in seconds for the lookup call.
pub const LOOKUP_TIMEOUT_SECS: u64 = 15;

/// Default User-Agent string for the lookup request.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("breach_check/", env!("CARGO_PKG_VERSION"));

/// Fallback value for a breach name or date the upstream omitted.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Width of the dashed separator line in human output.
pub const SEPARATOR_WIDTH: usize = 60;

// Banner animation
/// Delay between characters of the banner art.
pub const BANNER_CHAR_DELAY: Duration = Duration::from_micros(1500);
/// Delay between characters of the banner signature line.
pub const SIGNATURE_CHAR_DELAY: Duration = Duration::from_millis(30);
