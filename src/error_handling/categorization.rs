//! Transport error categorization.

use super::types::LookupError;

/// Describes which stage of the request a `reqwest::Error` came from.
///
/// Used for diagnostics only; every transport failure maps to the same
/// [`LookupError::Network`] variant.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connect"
    } else if error.is_builder() {
        "builder"
    } else if error.is_redirect() {
        "redirect"
    } else if error.is_body() {
        "body"
    } else if error.is_decode() {
        "decode"
    } else if error.is_request() {
        "request"
    } else {
        "other"
    }
}

/// Converts a transport failure into the lookup taxonomy.
///
/// The message is the full source chain so the root cause (DNS failure,
/// refused connection) is not hidden behind reqwest's outer wording.
pub fn network_error(error: &reqwest::Error) -> LookupError {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    LookupError::Network(message)
}
