//! Terminal front end.
//!
//! This module provides the banner, the interactive prompt and the human and
//! JSON renderers used by the binary. None of it is needed to run a lookup.

pub mod banner;
pub mod output;
pub mod prompt;

// Re-export public API
pub use banner::{show_banner, BannerPacing};
pub use output::{render_human, render_json, Report};
pub use prompt::prompt_for_email;
