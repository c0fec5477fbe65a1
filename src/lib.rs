//! breach_check library: email breach lookups against the LeakCheck public API
//!
//! The core is [`LookupService::check`]: validate an address, issue one HTTP
//! request, and normalize the loosely-typed JSON reply into a
//! [`LookupResult`], or report a [`LookupFailure`] carrying only a reason.
//!
//! # Example
//!
//! ```no_run
//! use breach_check::{Config, LookupService};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = LookupService::new(&Config::default())?;
//! let result = service.check("someone@example.com").await?;
//! for breach in &result.breaches {
//!     println!("{} ({})", breach.name, breach.date);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod app;
pub mod config;
#[allow(missing_docs)]
pub mod error_handling;
pub mod initialization;
pub mod lookup;
mod models;
mod validation;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{FailureKind, InitializationError, LookupError, LookupFailure};
pub use lookup::LookupService;
pub use models::{Breach, LookupResult};
pub use validation::is_valid_email;
