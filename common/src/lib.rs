//! Shared primitives for the Pre.dev API workspace.
//!
//! This crate contains small building blocks with no business logic:
//!
//! - **ErrorLocation**: source provenance attached to every error variant
//! - **HttpStatusCode**: status classification feeding the error taxonomy
//! - **RedactedApiKey**: credential wrapper that never leaks through logs
//!
//! ## Architecture
//!
//! - **common** (this crate): shared primitives
//! - **predev-api**: the HTTP client operating on them
//! - **spec-poller**: demo binary wiring everything together
//!
//! Nothing here touches the network.

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
