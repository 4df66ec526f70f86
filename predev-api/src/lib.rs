//! Rust client for the Pre.dev Architect API.
//!
//! The API offers two generation tiers:
//! - **Fast Spec**: comprehensive specs quickly (MVPs and prototypes)
//! - **Deep Spec**: ultra-detailed specs for complex systems
//!
//! Each tier is available synchronously (the call blocks until the spec is
//! ready) or asynchronously (the call returns a pollable handle). The
//! client holds only immutable configuration and is safe to share across
//! tasks.
//!
//! ```no_run
//! use predev_api::{PredevClient, SpecRequest};
//!
//! # async fn run() -> Result<(), predev_api::PredevError> {
//! let client = PredevClient::new("your_api_key")?;
//! let result = client
//!     .fast_spec(&SpecRequest::new("Build a task management app"))
//!     .await?;
//! println!("{:?}", result.coding_agent_spec_url);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod polling;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::PredevClient;
pub use error::PredevError;
pub use polling::{PollOptions, wait_for_completion};
pub use types::{
    AsyncSpecHandle, CreditsBalance, FileAttachment, ListSpecsQuery, OutputFormat, SpecEndpoint,
    SpecListPage, SpecRequest, SpecResponse, SpecStatus, ZippedDocsUrl,
};

pub const PREDEV_API_HOSTNAME: &str = "api.pre.dev";
pub const PREDEV_API_BASE_URL: &str = const_format::concatcp!("https://", PREDEV_API_HOSTNAME);
