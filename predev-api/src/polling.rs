//! Caller-driven status polling, packaged as an optional helper.
//!
//! The client itself never blocks on job completion; this loop is ordinary
//! calling code with a configurable interval and attempt budget.

use crate::client::PredevClient;
use crate::error::PredevError;
use crate::types::SpecResponse;

use common::ErrorLocation;

use std::panic::Location;
use std::time::Duration;

use log::debug;
use tokio::time::sleep;

/// How often and how long to poll. The presets mirror the cadence the
/// service documents: fast jobs finish in tens of seconds, deep jobs in a
/// few minutes.
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl PollOptions {
    /// 3-second interval, sized for fast specs.
    pub fn fast() -> Self {
        Self {
            interval: Duration::from_secs(3),
            max_attempts: 40,
        }
    }

    /// 10-second interval, sized for deep specs.
    pub fn deep() -> Self {
        Self {
            interval: Duration::from_secs(10),
            max_attempts: 30,
        }
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self::fast()
    }
}

/// Sleep-and-recheck until the job reaches a terminal status.
///
/// Returns the terminal [`SpecResponse`] whether the job `completed` or
/// `failed` - a failed generation is data, not a transport error; inspect
/// `status` and `error_message` on the result.
///
/// # Errors
/// Any error from [`PredevClient::get_spec_status`] propagates
/// immediately; [`PredevError::PollingExhausted`] when `max_attempts`
/// checks pass without a terminal status.
pub async fn wait_for_completion(
    client: &PredevClient,
    spec_id: &str,
    options: PollOptions,
) -> Result<SpecResponse, PredevError> {
    for attempt in 1..=options.max_attempts {
        sleep(options.interval).await;

        let result = client.get_spec_status(spec_id).await?;
        debug!(
            "Poll attempt {attempt}/{}: spec {spec_id} status = {:?}",
            options.max_attempts, result.status
        );

        if result.status.is_some_and(|status| status.is_terminal()) {
            return Ok(result);
        }
    }

    Err(PredevError::PollingExhausted {
        spec_id: spec_id.to_string(),
        attempts: options.max_attempts,
        location: ErrorLocation::from(Location::caller()),
    })
}
