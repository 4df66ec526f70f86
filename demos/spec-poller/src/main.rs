//! Submit an async fast spec and poll it to completion.
//!
//! Reads `PREDEV_API_KEY` from the environment (with a `.env` fallback),
//! fires `fast_spec_async`, then drives the sleep-and-recheck loop the
//! client deliberately leaves to callers.

mod logger;

use predev_api::{PollOptions, PredevClient, SpecRequest, SpecStatus, wait_for_completion};

use std::env;

use log::{error, info};

const API_KEY_ENV_VAR: &str = "PREDEV_API_KEY";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; real environment variables win either way.
    let _ = dotenvy::dotenv();
    logger::initialize()?;

    let api_key =
        env::var(API_KEY_ENV_VAR).map_err(|_| format!("{API_KEY_ENV_VAR} is not set"))?;
    let client = PredevClient::new(api_key)?;

    let request = SpecRequest::new(
        "Build a task management app with team collaboration features \
         including real-time updates, task assignments, and progress tracking",
    );

    let handle = client.fast_spec_async(&request).await?;
    info!(
        "Submitted spec {} (status: {})",
        handle.spec_id,
        handle.status.as_str()
    );

    let result = wait_for_completion(&client, &handle.spec_id, PollOptions::fast()).await?;

    match result.status {
        Some(SpecStatus::Completed) => {
            info!(
                "Coding agent spec: {}",
                result.coding_agent_spec_url.as_deref().unwrap_or("n/a")
            );
            info!(
                "Human spec: {}",
                result.human_spec_url.as_deref().unwrap_or("n/a")
            );
            if let Some(seconds) = result.processing_time {
                info!("Processed in {seconds:.1}s");
            }
        }
        _ => {
            error!(
                "Generation failed: {}",
                result.error_message.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}
