use crate::types::request::OutputFormat;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Server-owned lifecycle of a generation job. The client only reads this
/// state, it never transitions it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpecStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl SpecStatus {
    /// `completed` and `failed` are terminal; polling stops there.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SpecStatus::Completed | SpecStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecStatus::Pending => "pending",
            SpecStatus::Processing => "processing",
            SpecStatus::Completed => "completed",
            SpecStatus::Failed => "failed",
        }
    }
}

/// Which generation tier produced a spec.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpecEndpoint {
    FastSpec,
    DeepSpec,
}

impl SpecEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecEndpoint::FastSpec => "fast_spec",
            SpecEndpoint::DeepSpec => "deep_spec",
        }
    }
}

/// Identifier + status pair returned by async-mode calls.
///
/// The identifier is opaque; pass it verbatim to
/// [`crate::PredevClient::get_spec_status`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncSpecHandle {
    pub spec_id: String,
    pub status: SpecStatus,
}

/// A zipped bundle of the reference documents attached to a request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZippedDocsUrl {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A generation result, at whatever stage the service has reached.
///
/// Earlier-stage results have fewer populated fields; the client asserts
/// nothing beyond "valid JSON of this shape". Exact key spelling is the
/// service's contract, not ours.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecResponse {
    #[serde(default, alias = "_id")]
    pub spec_id: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub endpoint: Option<SpecEndpoint>,

    /// Echo of the request's input text.
    #[serde(default)]
    pub input: Option<String>,

    #[serde(default)]
    pub status: Option<SpecStatus>,

    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub output_format: Option<OutputFormat>,

    /// Short address of the uploaded file, when one was attached.
    #[serde(default)]
    pub file_url: Option<String>,

    #[serde(default)]
    pub file_name: Option<String>,

    /// Machine-oriented spec artifact, as a hosted URL.
    #[serde(default)]
    pub coding_agent_spec_url: Option<String>,

    /// Human-oriented spec artifact, as a hosted URL.
    #[serde(default)]
    pub human_spec_url: Option<String>,

    /// Inline-content variants, populated for the `json` output format.
    #[serde(default)]
    pub coding_agent_spec: Option<String>,

    #[serde(default)]
    pub human_spec: Option<String>,

    /// Per-platform deep links, keyed by platform name. The key set is a
    /// deployment contract, so it stays a map rather than a fixed struct.
    #[serde(default)]
    pub deep_links: Option<HashMap<String, String>>,

    #[serde(default, rename = "zippedDocsURLs")]
    pub zipped_docs_urls: Option<Vec<ZippedDocsUrl>>,

    /// Elapsed server-side processing time, in seconds.
    #[serde(default)]
    pub processing_time: Option<f64>,

    #[serde(default)]
    pub error_message: Option<String>,

    /// Free-text progress description for in-flight jobs.
    #[serde(default)]
    pub progress: Option<String>,
}

/// One page of results from the list/search operations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecListPage {
    pub specs: Vec<SpecResponse>,
    pub total: u64,
    pub has_more: bool,
}

/// Remaining-credits balance for the authenticated account.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CreditsBalance {
    pub success: bool,
    pub credits: i64,
}
