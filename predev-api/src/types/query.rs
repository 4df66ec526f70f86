use crate::types::response::{SpecEndpoint, SpecStatus};

/// Filters for the list and search operations.
///
/// Unset filters are omitted from the query string entirely. Values pass
/// through to the service unvalidated; the documented bounds (`limit` in
/// 1..=100) are the server's contract and oversteps come back as generic
/// API errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListSpecsQuery {
    /// Page size.
    pub limit: Option<u32>,
    /// Number of entries to skip.
    pub skip: Option<u32>,
    /// Restrict to one generation tier.
    pub endpoint: Option<SpecEndpoint>,
    /// Restrict to one lifecycle status.
    pub status: Option<SpecStatus>,
}

impl ListSpecsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_endpoint(mut self, endpoint: SpecEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_status(mut self, status: SpecStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Translate set filters into query pairs, in a fixed order.
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(endpoint) = self.endpoint {
            pairs.push(("endpoint", endpoint.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}
