//! HTTP status code utilities backing the client's error taxonomy.

/// HTTP status code for error categorization.
///
/// Stored directly rather than parsed back out of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 2xx responses carry a result body.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 401: the credential is missing, invalid, or expired.
    pub fn is_authentication(&self) -> bool {
        self.0 == 401
    }

    /// 429: the caller should back off (the client itself never does).
    pub fn is_rate_limit(&self) -> bool {
        self.0 == 429
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
