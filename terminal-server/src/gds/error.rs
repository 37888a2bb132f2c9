//! GDS client error types.

/// Errors from the GDS schedule API client.
#[derive(Debug, thiserror::Error)]
pub enum GdsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("GDS API error {status} for {url}")]
    Api { status: u16, url: String },

    /// Body was malformed, carried an `error` field, or lacked `result`
    #[error("GDS data error: {message}")]
    Data { message: String },

    /// Credential missing; raised before any network call
    #[error("not configured: {0}")]
    NotConfigured(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GdsError::Api {
            status: 404,
            url: "https://gds.example/ui_schedules/1646/2058/2026-08-30.json".into(),
        };
        assert_eq!(
            err.to_string(),
            "GDS API error 404 for https://gds.example/ui_schedules/1646/2058/2026-08-30.json"
        );

        let err = GdsError::Data {
            message: "invalid date".into(),
        };
        assert_eq!(err.to_string(), "GDS data error: invalid date");

        let err = GdsError::NotConfigured("KUPOS_API_KEY is not set".into());
        assert!(err.to_string().contains("KUPOS_API_KEY"));
    }
}
