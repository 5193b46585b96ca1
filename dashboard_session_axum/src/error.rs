use http::StatusCode;

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Request bodies that fail to parse are the caller's fault
impl<T> IntoResponseError<T> for Result<T, serde_json::Error> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            tracing::debug!("Rejecting malformed request body: {}", e);
            (StatusCode::BAD_REQUEST, format!("Invalid request body: {e}"))
        })
    }
}
