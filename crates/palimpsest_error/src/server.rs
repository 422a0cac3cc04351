//! HTTP service error types.

/// Server error with source location.
#[derive(Debug, Clone)]
pub struct ServerError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use palimpsest_error::ServerError;
    ///
    /// let err = ServerError::new("failed to bind 0.0.0.0:5000");
    /// assert!(err.message.contains("bind"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Server Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ServerError {}
