//! Gemini-specific error types and retry classification.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// Failed to construct the underlying HTTP client
    ClientCreation(String),
    /// Connection error or per-attempt timeout
    Transport(String),
    /// Endpoint answered 503, service overloaded
    Overloaded,
    /// Endpoint answered with a non-retryable error status
    Api {
        /// HTTP status code
        status: u16,
        /// Error body, parsed JSON when the endpoint sent JSON, raw text otherwise
        body: String,
    },
    /// Success status but the body was not valid JSON of the expected shape
    MalformedResponse(String),
    /// Success status but no candidate carried any text
    NoText,
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {}", msg)
            }
            GeminiErrorKind::Transport(msg) => write!(f, "Gemini request failed: {}", msg),
            GeminiErrorKind::Overloaded => write!(f, "Gemini service overloaded (503)"),
            GeminiErrorKind::Api { status, body } => {
                write!(f, "Gemini API error (status {}): {}", status, body)
            }
            GeminiErrorKind::MalformedResponse(msg) => {
                write!(f, "Failed to parse Gemini response: {}", msg)
            }
            GeminiErrorKind::NoText => write!(f, "No text returned from Gemini"),
        }
    }
}

impl GeminiErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Transient conditions (network failure, 503, a success body that could
    /// not be used) retry; a non-503 error status and client construction
    /// failures do not.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiErrorKind::Transport(_) => true,
            GeminiErrorKind::Overloaded => true,
            GeminiErrorKind::MalformedResponse(_) => true,
            GeminiErrorKind::NoText => true,
            GeminiErrorKind::ClientCreation(_) | GeminiErrorKind::Api { .. } => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use palimpsest_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::Overloaded);
/// assert!(err.is_retryable());
/// assert!(format!("{}", err).contains("overloaded"));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Returns true if the wrapped condition should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}
