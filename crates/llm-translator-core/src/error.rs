use thiserror::Error;

/// Unified error type for llm-translator-core
///
/// Downstream failures are classified by the networking layer into explicit
/// kinds rather than inferred from message text, so callers can branch on the
/// variant instead of substring-matching.
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Translation Errors
    // ==========================================================================
    /// The model endpoint could not be reached
    #[error("cannot reach translation endpoint {url}: {detail}")]
    Connectivity { url: String, detail: String },

    /// The request to the model endpoint timed out
    #[error("translation request timed out")]
    Timeout,

    /// The model endpoint answered with a non-success HTTP status
    #[error("translation API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The model endpoint answered with a body we could not use
    #[error("invalid translation API response: {0}")]
    InvalidResponse(String),

    /// Any other transport-level failure
    #[error("translation request failed: {0}")]
    Request(String),

    // ==========================================================================
    // Extraction Errors
    // ==========================================================================
    /// Uploaded file has an extension we do not handle
    #[error("unsupported file type: {0}")]
    UnsupportedFile(String),
}

impl Error {
    /// Short, stable message suitable for showing to an end user.
    ///
    /// The `Display` impl carries diagnostic detail for logs; this carries
    /// only the classified summary the HTTP boundary is allowed to leak.
    pub fn user_message(&self) -> String {
        match self {
            Self::Connectivity { .. } => {
                "Cannot reach the local translation service. \
                 Check that the local LLM server is running."
                    .to_string()
            }
            Self::Timeout => "Translation request timed out. Please try again later.".to_string(),
            Self::Api { status, .. } => {
                format!("Translation service error: the model server returned HTTP {status}")
            }
            Self::InvalidResponse(detail) | Self::Request(detail) => {
                format!("Translation service error: {detail}")
            }
            Self::UnsupportedFile(_) => "Unsupported file type".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
