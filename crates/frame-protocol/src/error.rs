use thiserror::Error;

/// Errors that can occur while resolving or decoding frame protocol values.
#[derive(Debug, Error)]
pub enum Error {
    /// The widget document location could not be parsed.
    #[error("invalid document url: {0}")]
    InvalidDocumentUrl(#[source] url::ParseError),

    /// The `host_url` query parameter is absent.
    #[error("missing required query parameter: host_url")]
    MissingHostUrl,

    /// The `host_url` query parameter is not an absolute URL.
    #[error("invalid host_url {value:?}: {source}")]
    InvalidHostUrl {
        /// Raw parameter value.
        value: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },

    /// The `host_url` parses but has no tuple origin to target.
    #[error("host_url has an opaque origin: {0}")]
    OpaqueOrigin(String),

    /// A storage key outside the persisted key set.
    #[error("unknown persisted key: {0}")]
    UnknownKey(String),

    /// JSON encoding or decoding error.
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for frame-protocol operations.
pub type Result<T> = std::result::Result<T, Error>;
