use thiserror::Error;

/// Errors raised while starting or driving the widget runtime.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Host origin resolution or message encoding failed.
    #[error(transparent)]
    Protocol(#[from] frame_protocol::Error),

    /// Production build without a build identifier.
    #[error("missing git ref for production environment")]
    MissingGitRef,

    /// The node whose content is measured does not exist.
    #[error("missing root content node: {0}")]
    MissingRoot(String),

    /// The persisted key-value store rejected an operation.
    #[error("storage error: {0}")]
    Storage(String),

    /// A browser API was unavailable or threw.
    #[error("browser error: {0}")]
    Browser(String),
}

/// Result type for frame-runtime operations.
pub type Result<T> = std::result::Result<T, WidgetError>;
