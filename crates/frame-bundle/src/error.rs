use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a bundle artifact.
#[derive(Debug, Error)]
pub enum Error {
    /// A build output the bundler reads does not exist.
    #[error("missing input file: {}", .0.display())]
    MissingInput(PathBuf),

    /// The shell has no `<script src>` element to inline into.
    #[error("html shell has no external script element")]
    NoExternalScript,

    /// The shell has more than one `<script src>` element.
    #[error("html shell has {0} external script elements, expected exactly one")]
    MultipleExternalScripts(usize),

    /// Relocating the shell would overwrite an existing file.
    #[error("backup path already exists: {}", .0.display())]
    BackupExists(PathBuf),

    /// Two bundle paths point at the same file.
    #[error("invalid bundle config: {0}")]
    InvalidConfig(String),

    /// Error parsing the bundle configuration file.
    #[error("toml parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Error from the HTML rewriter.
    #[error("html rewriting error: {0}")]
    RewriteError(#[from] lol_html::errors::RewritingError),

    /// I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for frame-bundle operations.
pub type Result<T> = std::result::Result<T, Error>;
