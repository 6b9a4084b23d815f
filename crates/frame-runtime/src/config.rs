use crate::{Result, WidgetError};

/// Backend endpoint baked in when the crate is compiled.
pub const API_ENDPOINT: Option<&str> = option_env!("API_ENDPOINT");

/// Source revision baked in when the crate is compiled.
pub const GIT_REF: Option<&str> = option_env!("GIT_REF");

#[cfg(feature = "production")]
const fn is_present(value: Option<&str>) -> bool {
    match value {
        Some(value) => !value.is_empty(),
        None => false,
    }
}

#[cfg(feature = "production")]
const _: () = assert!(
    is_present(GIT_REF),
    "Missing git ref for production environment"
);

/// Build flavor of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Local development build.
    Development,
    /// Deployable build; requires a git ref.
    Production,
}

impl BuildMode {
    /// Mode selected by the `production` cargo feature.
    pub fn compiled() -> Self {
        if cfg!(feature = "production") {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }
}

/// Build-time configuration injected into the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Build flavor.
    pub mode: BuildMode,
    /// Backend endpoint handed to the widget application.
    pub api_endpoint: Option<String>,
    /// Source revision for error reports; empty values count as absent.
    pub git_ref: Option<String>,
}

impl BuildConfig {
    /// Validate and assemble a configuration.
    pub fn new(
        mode: BuildMode,
        api_endpoint: Option<String>,
        git_ref: Option<String>,
    ) -> Result<Self> {
        let git_ref = git_ref.filter(|value| !value.is_empty());
        if mode == BuildMode::Production && git_ref.is_none() {
            return Err(WidgetError::MissingGitRef);
        }

        Ok(Self {
            mode,
            api_endpoint,
            git_ref,
        })
    }

    /// Configuration captured from the environment at compile time.
    pub fn compiled() -> Result<Self> {
        Self::new(
            BuildMode::compiled(),
            API_ENDPOINT.map(str::to_string),
            GIT_REF.map(str::to_string),
        )
    }
}
