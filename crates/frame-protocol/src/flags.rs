use serde::{Deserialize, Serialize};

/// Startup values handed to the widget application on mount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetFlags {
    /// Backend endpoint captured at build time.
    pub api_endpoint: Option<String>,
    /// Origin of the embedding page.
    pub site_url: String,
    /// Previously chosen anonymous display name.
    pub anonymous_username: Option<String>,
    /// Source revision of the build, for error reports.
    pub git_ref: Option<String>,
    /// Session token of a signed-in user.
    pub session_token: Option<String>,
}

impl WidgetFlags {
    /// Encode the flags as JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
