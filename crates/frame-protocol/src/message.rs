use serde::{Deserialize, Serialize};

/// Height report posted from the widget to its host frame.
///
/// Wire format is `{"height": <u32>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeightNotification {
    /// Content height in CSS pixels.
    pub height: u32,
}

impl HeightNotification {
    /// Create a notification for the given height.
    pub fn new(height: u32) -> Self {
        Self { height }
    }

    /// Encode the notification as its JSON wire form.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a notification from its JSON wire form.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

