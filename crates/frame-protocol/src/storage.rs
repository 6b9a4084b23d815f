use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keys the widget keeps in the browser's persisted key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersistedKey {
    /// Session token of the signed-in user.
    #[serde(rename = "sessionToken")]
    SessionToken,
    /// Display name chosen by an anonymous user.
    #[serde(rename = "anonymousUsername")]
    AnonymousUsername,
}

impl PersistedKey {
    /// Every key the widget may touch.
    pub const ALL: [PersistedKey; 2] = [
        PersistedKey::SessionToken,
        PersistedKey::AnonymousUsername,
    ];

    /// Storage key string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersistedKey::SessionToken => "sessionToken",
            PersistedKey::AnonymousUsername => "anonymousUsername",
        }
    }
}

impl fmt::Display for PersistedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersistedKey {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self> {
        PersistedKey::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == key)
            .ok_or_else(|| Error::UnknownKey(key.to_string()))
    }
}

/// Outbound request from the widget application to the persisted store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum StorageRequest {
    /// Store `value` under `key`.
    Write {
        /// Target key.
        key: PersistedKey,
        /// Plain string value.
        value: String,
    },
    /// Remove `key` from the store.
    Remove {
        /// Target key.
        key: PersistedKey,
    },
}

impl StorageRequest {
    /// Build a write request from a raw key string.
    pub fn write(key: &str, value: impl Into<String>) -> Result<Self> {
        Ok(StorageRequest::Write {
            key: key.parse()?,
            value: value.into(),
        })
    }

    /// Request removing the session token (sign-out).
    pub fn remove_token() -> Self {
        StorageRequest::Remove {
            key: PersistedKey::SessionToken,
        }
    }

    /// Key addressed by this request.
    pub fn key(&self) -> PersistedKey {
        match self {
            StorageRequest::Write { key, .. } | StorageRequest::Remove { key } => *key,
        }
    }
}
