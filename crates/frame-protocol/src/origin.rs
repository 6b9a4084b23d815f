use crate::{Error, Result};
use std::fmt;
use url::Url;

/// Query parameter on the widget's own URL that names the embedding page.
pub const HOST_URL_PARAM: &str = "host_url";

/// Origin (scheme, host, port) of the page embedding the widget.
///
/// Every message the widget posts is restricted to this origin. There is no
/// wildcard form: a `HostOrigin` always names exactly one tuple origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostOrigin(String);

impl HostOrigin {
    /// Resolve the host origin from the widget document's location.
    ///
    /// Reads the `host_url` query parameter, parses it as an absolute URL and
    /// keeps its origin.
    pub fn from_document_url(document_url: &str) -> Result<Self> {
        let document = Url::parse(document_url).map_err(Error::InvalidDocumentUrl)?;
        let host_url = document
            .query_pairs()
            .find(|(key, _)| key == HOST_URL_PARAM)
            .map(|(_, value)| value.into_owned())
            .ok_or(Error::MissingHostUrl)?;

        Self::from_host_url(&host_url)
    }

    /// Derive the origin from an absolute URL of the embedding page.
    pub fn from_host_url(host_url: &str) -> Result<Self> {
        let url = Url::parse(host_url).map_err(|source| Error::InvalidHostUrl {
            value: host_url.to_string(),
            source,
        })?;

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(Error::OpaqueOrigin(host_url.to_string()));
        }

        Ok(Self(origin.ascii_serialization()))
    }

    /// Serialized origin, e.g. `https://example.com:8443`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HostOrigin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
