//! # frame-protocol
//!
//! Message contract between an embedded widget and the page hosting its
//! iframe.
//!
//! This crate provides:
//! - [`HeightNotification`], the only message the widget sends to its host
//! - [`HostOrigin`], resolved once from the widget's own `host_url` parameter
//! - [`PersistedKey`] and [`StorageRequest`] for the widget's persisted state
//! - [`WidgetFlags`], the startup values handed to the widget application
//!
//! ## Example
//!
//! ```ignore
//! use frame_protocol::{HeightNotification, HostOrigin};
//!
//! let origin = HostOrigin::from_document_url(
//!     "https://widget.example.net/?host_url=https%3A%2F%2Fexample.com%2Fpage",
//! )?;
//! assert_eq!(origin.as_str(), "https://example.com");
//!
//! let message = HeightNotification::new(400);
//! assert_eq!(message.to_json()?, r#"{"height":400}"#);
//! ```

mod error;
mod flags;
mod message;
mod origin;
mod storage;

pub use error::{Error, Result};
pub use flags::WidgetFlags;
pub use message::HeightNotification;
pub use origin::{HostOrigin, HOST_URL_PARAM};
pub use storage::{PersistedKey, StorageRequest};
