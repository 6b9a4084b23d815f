//! # frame-runtime
//!
//! Widget-side runtime for keeping an iframe's height in sync with its
//! content.
//!
//! This crate provides:
//! - [`HeightObserver`]: reports the initial height, then every change
//! - [`FrameMessenger`] over a [`FramePort`]: origin-scoped, fire-and-forget
//! - [`KeyValueStore`]: persisted widget state (`localStorage` in browsers)
//! - [`BuildConfig`]: endpoint and build identifier captured at compile time
//! - [`WidgetSession`]: startup sequence tying the pieces together
//!
//! On `wasm32` the `mountWidget` export wires these to the DOM.
//!
//! ## Example
//!
//! ```ignore
//! use frame_runtime::{BuildConfig, MemoryStore, WidgetSession};
//!
//! let config = BuildConfig::compiled()?;
//! let mut session = WidgetSession::start(
//!     "https://widget.example.net/?host_url=https://example.com/page",
//!     &config,
//!     heights,
//!     port,
//!     MemoryStore::new(),
//! )?;
//!
//! // Call on every structural change under the root node.
//! session.on_mutation();
//! ```

mod config;
mod error;
mod messenger;
mod observer;
mod session;
mod store;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use config::{BuildConfig, BuildMode, API_ENDPOINT, GIT_REF};
pub use error::{Result, WidgetError};
pub use messenger::{DeliveryError, FrameMessenger, FramePort};
pub use observer::{HeightObserver, HeightSource};
pub use session::WidgetSession;
pub use store::{KeyValueStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use wasm::{mount_widget, WidgetHandle};

// Re-export frame-protocol types for convenience
pub use frame_protocol::{
    HeightNotification, HostOrigin, PersistedKey, StorageRequest, WidgetFlags,
};
