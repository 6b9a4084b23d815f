use crate::config::BuildConfig;
use crate::messenger::{FrameMessenger, FramePort};
use crate::observer::{HeightObserver, HeightSource};
use crate::store::KeyValueStore;
use crate::Result;
use frame_protocol::{HeightNotification, HostOrigin, PersistedKey, StorageRequest, WidgetFlags};
use log::info;

/// A running widget embedded in a host frame.
///
/// Ties the resolved host origin, the height observer and the persisted
/// store together for the lifetime of the page.
#[derive(Debug)]
pub struct WidgetSession<S, P, K> {
    origin: HostOrigin,
    flags: WidgetFlags,
    observer: HeightObserver<S, P>,
    store: K,
}

impl<S, P, K> WidgetSession<S, P, K>
where
    S: HeightSource,
    P: FramePort,
    K: KeyValueStore,
{
    /// Start the widget from its own document URL.
    ///
    /// Fails without sending anything when `host_url` is absent or invalid.
    /// On success the initial height has been reported.
    pub fn start(
        document_url: &str,
        config: &BuildConfig,
        source: S,
        port: P,
        store: K,
    ) -> Result<Self> {
        let origin = HostOrigin::from_document_url(document_url)?;
        info!("embedding for host origin {origin}");

        let flags = WidgetFlags {
            api_endpoint: config.api_endpoint.clone(),
            site_url: origin.to_string(),
            anonymous_username: store.get(PersistedKey::AnonymousUsername.as_str())?,
            git_ref: config.git_ref.clone(),
            session_token: store.get(PersistedKey::SessionToken.as_str())?,
        };

        let observer = HeightObserver::start(source, FrameMessenger::new(origin.clone(), port));

        Ok(Self {
            origin,
            flags,
            observer,
            store,
        })
    }

    /// Origin every notification is restricted to.
    pub fn origin(&self) -> &HostOrigin {
        &self.origin
    }

    /// Startup values for the widget application.
    pub fn flags(&self) -> &WidgetFlags {
        &self.flags
    }

    /// The height observer.
    pub fn observer(&self) -> &HeightObserver<S, P> {
        &self.observer
    }

    /// The persisted store.
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Forward a structural change event to the observer.
    pub fn on_mutation(&mut self) -> Option<HeightNotification> {
        self.observer.on_mutation()
    }

    /// Apply a write or delete request from the widget application.
    pub fn handle_storage(&mut self, request: &StorageRequest) -> Result<()> {
        self.store.apply(request)
    }
}
