use frame_runtime::{
    BuildConfig, BuildMode, DeliveryError, FramePort, HeightNotification, HeightSource,
    HostOrigin, KeyValueStore, MemoryStore, PersistedKey, StorageRequest, WidgetError,
    WidgetSession,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct FixedHeights(u32);

impl HeightSource for FixedHeights {
    fn window_height(&self) -> u32 {
        self.0
    }

    fn content_height(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
struct RecordingPort {
    sent: Rc<RefCell<Vec<(String, HeightNotification)>>>,
}

impl FramePort for RecordingPort {
    fn post(
        &self,
        origin: &HostOrigin,
        message: &HeightNotification,
    ) -> Result<(), DeliveryError> {
        self.sent
            .borrow_mut()
            .push((origin.to_string(), *message));
        Ok(())
    }
}

const WIDGET_URL: &str = "https://widget.example.net/?host_url=https%3A%2F%2Fexample.com%2Fpage";

fn development_config() -> BuildConfig {
    BuildConfig::new(
        BuildMode::Development,
        Some("https://api.example.net".to_string()),
        None,
    )
    .unwrap()
}

#[test]
fn missing_host_url_fails_before_any_notification() {
    let port = RecordingPort::default();
    let err = WidgetSession::start(
        "https://widget.example.net/",
        &development_config(),
        FixedHeights(400),
        port.clone(),
        MemoryStore::new(),
    )
    .expect_err("host_url is required");

    assert!(matches!(
        err,
        WidgetError::Protocol(frame_protocol::Error::MissingHostUrl)
    ));
    assert!(port.sent.borrow().is_empty());
}

#[test]
fn start_reports_initial_height_to_host_origin() {
    let port = RecordingPort::default();
    let session = WidgetSession::start(
        WIDGET_URL,
        &development_config(),
        FixedHeights(400),
        port.clone(),
        MemoryStore::new(),
    )
    .unwrap();

    assert_eq!(session.origin().as_str(), "https://example.com");
    assert_eq!(
        *port.sent.borrow(),
        vec![("https://example.com".to_string(), HeightNotification::new(400))]
    );
}

#[test]
fn flags_carry_config_origin_and_persisted_values() {
    let store = MemoryStore::new()
        .with_entry("sessionToken", "tok-1")
        .with_entry("anonymousUsername", "guest-42");

    let session = WidgetSession::start(
        WIDGET_URL,
        &development_config(),
        FixedHeights(10),
        RecordingPort::default(),
        store,
    )
    .unwrap();

    let flags = session.flags();
    assert_eq!(flags.api_endpoint.as_deref(), Some("https://api.example.net"));
    assert_eq!(flags.site_url, "https://example.com");
    assert_eq!(flags.session_token.as_deref(), Some("tok-1"));
    assert_eq!(flags.anonymous_username.as_deref(), Some("guest-42"));
    assert_eq!(flags.git_ref, None);
}

#[test]
fn storage_requests_reach_the_store() {
    let mut session = WidgetSession::start(
        WIDGET_URL,
        &development_config(),
        FixedHeights(10),
        RecordingPort::default(),
        MemoryStore::new().with_entry("sessionToken", "tok-1"),
    )
    .unwrap();

    session
        .handle_storage(&StorageRequest::write("anonymousUsername", "guest-7").unwrap())
        .unwrap();
    session
        .handle_storage(&StorageRequest::remove_token())
        .unwrap();

    let store = session.store();
    assert_eq!(
        store.get(PersistedKey::AnonymousUsername.as_str()).unwrap(),
        Some("guest-7".to_string())
    );
    assert_eq!(store.get(PersistedKey::SessionToken.as_str()).unwrap(), None);
}

#[test]
fn read_only_store_surfaces_storage_error() {
    let mut session = WidgetSession::start(
        WIDGET_URL,
        &development_config(),
        FixedHeights(10),
        RecordingPort::default(),
        MemoryStore::new().read_only(),
    )
    .unwrap();

    let err = session
        .handle_storage(&StorageRequest::remove_token())
        .expect_err("read-only store");
    assert!(matches!(err, WidgetError::Storage(_)));
}
