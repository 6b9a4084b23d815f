//! Browser bindings for the widget runtime.
//!
//! Only compiled on `wasm32` targets. Example usage from the widget's entry
//! script:
//!
//! ```ignore
//! // JavaScript, not a Rust doctest
//! import init, { mountWidget } from "frame-runtime";
//!
//! await init();
//! const widget = mountWidget();
//! const app = Elm.Main.init({ node, flags: widget.flags() });
//! app.ports.writeToLocalStorage.subscribe(([key, value]) => widget.writeToStorage(key, value));
//! app.ports.removeToken.subscribe(() => widget.removeToken());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use frame_protocol::{HeightNotification, HostOrigin, StorageRequest};
use js_sys::Array;
use log::{warn, Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MutationObserver, MutationObserverInit, Storage, Window};

use crate::{
    BuildConfig, DeliveryError, FramePort, HeightSource, KeyValueStore, Result, WidgetError,
    WidgetSession,
};

type BrowserSession = WidgetSession<DomHeights, ParentFrame, LocalStore>;

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn browser_error(value: JsValue) -> WidgetError {
    WidgetError::Browser(js_message(value))
}

fn css_pixels(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

/// Heights read from the live document.
struct DomHeights {
    window: Window,
    root: HtmlElement,
}

impl HeightSource for DomHeights {
    fn window_height(&self) -> u32 {
        self.window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .map(css_pixels)
            .unwrap_or(0)
    }

    fn content_height(&self) -> u32 {
        u32::try_from(self.root.offset_height()).unwrap_or(0)
    }
}

/// `window.parent.postMessage` adapter.
struct ParentFrame {
    window: Window,
}

impl FramePort for ParentFrame {
    fn post(
        &self,
        origin: &HostOrigin,
        message: &HeightNotification,
    ) -> std::result::Result<(), DeliveryError> {
        let parent = self
            .window
            .parent()
            .map_err(|err| DeliveryError::new(js_message(err)))?
            .ok_or_else(|| DeliveryError::new("no parent frame"))?;

        let json = message
            .to_json()
            .map_err(|err| DeliveryError::new(err.to_string()))?;
        let payload =
            js_sys::JSON::parse(&json).map_err(|err| DeliveryError::new(js_message(err)))?;

        parent
            .post_message(&payload, origin.as_str())
            .map_err(|err| DeliveryError::new(js_message(err)))
    }
}

/// `window.localStorage` adapter.
struct LocalStore {
    storage: Storage,
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}

fn storage_error(value: JsValue) -> WidgetError {
    WidgetError::Storage(js_message(value))
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn install_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        log::set_max_level(level);
    }
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!("panic at {}:{}:{}: {info}", loc.file(), loc.line(), loc.column())
            } else {
                format!("panic: {info}")
            };
            web_sys::console::error_1(&JsValue::from_str(&msg));
        }));
    });
}

/// A mounted widget. Keep it alive for the lifetime of the page.
#[wasm_bindgen]
pub struct WidgetHandle {
    session: Rc<RefCell<BrowserSession>>,
    _observer: MutationObserver,
}

/// Resolve the host origin, report the initial height and start observing
/// `document.body`.
///
/// Throws when `host_url` is missing or invalid; nothing is posted then.
#[wasm_bindgen(js_name = mountWidget)]
pub fn mount_widget() -> std::result::Result<WidgetHandle, JsValue> {
    install_panic_hook();
    install_logger();

    let window =
        web_sys::window().ok_or_else(|| WidgetError::Browser("no global window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| WidgetError::Browser("no document".to_string()))?;
    let href = window.location().href().map_err(browser_error)?;
    let root = document
        .body()
        .ok_or_else(|| WidgetError::MissingRoot("document.body".to_string()))?;
    let storage = window
        .local_storage()
        .map_err(browser_error)?
        .ok_or_else(|| WidgetError::Storage("localStorage unavailable".to_string()))?;

    let config = BuildConfig::compiled()?;
    let session = WidgetSession::start(
        &href,
        &config,
        DomHeights {
            window: window.clone(),
            root: root.clone(),
        },
        ParentFrame { window },
        LocalStore { storage },
    )?;
    let session = Rc::new(RefCell::new(session));

    let observed = Rc::clone(&session);
    let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
        move |_records: Array, _observer: MutationObserver| {
            observed.borrow_mut().on_mutation();
        },
    );
    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    // The page owns the observer from here on.
    callback.forget();

    let options = MutationObserverInit::new();
    options.set_subtree(true);
    options.set_child_list(true);
    options.set_attributes(true);
    observer.observe_with_options(&root, &options)?;

    Ok(WidgetHandle {
        session,
        _observer: observer,
    })
}

#[wasm_bindgen]
impl WidgetHandle {
    /// Startup flags for the widget application, as a plain object.
    pub fn flags(&self) -> std::result::Result<JsValue, JsValue> {
        let json = self
            .session
            .borrow()
            .flags()
            .to_json()
            .map_err(WidgetError::from)?;
        js_sys::JSON::parse(&json)
    }

    /// Origin notifications are posted to.
    #[wasm_bindgen(js_name = hostOrigin)]
    pub fn host_origin(&self) -> String {
        self.session.borrow().origin().to_string()
    }

    /// Last height reported to the host.
    #[wasm_bindgen(js_name = observedHeight)]
    pub fn observed_height(&self) -> u32 {
        self.session.borrow().observer().observed_height()
    }

    /// Persist a value written by the widget application.
    #[wasm_bindgen(js_name = writeToStorage)]
    pub fn write_to_storage(&self, key: &str, value: &str) -> std::result::Result<(), JsValue> {
        let request = StorageRequest::write(key, value).map_err(|err| {
            warn!("rejected storage write: {err}");
            WidgetError::from(err)
        })?;
        self.session.borrow_mut().handle_storage(&request)?;
        Ok(())
    }

    /// Forget the session token (sign-out).
    #[wasm_bindgen(js_name = removeToken)]
    pub fn remove_token(&self) -> std::result::Result<(), JsValue> {
        self.session
            .borrow_mut()
            .handle_storage(&StorageRequest::remove_token())?;
        Ok(())
    }
}
