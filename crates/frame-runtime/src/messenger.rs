use frame_protocol::{HeightNotification, HostOrigin};
use log::debug;
use thiserror::Error;

/// A message could not be handed to the host frame.
///
/// Typically the parent frame is gone. Callers drop the message.
#[derive(Debug, Error)]
#[error("frame delivery failed: {0}")]
pub struct DeliveryError(pub String);

impl DeliveryError {
    /// Create a delivery error with a reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// One-way outbound port to the parent frame.
pub trait FramePort {
    /// Post `message` to the parent frame, restricted to `origin`.
    fn post(
        &self,
        origin: &HostOrigin,
        message: &HeightNotification,
    ) -> Result<(), DeliveryError>;
}

/// Sends notifications to the single host frame the widget is embedded in.
#[derive(Debug, Clone)]
pub struct FrameMessenger<P> {
    origin: HostOrigin,
    port: P,
}

impl<P: FramePort> FrameMessenger<P> {
    /// Create a messenger bound to `origin`.
    pub fn new(origin: HostOrigin, port: P) -> Self {
        Self { origin, port }
    }

    /// Target origin of every message.
    pub fn origin(&self) -> &HostOrigin {
        &self.origin
    }

    /// Send once, without retry.
    pub fn notify(&self, message: HeightNotification) -> Result<(), DeliveryError> {
        debug!("posting height {} to {}", message.height, self.origin);
        self.port.post(&self.origin, &message)
    }
}
