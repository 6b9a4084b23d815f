use crate::messenger::{FrameMessenger, FramePort};
use frame_protocol::HeightNotification;
use log::debug;

/// Reads the heights the observer compares.
pub trait HeightSource {
    /// Viewport height at startup (`window.innerHeight`).
    fn window_height(&self) -> u32;

    /// Current rendered height of the root content node (`offsetHeight`).
    fn content_height(&self) -> u32;
}

/// Reports the widget's height to the host frame whenever it changes.
///
/// Owns the last reported height. Mutation events are delivered one at a
/// time, so no synchronization is needed.
#[derive(Debug)]
pub struct HeightObserver<S, P> {
    source: S,
    messenger: FrameMessenger<P>,
    observed: u32,
}

impl<S: HeightSource, P: FramePort> HeightObserver<S, P> {
    /// Record the initial window height and report it unconditionally.
    pub fn start(source: S, messenger: FrameMessenger<P>) -> Self {
        let observed = source.window_height();
        if let Err(err) = messenger.notify(HeightNotification::new(observed)) {
            debug!("initial height report dropped: {err}");
        }

        Self {
            source,
            messenger,
            observed,
        }
    }

    /// Re-measure after a structural change under the root node.
    ///
    /// Returns the notification when one was delivered.
    pub fn on_mutation(&mut self) -> Option<HeightNotification> {
        let height = self.source.content_height();
        if height == self.observed {
            return None;
        }

        let message = HeightNotification::new(height);
        match self.messenger.notify(message) {
            Ok(()) => {
                self.observed = height;
                Some(message)
            }
            Err(err) => {
                debug!("height {height} dropped: {err}");
                None
            }
        }
    }

    /// Last height reported to the host.
    pub fn observed_height(&self) -> u32 {
        self.observed
    }
}
