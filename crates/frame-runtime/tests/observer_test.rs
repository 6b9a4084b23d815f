use frame_runtime::{
    DeliveryError, FrameMessenger, FramePort, HeightNotification, HeightObserver, HeightSource,
    HostOrigin,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone)]
struct ScriptedHeights {
    window: u32,
    content: Rc<Cell<u32>>,
}

impl HeightSource for ScriptedHeights {
    fn window_height(&self) -> u32 {
        self.window
    }

    fn content_height(&self) -> u32 {
        self.content.get()
    }
}

#[derive(Debug, Clone, Default)]
struct RecordingPort {
    sent: Rc<RefCell<Vec<(String, HeightNotification)>>>,
    detached: Rc<Cell<bool>>,
}

impl FramePort for RecordingPort {
    fn post(
        &self,
        origin: &HostOrigin,
        message: &HeightNotification,
    ) -> Result<(), DeliveryError> {
        if self.detached.get() {
            return Err(DeliveryError::new("parent frame is gone"));
        }
        self.sent
            .borrow_mut()
            .push((origin.to_string(), *message));
        Ok(())
    }
}

fn observer_with(
    window: u32,
) -> (
    HeightObserver<ScriptedHeights, RecordingPort>,
    Rc<Cell<u32>>,
    RecordingPort,
) {
    let content = Rc::new(Cell::new(window));
    let port = RecordingPort::default();
    let origin = HostOrigin::from_host_url("https://example.com/page").unwrap();
    let observer = HeightObserver::start(
        ScriptedHeights {
            window,
            content: Rc::clone(&content),
        },
        FrameMessenger::new(origin, port.clone()),
    );
    (observer, content, port)
}

fn heights(port: &RecordingPort) -> Vec<u32> {
    port.sent.borrow().iter().map(|(_, m)| m.height).collect()
}

#[test]
fn initial_height_is_reported_unconditionally() {
    let (observer, _content, port) = observer_with(400);

    assert_eq!(heights(&port), vec![400]);
    assert_eq!(observer.observed_height(), 400);
}

#[test]
fn growth_then_unchanged_mutation_matches_embedding_scenario() {
    let (mut observer, content, port) = observer_with(400);

    content.set(650);
    assert_eq!(observer.on_mutation(), Some(HeightNotification::new(650)));

    assert_eq!(observer.on_mutation(), None);

    let sent = port.sent.borrow();
    assert_eq!(
        *sent,
        vec![
            ("https://example.com".to_string(), HeightNotification::new(400)),
            ("https://example.com".to_string(), HeightNotification::new(650)),
        ]
    );
}

#[test]
fn notifications_count_only_changes() {
    let (mut observer, content, port) = observer_with(300);
    let measured = [300, 300, 420, 420, 420, 380, 0, 0, 300, 301];

    let mut previous = 300;
    let mut changes = 0;
    for height in measured {
        content.set(height);
        observer.on_mutation();
        if height != previous {
            changes += 1;
            previous = height;
        }
    }

    assert_eq!(port.sent.borrow().len(), 1 + changes);
    assert_eq!(heights(&port), vec![300, 420, 380, 0, 300, 301]);
}

#[test]
fn shrinking_to_zero_is_a_change() {
    let (mut observer, content, port) = observer_with(200);

    content.set(0);
    assert_eq!(observer.on_mutation(), Some(HeightNotification::new(0)));
    assert_eq!(heights(&port), vec![200, 0]);
}

#[test]
fn every_message_targets_the_host_origin_only() {
    let (mut observer, content, port) = observer_with(100);
    for height in [150, 175, 90] {
        content.set(height);
        observer.on_mutation();
    }

    assert!(port
        .sent
        .borrow()
        .iter()
        .all(|(origin, _)| origin == "https://example.com"));
}

#[test]
fn failed_delivery_is_dropped_without_advancing_observed_height() {
    let (mut observer, content, port) = observer_with(400);

    port.detached.set(true);
    content.set(500);
    assert_eq!(observer.on_mutation(), None);
    assert_eq!(observer.observed_height(), 400);

    port.detached.set(false);
    assert_eq!(observer.on_mutation(), Some(HeightNotification::new(500)));
    assert_eq!(heights(&port), vec![400, 500]);
}
