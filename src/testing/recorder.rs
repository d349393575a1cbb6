//! Recording listeners for tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::event::touch::{TouchEvent, TouchListener};

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

/// A listener that records every event it receives.
///
/// Created behind an `Rc` so the same handle serves as the registration
/// and the assertion side.
#[derive(Debug, Default)]
pub struct Recorder {
    events: RefCell<Vec<TouchEvent>>,
}

impl Recorder {
    /// Create a shared recorder.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of events recorded.
    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    /// Snapshot of the recorded events, in arrival order.
    pub fn events(&self) -> Vec<TouchEvent> {
        self.events.borrow().clone()
    }

    /// The most recently recorded event.
    pub fn last(&self) -> Option<TouchEvent> {
        self.events.borrow().last().copied()
    }

    /// Discard all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl TouchListener for Recorder {
    fn on_touch(&self, event: &TouchEvent) {
        self.events.borrow_mut().push(*event);
    }
}

// ---------------------------------------------------------------------------
// TagListener
// ---------------------------------------------------------------------------

/// A log shared between [`TagListener`]s.
pub type SharedLog = Rc<RefCell<Vec<String>>>;

/// Create an empty shared log.
pub fn shared_log() -> SharedLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// A listener that appends its tag to a shared log on every event.
///
/// Registering several tag listeners over one log makes relative
/// invocation order observable.
#[derive(Debug)]
pub struct TagListener {
    tag: String,
    log: SharedLog,
}

impl TagListener {
    /// Create a shared tag listener writing into `log`.
    pub fn new(tag: impl Into<String>, log: SharedLog) -> Rc<Self> {
        Rc::new(Self {
            tag: tag.into(),
            log,
        })
    }
}

impl TouchListener for TagListener {
    fn on_touch(&self, _event: &TouchEvent) {
        self.log.borrow_mut().push(self.tag.clone());
    }
}

// ===========================================================================
// Tests
// ===========================================================================
