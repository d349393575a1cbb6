//! TouchDiv: the server-side div component.
//!
//! Receives variable updates from its client counterpart, recognizes the
//! touch signal, dispatches a [`TouchEvent`] to registered listeners in
//! registration order, and requests a repaint. Everything else in an
//! inbound map is left untouched for the host's inherited handling.

use tracing::{debug, trace};

use crate::event::touch::{Listener, ListenerSet, TouchEvent, TouchKind};
use crate::protocol::{VarMap, ATTR_CLICKS, ATTR_LABEL, TOUCH_START, VAR_TOUCH};
use crate::server::registry::WidgetId;

// ---------------------------------------------------------------------------
// TouchDiv
// ---------------------------------------------------------------------------

/// A div component that reacts to touch-start signals.
///
/// Listener dispatch is synchronous and blocking relative to the
/// triggering round-trip; a slow listener delays the response.
///
/// # Examples
///
/// ```ignore
/// let div = TouchDiv::new("Tap me").instrumented(true);
/// ```
pub struct TouchDiv {
    label: String,
    instrumented: bool,
    clicks: u64,
    listeners: ListenerSet,
    repaint: bool,
}

impl TouchDiv {
    /// Create a new div with the given label, instrumentation disabled.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instrumented: false,
            clicks: 0,
            listeners: ListenerSet::new(),
            repaint: false,
        }
    }

    /// Enable or disable counter instrumentation (builder).
    ///
    /// When enabled, [`paint`](Self::paint) includes the click counter.
    /// The counter is maintained either way.
    pub fn instrumented(mut self, instrumented: bool) -> Self {
        self.instrumented = instrumented;
        self
    }

    /// The current label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Change the label and request a repaint.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.repaint = true;
    }

    /// Whether counter instrumentation is enabled.
    pub fn is_instrumented(&self) -> bool {
        self.instrumented
    }

    /// Number of touch signals dispatched so far.
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Register a listener. Appended after existing registrations;
    /// registering the same handle twice invokes it twice.
    pub fn add_listener(&mut self, listener: Listener) {
        self.listeners.add(listener);
    }

    /// Unregister a listener by identity of its handle.
    ///
    /// Removing a listener that is not registered is a no-op. Returns
    /// whether anything was removed.
    pub fn remove_listener(&mut self, listener: &Listener) -> bool {
        self.listeners.remove(listener)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Process one round-trip's variable map.
    ///
    /// Only the `"touch"` entry is examined. If its value is the string
    /// `"start"`, one [`TouchEvent`] is constructed and dispatched to every
    /// listener in registration order, the counter is bumped, and a repaint
    /// is requested. Any other value, or no entry at all, means nothing
    /// happened this round — never an error. Other entries are not
    /// consumed; the host forwards them to its own handling.
    ///
    /// Returns the number of listener invocations.
    pub fn receive_update(&mut self, id: WidgetId, vars: &VarMap) -> usize {
        match vars.get(VAR_TOUCH) {
            Some(value) if value.as_str() == Some(TOUCH_START) => {
                self.clicks += 1;
                self.repaint = true;
                let event = TouchEvent::new(id, TouchKind::Start);
                let invoked = self.listeners.dispatch(&event);
                debug!(widget = ?id, listeners = invoked, "touch start dispatched");
                invoked
            }
            Some(value) => {
                trace!(widget = ?id, ?value, "unrecognized touch value ignored");
                0
            }
            None => 0,
        }
    }

    /// Emit this widget's attributes for the next render pass.
    ///
    /// The label is always present; the click counter only when
    /// instrumentation is enabled.
    pub fn paint(&self) -> VarMap {
        let mut attrs = VarMap::single(ATTR_LABEL, self.label.as_str());
        if self.instrumented {
            attrs.insert(ATTR_CLICKS, self.clicks as i64);
        }
        attrs
    }

    /// Take the repaint request, clearing it.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }

    /// Whether a repaint is pending (without clearing it).
    pub fn needs_repaint(&self) -> bool {
        self.repaint
    }
}

impl std::fmt::Debug for TouchDiv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TouchDiv")
            .field("label", &self.label)
            .field("instrumented", &self.instrumented)
            .field("clicks", &self.clicks)
            .field("listeners", &self.listeners)
            .field("repaint", &self.repaint)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
