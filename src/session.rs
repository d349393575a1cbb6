//! Session: wires the widget registry to the uplink channel.
//!
//! [`Session`] owns the server-side registry and both ends of the
//! client→server channel. The host framework drives it from its per-session
//! request path: `pump` drains pending updates, `render` collects painted
//! attributes for widgets that requested a repaint. All state is scoped to
//! one UI session and touched from a single logical thread.

use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::client::sensor::TouchSensor;
use crate::client::uplink::Uplink;
use crate::error::TapdivError;
use crate::protocol::{VarMap, VarUpdate};
use crate::server::div::TouchDiv;
use crate::server::registry::{WidgetId, WidgetRegistry};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One UI session: registry plus the update channel.
#[derive(Debug)]
pub struct Session {
    registry: WidgetRegistry,
    tx: UnboundedSender<VarUpdate>,
    rx: UnboundedReceiver<VarUpdate>,
}

impl Session {
    /// Create an empty session with a fresh channel.
    pub fn new() -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Self {
            registry: WidgetRegistry::new(),
            tx,
            rx,
        }
    }

    /// Insert a widget, returning its id.
    pub fn insert(&mut self, div: TouchDiv) -> WidgetId {
        self.registry.insert(div)
    }

    /// Remove a widget.
    pub fn remove(&mut self, id: WidgetId) -> Option<TouchDiv> {
        self.registry.remove(id)
    }

    /// Borrow a widget.
    pub fn widget(&self, id: WidgetId) -> Option<&TouchDiv> {
        self.registry.get(id)
    }

    /// Mutably borrow a widget.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut TouchDiv> {
        self.registry.get_mut(id)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Create a client sensor bound to a registered widget.
    ///
    /// Fails fast with [`TapdivError::UnknownWidget`] when the id is not
    /// registered: a sensor for a nonexistent widget is a configuration
    /// error and must surface at setup time, not during request handling.
    pub fn connect(&self, id: WidgetId) -> Result<TouchSensor, TapdivError> {
        if !self.registry.contains(id) {
            return Err(TapdivError::UnknownWidget(id));
        }
        Ok(TouchSensor::new(id, Uplink::new(self.tx.clone())))
    }

    /// Drain and deliver all pending updates.
    ///
    /// Immediate updates are never batched: each one is delivered as its
    /// own singleton round-trip map. Updates addressed to a widget removed
    /// while the update was in flight are dropped with a warning — the
    /// interaction raced the removal, which is not an error.
    ///
    /// Returns the total number of listener invocations.
    pub fn pump(&mut self) -> usize {
        let mut invoked = 0;
        loop {
            let update = match self.rx.try_recv() {
                Ok(update) => update,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            };
            let vars = VarMap::single(update.name, update.value);
            match self.registry.deliver(update.widget, &vars) {
                Ok(n) => invoked += n,
                Err(TapdivError::UnknownWidget(id)) => {
                    warn!(widget = ?id, "update for removed widget dropped");
                }
            }
        }
        invoked
    }

    /// Collect painted attributes for every widget with a pending repaint.
    ///
    /// Clears the repaint flags. Widgets without a pending repaint are not
    /// painted — the host only pushes what changed.
    pub fn render(&mut self) -> Vec<(WidgetId, VarMap)> {
        let mut out = Vec::new();
        for (id, div) in self.registry.iter_mut() {
            if div.take_repaint() {
                out.push((id, div.paint()));
            }
        }
        out
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::pointer::PointerEvent;
    use crate::protocol::{VarValue, ATTR_CLICKS, ATTR_LABEL};
    use crate::testing::Recorder;

    #[test]
    fn connect_to_registered_widget() {
        let mut session = Session::new();
        let id = session.insert(TouchDiv::new("a"));
        let sensor = session.connect(id).expect("sensor");
        assert_eq!(sensor.widget(), id);
    }

    #[test]
    fn connect_to_unknown_widget_fails_fast() {
        let mut session = Session::new();
        let id = session.insert(TouchDiv::new("a"));
        session.remove(id);
        let err = session.connect(id).unwrap_err();
        assert!(matches!(err, TapdivError::UnknownWidget(stale) if stale == id));
    }

    #[test]
    fn pump_delivers_sensor_updates() {
        let mut session = Session::new();
        let id = session.insert(TouchDiv::new("a"));
        let recorder = Recorder::new();
        session.widget_mut(id).unwrap().add_listener(recorder.clone());

        let mut sensor = session.connect(id).unwrap();
        sensor.on_touch_start(&PointerEvent::touch_start(0.0, 0.0));

        assert_eq!(session.pump(), 1);
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn pump_with_nothing_pending() {
        let mut session = Session::new();
        assert_eq!(session.pump(), 0);
    }

    #[test]
    fn pump_drops_updates_for_removed_widget() {
        let mut session = Session::new();
        let id = session.insert(TouchDiv::new("a"));
        let mut sensor = session.connect(id).unwrap();
        sensor.on_touch_start(&PointerEvent::touch_start(0.0, 0.0));
        session.remove(id);

        // The in-flight update is dropped, not an error.
        assert_eq!(session.pump(), 0);
    }

    #[test]
    fn render_paints_only_repaint_flagged_widgets() {
        let mut session = Session::new();
        let a = session.insert(TouchDiv::new("a"));
        let _b = session.insert(TouchDiv::new("b"));
        session.widget_mut(a).unwrap().set_label("a2");

        let painted = session.render();
        assert_eq!(painted.len(), 1);
        assert_eq!(painted[0].0, a);
        assert_eq!(
            painted[0].1.get(ATTR_LABEL).and_then(VarValue::as_str),
            Some("a2")
        );

        // Flags are cleared; a second render paints nothing.
        assert!(session.render().is_empty());
    }

    #[test]
    fn touch_round_trip_requests_repaint() {
        let mut session = Session::new();
        let id = session.insert(TouchDiv::new("a").instrumented(true));
        let mut sensor = session.connect(id).unwrap();
        sensor.on_touch_start(&PointerEvent::touch_start(0.0, 0.0));
        session.pump();

        let painted = session.render();
        assert_eq!(painted.len(), 1);
        assert_eq!(
            painted[0].1.get(ATTR_CLICKS).and_then(VarValue::as_int),
            Some(1)
        );
    }
}
