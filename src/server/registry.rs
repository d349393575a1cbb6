//! Widget registry: slotmap-backed arena of server-side div instances.

use slotmap::{new_key_type, SlotMap};

use crate::error::TapdivError;
use crate::protocol::VarMap;
use crate::server::div::TouchDiv;

new_key_type! {
    /// Unique identifier for a widget instance. Copy, lightweight (u64).
    pub struct WidgetId;
}

// ---------------------------------------------------------------------------
// WidgetRegistry
// ---------------------------------------------------------------------------

/// Holds every live [`TouchDiv`] for one UI session.
///
/// Ids are stable for the lifetime of the instance and never reused for a
/// removed widget (slotmap versioning), so a stale id from an in-flight
/// update can be detected rather than hitting the wrong widget.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    divs: SlotMap<WidgetId, TouchDiv>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a widget, returning its id.
    pub fn insert(&mut self, div: TouchDiv) -> WidgetId {
        self.divs.insert(div)
    }

    /// Remove a widget, returning it if it existed.
    pub fn remove(&mut self, id: WidgetId) -> Option<TouchDiv> {
        self.divs.remove(id)
    }

    /// Borrow a widget.
    pub fn get(&self, id: WidgetId) -> Option<&TouchDiv> {
        self.divs.get(id)
    }

    /// Mutably borrow a widget.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut TouchDiv> {
        self.divs.get_mut(id)
    }

    /// Whether the id refers to a live widget.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.divs.contains_key(id)
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.divs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.divs.is_empty()
    }

    /// Iterate over live widgets.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (WidgetId, &mut TouchDiv)> {
        self.divs.iter_mut()
    }

    /// Route one round-trip's variable map to a widget.
    ///
    /// Returns the number of listener invocations, or
    /// [`TapdivError::UnknownWidget`] when the id is not live — the host
    /// misrouted, which is a wiring bug rather than a normal signal.
    pub fn deliver(&mut self, id: WidgetId, vars: &VarMap) -> Result<usize, TapdivError> {
        let div = self
            .divs
            .get_mut(id)
            .ok_or(TapdivError::UnknownWidget(id))?;
        Ok(div.receive_update(id, vars))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{TOUCH_START, VAR_TOUCH};
    use crate::testing::Recorder;

    #[test]
    fn new_registry_is_empty() {
        let reg = WidgetRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn insert_and_get() {
        let mut reg = WidgetRegistry::new();
        let id = reg.insert(TouchDiv::new("a"));
        assert!(reg.contains(id));
        assert_eq!(reg.get(id).map(TouchDiv::label), Some("a"));
    }

    #[test]
    fn remove_returns_widget() {
        let mut reg = WidgetRegistry::new();
        let id = reg.insert(TouchDiv::new("a"));
        let div = reg.remove(id).expect("widget");
        assert_eq!(div.label(), "a");
        assert!(!reg.contains(id));
        assert!(reg.remove(id).is_none());
    }

    #[test]
    fn deliver_routes_to_widget() {
        let mut reg = WidgetRegistry::new();
        let id = reg.insert(TouchDiv::new("a"));
        let recorder = Recorder::new();
        reg.get_mut(id).unwrap().add_listener(recorder.clone());

        let invoked = reg
            .deliver(id, &VarMap::single(VAR_TOUCH, TOUCH_START))
            .unwrap();
        assert_eq!(invoked, 1);
        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.events()[0].source, id);
    }

    #[test]
    fn deliver_to_stale_id_errors() {
        let mut reg = WidgetRegistry::new();
        let id = reg.insert(TouchDiv::new("a"));
        reg.remove(id);

        let err = reg
            .deliver(id, &VarMap::single(VAR_TOUCH, TOUCH_START))
            .unwrap_err();
        assert!(matches!(err, TapdivError::UnknownWidget(stale) if stale == id));
    }

    #[test]
    fn deliver_does_not_cross_widgets() {
        let mut reg = WidgetRegistry::new();
        let a = reg.insert(TouchDiv::new("a"));
        let b = reg.insert(TouchDiv::new("b"));
        let rec_a = Recorder::new();
        let rec_b = Recorder::new();
        reg.get_mut(a).unwrap().add_listener(rec_a.clone());
        reg.get_mut(b).unwrap().add_listener(rec_b.clone());

        reg.deliver(a, &VarMap::single(VAR_TOUCH, TOUCH_START))
            .unwrap();
        assert_eq!(rec_a.count(), 1);
        assert_eq!(rec_b.count(), 0);
    }
}
