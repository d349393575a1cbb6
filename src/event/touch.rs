//! Typed touch events and listener registration.
//!
//! [`TouchEvent`] is constructed fresh for every recognized signal, handed
//! to each listener, and discarded — it is never stored. [`ListenerSet`]
//! holds callbacks in registration order; removal matches by identity of
//! the registered [`Rc`] handle, so the same handle that was added must be
//! used to remove.

use std::rc::Rc;

use crate::server::registry::WidgetId;

// ---------------------------------------------------------------------------
// TouchKind
// ---------------------------------------------------------------------------

/// Classification tag for a touch event.
///
/// Only `Start` is produced today; the tag exists so a touch-end signal can
/// be added without reshaping the dispatch path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchKind {
    Start,
}

// ---------------------------------------------------------------------------
// TouchEvent
// ---------------------------------------------------------------------------

/// A dispatched touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    /// The widget instance that produced the signal.
    pub source: WidgetId,
    /// Classification tag.
    pub kind: TouchKind,
}

impl TouchEvent {
    /// Create a new touch event.
    pub fn new(source: WidgetId, kind: TouchKind) -> Self {
        Self { source, kind }
    }
}

// ---------------------------------------------------------------------------
// TouchListener
// ---------------------------------------------------------------------------

/// Single-method listener capability.
///
/// Takes `&self`: listener implementations that accumulate state use
/// interior mutability (see [`crate::testing::Recorder`]). Dispatch is
/// synchronous and single-threaded, so no `Send` bound is required.
pub trait TouchListener {
    /// Called once per dispatched touch event.
    fn on_touch(&self, event: &TouchEvent);
}

/// A registered listener handle.
///
/// Equality for removal purposes is identity of this handle
/// (`Rc::ptr_eq`), not structural equality of the listener.
pub type Listener = Rc<dyn TouchListener>;

// ---------------------------------------------------------------------------
// ListenerSet
// ---------------------------------------------------------------------------

/// An ordered collection of touch listeners.
///
/// Insertion order is invocation order. Registering the same handle twice
/// is allowed and invokes it twice per dispatch; removal takes out the
/// first identity match only.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener. Duplicates are not deduplicated.
    pub fn add(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Remove the first registration matching `listener` by identity.
    ///
    /// Removing a listener that is not registered is a no-op; returns
    /// whether anything was removed.
    pub fn remove(&mut self, listener: &Listener) -> bool {
        match self
            .listeners
            .iter()
            .position(|l| Rc::ptr_eq(l, listener))
        {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Invoke every listener in registration order.
    ///
    /// Returns the number of invocations.
    pub fn dispatch(&self, event: &TouchEvent) -> usize {
        for listener in &self.listeners {
            listener.on_touch(event);
        }
        self.listeners.len()
    }

    /// Number of registrations (duplicates counted).
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.listeners.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use slotmap::SlotMap;

    struct Counter {
        calls: Cell<usize>,
    }

    impl Counter {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                calls: Cell::new(0),
            })
        }
    }

    impl TouchListener for Counter {
        fn on_touch(&self, _event: &TouchEvent) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn make_id() -> WidgetId {
        let mut sm: SlotMap<WidgetId, ()> = SlotMap::with_key();
        sm.insert(())
    }

    fn start_event() -> TouchEvent {
        TouchEvent::new(make_id(), TouchKind::Start)
    }

    // ── TouchEvent ───────────────────────────────────────────────────

    #[test]
    fn event_carries_source_and_kind() {
        let id = make_id();
        let ev = TouchEvent::new(id, TouchKind::Start);
        assert_eq!(ev.source, id);
        assert_eq!(ev.kind, TouchKind::Start);
    }

    // ── ListenerSet ──────────────────────────────────────────────────

    #[test]
    fn new_set_is_empty() {
        let set = ListenerSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn dispatch_invokes_each_listener_once() {
        let mut set = ListenerSet::new();
        let a = Counter::new();
        let b = Counter::new();
        set.add(a.clone());
        set.add(b.clone());

        let invoked = set.dispatch(&start_event());
        assert_eq!(invoked, 2);
        assert_eq!(a.calls.get(), 1);
        assert_eq!(b.calls.get(), 1);
    }

    #[test]
    fn dispatch_empty_set() {
        let set = ListenerSet::new();
        assert_eq!(set.dispatch(&start_event()), 0);
    }

    #[test]
    fn duplicate_registration_invoked_twice() {
        let mut set = ListenerSet::new();
        let a = Counter::new();
        set.add(a.clone());
        set.add(a.clone());
        assert_eq!(set.len(), 2);

        set.dispatch(&start_event());
        assert_eq!(a.calls.get(), 2);
    }

    #[test]
    fn remove_by_identity() {
        let mut set = ListenerSet::new();
        let a = Counter::new();
        let b = Counter::new();
        let a_handle: Listener = a.clone();
        set.add(a_handle.clone());
        set.add(b.clone());

        assert!(set.remove(&a_handle));
        assert_eq!(set.len(), 1);

        set.dispatch(&start_event());
        assert_eq!(a.calls.get(), 0);
        assert_eq!(b.calls.get(), 1);
    }

    #[test]
    fn remove_unregistered_is_noop() {
        let mut set = ListenerSet::new();
        let a: Listener = Counter::new();
        assert!(!set.remove(&a));
        assert!(set.is_empty());
    }

    #[test]
    fn remove_takes_first_duplicate_only() {
        let mut set = ListenerSet::new();
        let a = Counter::new();
        let handle: Listener = a.clone();
        set.add(handle.clone());
        set.add(handle.clone());

        assert!(set.remove(&handle));
        assert_eq!(set.len(), 1);

        set.dispatch(&start_event());
        assert_eq!(a.calls.get(), 1);
    }

    #[test]
    fn distinct_instances_are_not_identical() {
        let mut set = ListenerSet::new();
        let a: Listener = Counter::new();
        let b: Listener = Counter::new();
        set.add(a);
        // b was never added; removing it must not disturb a.
        assert!(!set.remove(&b));
        assert_eq!(set.len(), 1);
    }
}
