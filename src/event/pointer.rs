//! Pointer input events, decoupled from any concrete DOM backend.
//!
//! The client sensor consumes these instead of raw browser events, so the
//! disambiguation logic never depends on the host's event plumbing. Only
//! [`PointerKind::TouchStart`] and [`PointerKind::MouseDown`] carry meaning
//! for this crate; the other kinds exist so a host binding can forward its
//! full pointer stream without filtering.

// ---------------------------------------------------------------------------
// PointerKind
// ---------------------------------------------------------------------------

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    TouchStart,
    TouchEnd,
    MouseDown,
    MouseUp,
}

// ---------------------------------------------------------------------------
// PointerEvent
// ---------------------------------------------------------------------------

/// A pointer event with kind and client coordinates.
///
/// Coordinates are in the client's own units (CSS pixels for a browser
/// host). The touch sensor ignores them; they are carried for host bindings
/// that route events by hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    /// Create a pointer event.
    pub fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    /// A touch-start at the given coordinates.
    pub fn touch_start(x: f64, y: f64) -> Self {
        Self::new(PointerKind::TouchStart, x, y)
    }

    /// A mouse-down at the given coordinates.
    pub fn mouse_down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::MouseDown, x, y)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
