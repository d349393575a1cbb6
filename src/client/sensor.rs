//! Touch sensor: device classification and mouse-down suppression.
//!
//! Mobile browsers fire a synthetic `mousedown` a few hundred milliseconds
//! after `touchstart` as a compatibility shim. Without suppression the
//! server would see two interactions per touch. The sensor classifies the
//! device the first time it proves it can fire touch events, and from then
//! on drops every mouse-down for the lifetime of the widget instance.

use tracing::trace;

use crate::client::uplink::Uplink;
use crate::event::pointer::{PointerEvent, PointerKind};
use crate::protocol::{VarUpdate, TOUCH_START, VAR_TOUCH};
use crate::server::registry::WidgetId;

// ---------------------------------------------------------------------------
// DeviceClass
// ---------------------------------------------------------------------------

/// Per-instance device classification.
///
/// Two states: `Unclassified` (initial) and `TouchDevice` (terminal,
/// entered on the first touch-start, never exited). The latch is permanent:
/// a device that has fired one touch event is assumed to prefer that
/// channel for the lifetime of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// No touch event observed yet; mouse-downs are genuine interactions.
    #[default]
    Unclassified,
    /// A touch event has been observed; mouse-downs are synthetic echoes.
    TouchDevice,
}

impl DeviceClass {
    /// The state after observing a touch-start.
    pub fn after_touch_start(self) -> Self {
        DeviceClass::TouchDevice
    }

    /// Whether mouse-down events should be suppressed in this state.
    pub fn suppresses_mouse_down(self) -> bool {
        matches!(self, DeviceClass::TouchDevice)
    }
}

// ---------------------------------------------------------------------------
// TouchSensor
// ---------------------------------------------------------------------------

/// Client-side touch sensor bound to one widget instance.
///
/// Produces at most one outbound notification per genuine user interaction
/// and forwards it over the uplink immediately (no batching). The sensor
/// runs on the client's single UI thread; no synchronization is needed.
#[derive(Debug)]
pub struct TouchSensor {
    widget: WidgetId,
    class: DeviceClass,
    uplink: Uplink,
}

impl TouchSensor {
    /// Create a sensor for the given widget, initially unclassified.
    pub fn new(widget: WidgetId, uplink: Uplink) -> Self {
        Self {
            widget,
            class: DeviceClass::Unclassified,
            uplink,
        }
    }

    /// The widget instance this sensor reports for.
    pub fn widget(&self) -> WidgetId {
        self.widget
    }

    /// Current device classification.
    pub fn device_class(&self) -> DeviceClass {
        self.class
    }

    /// Route a pointer event to the matching handler.
    ///
    /// Kinds other than touch-start and mouse-down are ignored.
    pub fn handle(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerKind::TouchStart => self.on_touch_start(event),
            PointerKind::MouseDown => self.on_mouse_down(event),
            PointerKind::TouchEnd | PointerKind::MouseUp => {}
        }
    }

    /// Handle a touch-start: latch the classification and notify.
    ///
    /// Always emits a signal, regardless of the current state.
    pub fn on_touch_start(&mut self, _event: &PointerEvent) {
        self.class = self.class.after_touch_start();
        self.notify();
    }

    /// Handle a mouse-down.
    ///
    /// On a touch device this is the delayed synthetic follow-up to an
    /// already-reported touch and is dropped. Otherwise it is the genuine
    /// interaction on a non-touch device and emits the same signal. The
    /// classification is never changed here; mouse-only devices stay
    /// unclassified forever.
    pub fn on_mouse_down(&mut self, _event: &PointerEvent) {
        if self.class.suppresses_mouse_down() {
            trace!(widget = ?self.widget, "mouse-down suppressed after touch");
            return;
        }
        self.notify();
    }

    fn notify(&self) {
        self.uplink
            .send(VarUpdate::immediate(self.widget, VAR_TOUCH, TOUCH_START));
    }
}

// ===========================================================================
// Tests
// ===========================================================================
