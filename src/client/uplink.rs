//! Uplink: the fire-and-forget client→server notification channel.
//!
//! Wraps an unbounded `tokio::sync::mpsc` sender. Delivery guarantees
//! beyond the in-process queue are the host transport's concern; from the
//! sensor's point of view a send never fails. If the receiving side has
//! gone away the update is dropped with a trace log.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::trace;

use crate::protocol::VarUpdate;

// ---------------------------------------------------------------------------
// Uplink
// ---------------------------------------------------------------------------

/// Sending half of the client→server update channel.
///
/// Cheap to clone; every sensor bound to the same session shares one
/// underlying channel.
#[derive(Debug, Clone)]
pub struct Uplink {
    tx: UnboundedSender<VarUpdate>,
}

impl Uplink {
    /// Wrap an existing sender.
    pub fn new(tx: UnboundedSender<VarUpdate>) -> Self {
        Self { tx }
    }

    /// Create a fresh channel, returning the uplink and its receiver.
    pub fn channel() -> (Self, UnboundedReceiver<VarUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Send an update, fire-and-forget.
    ///
    /// A closed channel drops the update silently; there is no retry and no
    /// error surfaced to the caller.
    pub fn send(&self, update: VarUpdate) {
        if self.tx.send(update).is_err() {
            trace!("uplink closed; update dropped");
        }
    }

    /// Whether the receiving side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{TOUCH_START, VAR_TOUCH};
    use crate::server::registry::WidgetId;
    use slotmap::SlotMap;

    fn make_id() -> WidgetId {
        let mut sm: SlotMap<WidgetId, ()> = SlotMap::with_key();
        sm.insert(())
    }

    #[test]
    fn send_and_receive() {
        let (uplink, mut rx) = Uplink::channel();
        let id = make_id();
        uplink.send(VarUpdate::immediate(id, VAR_TOUCH, TOUCH_START));

        let upd = tokio_test::block_on(rx.recv()).expect("update");
        assert_eq!(upd.widget, id);
        assert_eq!(upd.name, VAR_TOUCH);
    }

    #[test]
    fn send_preserves_order() {
        let (uplink, mut rx) = Uplink::channel();
        let id = make_id();
        uplink.send(VarUpdate::immediate(id, "a", 1i64));
        uplink.send(VarUpdate::immediate(id, "b", 2i64));

        assert_eq!(rx.try_recv().unwrap().name, "a");
        assert_eq!(rx.try_recv().unwrap().name, "b");
    }

    #[test]
    fn send_after_receiver_dropped_is_silent() {
        let (uplink, rx) = Uplink::channel();
        drop(rx);
        assert!(uplink.is_closed());
        uplink.send(VarUpdate::immediate(make_id(), VAR_TOUCH, TOUCH_START));
    }

    #[test]
    fn clones_share_the_channel() {
        let (uplink, mut rx) = Uplink::channel();
        let other = uplink.clone();
        let id = make_id();
        other.send(VarUpdate::immediate(id, VAR_TOUCH, TOUCH_START));
        assert!(rx.try_recv().is_ok());
    }
}
