//! Crate error type.
//!
//! The error surface is deliberately small: the only fatal condition is
//! wiring against a widget id that is not live. Malformed inbound signals
//! are ignored where they arrive, and outbound delivery failure is the
//! transport's concern.

use thiserror::Error;

use crate::server::registry::WidgetId;

/// Errors produced by this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TapdivError {
    /// The id does not refer to a live widget in the session's registry.
    ///
    /// Surfaces at setup time (binding a sensor to a nonexistent widget)
    /// or when the host misroutes a delivery.
    #[error("unknown widget id {0:?}")]
    UnknownWidget(WidgetId),
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn display_names_the_widget() {
        let mut sm: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let id = sm.insert(());
        let err = TapdivError::UnknownWidget(id);
        assert!(err.to_string().starts_with("unknown widget id"));
    }
}
