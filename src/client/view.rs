//! Client-side view state for the div widget.
//!
//! Applies attributes painted by the server on a render pass: the label
//! always, and the click counter only when the view was built with
//! `show_clicks` enabled. The counter display is optional instrumentation;
//! nothing reads it back into interaction logic.

use crate::protocol::{VarMap, VarValue, ATTR_CLICKS, ATTR_LABEL};

// ---------------------------------------------------------------------------
// DivView
// ---------------------------------------------------------------------------

/// Rendered state of the div on the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DivView {
    label: String,
    clicks: Option<u64>,
    show_clicks: bool,
}

impl DivView {
    /// Create an empty view with the counter display disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the click-counter display (builder).
    pub fn show_clicks(mut self, show: bool) -> Self {
        self.show_clicks = show;
        self
    }

    /// The current label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The last counter value applied, if the display is enabled and the
    /// server has painted one.
    pub fn clicks(&self) -> Option<u64> {
        self.clicks
    }

    /// Apply a painted attribute map.
    ///
    /// Unknown attributes are ignored; attributes of the wrong type are
    /// ignored too (the server side controls the payload, so a mismatch is
    /// a host bug, not something the view can act on).
    pub fn apply(&mut self, attrs: &VarMap) {
        if let Some(VarValue::Str(label)) = attrs.get(ATTR_LABEL) {
            self.label = label.clone();
        }
        if self.show_clicks {
            if let Some(clicks) = attrs.get(ATTR_CLICKS).and_then(VarValue::as_int) {
                self.clicks = u64::try_from(clicks).ok();
            }
        }
    }

    /// The display string: the label, with the counter appended when shown.
    pub fn text(&self) -> String {
        match (self.show_clicks, self.clicks) {
            (true, Some(n)) => format!("{} ({})", self.label, n),
            _ => self.label.clone(),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
