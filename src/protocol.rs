//! Wire-facing value types shared by the client and server halves.
//!
//! The host framework moves state between the two sides as named variables:
//! client→server round-trips carry a [`VarMap`] of changed variables, and
//! the server's render pass pushes a [`VarMap`] of painted attributes back.
//! [`VarUpdate`] is a single outbound notification as produced by the
//! client sensor. Serde derives let the host transport carry these types;
//! this crate never serializes them itself.

use serde::{Deserialize, Serialize};

use crate::server::registry::WidgetId;

/// Variable name the server watches for the touch signal.
pub const VAR_TOUCH: &str = "touch";

/// The only recognized value for [`VAR_TOUCH`].
pub const TOUCH_START: &str = "start";

/// Painted attribute carrying the div's label.
pub const ATTR_LABEL: &str = "label";

/// Painted attribute carrying the instrumentation click counter.
pub const ATTR_CLICKS: &str = "clicks";

// ---------------------------------------------------------------------------
// VarValue
// ---------------------------------------------------------------------------

/// A variable or attribute value.
///
/// Serializes untagged, so `"start"`, `3`, and `true` appear as plain JSON
/// scalars on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl VarValue {
    /// Create a string value.
    pub fn str(s: impl Into<String>) -> Self {
        VarValue::Str(s.into())
    }

    /// Borrow the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VarValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            VarValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            VarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for VarValue {
    fn from(s: &str) -> Self {
        VarValue::Str(s.to_owned())
    }
}

impl From<String> for VarValue {
    fn from(s: String) -> Self {
        VarValue::Str(s)
    }
}

impl From<i64> for VarValue {
    fn from(i: i64) -> Self {
        VarValue::Int(i)
    }
}

impl From<bool> for VarValue {
    fn from(b: bool) -> Self {
        VarValue::Bool(b)
    }
}

// ---------------------------------------------------------------------------
// VarMap
// ---------------------------------------------------------------------------

/// An ordered name→value map.
///
/// Insertion order is preserved (it is observable in painted output), and
/// inserting an existing name replaces its value in place. The map is small
/// in practice — one to a handful of entries per round-trip — so linear
/// lookup is fine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VarMap {
    entries: Vec<(String, VarValue)>,
}

impl VarMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding a single entry.
    pub fn single(name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        let mut map = Self::new();
        map.insert(name, value);
        map
    }

    /// Insert a value, replacing any existing entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<VarValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Remove an entry by name, returning its value if present.
    pub fn remove(&mut self, name: &str) -> Option<VarValue> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Whether an entry with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VarValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// VarUpdate
// ---------------------------------------------------------------------------

/// A single client→server variable-change notification.
///
/// `immediate` requests delivery without batching against other pending UI
/// state. The touch sensor only ever produces immediate updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarUpdate {
    /// The server-side widget instance this update targets.
    pub widget: WidgetId,
    /// Variable name.
    pub name: String,
    /// New value.
    pub value: VarValue,
    /// Deliver without batching.
    pub immediate: bool,
}

impl VarUpdate {
    /// Create an immediate (unbatched) update.
    pub fn immediate(
        widget: WidgetId,
        name: impl Into<String>,
        value: impl Into<VarValue>,
    ) -> Self {
        Self {
            widget,
            name: name.into(),
            value: value.into(),
            immediate: true,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
