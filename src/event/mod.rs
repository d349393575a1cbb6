//! Event types: pointer input, typed touch events, listener registration.

pub mod pointer;
pub mod touch;

pub use pointer::{PointerEvent, PointerKind};
pub use touch::{Listener, ListenerSet, TouchEvent, TouchKind, TouchListener};
