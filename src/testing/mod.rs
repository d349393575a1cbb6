//! Test helpers: recording and tagging listeners.
//!
//! Use a [`Recorder`] to capture every dispatched
//! [`TouchEvent`](crate::event::TouchEvent) for count and payload
//! assertions, and
//! [`TagListener`]s sharing one log to assert cross-listener ordering.

pub mod recorder;

pub use recorder::{shared_log, Recorder, SharedLog, TagListener};
