//! # tapdiv
//!
//! A touch-aware div widget add-on for server-driven UI frameworks.
//!
//! tapdiv bridges a client-side widget to a server-side component through a
//! state-synchronization channel. The client half watches raw pointer
//! events, suppresses the synthetic mouse-down that mobile browsers emit
//! after a touch-start, and forwards a single immediate variable update.
//! The server half translates the update into a typed touch event,
//! dispatches it to registered listeners in registration order, and
//! requests a repaint.
//!
//! ## Core Systems
//!
//! - **[`protocol`]** — wire-facing value types: variables, updates, attributes
//! - **[`event`]** — pointer input events, typed touch events, listener sets
//! - **[`client`]** — touch sensor, uplink channel, view state
//! - **[`server`]** — the TouchDiv component and the widget registry
//! - **[`session`]** — ties registry and channel together for the host
//! - **[`testing`]** — recording listeners for tests
//! - **[`error`]** — crate error type
//!
//! ## Example
//!
//! ```
//! use tapdiv::event::PointerEvent;
//! use tapdiv::server::TouchDiv;
//! use tapdiv::session::Session;
//! use tapdiv::testing::Recorder;
//!
//! let mut session = Session::new();
//! let id = session.insert(TouchDiv::new("Tap me"));
//! let recorder = Recorder::new();
//! session.widget_mut(id).unwrap().add_listener(recorder.clone());
//!
//! let mut sensor = session.connect(id).unwrap();
//! sensor.on_touch_start(&PointerEvent::touch_start(12.0, 34.0));
//! sensor.on_mouse_down(&PointerEvent::mouse_down(12.0, 34.0)); // synthetic echo
//!
//! session.pump();
//! assert_eq!(recorder.count(), 1); // one interaction, one event
//! ```

// Wire types
pub mod protocol;

// Events and listeners
pub mod event;

// Client and server halves
pub mod client;
pub mod server;

// Session wiring
pub mod session;

// Errors
pub mod error;

// Test helpers
pub mod testing;

pub use error::TapdivError;
