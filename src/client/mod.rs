//! The client half: pointer sensing, the uplink channel, and view state.

pub mod sensor;
pub mod uplink;
pub mod view;

pub use sensor::{DeviceClass, TouchSensor};
pub use uplink::Uplink;
pub use view::DivView;
