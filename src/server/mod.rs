//! The server half: the div component and the instance registry.

pub mod div;
pub mod registry;

pub use div::TouchDiv;
pub use registry::{WidgetId, WidgetRegistry};
