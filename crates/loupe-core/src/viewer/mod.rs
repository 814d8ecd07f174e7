pub mod events;
pub mod image_viewer;
pub mod input;

pub use events::{EventHub, SubscriptionId, SuppressGuard, ViewportEvent};
pub use image_viewer::Viewer;
pub use input::Modifiers;
