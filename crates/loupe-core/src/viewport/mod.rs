pub mod model;
pub mod scroll;

pub use model::{PageDirection, Viewport};
pub use scroll::{ScrollBar, ScrollBars};
