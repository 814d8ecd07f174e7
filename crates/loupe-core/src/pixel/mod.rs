pub mod buffer;
pub mod format;
pub mod palette;

pub use buffer::{PixelBuffer, PixelValue};
pub use format::PixelFormat;
pub use palette::Palette;
