pub mod cache;
pub mod compose;
pub mod scale;

pub use cache::RenderCache;
pub use compose::{
    compose, compute_dest_rect, compute_source_rect, extract_region, prepare_renderable_buffer,
    Frame,
};
pub use scale::upscale_nearest;
