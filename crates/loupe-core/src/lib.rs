pub mod blit;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod io;
pub mod pixel;
pub mod render;
pub mod viewer;
pub mod viewport;
