/// Configuration, types, and shared structures for blocktty.
///
/// This crate contains the pixel, block and cell types plus configuration
/// logic used across the blocktty workspace.

pub mod block;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;

pub use block::{BLOCK_SIZE, Block, CHUNK_H, CHUNK_W};
pub use color::Rgba;
pub use config::{RenderConfig, ResizeFilter};
pub use error::CoreError;
pub use frame::{BlockCell, CellGrid, FrameBuffer};
