/// Image sources for blocktty: decoding and grid-aligned resizing.

pub mod image;
pub mod resize;

pub use crate::image::load_image;
pub use resize::{Resizer, grid_pixel_size, resize_to_grid};
