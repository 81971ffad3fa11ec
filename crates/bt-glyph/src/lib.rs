/// Block quantization engine for blocktty.
///
/// Converts aligned pixel blocks into colored Unicode block glyphs.

pub mod average;
pub mod binarize;
pub mod ink;
pub mod matcher;
pub mod quantizer;
pub mod table;

pub use quantizer::BlockQuantizer;
pub use table::{GlyphEntry, GlyphTable};
