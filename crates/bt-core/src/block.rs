//! Découpage d'un `FrameBuffer` en blocs fixes, un bloc par cellule de sortie.

use crate::color::Rgba;
use crate::frame::FrameBuffer;

/// Largeur d'un bloc en pixels source.
pub const CHUNK_W: u32 = 4;
/// Hauteur d'un bloc en pixels source.
pub const CHUNK_H: u32 = 4;
/// Pixels par bloc. Also the length of every glyph pattern.
pub const BLOCK_SIZE: usize = (CHUNK_W * CHUNK_H) as usize;

/// Pixels d'un bloc, row-major, copiés hors du buffer source.
///
/// # Example
/// ```
/// use bt_core::block::{Block, BLOCK_SIZE};
/// use bt_core::color::Rgba;
/// let block = Block::uniform(Rgba::opaque(10, 20, 30));
/// assert_eq!(block.pixels().len(), BLOCK_SIZE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pixels: [Rgba; BLOCK_SIZE],
}

impl Block {
    /// Wrap pixels already laid out row-major.
    #[must_use]
    pub const fn from_pixels(pixels: [Rgba; BLOCK_SIZE]) -> Self {
        Self { pixels }
    }

    /// Bloc dont tous les pixels sont identiques.
    #[must_use]
    pub const fn uniform(color: Rgba) -> Self {
        Self {
            pixels: [color; BLOCK_SIZE],
        }
    }

    /// Pixels in row-major order.
    #[inline(always)]
    #[must_use]
    pub fn pixels(&self) -> &[Rgba; BLOCK_SIZE] {
        &self.pixels
    }
}

impl FrameBuffer {
    /// Nombre de colonnes de blocs.
    #[must_use]
    pub fn blocks_x(&self) -> u32 {
        self.width / CHUNK_W
    }

    /// Nombre de lignes de blocs.
    #[must_use]
    pub fn blocks_y(&self) -> u32 {
        self.height / CHUNK_H
    }

    /// Extrait le bloc (col, row) : pixels `[col*W, col*W+W) × [row*H, row*H+H)`.
    ///
    /// # Panics
    /// Panics if the buffer dimensions are not multiples of the block size or
    /// if `(col, row)` lies outside the block grid. Both are caller bugs: the
    /// resizer always produces exact multiples.
    ///
    /// # Example
    /// ```
    /// use bt_core::color::Rgba;
    /// use bt_core::frame::FrameBuffer;
    /// let mut fb = FrameBuffer::new(8, 4);
    /// fb.set_pixel(4, 0, Rgba::opaque(255, 0, 0));
    /// let block = fb.block(1, 0);
    /// assert_eq!(block.pixels()[0], Rgba::opaque(255, 0, 0));
    /// ```
    #[must_use]
    pub fn block(&self, col: u32, row: u32) -> Block {
        assert!(
            self.width % CHUNK_W == 0 && self.height % CHUNK_H == 0,
            "buffer {}×{} non aligné sur les blocs {CHUNK_W}×{CHUNK_H}",
            self.width,
            self.height
        );
        assert!(
            col < self.blocks_x() && row < self.blocks_y(),
            "bloc ({col}, {row}) hors de la grille {}×{}",
            self.blocks_x(),
            self.blocks_y()
        );

        let mut pixels = [Rgba::default(); BLOCK_SIZE];
        let x0 = col * CHUNK_W;
        let y0 = row * CHUNK_H;
        for dy in 0..CHUNK_H {
            for dx in 0..CHUNK_W {
                pixels[(dy * CHUNK_W + dx) as usize] = self.pixel(x0 + dx, y0 + dy);
            }
        }
        Block { pixels }
    }
}
