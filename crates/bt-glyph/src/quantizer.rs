use bt_core::block::Block;
use bt_core::error::CoreError;
use bt_core::frame::{BlockCell, CellGrid, FrameBuffer};
use rayon::prelude::*;

use crate::average::average_colors;
use crate::binarize::binarize;
use crate::matcher::best_match;
use crate::table::{DEFAULT_INDEX, GlyphTable};

/// Quantifie un `FrameBuffer` aligné en une grille de cellules.
///
/// Chaque bloc est résolu indépendamment : binarisation, choix du glyphe,
/// moyennes de couleur. La table est partagée en lecture seule entre les
/// workers rayon.
///
/// # Example
/// ```
/// use bt_glyph::quantizer::BlockQuantizer;
/// use bt_glyph::table::GlyphTable;
/// let q = BlockQuantizer::new(GlyphTable::builtin().unwrap());
/// ```
pub struct BlockQuantizer {
    table: GlyphTable,
    parallel: bool,
}

impl BlockQuantizer {
    /// Create a quantizer; parallel by default.
    #[must_use]
    pub fn new(table: GlyphTable) -> Self {
        Self {
            table,
            parallel: true,
        }
    }

    /// Enable or disable rayon row parallelism.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The table glyphs are chosen from.
    #[must_use]
    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    /// Résout un bloc en cellule.
    ///
    /// # Example
    /// ```
    /// use bt_core::block::Block;
    /// use bt_core::color::Rgba;
    /// use bt_glyph::quantizer::BlockQuantizer;
    /// use bt_glyph::table::GlyphTable;
    /// let q = BlockQuantizer::new(GlyphTable::builtin().unwrap());
    /// let cell = q.resolve(&Block::uniform(Rgba::opaque(1, 2, 3)));
    /// assert_eq!(cell.ch, '▀');
    /// assert_eq!((cell.fg, cell.bg), ((1, 2, 3), (1, 2, 3)));
    /// ```
    #[must_use]
    pub fn resolve(&self, block: &Block) -> BlockCell {
        let bin = binarize(block);
        let index = if bin.degenerate {
            DEFAULT_INDEX
        } else {
            best_match(bin.map, &self.table)
        };
        let entry = self.table.entry(index);
        let (fg, bg) = average_colors(block, bin.map);

        BlockCell {
            ch: entry.ch,
            fg,
            bg,
            reverse: entry.reverse,
        }
    }

    /// Quantifie tout le buffer. La grille a une cellule par bloc.
    ///
    /// Output is identical with or without parallelism: each row is written
    /// into its own slice of the grid.
    ///
    /// # Errors
    /// `CoreError::InvalidDimensions` if the block grid does not fit in `u16`.
    ///
    /// # Panics
    /// Panics if the buffer is not aligned on the block size.
    ///
    /// # Example
    /// ```
    /// use bt_core::frame::FrameBuffer;
    /// use bt_glyph::quantizer::BlockQuantizer;
    /// use bt_glyph::table::GlyphTable;
    /// let q = BlockQuantizer::new(GlyphTable::builtin().unwrap());
    /// let grid = q.quantize(&FrameBuffer::new(16, 8)).unwrap();
    /// assert_eq!((grid.width, grid.height), (4, 2));
    /// ```
    pub fn quantize(&self, frame: &FrameBuffer) -> Result<CellGrid, CoreError> {
        let too_big = || CoreError::InvalidDimensions {
            width: frame.width,
            height: frame.height,
        };
        let cols = u16::try_from(frame.blocks_x()).map_err(|_| too_big())?;
        let rows = u16::try_from(frame.blocks_y()).map_err(|_| too_big())?;

        let mut grid = CellGrid::new(cols, rows);
        if cols == 0 || rows == 0 {
            return Ok(grid);
        }

        let fill_row = |cy: usize, row: &mut [BlockCell]| {
            for (cx, cell) in row.iter_mut().enumerate() {
                *cell = self.resolve(&frame.block(cx as u32, cy as u32));
            }
        };

        if self.parallel {
            grid.cells
                .par_chunks_mut(usize::from(cols))
                .enumerate()
                .for_each(|(cy, row)| fill_row(cy, row));
        } else {
            grid.cells
                .chunks_mut(usize::from(cols))
                .enumerate()
                .for_each(|(cy, row)| fill_row(cy, row));
        }

        log::debug!(
            "{cols}×{rows} cellules ({})",
            if self.parallel { "rayon" } else { "séquentiel" }
        );
        Ok(grid)
    }
}
