use crate::color::Rgba;
use crate::error::CoreError;

/// Nombre de canaux stockés par pixel (RGBA).
pub const CHANNELS: usize = 4;

/// Buffer de pixels possédé, RGBA row-major, 4 bytes par pixel.
///
/// Produit par le décodage puis le redimensionnement, consommé une seule fois
/// par l'extraction de blocs. Jamais muté après le redimensionnement.
///
/// # Example
/// ```
/// use bt_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer pré-alloué aux dimensions données.
    ///
    /// Prefer [`FrameBuffer::try_new`] when the dimensions come from user input.
    ///
    /// # Example
    /// ```
    /// use bt_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * CHANNELS],
            width,
            height,
        }
    }

    /// Alloue un buffer zéro en signalant l'épuisement mémoire au lieu d'abandonner.
    ///
    /// # Errors
    /// `InvalidDimensions` if the byte size overflows `usize`, `Allocation`
    /// if the allocator refuses the request.
    ///
    /// # Example
    /// ```
    /// use bt_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::try_new(8, 4).unwrap();
    /// assert_eq!(fb.data.len(), 8 * 4 * 4);
    /// ```
    pub fn try_new(width: u32, height: u32) -> Result<Self, CoreError> {
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(CoreError::InvalidDimensions { width, height })?;

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| CoreError::Allocation { bytes })?;
        data.resize(bytes, 0);

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Wrap an existing RGBA buffer.
    ///
    /// # Errors
    /// `InvalidDimensions` if `data` is not exactly `width * height * 4` bytes.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Result<Self, CoreError> {
        if data.len() != width as usize * height as usize * CHANNELS {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Remplit tout le buffer avec une seule couleur.
    ///
    /// # Example
    /// ```
    /// use bt_core::color::Rgba;
    /// use bt_core::frame::FrameBuffer;
    /// let mut fb = FrameBuffer::new(2, 2);
    /// fb.fill(Rgba::opaque(1, 2, 3));
    /// assert_eq!(fb.pixel(1, 1), Rgba::opaque(1, 2, 3));
    /// ```
    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Accès au pixel (x, y).
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the buffer.
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) hors de {}×{}",
            self.width,
            self.height
        );
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Rgba::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Écrit le pixel (x, y).
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the buffer.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) hors limites");
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.data[idx..idx + CHANNELS].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }
}

/// Une cellule résolue : glyphe, deux couleurs et drapeau d'inversion.
///
/// # Example
/// ```
/// use bt_core::frame::BlockCell;
/// let cell = BlockCell::default();
/// assert_eq!(cell.ch, ' ');
/// assert!(!cell.reverse);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockCell {
    /// Caractère à afficher.
    pub ch: char,
    /// Mean color of the inked pixels.
    pub fg: (u8, u8, u8),
    /// Mean color of the remaining pixels.
    pub bg: (u8, u8, u8),
    /// Swap fg and bg when emitting the cell.
    pub reverse: bool,
}

impl Default for BlockCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: (0, 0, 0),
            bg: (0, 0, 0),
            reverse: false,
        }
    }
}

/// Grille de sortie, row-major. Pré-allouée puis remplie bloc par bloc.
///
/// # Example
/// ```
/// use bt_core::frame::{BlockCell, CellGrid};
/// let mut grid = CellGrid::new(80, 24);
/// grid.set(0, 0, BlockCell { ch: '▀', ..BlockCell::default() });
/// assert_eq!(grid.get(0, 0).ch, '▀');
/// ```
#[derive(Clone, Debug)]
pub struct CellGrid {
    /// Flat array of cells, row-major.
    pub cells: Vec<BlockCell>,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl CellGrid {
    /// Crée une grille pré-allouée.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![BlockCell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Set a cell at position (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u16, y: u16, cell: BlockCell) {
        self.cells[y as usize * self.width as usize + x as usize] = cell;
    }

    /// Get a cell reference at position (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> &BlockCell {
        &self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Rows top to bottom, each left to right.
    ///
    /// # Example
    /// ```
    /// use bt_core::frame::CellGrid;
    /// let grid = CellGrid::new(3, 2);
    /// assert_eq!(grid.rows().count(), 2);
    /// assert!(grid.rows().all(|r| r.len() == 3));
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &[BlockCell]> {
        self.cells.chunks_exact(usize::from(self.width.max(1)))
    }
}
