use anyhow::{Context, Result};
use bt_core::block::{CHUNK_H, CHUNK_W};
use bt_core::config::ResizeFilter;
use bt_core::error::CoreError;
use bt_core::frame::FrameBuffer;
use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Dimensions en pixels d'une grille de `cells_w × cells_h` cellules.
///
/// Toujours des multiples exacts de la taille de bloc.
///
/// # Errors
/// `CoreError::InvalidDimensions` for an empty grid.
///
/// # Example
/// ```
/// use bt_source::resize::grid_pixel_size;
/// assert_eq!(grid_pixel_size(40, 14).unwrap(), (160, 56));
/// ```
pub fn grid_pixel_size(cells_w: u16, cells_h: u16) -> Result<(u32, u32), CoreError> {
    if cells_w == 0 || cells_h == 0 {
        return Err(CoreError::InvalidDimensions {
            width: u32::from(cells_w),
            height: u32::from(cells_h),
        });
    }
    Ok((u32::from(cells_w) * CHUNK_W, u32::from(cells_h) * CHUNK_H))
}

/// Resizer wrapping fast_image_resize.
///
/// Les canaux sont rééchantillonnés indépendamment : l'alpha suit le même
/// filtre mais ne pondère jamais le RGB.
///
/// # Example
/// ```
/// use bt_core::config::ResizeFilter;
/// use bt_source::resize::Resizer;
/// let r = Resizer::new(ResizeFilter::Bilinear);
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
}

impl Resizer {
    /// Create a resizer using the given filter.
    #[must_use]
    pub fn new(filter: ResizeFilter) -> Self {
        let alg = match filter {
            ResizeFilter::Nearest => ResizeAlg::Nearest,
            ResizeFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResizeFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
            ResizeFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        };
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(alg).use_alpha(false),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns an error if either buffer is empty or the resize fails.
    ///
    /// # Example
    /// ```
    /// use bt_core::config::ResizeFilter;
    /// use bt_core::frame::FrameBuffer;
    /// use bt_source::resize::Resizer;
    /// let mut r = Resizer::new(ResizeFilter::CatmullRom);
    /// let src = FrameBuffer::new(100, 100);
    /// let mut dst = FrameBuffer::new(40, 40);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(&mut self, src: &FrameBuffer, dst: &mut FrameBuffer) -> Result<()> {
        if src.width == 0 || src.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: src.width,
                height: src.height,
            }
            .into());
        }
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        let src_image = ImageRef::new(src.width, src.height, &src.data, PixelType::U8x4)
            .context("Invalid source dimensions")?;

        let mut dst_image =
            Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8x4)
                .context("Invalid destination dimensions")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new(ResizeFilter::default())
    }
}

/// Redimensionne `src` aux dimensions pixel exactes d'une grille de cellules.
///
/// Le buffer de destination est alloué sans abandon : un échec d'allocation
/// remonte comme `CoreError::Allocation`.
///
/// # Errors
/// Returns an error for an empty grid, a failed allocation or a failed resize.
///
/// # Example
/// ```
/// use bt_core::config::ResizeFilter;
/// use bt_core::frame::FrameBuffer;
/// use bt_source::resize::resize_to_grid;
/// let src = FrameBuffer::new(640, 480);
/// let dst = resize_to_grid(&src, 40, 14, ResizeFilter::default()).unwrap();
/// assert_eq!((dst.width, dst.height), (160, 56));
/// ```
pub fn resize_to_grid(
    src: &FrameBuffer,
    cells_w: u16,
    cells_h: u16,
    filter: ResizeFilter,
) -> Result<FrameBuffer> {
    let (width, height) = grid_pixel_size(cells_w, cells_h)?;
    let mut dst = FrameBuffer::try_new(width, height)?;
    Resizer::new(filter).resize_into(src, &mut dst)?;
    log::debug!(
        "resize {}×{} → {width}×{height} ({filter:?})",
        src.width,
        src.height
    );
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use bt_core::color::Rgba;

    use super::*;

    fn solid(width: u32, height: u32, color: Rgba) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        fb.fill(color);
        fb
    }

    #[test]
    fn output_is_exact_block_multiple() {
        let src = FrameBuffer::new(333, 127);
        for (w, h) in [(1, 1), (7, 3), (40, 14), (81, 25)] {
            let dst = resize_to_grid(&src, w, h, ResizeFilter::Bilinear).unwrap();
            assert_eq!(dst.width, u32::from(w) * CHUNK_W);
            assert_eq!(dst.height, u32::from(h) * CHUNK_H);
            assert_eq!(dst.width % CHUNK_W, 0);
            assert_eq!(dst.height % CHUNK_H, 0);
        }
    }

    #[test]
    fn same_size_is_copied_verbatim() {
        let mut src = FrameBuffer::new(4, 4);
        src.set_pixel(3, 3, Rgba::new(1, 2, 3, 4));
        let dst = resize_to_grid(&src, 1, 1, ResizeFilter::Lanczos3).unwrap();
        assert_eq!(dst.data, src.data);
    }

    #[test]
    fn solid_color_survives_downscale() {
        let color = Rgba::opaque(120, 60, 200);
        let src = solid(64, 64, color);
        let dst = resize_to_grid(&src, 2, 2, ResizeFilter::CatmullRom).unwrap();
        for y in 0..dst.height {
            for x in 0..dst.width {
                let px = dst.pixel(x, y);
                assert!(px.r.abs_diff(color.r) <= 1, "{px:?}");
                assert!(px.g.abs_diff(color.g) <= 1, "{px:?}");
                assert!(px.b.abs_diff(color.b) <= 1, "{px:?}");
            }
        }
    }

    #[test]
    fn transparent_pixels_keep_their_color() {
        let color = Rgba::new(200, 40, 10, 0);
        let src = solid(64, 64, color);
        let dst = resize_to_grid(&src, 2, 2, ResizeFilter::CatmullRom).unwrap();
        for y in 0..dst.height {
            for x in 0..dst.width {
                let px = dst.pixel(x, y);
                assert!(px.r.abs_diff(color.r) <= 1, "{px:?}");
                assert!(px.g.abs_diff(color.g) <= 1, "{px:?}");
                assert!(px.b.abs_diff(color.b) <= 1, "{px:?}");
            }
        }
    }

    #[test]
    fn alpha_does_not_weight_the_mix() {
        // Columns alternate transparent white and opaque black.
        let mut src = FrameBuffer::new(64, 64);
        for y in 0..src.height {
            for x in 0..src.width {
                let px = if x % 2 == 0 {
                    Rgba::new(255, 255, 255, 0)
                } else {
                    Rgba::opaque(0, 0, 0)
                };
                src.set_pixel(x, y, px);
            }
        }
        let dst = resize_to_grid(&src, 1, 1, ResizeFilter::Bilinear).unwrap();
        let px = dst.pixel(2, 2);
        assert!(px.r.abs_diff(127) <= 3, "{px:?}");
        assert_eq!((px.r, px.g), (px.g, px.b));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let src = FrameBuffer::new(8, 8);
        assert!(resize_to_grid(&src, 0, 3, ResizeFilter::Nearest).is_err());
        assert!(grid_pixel_size(3, 0).is_err());
    }

    #[test]
    fn empty_source_is_rejected() {
        let src = FrameBuffer::new(0, 0);
        let mut dst = FrameBuffer::new(4, 4);
        assert!(Resizer::default().resize_into(&src, &mut dst).is_err());
    }
}
