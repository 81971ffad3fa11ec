use bt_core::block::{BLOCK_SIZE, Block};

use crate::ink::InkMap;

/// Taille maximale de la partition minoritaire considérée comme dégénérée.
pub const DEGENERATE_CUTOFF: u32 = 2;

/// Résultat de la binarisation d'un bloc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binarized {
    /// Carte d'encre, après remplacement éventuel par le partage par défaut.
    pub map: InkMap,
    /// Le bloc était quasi uniforme ; le glyphe par défaut doit être imposé.
    pub degenerate: bool,
}

/// Seuil de luminance du bloc : moyenne entière tronquée.
///
/// # Example
/// ```
/// use bt_core::block::Block;
/// use bt_core::color::Rgba;
/// use bt_glyph::binarize::threshold;
/// assert_eq!(threshold(&Block::uniform(Rgba::opaque(90, 90, 90))), 90);
/// ```
#[must_use]
pub fn threshold(block: &Block) -> u32 {
    let total: u32 = block.pixels().iter().map(|p| p.luminance()).sum();
    total / BLOCK_SIZE as u32
}

/// Binarise un bloc : `on[i] = L(p_i) >= seuil`.
///
/// Si la partition minoritaire (encrée ou non) compte au plus
/// [`DEGENERATE_CUTOFF`] pixels, la carte est remplacée par
/// [`InkMap::default_split`] et `degenerate` est levé. Les deux partitions
/// sont donc toujours non vides en sortie.
///
/// # Example
/// ```
/// use bt_core::block::Block;
/// use bt_core::color::Rgba;
/// use bt_glyph::binarize::binarize;
/// use bt_glyph::ink::InkMap;
/// let out = binarize(&Block::uniform(Rgba::opaque(7, 7, 7)));
/// assert!(out.degenerate);
/// assert_eq!(out.map, InkMap::default_split());
/// ```
#[must_use]
pub fn binarize(block: &Block) -> Binarized {
    let t = threshold(block);
    let pixels = block.pixels();
    let map = InkMap::from_fn(|i| pixels[i].luminance() >= t);

    let on = map.count_on();
    let off = BLOCK_SIZE as u32 - on;
    if on.min(off) <= DEGENERATE_CUTOFF {
        return Binarized {
            map: InkMap::default_split(),
            degenerate: true,
        };
    }

    Binarized {
        map,
        degenerate: false,
    }
}

#[cfg(test)]
mod tests {
    use bt_core::color::Rgba;

    use super::*;

    fn block_from_lum(lums: [u8; BLOCK_SIZE]) -> Block {
        Block::from_pixels(lums.map(|v| Rgba::opaque(v, v, v)))
    }

    #[test]
    fn threshold_truncates() {
        let mut lums = [0u8; BLOCK_SIZE];
        lums[0] = 31;
        // 31 / 16 = 1.9375
        assert_eq!(threshold(&block_from_lum(lums)), 1);
    }

    #[test]
    fn top_half_bright_is_kept() {
        let mut lums = [10u8; BLOCK_SIZE];
        for v in lums.iter_mut().take(BLOCK_SIZE / 2) {
            *v = 240;
        }
        let out = binarize(&block_from_lum(lums));
        assert!(!out.degenerate);
        assert_eq!(out.map, InkMap::default_split());
    }

    #[test]
    fn left_column_bright() {
        let lums: [u8; BLOCK_SIZE] = std::array::from_fn(|i| if i % 4 == 0 { 255 } else { 0 });
        let out = binarize(&block_from_lum(lums));
        assert!(!out.degenerate);
        assert_eq!(out.map.count_on(), 4);
        for i in 0..BLOCK_SIZE {
            assert_eq!(out.map.get(i), i % 4 == 0);
        }
    }

    #[test]
    fn equal_to_threshold_counts_as_on() {
        // Eight at 100, eight at 50: threshold 75, so exactly the 100s are on.
        let lums: [u8; BLOCK_SIZE] = std::array::from_fn(|i| if i >= 8 { 100 } else { 50 });
        let out = binarize(&block_from_lum(lums));
        assert_eq!(out.map.count_on(), 8);
        assert!(out.map.get(8));
        assert!(!out.map.get(0));
    }

    #[test]
    fn two_bright_pixels_are_degenerate() {
        let mut lums = [0u8; BLOCK_SIZE];
        lums[5] = 255;
        lums[9] = 255;
        let out = binarize(&block_from_lum(lums));
        assert!(out.degenerate);
        assert_eq!(out.map, InkMap::default_split());
    }

    #[test]
    fn three_bright_pixels_are_not_degenerate() {
        let mut lums = [0u8; BLOCK_SIZE];
        lums[0] = 255;
        lums[1] = 255;
        lums[2] = 255;
        let out = binarize(&block_from_lum(lums));
        assert!(!out.degenerate);
        assert_eq!(out.map.count_on(), 3);
    }

    #[test]
    fn one_dark_pixel_is_degenerate() {
        let mut lums = [200u8; BLOCK_SIZE];
        lums[3] = 0;
        let out = binarize(&block_from_lum(lums));
        assert!(out.degenerate);
    }

    #[test]
    fn uniform_blocks_always_degenerate() {
        for v in (0..=255u8).step_by(5) {
            let out = binarize(&Block::uniform(Rgba::opaque(v, 255 - v, v / 2)));
            assert!(out.degenerate, "v={v}");
        }
    }
}
