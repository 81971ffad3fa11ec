use bt_core::block::Block;

use crate::ink::InkMap;

#[derive(Default)]
struct Accum {
    r: u32,
    g: u32,
    b: u32,
    n: u32,
}

impl Accum {
    fn mean(&self) -> Option<(u8, u8, u8)> {
        if self.n == 0 {
            return None;
        }
        Some((
            (self.r / self.n) as u8,
            (self.g / self.n) as u8,
            (self.b / self.n) as u8,
        ))
    }
}

/// Couleurs moyennes (fg, bg) des pixels encrés et non encrés.
///
/// Moyenne arithmétique par canal, division tronquée. Une partition vide
/// reprend la couleur de l'autre ; si les deux sont vides, noir.
///
/// # Example
/// ```
/// use bt_core::block::Block;
/// use bt_core::color::Rgba;
/// use bt_glyph::average::average_colors;
/// use bt_glyph::ink::InkMap;
/// let block = Block::uniform(Rgba::opaque(12, 34, 56));
/// let (fg, bg) = average_colors(&block, InkMap::default_split());
/// assert_eq!(fg, (12, 34, 56));
/// assert_eq!(bg, (12, 34, 56));
/// ```
#[must_use]
pub fn average_colors(block: &Block, map: InkMap) -> ((u8, u8, u8), (u8, u8, u8)) {
    let mut on = Accum::default();
    let mut off = Accum::default();

    for (i, p) in block.pixels().iter().enumerate() {
        let acc = if map.get(i) { &mut on } else { &mut off };
        acc.r += u32::from(p.r);
        acc.g += u32::from(p.g);
        acc.b += u32::from(p.b);
        acc.n += 1;
    }

    match (on.mean(), off.mean()) {
        (Some(fg), Some(bg)) => (fg, bg),
        (Some(fg), None) => (fg, fg),
        (None, Some(bg)) => (bg, bg),
        (None, None) => ((0, 0, 0), (0, 0, 0)),
    }
}

#[cfg(test)]
mod tests {
    use bt_core::block::BLOCK_SIZE;
    use bt_core::color::Rgba;

    use super::*;

    #[test]
    fn partitions_are_averaged_separately() {
        let pixels: [Rgba; BLOCK_SIZE] = std::array::from_fn(|i| {
            if i < BLOCK_SIZE / 2 {
                Rgba::opaque(200, 100, 0)
            } else {
                Rgba::opaque(0, 50, 255)
            }
        });
        let (fg, bg) = average_colors(&Block::from_pixels(pixels), InkMap::default_split());
        assert_eq!(fg, (200, 100, 0));
        assert_eq!(bg, (0, 50, 255));
    }

    #[test]
    fn mean_truncates() {
        // On set: positions 0 and 1 only, values 1 and 2 → 1.5 → 1.
        let mut pixels = [Rgba::opaque(0, 0, 0); BLOCK_SIZE];
        pixels[0] = Rgba::opaque(1, 1, 1);
        pixels[1] = Rgba::opaque(2, 2, 2);
        let map = InkMap::from_bits(0b11);
        let (fg, bg) = average_colors(&Block::from_pixels(pixels), map);
        assert_eq!(fg, (1, 1, 1));
        assert_eq!(bg, (0, 0, 0));
    }

    #[test]
    fn saturated_channels_do_not_overflow() {
        let block = Block::uniform(Rgba::opaque(255, 255, 255));
        let (fg, bg) = average_colors(&block, InkMap::from_bits(0b1));
        assert_eq!(fg, (255, 255, 255));
        assert_eq!(bg, (255, 255, 255));
    }

    #[test]
    fn empty_partition_reuses_counterpart() {
        let block = Block::uniform(Rgba::opaque(9, 8, 7));
        assert_eq!(average_colors(&block, InkMap::FULL), ((9, 8, 7), (9, 8, 7)));
        assert_eq!(average_colors(&block, InkMap::EMPTY), ((9, 8, 7), (9, 8, 7)));
    }

    #[test]
    fn alpha_is_ignored() {
        let block = Block::uniform(Rgba::new(40, 50, 60, 0));
        let (fg, _) = average_colors(&block, InkMap::default_split());
        assert_eq!(fg, (40, 50, 60));
    }
}
