//! Shape matching: ink-map correlation against the glyph table.

use crate::ink::InkMap;
use crate::table::GlyphTable;

/// Score d'une entrée : nombre de positions concordantes.
#[inline(always)]
#[must_use]
pub fn score(map: InkMap, pattern: InkMap) -> u32 {
    map.agreement(pattern)
}

/// Index of the table entry whose pattern best agrees with `map`.
///
/// Entries are scanned in table order and a later entry only wins on a
/// strictly greater score, so ties resolve to the lowest index.
///
/// # Example
/// ```
/// use bt_glyph::ink::InkMap;
/// use bt_glyph::matcher::best_match;
/// use bt_glyph::table::GlyphTable;
/// let table = GlyphTable::builtin().unwrap();
/// assert_eq!(best_match(InkMap::default_split(), &table), 0);
/// ```
#[must_use]
pub fn best_match(map: InkMap, table: &GlyphTable) -> usize {
    let mut best_index = 0;
    let mut best_score = 0u32;

    for (i, entry) in table.entries().iter().enumerate() {
        let s = score(map, entry.pattern);
        if i == 0 || s > best_score {
            best_score = s;
            best_index = i;
        }
    }

    best_index
}
