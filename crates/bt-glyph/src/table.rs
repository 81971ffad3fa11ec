//! Table de glyphes : motifs d'encre des caractères de bloc Unicode.

use std::fmt;

use bt_core::block::{BLOCK_SIZE, CHUNK_H, CHUNK_W};
use bt_core::error::CoreError;

use crate::ink::InkMap;

/// Index de l'entrée imposée aux blocs dégénérés.
pub const DEFAULT_INDEX: usize = 0;

/// Motifs 4×4 intégrés, lignes séparées par `/`, `#` = encre.
///
/// Une entrée `reverse` décrit le complément du glyphe : le terminal dessine
/// l'encre avec la couleur de fond et inversement.
pub const BUILTIN_GLYPHS: &[(char, &str, bool)] = &[
    ('▀', "####/####/..../....", false),
    ('▄', "..../..../####/####", false),
    ('▌', "##../##../##../##..", false),
    ('▐', "..##/..##/..##/..##", false),
    ('▘', "##../##../..../....", false),
    ('▝', "..##/..##/..../....", false),
    ('▖', "..../..../##../##..", false),
    ('▗', "..../..../..##/..##", false),
    ('▚', "##../##../..##/..##", false),
    ('▞', "..##/..##/##../##..", false),
    ('▛', "####/####/##../##..", false),
    ('▜', "####/####/..##/..##", false),
    ('▙', "##../##../####/####", false),
    ('▟', "..##/..##/####/####", false),
    ('▂', "..../..../..../####", false),
    ('▆', "..../####/####/####", false),
    ('▆', "####/..../..../....", true),
    ('▂', "####/####/####/....", true),
    ('▎', "#.../#.../#.../#...", false),
    ('▊', "###./###./###./###.", false),
    ('▊', "...#/...#/...#/...#", true),
    ('▎', ".###/.###/.###/.###", true),
    ('◢', "...#/..##/.###/####", false),
    ('◣', "#.../##../###./####", false),
    ('◤', "####/###./##../#...", false),
    ('◥', "####/.###/..##/...#", false),
];

/// Un glyphe candidat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphEntry {
    /// Caractère émis.
    pub ch: char,
    /// Positions couvertes par l'encre du glyphe.
    pub pattern: InkMap,
    /// Inverser fg/bg au rendu.
    pub reverse: bool,
}

impl GlyphEntry {
    /// Parse one literal pattern such as `"####/####/..../...."`.
    ///
    /// # Errors
    /// `CoreError::PatternLength` if the pattern does not cover exactly one
    /// block, `CoreError::Config` for a misshapen row or an unknown character.
    ///
    /// # Example
    /// ```
    /// use bt_glyph::table::GlyphEntry;
    /// let e = GlyphEntry::parse('▀', "####/####/..../....", false).unwrap();
    /// assert_eq!(e.pattern.count_on(), 8);
    /// assert!(GlyphEntry::parse('?', "###", false).is_err());
    /// ```
    pub fn parse(ch: char, literal: &str, reverse: bool) -> Result<Self, CoreError> {
        let mut cells = Vec::with_capacity(BLOCK_SIZE);
        for row in literal.split('/') {
            if row.chars().count() != CHUNK_W as usize {
                return Err(CoreError::Config(format!(
                    "motif '{ch}' : ligne {row:?} de largeur {}, {CHUNK_W} attendue",
                    row.chars().count()
                )));
            }
            for c in row.chars() {
                match c {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    other => {
                        return Err(CoreError::Config(format!(
                            "motif '{ch}' : caractère {other:?} inattendu"
                        )));
                    }
                }
            }
        }
        if cells.len() != BLOCK_SIZE {
            return Err(CoreError::PatternLength {
                ch,
                found: cells.len(),
                expected: BLOCK_SIZE,
            });
        }

        Ok(Self {
            ch,
            pattern: InkMap::from_fn(|i| cells[i]),
            reverse,
        })
    }

    /// Forme littérale du motif, inverse de [`GlyphEntry::parse`].
    #[must_use]
    pub fn pattern_literal(&self) -> String {
        let mut out = String::with_capacity(BLOCK_SIZE + CHUNK_H as usize);
        for i in 0..BLOCK_SIZE {
            if i > 0 && i % CHUNK_W as usize == 0 {
                out.push('/');
            }
            out.push(if self.pattern.get(i) { '#' } else { '.' });
        }
        out
    }
}

/// Liste ordonnée et immuable de glyphes, validée au chargement.
///
/// L'ordre ne sert qu'à départager les égalités : la première entrée gagne.
///
/// # Example
/// ```
/// use bt_glyph::table::GlyphTable;
/// let table = GlyphTable::builtin().unwrap();
/// assert_eq!(table.default_entry().ch, '▀');
/// ```
#[derive(Clone, Debug)]
pub struct GlyphTable {
    entries: Vec<GlyphEntry>,
}

impl GlyphTable {
    /// Build a table from already parsed entries.
    ///
    /// # Errors
    /// `CoreError::EmptyTable` if `entries` is empty.
    pub fn new(entries: Vec<GlyphEntry>) -> Result<Self, CoreError> {
        if entries.is_empty() {
            return Err(CoreError::EmptyTable);
        }
        Ok(Self { entries })
    }

    /// Parse and validate a list of `(char, pattern, reverse)` literals.
    ///
    /// # Errors
    /// The first invalid pattern, or `EmptyTable`.
    pub fn from_literals(literals: &[(char, &str, bool)]) -> Result<Self, CoreError> {
        let entries = literals
            .iter()
            .map(|&(ch, lit, reverse)| GlyphEntry::parse(ch, lit, reverse))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("table de glyphes : {} entrées", entries.len());
        Self::new(entries)
    }

    /// The built-in block-element table.
    ///
    /// # Errors
    /// Only if [`BUILTIN_GLYPHS`] itself is malformed.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::from_literals(BUILTIN_GLYPHS)
    }

    /// Entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[GlyphEntry] {
        &self.entries
    }

    /// Entry at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn entry(&self, index: usize) -> &GlyphEntry {
        &self.entries[index]
    }

    /// Entrée imposée aux blocs dégénérés.
    #[must_use]
    pub fn default_entry(&self) -> &GlyphEntry {
        &self.entries[DEFAULT_INDEX]
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: an empty table is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Une ligne littérale par entrée, relisible par `from_literals`.
impl fmt::Display for GlyphTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.entries {
            writeln!(f, "({:?}, {:?}, {}),", e.ch, e.pattern_literal(), e.reverse)?;
        }
        Ok(())
    }
}
