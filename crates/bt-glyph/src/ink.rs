use bt_core::block::BLOCK_SIZE;

const _: () = assert!(BLOCK_SIZE > 0 && BLOCK_SIZE <= 64, "un bloc doit tenir dans un u64");

/// Bits valides d'une carte d'encre.
const MASK: u64 = if BLOCK_SIZE == 64 {
    u64::MAX
} else {
    (1u64 << BLOCK_SIZE) - 1
};

/// Carte booléenne d'encre d'un bloc, un bit par position row-major.
///
/// Bit `i` = position `i` du bloc. Les bits au-delà de `BLOCK_SIZE` sont
/// toujours nuls.
///
/// # Example
/// ```
/// use bt_glyph::ink::InkMap;
/// let map = InkMap::from_fn(|i| i % 2 == 0);
/// assert!(map.get(0));
/// assert!(!map.get(1));
/// assert_eq!(map.count_on(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InkMap(u64);

impl InkMap {
    /// Aucune position encrée.
    pub const EMPTY: Self = Self(0);
    /// Toutes les positions encrées.
    pub const FULL: Self = Self(MASK);

    /// Build from raw bits; bits beyond the block are dropped.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & MASK)
    }

    /// Build by evaluating `f` at every position.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(usize) -> bool) -> Self {
        let mut bits = 0u64;
        for i in 0..BLOCK_SIZE {
            if f(i) {
                bits |= 1 << i;
            }
        }
        Self(bits)
    }

    /// Partage par défaut : première moitié des positions encrée, le reste non.
    ///
    /// # Example
    /// ```
    /// use bt_glyph::ink::InkMap;
    /// let split = InkMap::default_split();
    /// assert!(split.get(0));
    /// assert!(!split.get(15));
    /// assert_eq!(split.count_on(), 8);
    /// ```
    #[must_use]
    pub const fn default_split() -> Self {
        Self((1u64 << (BLOCK_SIZE / 2)) - 1)
    }

    /// Raw bits.
    #[inline(always)]
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Is position `i` inked?
    #[inline(always)]
    #[must_use]
    pub const fn get(self, i: usize) -> bool {
        i < BLOCK_SIZE && (self.0 >> i) & 1 == 1
    }

    /// Nombre de positions encrées.
    #[inline(always)]
    #[must_use]
    pub const fn count_on(self) -> u32 {
        self.0.count_ones()
    }

    /// Nombre de positions où les deux cartes concordent.
    ///
    /// Équivaut à `BLOCK_SIZE` moins la distance de Hamming (XNOR + popcount).
    ///
    /// # Example
    /// ```
    /// use bt_glyph::ink::InkMap;
    /// let a = InkMap::default_split();
    /// assert_eq!(a.agreement(a), 16);
    /// assert_eq!(a.agreement(InkMap::EMPTY), 8);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn agreement(self, other: Self) -> u32 {
        (!(self.0 ^ other.0) & MASK).count_ones()
    }
}
