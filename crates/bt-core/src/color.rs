/// Pixel RGBA 8 bits par canal.
///
/// L'alpha est transporté mais jamais consulté par la quantification.
///
/// # Example
/// ```
/// use bt_core::color::Rgba;
/// let p = Rgba::new(255, 0, 0, 255);
/// assert_eq!(p.rgb(), (255, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, ignored by the core.
    pub a: u8,
}

impl Rgba {
    /// Build a pixel from its four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pixel.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Couleur sans alpha, au format des cellules.
    #[inline(always)]
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Luminance `floor(0.3r + 0.59g + 0.11b)` en virgule fixe.
    ///
    /// Les poids sont exprimés en centièmes et la division tronque, ce qui
    /// donne exactement le plancher de la somme réelle.
    ///
    /// # Example
    /// ```
    /// use bt_core::color::Rgba;
    /// assert_eq!(Rgba::opaque(255, 255, 255).luminance(), 255);
    /// assert_eq!(Rgba::opaque(0, 0, 0).luminance(), 0);
    /// assert_eq!(Rgba::opaque(100, 0, 0).luminance(), 30);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(self) -> u32 {
        (u32::from(self.r) * 30 + u32::from(self.g) * 59 + u32::from(self.b) * 11) / 100
    }
}
