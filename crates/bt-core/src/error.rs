use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Unsupported file or data format.
    #[error("Format non supporté : {format}")]
    UnsupportedFormat {
        /// The format string that is unsupported.
        format: String,
    },

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// The pixel buffer could not be allocated.
    #[error("Allocation impossible : {bytes} octets")]
    Allocation {
        /// Requested size in bytes.
        bytes: usize,
    },

    /// A glyph pattern does not cover exactly one block.
    #[error("Motif invalide pour '{ch}' : {found} positions, {expected} attendues")]
    PatternLength {
        /// Glyph whose pattern is malformed.
        ch: char,
        /// Number of positions found.
        found: usize,
        /// Block size.
        expected: usize,
    },

    /// A glyph table without any entry.
    #[error("Table de glyphes vide")]
    EmptyTable,
}
