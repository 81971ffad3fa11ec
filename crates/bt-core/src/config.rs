use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Largeur de grille par défaut, en cellules.
pub const DEFAULT_WIDTH: u16 = 40;
/// Hauteur de grille par défaut, en cellules.
pub const DEFAULT_HEIGHT: u16 = 14;
/// Upper bound for either grid dimension.
pub const MAX_CELLS: u16 = 1024;

/// Configuration du rendu.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use bt_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!((config.width, config.height), (40, 14));
/// assert!(config.parallel);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    /// Largeur de la grille de sortie, en cellules.
    pub width: u16,
    /// Hauteur de la grille de sortie, en cellules.
    pub height: u16,
    /// Résoudre les blocs en parallèle (rayon).
    pub parallel: bool,
    /// Filtre utilisé pour ramener l'image à la taille de la grille.
    pub filter: ResizeFilter,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            parallel: true,
            filter: ResizeFilter::default(),
        }
    }
}

impl RenderConfig {
    /// Clamp grid dimensions to `[1, MAX_CELLS]`.
    ///
    /// # Example
    /// ```
    /// use bt_core::config::RenderConfig;
    /// let mut config = RenderConfig { width: 0, height: 5000, ..Default::default() };
    /// config.clamp_all();
    /// assert_eq!((config.width, config.height), (1, 1024));
    /// ```
    pub fn clamp_all(&mut self) {
        self.width = self.width.clamp(1, MAX_CELLS);
        self.height = self.height.clamp(1, MAX_CELLS);
    }

    /// Reject a zero-sized grid.
    ///
    /// # Errors
    /// `CoreError::InvalidDimensions` when either dimension is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: u32::from(self.width),
                height: u32::from(self.height),
            });
        }
        Ok(())
    }
}

/// Algorithme de redimensionnement.
///
/// # Example
/// ```
/// use bt_core::config::ResizeFilter;
/// assert_eq!(ResizeFilter::default(), ResizeFilter::CatmullRom);
/// assert_eq!(ResizeFilter::from_name("lanczos3"), Some(ResizeFilter::Lanczos3));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum ResizeFilter {
    /// Plus proche voisin.
    Nearest,
    /// Bilinear convolution.
    Bilinear,
    /// Cubique Catmull-Rom.
    #[default]
    CatmullRom,
    /// Lanczos, 3 lobes.
    Lanczos3,
}

impl ResizeFilter {
    /// Parse a user-supplied name, case-insensitive, `-`/`_` ignored.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "nearest" => Some(Self::Nearest),
            "bilinear" => Some(Self::Bilinear),
            "catmullrom" | "cubic" => Some(Self::CatmullRom),
            "lanczos3" | "lanczos" => Some(Self::Lanczos3),
            _ => None,
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    width: Option<u16>,
    height: Option<u16>,
    parallel: Option<bool>,
    filter: Option<ResizeFilter>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use bt_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("blocktty.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error on malformed TOML, unknown keys in `[render]` or a
/// zero-sized grid.
///
/// # Example
/// ```
/// use bt_core::config::parse_config;
/// let config = parse_config("[render]\nwidth = 80\n").unwrap();
/// assert_eq!(config.width, 80);
/// assert_eq!(config.height, 14);
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = RenderConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.width {
            config.width = v;
        }
        if let Some(v) = r.height {
            config.height = v;
        }
        if let Some(v) = r.parallel {
            config.parallel = v;
        }
        if let Some(v) = r.filter {
            config.filter = v;
        }
    }

    config.validate()?;
    config.clamp_all();
    log::debug!("config: {config:?}");
    Ok(config)
}
