use std::path::Path;

use anyhow::{Context, Result};
use bt_core::error::CoreError;
use bt_core::frame::FrameBuffer;

/// Décode une image depuis le disque en un `FrameBuffer` RGBA.
///
/// Le format est deviné depuis le contenu, pas l'extension. Les images sans
/// alpha reçoivent un alpha opaque.
///
/// # Errors
/// `CoreError::FileNotFound` if the path does not exist,
/// `CoreError::UnsupportedFormat` if the content is not a known image format,
/// and a contextualized decode error otherwise.
///
/// # Example
/// ```no_run
/// use bt_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let reader = image::ImageReader::open(path)
        .with_context(|| format!("Impossible d'ouvrir {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    if reader.format().is_none() {
        return Err(CoreError::UnsupportedFormat {
            format: path
                .extension()
                .map_or_else(|| "inconnu".to_string(), |e| e.to_string_lossy().into_owned()),
        })
        .with_context(|| format!("Impossible de charger {}", path.display()));
    }

    let img = reader
        .decode()
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!("{}: {width}×{height}", path.display());

    Ok(FrameBuffer::from_raw(rgba.into_raw(), width, height)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn decodes_png_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([200, 10, 20]));
        img.save(&path).unwrap();

        let frame = load_image(&path).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        let px = frame.pixel(2, 1);
        assert_eq!((px.r, px.g, px.b, px.a), (200, 10, 20, 255));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_image(Path::new("/nonexistent/input.png")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }

    #[test]
    fn garbage_is_unsupported() {
        let mut file = tempfile::Builder::new().suffix(".xyz").tempfile().unwrap();
        file.write_all(b"definitely not pixels").unwrap();
        let err = load_image(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn truncated_png_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cut.png");
        let img = image::RgbImage::from_pixel(16, 16, image::Rgb([1, 2, 3]));
        img.save(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        assert!(load_image(&path).is_err());
    }
}
