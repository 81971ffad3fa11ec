use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use bt_core::config::RenderConfig;
use bt_glyph::{BlockQuantizer, GlyphTable};

/// Décode, redimensionne, quantifie puis écrit l'image dans `out`.
///
/// Rien n'est écrit tant que la grille n'est pas entièrement résolue : une
/// erreur de décodage ou d'allocation ne laisse aucune sortie partielle.
///
/// # Errors
/// Decode, allocation, resize and write failures, with context.
pub fn run<W: Write>(
    input: &Path,
    config: &RenderConfig,
    table: GlyphTable,
    out: &mut W,
) -> Result<()> {
    let start = Instant::now();

    let source = bt_source::load_image(input)?;
    let resized = bt_source::resize_to_grid(&source, config.width, config.height, config.filter)
        .with_context(|| {
            format!(
                "Redimensionnement vers {}×{} cellules",
                config.width, config.height
            )
        })?;
    drop(source);

    let quantizer = BlockQuantizer::new(table).with_parallel(config.parallel);
    let grid = quantizer.quantize(&resized)?;
    log::info!(
        "{}: {}×{} cellules en {:?}",
        input.display(),
        grid.width,
        grid.height,
        start.elapsed()
    );

    bt_render::write_grid(out, &grid).context("Écriture de la sortie")?;
    Ok(())
}
