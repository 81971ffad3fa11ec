use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bt_core::config::{RenderConfig, ResizeFilter};
use bt_glyph::GlyphTable;
use clap::Parser;

pub mod cli;
pub mod pipeline;

fn main() -> Result<ExitCode> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr)
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Rendu vers stdout verrouillé et bufferisé
    let mut out = BufWriter::new(io::stdout().lock());
    run_cli(&cli, &mut out)
}

/// Dispatch once the CLI is parsed: table dump, usage error or render.
///
/// Only the rendered grid or the table literals reach `out`; the usage text
/// goes to stderr.
fn run_cli<W: Write>(cli: &cli::Cli, out: &mut W) -> Result<ExitCode> {
    // Table de glyphes, validée une fois au démarrage
    let table = GlyphTable::builtin().context("Table de glyphes invalide")?;
    log::debug!("Table de glyphes : {} entrées", table.len());

    if cli.dump_table {
        write!(out, "{table}")?;
        out.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    // Source obligatoire hors diagnostic
    let Some(input) = cli.image.as_deref() else {
        eprintln!("{}", cli::USAGE);
        return Ok(ExitCode::from(1));
    };

    // Config : fichier, puis overrides CLI
    let config = resolve_config(cli)?;
    log::info!(
        "Grille cible {}×{} ({:?}, {})",
        config.width,
        config.height,
        config.filter,
        if config.parallel { "rayon" } else { "séquentiel" }
    );

    pipeline::run(input, &config, table, out)?;
    out.flush().context("Écriture de la sortie")?;

    Ok(ExitCode::SUCCESS)
}

/// Resolve config: file (if any), then CLI overrides, then clamping.
fn resolve_config(cli: &cli::Cli) -> Result<RenderConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => bt_core::config::load_config(path)?,
        None => RenderConfig::default(),
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if cli.fit {
        apply_fit(&mut config, cli, bt_render::terminal_grid_size());
    }
    if cli.sequential {
        config.parallel = false;
    }
    if let Some(ref name) = cli.filter {
        match ResizeFilter::from_name(name) {
            Some(filter) => config.filter = filter,
            None => log::warn!("Filtre inconnu '{name}', utilisation de {:?}.", config.filter),
        }
    }

    config.validate()?;
    config.clamp_all();
    Ok(config)
}

/// Replace the grid size with the terminal size, when it is known.
fn apply_fit(config: &mut RenderConfig, cli: &cli::Cli, fitted: Option<(u16, u16)>) {
    let Some((cols, rows)) = fitted else {
        return;
    };
    if cli.width.is_some() || cli.height.is_some() {
        log::info!(
            "--fit : {cols}×{rows} remplace -w/-h ({}×{})",
            config.width,
            config.height
        );
    }
    config.width = cols;
    config.height = rows;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> cli::Cli {
        cli::Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_without_flags() {
        let config = resolve_config(&parse(&["blocktty", "a.png"])).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bt.toml");
        std::fs::write(&path, "[render]\nwidth = 10\nheight = 5\nfilter = \"Nearest\"\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let cli = parse(&["blocktty", "-c", &path, "-w", "64", "--sequential", "a.png"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 5);
        assert_eq!(config.filter, ResizeFilter::Nearest);
        assert!(!config.parallel);
    }

    #[test]
    fn oversized_grid_is_clamped() {
        let cli = parse(&["blocktty", "-w", "60000", "a.png"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.width, bt_core::config::MAX_CELLS);
    }

    #[test]
    fn zero_height_is_rejected() {
        assert!(resolve_config(&parse(&["blocktty", "-h", "0", "a.png"])).is_err());
    }

    #[test]
    fn unknown_filter_keeps_default() {
        let config = resolve_config(&parse(&["blocktty", "--filter", "sinc", "a.png"])).unwrap();
        assert_eq!(config.filter, ResizeFilter::CatmullRom);
    }

    #[test]
    fn fit_replaces_explicit_dimensions() {
        let cli = parse(&["blocktty", "--fit", "-w", "5", "-h", "6", "a.png"]);
        let mut config = RenderConfig {
            width: 5,
            height: 6,
            ..RenderConfig::default()
        };
        apply_fit(&mut config, &cli, Some((120, 39)));
        assert_eq!((config.width, config.height), (120, 39));
    }

    #[test]
    fn fit_without_terminal_keeps_dimensions() {
        let cli = parse(&["blocktty", "--fit", "-w", "5", "a.png"]);
        let mut config = RenderConfig {
            width: 5,
            ..RenderConfig::default()
        };
        apply_fit(&mut config, &cli, None);
        assert_eq!((config.width, config.height), (5, 14));
    }

    #[test]
    fn no_image_is_usage_error_with_empty_stdout() {
        let mut out = Vec::new();
        let code = run_cli(&parse(&["blocktty", "-w", "10"]), &mut out).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(out.is_empty());
    }

    #[test]
    fn dump_table_needs_no_image() {
        let mut out = Vec::new();
        let code = run_cli(&parse(&["blocktty", "--dump-table"]), &mut out).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, GlyphTable::builtin().unwrap().to_string());
        assert!(text.starts_with("('▀', \"####/####/..../....\", false),\n"));
    }

    #[test]
    fn renders_image_to_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("px.png");
        image::RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3]))
            .save(&path)
            .unwrap();
        let path = path.to_string_lossy().into_owned();

        let mut out = Vec::new();
        let code = run_cli(&parse(&["blocktty", "-w", "1", "-h", "1", &path]), &mut out).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[48;2;1;2;3;38;2;1;2;3m▀\x1b[0m\n"
        );
    }

    #[test]
    fn missing_image_is_an_error_without_output() {
        let mut out = Vec::new();
        let cli = parse(&["blocktty", "/nonexistent/nope.png"]);
        assert!(run_cli(&cli, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = parse(&["blocktty", "-c", "/nonexistent/bt.toml", "a.png"]);
        assert!(resolve_config(&cli).is_err());
    }
}
