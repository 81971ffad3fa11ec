use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// blocktty : images en mosaïque de blocs Unicode truecolor.
///
/// `-h` règle la hauteur ; l'aide est sur `--help` uniquement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF).
    pub image: Option<PathBuf>,

    /// Largeur de sortie, en cellules. Défaut : 40.
    #[arg(short = 'w', long)]
    pub width: Option<u16>,

    /// Hauteur de sortie, en cellules. Défaut : 14.
    #[arg(short = 'h', long)]
    pub height: Option<u16>,

    /// Fichier de configuration TOML (section [render]).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Filtre de redimensionnement : nearest, bilinear, catmull-rom, lanczos3.
    #[arg(long)]
    pub filter: Option<String>,

    /// Adapter la grille à la taille du terminal (ignore -w/-h).
    #[arg(long, default_value_t = false)]
    pub fit: bool,

    /// Résoudre les blocs sur un seul thread.
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Afficher la table de glyphes sous forme littérale et quitter.
    #[arg(long, default_value_t = false)]
    pub dump_table: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Usage court affiché quand aucune image n'est fournie.
pub const USAGE: &str = "usage: blocktty [-w cellules] [-h cellules] [--config FICHIER] <image>";
