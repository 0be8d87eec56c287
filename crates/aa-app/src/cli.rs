use std::path::PathBuf;

use clap::Parser;

/// aashot — Convertit des scripts AA Shift-JIS en images PNG, un bloc
/// `[SPLIT]` par image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Racine des fichiers .mlt à convertir (parcourue récursivement).
    #[arg(long, default_value = "input")]
    pub input: PathBuf,

    /// Racine des images produites, arborescence d'entrée reproduite.
    #[arg(long, default_value = "output")]
    pub output: PathBuf,

    /// Police TrueType utilisée pour la mesure et le dessin.
    #[arg(long, default_value = "Saitamaar.ttf")]
    pub font: PathBuf,

    /// Nombre de threads de conversion. 0 = auto (rayon).
    #[arg(long, default_value_t = 0)]
    pub jobs: usize,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
