use aa_app::convert::FileConverter;
use aa_app::{cli, walk};
use aa_core::EntityTable;
use aa_core::layout::SCRIPT_EXT;
use aa_render::GlyphFace;
use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Ressources partagées du run : table d'entités et police. Sans
    //    police, aucun fichier ne peut être mesuré.
    let table = EntityTable::builtin().context("table d'entités embarquée invalide")?;
    let face = GlyphFace::load(&cli.font)?;

    // 4. Découverte des fichiers script
    let files = walk::discover(&cli.input);
    if files.is_empty() {
        log::warn!("aucun fichier {SCRIPT_EXT} sous {}", cli.input.display());
        return Ok(());
    }

    let converter = FileConverter {
        table: &table,
        renderer: &face,
        input_root: &cli.input,
        output_root: &cli.output,
    };

    // 5. Conversion, parallèle entre fichiers. Une erreur de fichier est
    //    journalisée et n'interrompt jamais le parcours.
    let run = || {
        files
            .par_iter()
            .map(|path| match converter.convert_file(path) {
                Ok(written) => written,
                Err(e) => {
                    log::error!("{} : {e}", path.display());
                    0
                }
            })
            .sum::<usize>()
    };
    let written = if cli.jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.jobs)
            .build()
            .context("création du pool de threads")?
            .install(run)
    } else {
        run()
    };

    log::info!(
        "{written} image(s) écrite(s) pour {} fichier(s)",
        files.len()
    );
    Ok(())
}
