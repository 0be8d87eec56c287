//! Orchestration de la conversion d'un fichier script.
//!
//! Chaîne décodage → normalisation → segmentation → rasterisation, puis écrit
//! chaque bloc sous `<output>/<chemin relatif sans extension>/<index>.png`.
//! Les échecs par bloc sont des valeurs `Result` collectées et journalisées,
//! jamais des erreurs qui remontent au-delà de la boucle de blocs.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use aa_core::block::{ArtBlock, ScriptFile};
use aa_core::error::ConvertError;
use aa_core::layout::{IMAGE_EXT, SPLIT_MARKER};
use aa_core::{EntityTable, TextRenderer};
use aa_render::rasterize_block;
use aa_text::{decode_line, normalize, segment, split_lines};
use rayon::prelude::*;

/// Convertisseur d'un ensemble de fichiers partageant table, police et
/// racines. Les blocs d'un fichier sont rendus en parallèle ; leurs index
/// sont figés par la segmentation avant tout dispatch, donc les noms de
/// sortie ne dépendent pas de l'ordre d'achèvement.
pub struct FileConverter<'a, R> {
    /// Table d'entités, lecture seule, partagée par tout le run.
    pub table: &'a EntityTable,
    /// Backend de rendu texte.
    pub renderer: &'a R,
    /// Racine d'entrée, retirée des chemins pour construire la sortie.
    pub input_root: &'a Path,
    /// Racine de sortie.
    pub output_root: &'a Path,
}

impl<R: TextRenderer + Sync> FileConverter<'_, R> {
    /// Convertit un fichier et retourne le nombre d'images écrites.
    ///
    /// # Errors
    /// Retourne [`ConvertError::Read`] si le fichier est illisible (fatal
    /// pour ce fichier seulement). Les erreurs de bloc sont journalisées ici
    /// et ne remontent pas.
    pub fn convert_file(&self, path: &Path) -> Result<usize, ConvertError> {
        let script = self.parse_file(path)?;
        log::debug!("{} : {} bloc(s)", script.name, script.blocks.len());
        if script.blocks.is_empty() {
            return Ok(0);
        }

        let out_dir = self.output_root.join(&script.rel_path);
        let results: Vec<Result<PathBuf, ConvertError>> = script
            .blocks
            .par_iter()
            .enumerate()
            .map(|(index, block)| self.persist_block(&out_dir, index, block))
            .collect();

        let mut written = 0;
        for result in results {
            match result {
                Ok(out_path) => {
                    log::debug!("écrit {}", out_path.display());
                    written += 1;
                }
                Err(e) => log::error!("{} : {e}", path.display()),
            }
        }
        Ok(written)
    }

    /// Lit, décode, normalise et segmente un fichier.
    fn parse_file(&self, path: &Path) -> Result<ScriptFile, ConvertError> {
        let bytes = fs::read(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut lines = Vec::new();
        for (i, raw) in split_lines(&bytes).into_iter().enumerate() {
            let text = match decode_line(raw, i + 1) {
                Ok(text) => text,
                // Politique de repli : conserver le texte best-effort plutôt
                // que perdre la ligne.
                Err(e) => {
                    log::warn!("{} : {e}, texte best-effort conservé", path.display());
                    e.lossy
                }
            };
            lines.push(normalize(&text, self.table));
        }

        let rel = path.strip_prefix(self.input_root).unwrap_or(path);
        let rel_path = rel.with_extension("");
        let name = rel_path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .to_string();

        Ok(ScriptFile {
            name,
            rel_path,
            blocks: segment(&lines, SPLIT_MARKER),
        })
    }

    /// Rend un bloc et écrit son PNG. Tout échec n'avorte que ce bloc.
    fn persist_block(
        &self,
        out_dir: &Path,
        index: usize,
        block: &ArtBlock,
    ) -> Result<PathBuf, ConvertError> {
        let png = rasterize_block(index, block, self.renderer)?;
        fs::create_dir_all(out_dir).map_err(|source| ConvertError::Persist {
            path: out_dir.to_path_buf(),
            source,
        })?;
        let out_path = out_dir.join(format!("{index}.{IMAGE_EXT}"));
        fs::write(&out_path, &png).map_err(|source| ConvertError::Persist {
            path: out_path.clone(),
            source,
        })?;
        Ok(out_path)
    }
}
