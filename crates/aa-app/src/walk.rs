//! Découverte récursive des fichiers script sous la racine d'entrée.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use aa_core::layout::SCRIPT_EXT;

/// Liste récursivement les fichiers dont le nom contient `.mlt`, triés pour
/// un ordre de traitement stable.
///
/// Les entrées de métadonnées (`.DS_Store`) sont ignorées. Un sous-dossier
/// illisible est journalisé puis ignoré, il n'interrompt pas le parcours.
#[must_use]
pub fn discover(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    scan_dir(root, &mut files);
    files.sort();
    files
}

fn scan_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("lecture du dossier {} impossible : {e}", dir.display());
            return;
        }
    };
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(&path, files);
        } else if let Some(name) = path.file_name().and_then(OsStr::to_str) {
            if name == ".DS_Store" {
                continue;
            }
            // Le nom *contient* l'extension, il ne se termine pas
            // forcément par elle.
            if name.contains(SCRIPT_EXT) {
                files.push(path);
            }
        }
    }
}
