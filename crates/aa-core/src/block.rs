//! Représentation d'un fichier script et de ses blocs AA.

/// Un bloc d'ASCII-art : le texte accumulé entre deux marqueurs, chaque ligne
/// source suivie de son `\n`.
///
/// `lines()` découpe sur `\n`, si bien que le `\n` final produit un dernier
/// fragment vide. Ce fragment compte comme une ligne pour la mise en page :
/// il participe à la hauteur du canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtBlock {
    value: String,
}

impl ArtBlock {
    /// Enveloppe le texte accumulé d'un bloc. Invariant du segmenteur :
    /// `value` est non vide.
    #[must_use]
    pub fn new(value: String) -> Self {
        Self { value }
    }

    /// Texte brut du bloc.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.value
    }

    /// Lignes du bloc, fragment vide final compris.
    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.value.split('\n')
    }

    /// Nombre de lignes au sens de `lines()`.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

/// Un fichier script décodé et segmenté. Possédé par la conversion d'un seul
/// fichier, jamais partagé entre fichiers.
#[derive(Clone, Debug)]
pub struct ScriptFile {
    /// Nom du fichier sans extension (futur nom de dossier de sortie).
    pub name: String,
    /// Chemin relatif à la racine d'entrée, extension retirée.
    pub rel_path: std::path::PathBuf,
    /// Blocs dans l'ordre d'émission ; l'index d'un bloc est son identité.
    pub blocks: Vec<ArtBlock>,
}
