//! Erreurs du pipeline de conversion.
//!
//! Politique de propagation : une erreur de mise en place (lecture, police)
//! avorte le fichier concerné ; une erreur de bloc (rendu, écriture) avorte
//! ce seul bloc. Aucune erreur n'interrompt le parcours global — toutes sont
//! journalisées.

use std::path::PathBuf;

use thiserror::Error;

/// Échec de décodage Shift-JIS d'une ligne.
///
/// Porte le texte best-effort (séquences invalides remplacées par U+FFFD)
/// pour que l'appelant choisisse explicitement sa politique de repli au lieu
/// de perdre silencieusement le contenu.
#[derive(Debug, Error)]
#[error("séquence Shift-JIS invalide à la ligne {line}")]
pub struct DecodeError {
    /// Numéro de ligne (base 1) dans le fichier source.
    pub line: usize,
    /// Décodage best-effort de la ligne fautive.
    pub lossy: String,
}

/// Erreurs de conversion d'un fichier script.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Le fichier d'entrée ne peut pas être lu. Fatal pour ce fichier.
    #[error("lecture de {path} impossible : {source}")]
    Read {
        /// Chemin du fichier fautif.
        path: PathBuf,
        /// Erreur d'E/S sous-jacente.
        source: std::io::Error,
    },

    /// Décodage Shift-JIS en échec (si la politique stricte est retenue).
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Police ou ressource de mesure indisponible. Aucun bloc du fichier ne
    /// peut être dimensionné.
    #[error("mise en place du rendu impossible : {0}")]
    RenderSetup(String),

    /// Échec du rendu ou de l'encodage d'un seul bloc. Les blocs frères
    /// continuent.
    #[error("rendu du bloc {index} en échec : {reason}")]
    RenderBlock {
        /// Index du bloc dans son fichier.
        index: usize,
        /// Cause de l'échec.
        reason: String,
    },

    /// Échec de création du dossier de sortie ou d'écriture des octets
    /// encodés. Rapporté par bloc.
    #[error("écriture de {path} impossible : {source}")]
    Persist {
        /// Chemin de sortie visé.
        path: PathBuf,
        /// Erreur d'E/S sous-jacente.
        source: std::io::Error,
    },
}
