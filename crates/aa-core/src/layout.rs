//! Constantes de mise en page, fixées par design (pas de configuration).

/// Taille de police en pixels.
pub const FONT_SIZE: f32 = 16.0;

/// Hauteur d'une ligne de texte en pixels (interligne compris).
pub const LINE_HEIGHT: f32 = 18.0;

/// Marge gauche du canvas en pixels.
pub const LEFT_MARGIN: f32 = 10.0;

/// Fond : blanc.
pub const BACKGROUND: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// Encre : gris foncé #333333.
pub const FOREGROUND: [u8; 3] = [0x33, 0x33, 0x33];

/// Ligne délimitant deux blocs AA. Comparaison exacte, sensible à la casse,
/// sans trim.
pub const SPLIT_MARKER: &str = "[SPLIT]";

/// Les fichiers script reconnus contiennent cette extension dans leur nom.
pub const SCRIPT_EXT: &str = ".mlt";

/// Extension des images produites.
pub const IMAGE_EXT: &str = "png";
