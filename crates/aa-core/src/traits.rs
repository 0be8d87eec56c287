//! Capacité de rendu texte, découplée du moteur de glyphes.

use image::RgbImage;

/// Métriques + dessin de texte monoligne.
///
/// Le rasterizer ne connaît que cette interface ; le backend réel (ab_glyph)
/// comme les mocks de test l'implémentent. Les largeurs mesurées dépendent du
/// moteur de glyphes et de la police : deux environnements différents peuvent
/// produire des canvas de tailles différentes pour le même texte (caveat de
/// portabilité assumé).
pub trait TextRenderer {
    /// Largeur rendue de `line` en pixels, à la taille de police fixe.
    fn measure_width(&self, line: &str) -> f32;

    /// Dessine `text` sur `canvas`, pen à `x`, ligne de base à `baseline_y`.
    /// La coordonnée verticale est la *ligne de base*, pas le haut du glyphe.
    fn draw_line(&self, canvas: &mut RgbImage, text: &str, x: f32, baseline_y: f32);
}
