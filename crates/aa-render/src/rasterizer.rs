//! Rasterisation d'un bloc AA en PNG, en deux phases : mesure puis dessin.

use std::io::Cursor;

use aa_core::block::ArtBlock;
use aa_core::error::ConvertError;
use aa_core::layout::{BACKGROUND, LEFT_MARGIN, LINE_HEIGHT};
use aa_core::traits::TextRenderer;
use image::{ImageFormat, Rgb, RgbImage};

/// Rend un bloc sur un canvas dimensionné à son contenu et l'encode en PNG.
///
/// Phase 1 : mesure la largeur rendue de chaque ligne et retient le maximum
/// `W`. La mesure passe uniquement par les métriques du backend, aucune
/// surface de mesure ne fuit dans le dessin.
/// Phase 2 : canvas de `ceil(W) + marge gauche` × `hauteur de ligne ×
/// (nb lignes + 1)` (une ligne de marge haute), fond blanc, chaque ligne `i`
/// dessinée à `x = marge gauche`, ligne de base `y = hauteur × (i + 1)`.
///
/// Sortie déterministe : même texte, même police, même moteur de glyphes →
/// mêmes octets.
///
/// # Errors
/// Retourne [`ConvertError::RenderBlock`] si l'encodage PNG échoue. `index`
/// n'intervient que dans le rapport d'erreur.
pub fn rasterize_block(
    index: usize,
    block: &ArtBlock,
    renderer: &impl TextRenderer,
) -> Result<Vec<u8>, ConvertError> {
    let mut max_width = 0.0f32;
    for line in block.lines() {
        let w = renderer.measure_width(line);
        if w > max_width {
            max_width = w;
        }
    }

    let width = (max_width.ceil() as u32 + LEFT_MARGIN as u32).max(1);
    let height = ((LINE_HEIGHT as u32) * (block.line_count() as u32 + 1)).max(1);

    let mut canvas = RgbImage::from_pixel(width, height, Rgb(BACKGROUND));
    for (i, line) in block.lines().enumerate() {
        renderer.draw_line(&mut canvas, line, LEFT_MARGIN, LINE_HEIGHT * (i as f32 + 1.0));
    }

    let mut bytes = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ConvertError::RenderBlock {
            index,
            reason: format!("encodage PNG : {e}"),
        })?;
    Ok(bytes)
}
