//! Backend de rendu texte basé sur ab_glyph.

use std::path::Path;

use aa_core::error::ConvertError;
use aa_core::layout::{FONT_SIZE, FOREGROUND};
use aa_core::traits::TextRenderer;
use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use image::RgbImage;

/// Police TrueType chargée, à l'échelle fixe du design.
pub struct GlyphFace {
    font: FontVec,
    scale: PxScale,
}

impl GlyphFace {
    /// Charge une police TrueType depuis le disque.
    ///
    /// # Errors
    /// Retourne [`ConvertError::RenderSetup`] si le fichier est illisible ou
    /// n'est pas une police valide.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let data = std::fs::read(path).map_err(|e| {
            ConvertError::RenderSetup(format!("police {} illisible : {e}", path.display()))
        })?;
        let font = FontVec::try_from_vec(data).map_err(|e| {
            ConvertError::RenderSetup(format!("police {} invalide : {e}", path.display()))
        })?;
        Ok(Self {
            font,
            scale: PxScale::from(FONT_SIZE),
        })
    }

    /// Avance horizontale d'un glyphe, crénage avec le précédent compris.
    fn advance(&self, prev: Option<GlyphId>, id: GlyphId) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let kern = prev.map_or(0.0, |p| scaled.kern(p, id));
        kern + scaled.h_advance(id)
    }
}

impl TextRenderer for GlyphFace {
    fn measure_width(&self, line: &str) -> f32 {
        let mut width = 0.0;
        let mut prev = None;
        for ch in line.chars() {
            let id = self.font.glyph_id(ch);
            width += self.advance(prev, id);
            prev = Some(id);
        }
        width
    }

    fn draw_line(&self, canvas: &mut RgbImage, text: &str, x: f32, baseline_y: f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut pen_x = x;
        let mut prev = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(p) = prev {
                pen_x += scaled.kern(p, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(pen_x, baseline_y));
            if let Some(outline) = self.font.outline_glyph(glyph) {
                let bounds = outline.px_bounds();
                outline.draw(|gx, gy, coverage| {
                    let px = gx as i32 + bounds.min.x as i32;
                    let py = gy as i32 + bounds.min.y as i32;
                    if px >= 0
                        && py >= 0
                        && (px as u32) < canvas.width()
                        && (py as u32) < canvas.height()
                    {
                        let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                        let a = coverage.clamp(0.0, 1.0);
                        for (dst, &fg) in pixel.0.iter_mut().zip(FOREGROUND.iter()) {
                            *dst = (f32::from(fg) * a + f32::from(*dst) * (1.0 - a)) as u8;
                        }
                    }
                });
            }
            pen_x += scaled.h_advance(id);
            prev = Some(id);
        }
    }
}
