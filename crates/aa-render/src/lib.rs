//! Rendu d'un bloc AA vers un PNG en mémoire.
//!
//! `face` fournit le backend ab_glyph derrière le trait [`aa_core::TextRenderer`] ;
//! `rasterizer` applique l'algorithme mesure-puis-dessin indépendamment du
//! backend.

pub mod face;
pub mod rasterizer;

pub use face::GlyphFace;
pub use rasterizer::rasterize_block;
