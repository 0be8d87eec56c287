//! Pipeline texte : décodage Shift-JIS, normalisation des entités,
//! segmentation en blocs AA.
//!
//! Les trois étapes sont des fonctions pures sur des lignes ; l'orchestrateur
//! (aa-app) les enchaîne ligne à ligne puis segmente la séquence obtenue.

pub mod decode;
pub mod normalize;
pub mod segment;

pub use decode::{decode_line, split_lines};
pub use normalize::normalize;
pub use segment::segment;
