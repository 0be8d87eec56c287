//! Types, constantes et erreurs partagés par le workspace aashot.
//!
//! This crate contains the shared types, the fixed layout constants, the
//! entity table data and the rendering capability trait used across the
//! aashot workspace.

pub mod block;
pub mod entities;
pub mod error;
pub mod layout;
pub mod traits;

pub use block::{ArtBlock, ScriptFile};
pub use entities::{EntityEntry, EntityTable};
pub use error::{ConvertError, DecodeError};
pub use traits::TextRenderer;
