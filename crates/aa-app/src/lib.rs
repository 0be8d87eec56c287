//! Binaire aashot : découverte des fichiers script, orchestration de la
//! conversion, écriture des PNG.

pub mod cli;
pub mod convert;
pub mod walk;
