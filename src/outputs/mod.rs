//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: writes the [`BulletinImport`](crate::models::BulletinImport)
//!   document consumed by the bulk importer

pub mod json;
