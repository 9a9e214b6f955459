//! # Adobe Digest
//!
//! Helpers that feed an Adobe security-bulletin aggregation pipeline.
//!
//! ## Tools
//!
//! - **`fetch_adobe_list`**: fetches a product security page (Adobe Commerce
//!   by default) and prints the bulletin links found on it
//! - **`parse_bulletins`**: turns bulletin lines copied by hand from the
//!   bulletin overview page into the JSON document read by the bulk importer
//!
//! ## Usage
//!
//! ```sh
//! fetch_adobe_list
//! parse_bulletins bulletins.txt data/import.json
//! ```
//!
//! ## Layout
//!
//! 1. [`scrapers`]: page fetch and link extraction
//! 2. [`parser`] + [`catalog`]: line parsing and product inference
//! 3. [`outputs`]: importer JSON
//!
//! Both tools run on a single thread and make at most one network request.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod models;
pub mod outputs;
pub mod parser;
pub mod scrapers;
pub mod utils;

pub use error::{DigestError, Result};
pub use models::{Bulletin, BulletinImport};
