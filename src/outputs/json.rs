//! JSON output for the bulk importer.
//!
//! The whole document is rendered in memory, written to a temporary file
//! next to the destination, then renamed over it. Readers never see a
//! half-written file.
//!
//! # Output Shape
//!
//! ```text
//! {
//!   "bulletins": [
//!     { "apsb": "APSB25-85", "title": "APSB25-85: ...", ... }
//!   ]
//! }
//! ```

use crate::error::{DigestError, Result};
use crate::models::BulletinImport;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`BulletinImport`] to `path` as pretty-printed JSON.
///
/// The document is written to `<path>.tmp` in the same directory and then
/// renamed over `path`, so an existing file is replaced whole or not at all.
///
/// # Arguments
///
/// * `import` - The parsed bulletins to serialize
/// * `path` - Destination file; its directory must already exist
///
/// # Returns
///
/// `Ok(())` on success, or an error if serialization, the write or the
/// rename fails. The temporary file is removed on failure.
#[instrument(
    level = "info",
    skip_all,
    fields(path = %path.display(), count = import.bulletins.len())
)]
pub async fn write_import_file(import: &BulletinImport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(import)?;

    let tmp_path = temp_sibling(path);
    if let Err(e) = fs::write(&tmp_path, json).await {
        error!(path = %tmp_path.display(), error = %e, "Failed to write temporary JSON file");
        let _ = fs::remove_file(&tmp_path).await;
        return Err(DigestError::io(tmp_path, e));
    }

    if let Err(e) = fs::rename(&tmp_path, path).await {
        error!(error = %e, "Failed to move JSON file into place");
        let _ = fs::remove_file(&tmp_path).await;
        return Err(DigestError::io(path, e));
    }

    info!("Wrote bulletin import file");
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("bulletins.json"));
    name.push(".tmp");
    path.with_file_name(name)
}
