use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("input directory {0:?} does not exist or cannot be opened")]
    DirectoryNotFound(PathBuf, #[source] io::Error),
    #[error("failed to read an entry of {0:?}")]
    EntryUnreadable(PathBuf, #[source] io::Error),
}

/// Lists the `.png` files of `dir`, matched case-insensitively.
///
/// Filenames are sorted lexicographically so repeated runs over the same
/// directory produce identical output, independent of the filesystem's
/// native listing order.
pub fn scan_png_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|e| {
        error!("cannot open input directory {:?}", dir);
        ScanError::DirectoryNotFound(dir.to_path_buf(), e)
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::EntryUnreadable(dir.to_path_buf(), e))?;
        let path = entry.path();

        let is_png = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_ascii_lowercase().ends_with(".png"))
            .unwrap_or(false);

        if is_png && path.is_file() {
            debug!("candidate file: {:?}", path);
            files.push(path);
        }
    }

    files.sort();
    info!("found {} png file(s) in {:?}", files.len(), dir);

    Ok(files)
}
