use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::GeneratedFile;
use crate::error::OutputError;

/// Make sure `dir` exists, creating missing parents.
///
/// Returns `true` when the directory had to be created. Existing contents are
/// never touched.
pub fn ensure_output_dir(dir: &Path) -> Result<bool, OutputError> {
    if dir.is_dir() {
        debug!("output directory {} already exists", dir.display());
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Write one generated file under `dir`, replacing any previous version.
pub fn write_file(dir: &Path, file: &GeneratedFile) -> Result<PathBuf, OutputError> {
    let path = dir.join(&file.path);
    fs::write(&path, &file.content).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    debug!("wrote {} bytes to {}", file.content.len(), path.display());
    Ok(path)
}
