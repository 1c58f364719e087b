use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{GeneratorError, Result};
use crate::render::RenderedFile;

/// Writes rendered files below `module_dir`, creating directories as
/// needed. Files whose contents are already current are left untouched.
///
/// Returns the paths that were written.
pub fn write_files(module_dir: &Path, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for file in files {
        let path = module_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
        }
        if fs::read_to_string(&path).is_ok_and(|existing| existing == file.contents) {
            debug!(path = %path.display(), "unchanged");
            continue;
        }
        fs::write(&path, &file.contents).map_err(|e| GeneratorError::io(&path, e))?;
        written.push(path);
    }
    info!(
        written = written.len(),
        total = files.len(),
        dir = %module_dir.display(),
        "wrote generated model"
    );
    Ok(written)
}
