//! Directory Materializer - creates and verifies the project skeleton.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::DirectorySpec,
};

/// Creates the blueprint's directories under a project root.
///
/// Creation is idempotent. After the creation pass every directory is
/// re-checked, so a creation call that silently had no effect is still
/// reported.
pub struct DirectoryMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DirectoryMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Create `root` and every spec beneath it, then confirm they all exist.
    ///
    /// Returns the confirmed directories, root first, in declaration order.
    #[instrument(skip_all, fields(root = %root.display(), count = specs.len()))]
    pub fn materialize(
        &self,
        root: &Path,
        specs: &[DirectorySpec],
    ) -> Result<Vec<PathBuf>, ApplicationError> {
        let required: Vec<PathBuf> = std::iter::once(root.to_path_buf())
            .chain(specs.iter().map(|spec| root.join(spec.path.as_path())))
            .collect();

        for path in &required {
            debug!(path = %path.display(), "Creating directory");
            self.filesystem.create_dir_all(path).map_err(|e| {
                ApplicationError::DirectoryCreationFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        for path in &required {
            if !self.filesystem.is_dir(path) {
                return Err(ApplicationError::DirectoryVerificationFailed { path: path.clone() });
            }
        }

        debug!(count = required.len(), "Directories confirmed");
        Ok(required)
    }
}
