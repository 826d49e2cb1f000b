//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use lessgo_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle while the scaffold
/// service owns another. Faults can be injected per path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
    vanishing_dirs: HashSet<PathBuf>,
}

fn poisoned() -> io::Error {
    io::Error::other("memory filesystem lock poisoned")
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `path` fail with `PermissionDenied`.
    pub fn fail_writes_to(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(path.into());
        }
        self
    }

    /// Make creation of `path` report success without creating anything.
    pub fn vanish_directory(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.vanishing_dirs.insert(path.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if inner.vanishing_dirs.contains(path) {
            return Ok(());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} is a file", current.display()),
                ));
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        if inner.failing_writes.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("parent directory {} does not exist", parent.display()),
                ));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/w/demo/app")).unwrap();

        assert!(fs.is_dir(Path::new("/w")));
        assert!(fs.is_dir(Path::new("/w/demo")));
        assert!(fs.is_dir(Path::new("/w/demo/app")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        let err = fs
            .write_file(Path::new("/w/demo/.env"), "ENV=development")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn injected_faults() {
        let fs = MemoryFilesystem::new()
            .fail_writes_to("/w/Makefile")
            .vanish_directory("/w/app");
        fs.create_dir_all(Path::new("/w")).unwrap();

        fs.create_dir_all(Path::new("/w/app")).unwrap();
        assert!(!fs.is_dir(Path::new("/w/app")));

        let err = fs.write_file(Path::new("/w/Makefile"), "all:").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(fs.read_file(Path::new("/w/Makefile")).is_none());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.create_dir_all(Path::new("/w")).unwrap();
        fs.write_file(Path::new("/w/.env"), "x").unwrap();

        assert_eq!(handle.read_file(Path::new("/w/.env")).as_deref(), Some("x"));
        assert_eq!(handle.list_files(), vec![PathBuf::from("/w/.env")]);
    }
}
