//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use projectmaker_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the materializer and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    denied: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later write to `path` fail with `PermissionDenied`.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.write().denied.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read().files.get(path.as_ref()).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    /// All directories, sorted by path.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.read().directories.iter().cloned().collect()
    }

    // A panic while holding the lock cannot leave the maps half-updated,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl MemoryFilesystemInner {
    fn check_allowed(&self, path: &Path) -> io::Result<()> {
        if self.denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        Ok(())
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.write();
        inner.check_allowed(path)?;

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        if !inner.parent_exists(path) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.write();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if !inner.directories.contains(&current) {
                inner.check_allowed(&current)?;
                inner.directories.insert(current.clone());
            }
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut inner = self.write();
        inner.check_allowed(path)?;

        if !inner.parent_exists(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "parent directory does not exist",
            ));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_requires_parent_and_is_exclusive() {
        let fs = MemoryFilesystem::new();
        assert_eq!(
            fs.create_dir(Path::new("out/Foo")).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );

        fs.create_dir_all(Path::new("out")).unwrap();
        fs.create_dir(Path::new("out/Foo")).unwrap();
        assert_eq!(
            fs.create_dir(Path::new("out/Foo")).unwrap_err().kind(),
            io::ErrorKind::AlreadyExists
        );
    }

    #[test]
    fn write_file_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        fs.write_file(Path::new("a/b.txt"), "x").unwrap();
        assert_eq!(fs.read_file("a/b.txt").as_deref(), Some("x"));
    }

    #[test]
    fn denied_paths_fail_with_permission_denied() {
        let fs = MemoryFilesystem::new();
        fs.deny("locked");

        let err = fs.create_dir_all(Path::new("locked/inner")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(fs.list_directories().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        other.create_dir_all(Path::new("shared")).unwrap();
        assert!(fs.exists(Path::new("shared")));
    }
}
