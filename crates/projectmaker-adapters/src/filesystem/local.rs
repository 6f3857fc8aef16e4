//! Local filesystem adapter using std::fs.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use projectmaker_core::application::ports::Filesystem;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        // The handle is dropped on every return path out of this function.
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
