use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Final project structure ready for materialization.
///
/// This is the output of [`TemplateRegistry::render`](crate::application::TemplateRegistry::render).
/// It contains no business logic, only data: the absolute-or-cwd-relative
/// project root plus every directory and file, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: RelativePath, content: String) {
        self.entries
            .push(FsEntry::File(FileToWrite { path, content }));
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path }));
    }

    pub fn with_file(mut self, path: RelativePath, content: impl Into<String>) -> Self {
        self.add_file(path, content.into());
        self
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    /// A file may only be written once per structure.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in self.files() {
            if !seen.insert(file.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}
