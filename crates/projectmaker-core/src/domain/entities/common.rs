use crate::domain::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay inside the project root.
///
/// Invariant: never absolute, never empty, no `..` components. Enforced at
/// construction; `.` components are normalised away.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let display = path.display().to_string();

        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed { path: display });
        }

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(DomainError::PathEscapesRoot { path: display });
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DomainError::AbsolutePathNotAllowed { path: display });
                }
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(DomainError::InvalidPath {
                path: display,
                reason: "path is empty".into(),
            });
        }

        Ok(Self(normalized))
    }

    /// Final component, used to look up generated content.
    pub fn file_name(&self) -> &str {
        self.0.file_name().and_then(|n| n.to_str()).unwrap_or("")
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths_are_accepted() {
        let p = RelativePath::try_new("assets/sprites").unwrap();
        assert_eq!(p.as_path(), Path::new("assets").join("sprites"));
        assert_eq!(p.file_name(), "sprites");
    }

    #[test]
    fn current_dir_components_are_dropped() {
        let p = RelativePath::try_new("./src/./index.js").unwrap();
        assert_eq!(p.as_path(), Path::new("src").join("index.js"));
    }

    #[test]
    fn parent_traversal_is_rejected() {
        assert!(matches!(
            RelativePath::try_new("../outside.txt"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(matches!(
            RelativePath::try_new("src/../../x"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn absolute_paths_are_rejected() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn empty_paths_are_rejected() {
        assert!(RelativePath::try_new("").is_err());
        assert!(RelativePath::try_new(".").is_err());
    }
}
