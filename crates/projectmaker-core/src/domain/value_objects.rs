//! Domain value objects: ProjectType, ProjectName.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! This file's only job is to define the types, their string
//! representations, and their parsers.
//!
//! # Adding a Project Type
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `label` and `FromStr` arms here
//! 3. Add a table to the built-in template manifest
//! 4. Register any special files in `content.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectType ───────────────────────────────────────────────────────────────

/// The kind of project to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Web,
    Godot,
    Unity,
    NodeJs,
}

impl ProjectType {
    /// Every supported type, in declaration order.
    pub const ALL: [ProjectType; 4] = [Self::Web, Self::Godot, Self::Unity, Self::NodeJs];

    /// Configuration key for this type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Godot => "godot",
            Self::Unity => "unity",
            Self::NodeJs => "nodejs",
        }
    }

    /// Human-facing label, used in generated README files.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Godot => "Godot",
            Self::Unity => "Unity",
            Self::NodeJs => "Node.js",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(Self::Web),
            "godot" => Ok(Self::Godot),
            "unity" => Ok(Self::Unity),
            "nodejs" | "node" | "node-js" => Ok(Self::NodeJs),
            other => Err(DomainError::UnknownProjectTypeKey { key: other.into() }),
        }
    }
}

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A validated project name.
///
/// Invariant: usable as a single directory name under the target directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reject = |reason: &str| {
            Err(DomainError::InvalidProjectName {
                name: name.clone(),
                reason: reason.into(),
            })
        };

        if name.trim().is_empty() {
            return reject("name cannot be empty");
        }
        if name.contains('/') || name.contains('\\') {
            return reject("name cannot contain path separators");
        }
        if name == "." || name == ".." {
            return reject("name cannot be a relative directory marker");
        }
        if name.contains('\0') {
            return reject("name cannot contain NUL bytes");
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_parses_keys_and_aliases() {
        assert_eq!(ProjectType::from_str("web").unwrap(), ProjectType::Web);
        assert_eq!(ProjectType::from_str("GODOT").unwrap(), ProjectType::Godot);
        assert_eq!(ProjectType::from_str("node").unwrap(), ProjectType::NodeJs);
        assert!(matches!(
            ProjectType::from_str("rust"),
            Err(DomainError::UnknownProjectTypeKey { .. })
        ));
    }

    #[test]
    fn project_type_round_trips_through_as_str() {
        for ty in ProjectType::ALL {
            assert_eq!(ProjectType::from_str(ty.as_str()).unwrap(), ty);
        }
    }

    #[test]
    fn labels_are_capitalised() {
        assert_eq!(ProjectType::Web.label(), "Web");
        assert_eq!(ProjectType::NodeJs.label(), "Node.js");
    }

    #[test]
    fn valid_names_pass() {
        for name in ["Demo", "my-site", "my_game", "Project 2", "Foo.bar", ".site"] {
            assert!(ProjectName::new(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn invalid_names_are_rejected() {
        for name in ["", "   ", ".", "..", "a/b", "a\\b", "nul\0"] {
            assert!(
                matches!(
                    ProjectName::new(name),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted: {name:?}"
            );
        }
    }

    #[test]
    fn separators_are_reported_before_dot_markers() {
        match ProjectName::new("../escape") {
            Err(DomainError::InvalidProjectName { reason, .. }) => {
                assert_eq!(reason, "name cannot contain path separators");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
