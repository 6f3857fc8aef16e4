//! ProjectMaker Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! ProjectMaker scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         projectmaker-cli (CLI)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (TemplateRegistry, ProjectMaterializer) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │        (TemplateStore, Filesystem)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   projectmaker-adapters (Infrastructure)│
//! │   (InMemoryStore, LocalFilesystem, etc) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use projectmaker_core::prelude::*;
//!
//! let registry = TemplateRegistry::new(store);
//! let materializer = ProjectMaterializer::new(registry, filesystem);
//! materializer.scaffold(ProjectType::Godot, "Foo", ".")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

/// Public API - what external crates should use.
pub mod prelude {
    pub use crate::application::{
        ProjectMaterializer, TemplateRegistry,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        GeneratedContent, ProjectName, ProjectStructure, ProjectType, RelativePath,
        TemplateCatalog, TemplateDefinition,
    };
    pub use crate::error::{MakerError, MakerResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
