//! Application layer for ProjectMaker.
//!
//! This layer contains:
//! - **Services**: `TemplateRegistry` (type to blueprint) and
//!   `ProjectMaterializer` (blueprint to disk)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Business rules live in `crate::domain`; this layer only coordinates them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ProjectMaterializer, TemplateRegistry};

pub use ports::{Filesystem, TemplateStore};

pub use error::ApplicationError;
