//! Application services - orchestrate use cases.
//!
//! The registry answers "what does a project of this type contain", and the
//! materializer writes that answer to disk.

pub mod materializer;
pub mod registry;

pub use materializer::ProjectMaterializer;
pub use registry::TemplateRegistry;
