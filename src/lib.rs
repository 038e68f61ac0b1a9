//! ldtk-codegen - LDtk Project Transform
//!
//! Turns an LDtk level project into source artifacts for an application's
//! module graph:
//! 1. Primary module - the project JSON embedded behind the runtime wrapper
//! 2. Constants modules - entity, layer and level identifiers as named
//!    constants, regenerated only when stale
//!
//! # Architecture
//!
//! - `project`: definition schema, per-invocation source cache, discovery
//! - `constants`: extraction, symbol names, freshness, rendering, orchestration
//! - `transform`: the per-file entry point a build tool calls

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod primary;
pub mod project;
pub mod transform;

pub use config::{CodegenConfig, CollisionPolicy};
pub use constants::{generate_constants, Category, GenerationReport};
pub use error::{CodegenError, Result};
pub use primary::emit_primary_module;
pub use transform::{transform, TransformOutput};
