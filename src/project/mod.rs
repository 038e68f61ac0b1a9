//! Project Module
//!
//! Reading level projects: the definition schema, the per-invocation source
//! cache, and discovery of project files on disk.

pub mod definition;
pub mod discover;
pub mod source;

pub use definition::{
    Definitions, EntityDefinition, IntGridValueDefinition, LayerDefinition, LevelDefinition,
    ProjectDefinition,
};
pub use discover::find_project_files;
pub use source::SourceFile;
