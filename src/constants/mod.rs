//! Constants Module Generation
//!
//! Generates the `<name>.entities.js`, `<name>.layers.js` and
//! `<name>.levels.js` modules next to a project, exposing every identifier
//! declared in it as a named constant.

pub mod category;
pub mod freshness;
pub mod generator;
pub mod manifest;
pub mod render;
pub mod symbol;

pub use category::Category;
pub use freshness::{
    ContentHashCheck, Freshness, FreshnessCheck, FreshnessMode, ModifiedTimeCheck, StaleReason,
};
pub use generator::{
    generate_constants, ArtifactOutcome, ArtifactReport, ArtifactSet, ConstantsGenerator,
    GenerationReport,
};
pub use manifest::{Manifest, ManifestEntry};
pub use render::{render_module, Binding, ModuleDocument};
pub use symbol::{find_collisions, symbol_name, Collision};
