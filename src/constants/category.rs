//! Identifier categories and their extraction from a project.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::project::ProjectDefinition;

/// One kind of generated constants module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entities,
    Layers,
    Levels,
}

impl Category {
    /// All categories, in processing order.
    pub const ALL: [Category; 3] = [Category::Entities, Category::Layers, Category::Levels];

    /// Plural name, used in artifact file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entities => "entities",
            Category::Layers => "layers",
            Category::Levels => "levels",
        }
    }

    /// Singular noun used in binding docs.
    pub fn noun(&self) -> &'static str {
        match self {
            Category::Entities => "entity",
            Category::Layers => "layer",
            Category::Levels => "level",
        }
    }

    /// Name of the union typedef.
    pub fn type_name(&self) -> &'static str {
        match self {
            Category::Entities => "TypeEntity",
            Category::Layers => "TypeLayer",
            Category::Levels => "TypeLevel",
        }
    }

    /// Description attached to the union typedef.
    pub fn type_description(&self) -> &'static str {
        match self {
            Category::Entities => "An entity.",
            Category::Layers => "A layer.",
            Category::Levels => "A level.",
        }
    }

    /// Raw identifiers of this category, sorted ascending.
    ///
    /// Duplicates are kept. Ordering compares UTF-16 code units, which is how
    /// consumers of the generated modules order strings; for identifiers
    /// inside the Basic Multilingual Plane it equals code point order.
    pub fn identifiers(&self, project: &ProjectDefinition) -> Vec<String> {
        let mut identifiers: Vec<String> = match self {
            Category::Entities => project
                .defs
                .entities
                .iter()
                .map(|entity| entity.identifier.clone())
                .collect(),
            Category::Layers => project
                .defs
                .layers
                .iter()
                .map(|layer| layer.identifier.clone())
                .collect(),
            Category::Levels => project
                .levels
                .iter()
                .map(|level| level.identifier.clone())
                .collect(),
        };

        identifiers.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
        identifiers
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
