//! Project Definition Schema
//!
//! The subset of the LDtk project document the generator reads. Everything
//! else in the file is ignored by serde.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

/// Parsed level project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDefinition {
    /// Entity and layer definitions.
    #[serde(alias = "definitions")]
    pub defs: Definitions,

    /// Levels authored in the project.
    pub levels: Vec<LevelDefinition>,
}

/// The `defs` block of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definitions {
    pub entities: Vec<EntityDefinition>,
    pub layers: Vec<LayerDefinition>,
}

/// An entity definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDefinition {
    pub identifier: String,
}

/// A layer definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDefinition {
    pub identifier: String,

    /// Values of an IntGrid layer; empty for other layer kinds.
    #[serde(default)]
    pub int_grid_values: Vec<IntGridValueDefinition>,
}

/// One value of an IntGrid layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntGridValueDefinition {
    #[serde(default)]
    pub identifier: Option<String>,
    pub value: i64,
}

/// A level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub identifier: String,
}

impl ProjectDefinition {
    /// Parse a project document read from `path`.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| CodegenError::SourceUnparseable {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = r#"{
        "jsonVersion": "1.5.3",
        "defs": {
            "entities": [{ "identifier": "Player", "width": 16 }],
            "layers": [
                {
                    "identifier": "Collisions",
                    "type": "IntGrid",
                    "intGridValues": [{ "value": 1, "identifier": "wall" }, { "value": 2 }]
                },
                { "identifier": "Entities", "type": "Entities" }
            ],
            "tilesets": []
        },
        "levels": [{ "identifier": "Level_0", "pxWid": 256 }]
    }"#;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let project = ProjectDefinition::parse(PROJECT, Path::new("world.ldtk")).unwrap();

        assert_eq!(project.defs.entities[0].identifier, "Player");
        assert_eq!(project.defs.layers.len(), 2);
        assert_eq!(project.defs.layers[0].int_grid_values.len(), 2);
        assert_eq!(
            project.defs.layers[0].int_grid_values[0].identifier.as_deref(),
            Some("wall")
        );
        assert!(project.defs.layers[1].int_grid_values.is_empty());
        assert_eq!(project.levels[0].identifier, "Level_0");
    }

    #[test]
    fn test_parse_accepts_definitions_key() {
        let text = r#"{ "definitions": { "entities": [], "layers": [] }, "levels": [] }"#;
        let project = ProjectDefinition::parse(text, Path::new("world.ldtk")).unwrap();
        assert_eq!(project, ProjectDefinition::default());
    }

    #[test]
    fn test_parse_rejects_missing_levels() {
        let text = r#"{ "defs": { "entities": [], "layers": [] } }"#;
        let err = ProjectDefinition::parse(text, Path::new("world.ldtk")).unwrap_err();
        assert_eq!(err.error_code(), "SOURCE_UNPARSEABLE");
    }

    #[test]
    fn test_parse_rejects_non_string_identifier() {
        let text = r#"{ "defs": { "entities": [{ "identifier": 3 }], "layers": [] }, "levels": [] }"#;
        assert!(ProjectDefinition::parse(text, Path::new("world.ldtk")).is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = ProjectDefinition::parse("{ not json", Path::new("broken.ldtk")).unwrap_err();
        assert!(matches!(err, CodegenError::SourceUnparseable { .. }));
    }
}
