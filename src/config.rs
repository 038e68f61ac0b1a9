//! Transform configuration.
//!
//! Options can be loaded from a JSON file; unset keys take their defaults.
//! The CLI applies its flags on top of the loaded values.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::FreshnessMode;
use crate::error::{CodegenError, Result};

/// Package the primary module imports the runtime wrapper from.
pub const DEFAULT_RUNTIME_PACKAGE: &str = "@theatrejs/plugin-ldtk";

/// Extension of generated constants modules.
pub const DEFAULT_MODULE_EXTENSION: &str = "js";

/// What to do when two identifiers map to the same symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Log the collision and write the module with duplicate bindings.
    #[default]
    Warn,
    /// Fail before writing the module.
    Error,
}

/// Options for one transform invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Generate the entities/layers/levels constants modules.
    pub constants: bool,

    /// How artifact freshness is decided.
    pub freshness: FreshnessMode,

    /// Handling of symbol collisions.
    pub collisions: CollisionPolicy,

    /// Regenerate every artifact regardless of freshness.
    pub force: bool,

    /// Package providing the runtime wrapper.
    pub runtime_package: String,

    /// Extension of generated modules, without the dot.
    pub module_extension: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            constants: false,
            freshness: FreshnessMode::default(),
            collisions: CollisionPolicy::default(),
            force: false,
            runtime_package: DEFAULT_RUNTIME_PACKAGE.to_string(),
            module_extension: DEFAULT_MODULE_EXTENSION.to_string(),
        }
    }
}

impl CodegenConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CodegenError::ConfigUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| CodegenError::InvalidConfig {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Enable or disable the constants modules.
    pub fn with_constants(mut self, constants: bool) -> Self {
        self.constants = constants;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = CodegenConfig::default();
        assert!(!config.constants);
        assert!(!config.force);
        assert_eq!(config.freshness, FreshnessMode::Mtime);
        assert_eq!(config.collisions, CollisionPolicy::Warn);
        assert_eq!(config.runtime_package, "@theatrejs/plugin-ldtk");
        assert_eq!(config.module_extension, "js");
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ldtk-codegen.json");
        fs::write(&path, r#"{ "constants": true, "collisions": "error" }"#).unwrap();

        let config = CodegenConfig::load(&path).unwrap();
        assert!(config.constants);
        assert_eq!(config.collisions, CollisionPolicy::Error);
        assert_eq!(config.module_extension, "js");
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ldtk-codegen.json");
        fs::write(&path, r#"{ "constant": true }"#).unwrap();

        let err = CodegenConfig::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = CodegenConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_UNREADABLE");
        assert_eq!(
            CodegenConfig::load_or_default(None).unwrap(),
            CodegenConfig::default()
        );
    }
}
