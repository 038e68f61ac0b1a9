//! Content-hash manifest.
//!
//! Sidecar file recording which source digest each artifact was rendered
//! from. Only used when freshness is decided by content hash.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::category::Category;
use crate::error::{CodegenError, Result};

/// Suffix of the manifest file, appended to the project base name.
pub const MANIFEST_SUFFIX: &str = "codegen.json";

/// Record of one generated artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Hex SHA-256 of the source the artifact was rendered from.
    pub source_sha256: String,
    /// When the artifact was written.
    pub generated_at: DateTime<Utc>,
}

/// Manifest tracking the artifacts of one project file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub artifacts: BTreeMap<Category, ManifestEntry>,
}

impl Manifest {
    /// Load the manifest, or an empty one if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| CodegenError::ManifestUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| CodegenError::ManifestUnparseable {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save the manifest to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| CodegenError::ManifestWriteFailure {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Get the entry for a category.
    pub fn entry(&self, category: Category) -> Option<&ManifestEntry> {
        self.artifacts.get(&category)
    }

    /// Record that `category` was rendered from the source with `digest`.
    pub fn record(&mut self, category: Category, digest: &str) {
        self.artifacts.insert(
            category,
            ManifestEntry {
                source_sha256: digest.to_string(),
                generated_at: Utc::now(),
            },
        );
    }
}
