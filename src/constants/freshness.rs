//! Freshness Gate
//!
//! Decides per artifact whether it must be regenerated. Two checks exist:
//! comparing modified times against the source (the default), and comparing
//! the source's content hash against the one recorded in the manifest.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::category::Category;
use crate::constants::manifest::Manifest;
use crate::error::Result;
use crate::project::SourceFile;

/// How freshness is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessMode {
    /// Stale when the artifact is older than the source.
    #[default]
    Mtime,
    /// Stale when the source content differs from the recorded digest.
    Hash,
}

/// Why an artifact needs regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    Missing,
    OlderThanSource,
    SourceChanged,
    Unrecorded,
    Forced,
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            StaleReason::Missing => "missing",
            StaleReason::OlderThanSource => "older than source",
            StaleReason::SourceChanged => "source changed",
            StaleReason::Unrecorded => "not in manifest",
            StaleReason::Forced => "forced",
        };
        f.write_str(reason)
    }
}

/// Result of a freshness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale(StaleReason),
}

impl Freshness {
    pub fn is_stale(&self) -> bool {
        matches!(self, Freshness::Stale(_))
    }
}

/// A freshness token for one source file.
pub trait FreshnessCheck {
    /// Check the artifact generated for `category`.
    fn check(&self, category: Category, artifact: &Path) -> Result<Freshness>;

    /// Note that the artifact for `category` was just written.
    fn record(&mut self, _category: Category, _artifact: &Path) -> Result<()> {
        Ok(())
    }
}

/// Compares artifact modified times against the source's.
#[derive(Debug, Clone)]
pub struct ModifiedTimeCheck {
    source_modified: SystemTime,
}

impl ModifiedTimeCheck {
    /// Stat the source once for the whole invocation.
    pub fn new(source: &SourceFile) -> Result<Self> {
        Ok(Self {
            source_modified: source.modified()?,
        })
    }
}

impl FreshnessCheck for ModifiedTimeCheck {
    fn check(&self, category: Category, artifact: &Path) -> Result<Freshness> {
        // Anything that is not a statable regular file counts as missing.
        let metadata = match fs::metadata(artifact) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => return Ok(Freshness::Stale(StaleReason::Missing)),
        };
        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(_) => return Ok(Freshness::Stale(StaleReason::Missing)),
        };

        if modified < self.source_modified {
            debug!("{} artifact older than source: {}", category, artifact.display());
            return Ok(Freshness::Stale(StaleReason::OlderThanSource));
        }

        Ok(Freshness::Fresh)
    }
}

/// Compares the source digest against the manifest.
#[derive(Debug, Clone)]
pub struct ContentHashCheck {
    digest: String,
    manifest: Manifest,
    manifest_path: PathBuf,
}

impl ContentHashCheck {
    /// Hash the source and load the manifest at `manifest_path`.
    pub fn new(source: &mut SourceFile, manifest_path: &Path) -> Result<Self> {
        Ok(Self {
            digest: source.digest()?,
            manifest: Manifest::load(manifest_path)?,
            manifest_path: manifest_path.to_path_buf(),
        })
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl FreshnessCheck for ContentHashCheck {
    fn check(&self, category: Category, artifact: &Path) -> Result<Freshness> {
        if !artifact.is_file() {
            return Ok(Freshness::Stale(StaleReason::Missing));
        }

        match self.manifest.entry(category) {
            None => Ok(Freshness::Stale(StaleReason::Unrecorded)),
            Some(entry) if entry.source_sha256 != self.digest => {
                Ok(Freshness::Stale(StaleReason::SourceChanged))
            }
            Some(_) => Ok(Freshness::Fresh),
        }
    }

    fn record(&mut self, category: Category, _artifact: &Path) -> Result<()> {
        self.manifest.record(category, &self.digest);
        self.manifest.save(&self.manifest_path)
    }
}
