//! Generation Orchestrator
//!
//! Runs the freshness gate for each category in turn and rewrites the stale
//! artifacts. The project is parsed on the first stale category and reused
//! for the rest of the pass. A failure stops the pass; artifacts already
//! written in it are kept.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::{CodegenConfig, CollisionPolicy};
use crate::constants::category::Category;
use crate::constants::freshness::{
    ContentHashCheck, Freshness, FreshnessCheck, FreshnessMode, ModifiedTimeCheck, StaleReason,
};
use crate::constants::manifest::MANIFEST_SUFFIX;
use crate::constants::render::render_module;
use crate::constants::symbol::find_collisions;
use crate::error::{CodegenError, Result};
use crate::project::SourceFile;

/// Artifact locations for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    directory: PathBuf,
    base_name: String,
    extension: String,
}

impl ArtifactSet {
    /// Artifacts live next to the source, named after its base name.
    pub fn for_source(source: &SourceFile, extension: &str) -> Result<Self> {
        Ok(Self {
            directory: source.directory().to_path_buf(),
            base_name: source.base_name()?,
            extension: extension.to_string(),
        })
    }

    /// Path of the artifact for `category`.
    pub fn path(&self, category: Category) -> PathBuf {
        self.directory.join(format!(
            "{}.{}.{}",
            self.base_name, category, self.extension
        ))
    }

    /// Path of the content-hash manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.base_name, MANIFEST_SUFFIX))
    }
}

/// What happened to one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactOutcome {
    /// Rewritten with `symbols` bindings.
    Written { reason: StaleReason, symbols: usize },
    /// Fresh; not touched.
    Skipped,
}

/// Outcome for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub category: Category,
    pub path: PathBuf,
    pub outcome: ArtifactOutcome,
}

/// Summary of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub source: PathBuf,
    pub artifacts: Vec<ArtifactReport>,
    /// Whether the project had to be parsed.
    pub parsed: bool,
}

impl GenerationReport {
    /// Artifacts written in this pass.
    pub fn written(&self) -> impl Iterator<Item = &ArtifactReport> {
        self.artifacts
            .iter()
            .filter(|artifact| matches!(artifact.outcome, ArtifactOutcome::Written { .. }))
    }

    /// Outcome for `category`.
    pub fn outcome(&self, category: Category) -> Option<ArtifactOutcome> {
        self.artifacts
            .iter()
            .find(|artifact| artifact.category == category)
            .map(|artifact| artifact.outcome)
    }

    pub fn is_up_to_date(&self) -> bool {
        self.written().next().is_none()
    }
}

/// Generates the constants modules of a project.
#[derive(Debug, Clone)]
pub struct ConstantsGenerator<'a> {
    config: &'a CodegenConfig,
}

impl<'a> ConstantsGenerator<'a> {
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self { config }
    }

    /// Run one generation pass over `source`.
    pub fn generate(&self, source: &mut SourceFile) -> Result<GenerationReport> {
        let artifacts = ArtifactSet::for_source(source, &self.config.module_extension)?;
        let mut check = self.freshness_check(source, &artifacts)?;
        let mut reports = Vec::with_capacity(Category::ALL.len());

        for category in Category::ALL {
            let path = artifacts.path(category);
            let freshness = if self.config.force {
                Freshness::Stale(StaleReason::Forced)
            } else {
                check.check(category, &path)?
            };

            let outcome = match freshness {
                Freshness::Fresh => {
                    debug!("{} is up to date", path.display());
                    ArtifactOutcome::Skipped
                }
                Freshness::Stale(reason) => {
                    let symbols = self.regenerate(source, category, &path)?;
                    check.record(category, &path)?;
                    info!("Wrote {} ({}, {} symbols)", path.display(), reason, symbols);
                    ArtifactOutcome::Written { reason, symbols }
                }
            };

            reports.push(ArtifactReport {
                category,
                path,
                outcome,
            });
        }

        Ok(GenerationReport {
            source: source.path().to_path_buf(),
            artifacts: reports,
            parsed: source.is_parsed(),
        })
    }

    /// Check every artifact without writing anything.
    pub fn inspect(&self, source: &mut SourceFile) -> Result<Vec<(Category, PathBuf, Freshness)>> {
        let artifacts = ArtifactSet::for_source(source, &self.config.module_extension)?;
        let check = self.freshness_check(source, &artifacts)?;

        Category::ALL
            .iter()
            .map(|&category| {
                let path = artifacts.path(category);
                let freshness = check.check(category, &path)?;
                Ok((category, path, freshness))
            })
            .collect()
    }

    fn freshness_check(
        &self,
        source: &mut SourceFile,
        artifacts: &ArtifactSet,
    ) -> Result<Box<dyn FreshnessCheck>> {
        match self.config.freshness {
            FreshnessMode::Mtime => Ok(Box::new(ModifiedTimeCheck::new(source)?)),
            FreshnessMode::Hash => Ok(Box::new(ContentHashCheck::new(
                source,
                &artifacts.manifest_path(),
            )?)),
        }
    }

    /// Render and write one artifact. Returns the number of bindings.
    fn regenerate(&self, source: &mut SourceFile, category: Category, path: &Path) -> Result<usize> {
        let identifiers = category.identifiers(source.project()?);

        for collision in find_collisions(&identifiers) {
            match self.config.collisions {
                CollisionPolicy::Warn => warn!(
                    "Symbol {} in {} is produced by: {}",
                    collision.symbol,
                    path.display(),
                    collision.identifiers.join(", ")
                ),
                CollisionPolicy::Error => {
                    return Err(CodegenError::CollisionDetected {
                        category,
                        symbol: collision.symbol,
                        identifiers: collision.identifiers,
                    })
                }
            }
        }

        let content = render_module(category, &identifiers);
        fs::write(path, content).map_err(|e| CodegenError::ArtifactWriteFailure {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(identifiers.len())
    }
}

/// Generate the constants modules for the project at `path`.
pub fn generate_constants(path: &Path, config: &CodegenConfig) -> Result<GenerationReport> {
    let mut source = SourceFile::new(path);
    ConstantsGenerator::new(config).generate(&mut source)
}
