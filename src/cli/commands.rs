//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::config::CodegenConfig;
use crate::constants::{ArtifactOutcome, ConstantsGenerator, Freshness};
use crate::error::{CodegenError, Result};
use crate::project::{find_project_files, SourceFile};
use crate::transform::transform;

/// Expand the given paths into project files.
fn collect_sources(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut sources = Vec::new();
    for path in paths {
        let found = find_project_files(path);
        if found.is_empty() {
            warn!("No project files found at: {}", path.display());
        }
        sources.extend(found);
    }
    sources
}

/// Run `action` on every source, continuing past failures.
fn run_batch<F>(sources: &[PathBuf], mut action: F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    let mut failed = 0;

    for source in sources {
        if let Err(e) = action(source) {
            error!("{}: {}", source.display(), e);
            if let Some(suggestion) = e.recovery_suggestion() {
                info!("{}", suggestion);
            }
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(CodegenError::BatchFailed {
            failed,
            total: sources.len(),
        });
    }

    Ok(())
}

/// Generate constants modules for every project under `paths`.
pub fn generate(paths: &[PathBuf], config: &CodegenConfig) -> Result<()> {
    let sources = collect_sources(paths);
    info!("Generating constants for {} project(s)", sources.len());

    let generator = ConstantsGenerator::new(config);
    let mut written = 0;

    run_batch(&sources, |path| {
        let mut source = SourceFile::new(path);
        let report = generator.generate(&mut source)?;

        for artifact in report.written() {
            if let ArtifactOutcome::Written { reason, symbols } = artifact.outcome {
                println!(
                    "Wrote {} ({} symbols, {})",
                    artifact.path.display(),
                    symbols,
                    reason
                );
                written += 1;
            }
        }

        Ok(())
    })?;

    println!(
        "{} project(s), {} module(s) written",
        sources.len(),
        written
    );

    Ok(())
}

/// Report artifact freshness without writing.
pub fn check(paths: &[PathBuf], config: &CodegenConfig) -> Result<()> {
    let sources = collect_sources(paths);
    let generator = ConstantsGenerator::new(config);
    let mut stale = 0;

    run_batch(&sources, |path| {
        let mut source = SourceFile::new(path);
        for (category, artifact, freshness) in generator.inspect(&mut source)? {
            match freshness {
                Freshness::Fresh => {
                    println!("fresh  {:<9} {}", category, artifact.display());
                }
                Freshness::Stale(reason) => {
                    println!(
                        "stale  {:<9} {} ({})",
                        category,
                        artifact.display(),
                        reason
                    );
                    stale += 1;
                }
            }
        }
        Ok(())
    })?;

    println!("{:-<60}", "");
    println!("{} stale module(s)", stale);

    Ok(())
}

/// Emit the primary module of one project.
pub fn emit(path: &Path, output: Option<&Path>, config: &CodegenConfig) -> Result<()> {
    info!("Transforming: {}", path.display());

    let result = transform(path, config)?;

    if let Some(report) = &result.report {
        for artifact in report.written() {
            info!("Wrote {}", artifact.path.display());
        }
    }

    match output {
        Some(output) => {
            fs::write(output, &result.module).map_err(|e| CodegenError::ArtifactWriteFailure {
                path: output.to_path_buf(),
                source: e,
            })?;
            println!("Module written: {}", output.display());
        }
        None => println!("{}", result.module),
    }

    Ok(())
}
