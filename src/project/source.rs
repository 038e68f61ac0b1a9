//! Source File Cache
//!
//! A project file as seen by one transform invocation. The text is read and
//! the definition parsed at most once, on first need, and the cache is
//! dropped with the invocation.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::debug;
use sha2::{Digest, Sha256};

use crate::error::{CodegenError, Result};
use crate::project::definition::ProjectDefinition;

/// Extension stripped from the source name to form artifact names.
pub const PROJECT_EXTENSION: &str = "ldtk";

/// A project source file with lazily loaded text and definition.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    text: Option<String>,
    project: Option<ProjectDefinition>,
}

impl SourceFile {
    /// Create a handle for the project at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            text: None,
            project: None,
        }
    }

    /// Get the source path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the artifacts are written to.
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// File name with a trailing `.ldtk` removed.
    pub fn base_name(&self) -> Result<String> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| CodegenError::InvalidSourcePath {
                path: self.path.clone(),
            })?
            .to_string_lossy()
            .into_owned();

        let suffix = format!(".{}", PROJECT_EXTENSION);
        if let Some(stem) = file_name
            .strip_suffix(suffix.as_str())
            .filter(|stem| !stem.is_empty())
        {
            return Ok(stem.to_string());
        }

        Ok(file_name)
    }

    /// Last-modified time of the source.
    pub fn modified(&self) -> Result<SystemTime> {
        fs::metadata(&self.path)
            .and_then(|metadata| metadata.modified())
            .map_err(|e| CodegenError::SourceUnreadable {
                path: self.path.clone(),
                source: e,
            })
    }

    /// Source text, read on first call.
    pub fn text(&mut self) -> Result<&str> {
        let text = match self.text.take() {
            Some(text) => text,
            None => {
                debug!("Reading {}", self.path.display());
                fs::read_to_string(&self.path).map_err(|e| CodegenError::SourceUnreadable {
                    path: self.path.clone(),
                    source: e,
                })?
            }
        };

        Ok(self.text.insert(text).as_str())
    }

    /// Hex SHA-256 of the source text.
    pub fn digest(&mut self) -> Result<String> {
        let hash = Sha256::digest(self.text()?.as_bytes());
        Ok(format!("{:x}", hash))
    }

    /// Parsed definition, parsed on first call.
    pub fn project(&mut self) -> Result<&ProjectDefinition> {
        let project = match self.project.take() {
            Some(project) => project,
            None => {
                let path = self.path.clone();
                let text = self.text()?;
                debug!("Parsing {}", path.display());
                ProjectDefinition::parse(text, &path)?
            }
        };

        Ok(&*self.project.insert(project))
    }

    /// Whether the definition has been parsed in this invocation.
    pub fn is_parsed(&self) -> bool {
        self.project.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use test_case::test_case;

    #[test_case("world.ldtk", "world" ; "strips project extension")]
    #[test_case("world.json", "world.json" ; "keeps other extensions")]
    #[test_case("levels.v2.ldtk", "levels.v2" ; "strips only the last extension")]
    #[test_case(".ldtk", ".ldtk" ; "keeps bare extension")]
    fn test_base_name(file: &str, expected: &str) {
        let source = SourceFile::new(Path::new("assets").join(file));
        assert_eq!(source.base_name().unwrap(), expected);
    }

    #[test]
    fn test_directory_of_bare_file_name() {
        let source = SourceFile::new("world.ldtk");
        assert_eq!(source.directory(), Path::new(""));
    }

    #[test]
    fn test_missing_source_is_unreadable() {
        let dir = tempdir().unwrap();
        let mut source = SourceFile::new(dir.path().join("missing.ldtk"));

        assert_eq!(source.modified().unwrap_err().error_code(), "SOURCE_UNREADABLE");
        assert_eq!(source.project().unwrap_err().error_code(), "SOURCE_UNREADABLE");
        assert!(!source.is_parsed());
    }

    #[test]
    fn test_project_is_parsed_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("world.ldtk");
        fs::write(
            &path,
            r#"{ "defs": { "entities": [{ "identifier": "Player" }], "layers": [] }, "levels": [] }"#,
        )
        .unwrap();

        let mut source = SourceFile::new(&path);
        assert!(!source.is_parsed());
        assert_eq!(source.project().unwrap().defs.entities.len(), 1);
        assert!(source.is_parsed());

        // Later edits are not observed within the same invocation.
        fs::write(&path, "garbage").unwrap();
        assert_eq!(source.project().unwrap().defs.entities.len(), 1);
    }

    #[test]
    fn test_digest_is_stable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("world.ldtk");
        fs::write(&path, "{}").unwrap();

        let mut source = SourceFile::new(&path);
        let digest = source.digest().unwrap();
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, SourceFile::new(&path).digest().unwrap());
    }
}
