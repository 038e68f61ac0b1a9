//! Per-file transform, as invoked by a build tool.

use std::path::Path;

use log::debug;

use crate::config::CodegenConfig;
use crate::constants::{ConstantsGenerator, GenerationReport};
use crate::error::Result;
use crate::primary::emit_primary_module;
use crate::project::SourceFile;

/// Result of transforming one project file.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// Primary module source.
    pub module: String,
    /// Constants generation summary, when enabled.
    pub report: Option<GenerationReport>,
}

/// Transform the project at `path`.
///
/// Generates the constants modules first when `config.constants` is set,
/// then emits the primary module. The source is read once for both.
pub fn transform(path: &Path, config: &CodegenConfig) -> Result<TransformOutput> {
    let mut source = SourceFile::new(path);

    let report = if config.constants {
        Some(ConstantsGenerator::new(config).generate(&mut source)?)
    } else {
        debug!("Constants disabled for {}", path.display());
        None
    };

    let module = emit_primary_module(source.text()?, &config.runtime_package);

    Ok(TransformOutput { module, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PROJECT: &str =
        r#"{"defs":{"entities":[{"identifier":"Player"}],"layers":[]},"levels":[]}"#;

    #[test]
    fn test_transform_without_constants() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("world.ldtk");
        fs::write(&path, PROJECT).unwrap();

        let output = transform(&path, &CodegenConfig::default()).unwrap();

        assert!(output.report.is_none());
        assert!(output.module.ends_with(&format!("new Ldtk({});", PROJECT)));
        assert!(!dir.path().join("world.entities.js").exists());
    }

    #[test]
    fn test_transform_with_constants() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("world.ldtk");
        fs::write(&path, PROJECT).unwrap();

        let config = CodegenConfig::default().with_constants(true);
        let output = transform(&path, &config).unwrap();

        let report = output.report.unwrap();
        assert_eq!(report.written().count(), 3);
        assert!(dir.path().join("world.entities.js").exists());
        assert!(output.module.contains(PROJECT));
    }

    #[test]
    fn test_transform_missing_source() {
        let dir = tempdir().unwrap();
        let err = transform(&dir.path().join("world.ldtk"), &CodegenConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "SOURCE_UNREADABLE");
    }

    #[test]
    fn test_transform_does_not_validate_without_constants() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("world.ldtk");
        fs::write(&path, "{}").unwrap();

        let output = transform(&path, &CodegenConfig::default()).unwrap();
        assert!(output.module.ends_with("new Ldtk({});"));
    }
}
