//! Error types for ldtk-codegen.

use std::path::PathBuf;
use thiserror::Error;

use crate::constants::Category;

/// Result type for ldtk-codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur while transforming a level project.
#[derive(Error, Debug)]
pub enum CodegenError {
    // Source Errors
    #[error("Failed to read source: {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse source: {path}: {source}")]
    SourceUnparseable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid source path: {path}")]
    InvalidSourcePath { path: PathBuf },

    // Artifact Errors
    #[error("Failed to write artifact: {path}: {source}")]
    ArtifactWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Symbol {symbol} collides in the {category} artifact: {}",
        .identifiers.join(", ")
    )]
    CollisionDetected {
        category: Category,
        symbol: String,
        identifiers: Vec<String>,
    },

    // Manifest Errors
    #[error("Failed to read manifest: {path}: {source}")]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest: {path}: {source}")]
    ManifestUnparseable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write manifest: {path}: {source}")]
    ManifestWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration Errors
    #[error("Failed to read config: {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {path}: {source}")]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Batch Errors
    #[error("{failed} of {total} project files failed")]
    BatchFailed { failed: usize, total: usize },

    // Generic Errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            CodegenError::SourceUnreadable { .. } => "SOURCE_UNREADABLE",
            CodegenError::SourceUnparseable { .. } => "SOURCE_UNPARSEABLE",
            CodegenError::InvalidSourcePath { .. } => "INVALID_SOURCE_PATH",
            CodegenError::ArtifactWriteFailure { .. } => "ARTIFACT_WRITE_FAILURE",
            CodegenError::CollisionDetected { .. } => "COLLISION_DETECTED",
            CodegenError::ManifestUnreadable { .. } => "MANIFEST_UNREADABLE",
            CodegenError::ManifestUnparseable { .. } => "MANIFEST_UNPARSEABLE",
            CodegenError::ManifestWriteFailure { .. } => "MANIFEST_WRITE_FAILURE",
            CodegenError::ConfigUnreadable { .. } => "CONFIG_UNREADABLE",
            CodegenError::InvalidConfig { .. } => "INVALID_CONFIG",
            CodegenError::BatchFailed { .. } => "BATCH_FAILED",
            CodegenError::Json(_) => "JSON_ERROR",
            CodegenError::Io(_) => "IO_ERROR",
        }
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            CodegenError::SourceUnreadable { .. } => {
                Some("Check the project path and that the file is readable.")
            }
            CodegenError::SourceUnparseable { .. } => {
                Some("Re-save the project from the level editor; it must contain defs and levels.")
            }
            CodegenError::ArtifactWriteFailure { .. } | CodegenError::ManifestWriteFailure { .. } => {
                Some("Check write permissions and free space next to the project file.")
            }
            CodegenError::ManifestUnparseable { .. } => {
                Some("Delete the manifest file; the next run regenerates every module.")
            }
            CodegenError::CollisionDetected { .. } => {
                Some("Rename one of the identifiers in the level editor, or set collisions to \"warn\".")
            }
            CodegenError::InvalidConfig { .. } => {
                Some("Compare the config file against the documented options.")
            }
            _ => None,
        }
    }
}
