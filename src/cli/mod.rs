//! CLI Module
//!
//! Command-line interface for ldtk-codegen.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CodegenConfig, CollisionPolicy};
use crate::constants::FreshnessMode;

/// LDtk project transform - embeddable modules and identifier constants
#[derive(Parser, Debug)]
#[command(name = "ldtk-codegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the entities/layers/levels constants modules
    #[command(name = "generate")]
    Generate {
        /// Project files, or directories searched for *.ldtk
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Regenerate even when the modules are fresh
        #[arg(long)]
        force: bool,

        /// How freshness is decided
        #[arg(long, value_enum)]
        freshness: Option<FreshnessMode>,

        /// What to do when two identifiers share a symbol
        #[arg(long, value_enum)]
        collisions: Option<CollisionPolicy>,
    },

    /// Report which constants modules are stale
    #[command(name = "check")]
    Check {
        /// Project files, or directories searched for *.ldtk
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// How freshness is decided
        #[arg(long, value_enum)]
        freshness: Option<FreshnessMode>,
    },

    /// Emit the primary module of a project
    #[command(name = "emit")]
    Emit {
        /// Project file
        path: PathBuf,

        /// Write the module here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also generate the constants modules
        #[arg(long)]
        constants: bool,
    },
}

impl Commands {
    /// Apply this command's flags on top of a loaded config.
    pub fn configure(&self, mut config: CodegenConfig) -> CodegenConfig {
        match self {
            Commands::Generate {
                force,
                freshness,
                collisions,
                ..
            } => {
                config.constants = true;
                config.force |= *force;
                if let Some(freshness) = freshness {
                    config.freshness = *freshness;
                }
                if let Some(collisions) = collisions {
                    config.collisions = *collisions;
                }
            }
            Commands::Check { freshness, .. } => {
                config.constants = true;
                if let Some(freshness) = freshness {
                    config.freshness = *freshness;
                }
            }
            Commands::Emit { constants, .. } => {
                config.constants |= *constants;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "ldtk-codegen",
            "generate",
            "assets",
            "--force",
            "--freshness",
            "hash",
            "--collisions",
            "error",
        ])
        .unwrap();

        let command = cli.command.unwrap();
        let config = command.configure(CodegenConfig::default());
        assert!(config.constants);
        assert!(config.force);
        assert_eq!(config.freshness, FreshnessMode::Hash);
        assert_eq!(config.collisions, CollisionPolicy::Error);
    }

    #[test]
    fn test_generate_requires_paths() {
        assert!(Cli::try_parse_from(["ldtk-codegen", "generate"]).is_err());
    }

    #[test]
    fn test_emit_keeps_config_constants() {
        let cli = Cli::try_parse_from(["ldtk-codegen", "-c", "codegen.json", "emit", "world.ldtk"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("codegen.json")));

        let loaded = CodegenConfig::default().with_constants(true);
        let config = cli.command.unwrap().configure(loaded);
        assert!(config.constants);
    }
}
