//! ldtk-codegen CLI
//!
//! Command-line interface for the LDtk project transform.

use clap::Parser;
use env_logger::Env;
use log::debug;

use ldtk_codegen::cli::{Cli, Commands};
use ldtk_codegen::{CodegenConfig, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("ldtk-codegen v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => {
            let config = cmd.configure(CodegenConfig::load_or_default(cli.config.as_deref())?);
            handle_command(cmd, &config)
        }
        None => {
            println!("ldtk-codegen v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands, config: &CodegenConfig) -> Result<()> {
    match cmd {
        Commands::Generate { paths, .. } => ldtk_codegen::cli::commands::generate(&paths, config),
        Commands::Check { paths, .. } => ldtk_codegen::cli::commands::check(&paths, config),
        Commands::Emit { path, output, .. } => {
            ldtk_codegen::cli::commands::emit(&path, output.as_deref(), config)
        }
    }
}
