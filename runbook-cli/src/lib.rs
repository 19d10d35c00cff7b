//! Shared plumbing for the runbook command-line tools
//!
//! Both binaries parse the same global options, load the same
//! configuration and print through the [`output`] module.

pub mod output;

use anyhow::{Context, Result};
use clap::Args;
use runbook_core::config::{Config, ConfigLoader};
use std::path::PathBuf;

/// Options accepted by every runbook command
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Base directory holding `directives/` and `memory/`
    #[arg(short, long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration directory (default: ~/.runbook)
    #[arg(short, long, global = true)]
    pub config_dir: Option<PathBuf>,
}

/// Load configuration and apply command-line overrides
pub fn load_config(args: &GlobalArgs) -> Result<Config> {
    let loader = match &args.config_dir {
        Some(dir) => ConfigLoader::with_dir(dir),
        None => ConfigLoader::new(),
    };

    let mut config = loader.load().with_context(|| {
        format!(
            "Failed to load configuration from {}",
            loader.config_dir().display()
        )
    })?;

    if let Some(workspace) = &args.workspace {
        config.paths.workspace = workspace.to_string_lossy().into_owned();
    }

    Ok(config)
}
