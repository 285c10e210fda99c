//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use campus_core::config::{CampusConfig, SeedKind};
use campus_core::context::CampusContext;
use campus_core::error::Result;

/// Read the config named by `--config`, else discover one in `dir`
pub fn load_config(cli: &Cli, dir: &Path) -> Result<CampusConfig> {
    let mut config = match &cli.config {
        Some(path) => CampusConfig::load(path)?,
        None => CampusConfig::discover(dir)?,
    };
    if cli.empty {
        config.graph.seed = SeedKind::Empty;
    }
    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub campus: CampusContext,
    /// `--format` if given, otherwise the config's default
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = load_config(cli, &cwd)?;
        let format = cli.format.unwrap_or(config.output.format);
        let campus = CampusContext::new(config)?;
        Ok(Self {
            cli,
            campus,
            format,
            start,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Shown when no subcommand is provided
pub struct NoCommand;

impl NoCommand {
    pub fn run(&self) -> Result<()> {
        println!("campus {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("BFS and Dijkstra routes over a campus map.");
        println!();
        println!("Run `campus --help` for usage information.");
        Ok(())
    }
}
