//! Command dispatch logic for campus

use std::time::Instant;

use crate::cli::Cli;
use campus_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(cmd) = &cli.command else {
        return NoCommand.run();
    };

    let ctx = CommandContext::load(cli, start)?;
    debug!(elapsed = ?start.elapsed(), "build_context");

    cmd.execute(&ctx)
}
