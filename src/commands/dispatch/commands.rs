//! Command implementations for all campus commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{compare, divergence, locations, route};
use campus_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Locations => locations::execute(ctx),
            Commands::Route(args) => route::execute(ctx, args),
            Commands::Compare(args) => compare::execute(ctx, args),
            Commands::Divergence(args) => divergence::execute(ctx, args),
        }
    }
}
