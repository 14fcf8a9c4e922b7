//! Command implementations for all mazegraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{info, run, weight};
use mazegraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run(args) => run::execute(ctx, args),
            Commands::Weight(args) => weight::execute(ctx, args),
            Commands::Info(args) => info::execute(ctx, args),
        }
    }
}
