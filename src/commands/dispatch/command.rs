//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use mazegraph_core::config::MazegraphConfig;
use mazegraph_core::error::Result;

/// Resolve configuration from `--config` or the working directory
pub fn load_config(cli: &Cli) -> Result<MazegraphConfig> {
    match &cli.config {
        Some(path) => MazegraphConfig::load(path),
        None => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            MazegraphConfig::discover(&cwd)
        }
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: MazegraphConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        Ok(Self {
            cli,
            config: load_config(cli)?,
            start,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("mazegraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Observable BFS, DFS and Dijkstra over weighted graphs and mazes.");
        println!();
        println!("Run `mazegraph --help` for usage information.");
        Ok(())
    }
}
