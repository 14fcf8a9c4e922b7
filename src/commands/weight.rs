//! `mazegraph weight` - look up a single edge

use crate::cli::WeightArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::source::{parse_pair, CliVertex, LoadedGraph};
use mazegraph_core::error::Result;
use mazegraph_core::format::OutputFormat;
use mazegraph_core::graph::WeightedGraph;

pub fn execute(ctx: &CommandContext, args: &WeightArgs) -> Result<()> {
    match LoadedGraph::load(&args.source, &ctx.config.graph)? {
        LoadedGraph::Document(graph) => lookup(ctx, &graph, args),
        LoadedGraph::Maze(graph) => lookup(ctx, &graph, args),
    }
}

fn lookup<V: CliVertex>(
    ctx: &CommandContext,
    graph: &WeightedGraph<V>,
    args: &WeightArgs,
) -> Result<()> {
    let (from, to) = parse_pair::<V>(&args.from, &args.to)?;
    let weight = graph.weight(&from, &to)?;

    match ctx.cli.format {
        OutputFormat::Human => match weight {
            Some(weight) => println!("{}", weight),
            None => println!("none"),
        },
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "weight": weight,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => match weight {
            Some(weight) => println!("W {} {} {}", from, to, weight),
            None => println!("W {} {} none", from, to),
        },
    }

    Ok(())
}
