//! `mazegraph info` - graph size summary

use crate::cli::InfoArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::source::LoadedGraph;
use mazegraph_core::error::Result;
use mazegraph_core::format::OutputFormat;

pub fn execute(ctx: &CommandContext, args: &InfoArgs) -> Result<()> {
    let (kind, vertices, edges) = match LoadedGraph::load(&args.source, &ctx.config.graph)? {
        LoadedGraph::Document(graph) => ("graph", graph.vertex_count(), graph.edge_count()),
        LoadedGraph::Maze(graph) => ("maze", graph.vertex_count(), graph.edge_count()),
    };

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("source: {}", kind);
            println!("vertices: {}", vertices);
            println!("edges: {}", edges);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": kind,
                "vertices": vertices,
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!("I source={} vertices={} edges={}", kind, vertices, edges);
        }
    }

    Ok(())
}
