//! `mazegraph run` - traverse a graph and report every notification

use std::cell::RefCell;
use std::rc::Rc;

use crate::cli::RunArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::EventPrinter;
use crate::commands::source::{parse_pair, CliVertex, LoadedGraph};
use mazegraph_core::error::Result;
use mazegraph_core::format::OutputFormat;
use mazegraph_core::graph::{Algorithm, TraversalLog, WeightedGraph};

pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let algorithm = args.algorithm.unwrap_or(ctx.config.traversal.algorithm);

    match LoadedGraph::load(&args.source, &ctx.config.graph)? {
        LoadedGraph::Document(graph) => traverse(ctx, graph, algorithm, args),
        LoadedGraph::Maze(graph) => traverse(ctx, graph, algorithm, args),
    }
}

fn traverse<V: CliVertex>(
    ctx: &CommandContext,
    mut graph: WeightedGraph<V>,
    algorithm: Algorithm,
    args: &RunArgs,
) -> Result<()> {
    let (start, end) = parse_pair::<V>(&args.start, &args.end)?;

    tracing::debug!(
        %algorithm,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed = ?ctx.start.elapsed(),
        "starting traversal"
    );

    if ctx.cli.format == OutputFormat::Json {
        let log = TraversalLog::shared();
        graph.register_observer(Box::new(Rc::clone(&log)));
        graph.run(algorithm, &start, &end)?;

        let events = log.borrow().events().to_vec();
        let output = serde_json::json!({
            "algorithm": algorithm,
            "start": start,
            "end": end,
            "events": events,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let printer = Rc::new(RefCell::new(EventPrinter::new(
        ctx.cli.format,
        ctx.cli.quiet,
    )));
    graph.register_observer(Box::new(Rc::clone(&printer)));
    graph.run(algorithm, &start, &end)?;

    if ctx.cli.format == OutputFormat::Human
        && !ctx.cli.quiet
        && !printer.borrow().search_over_seen()
    {
        println!("end vertex {} not reached", end);
    }

    Ok(())
}
