//! Command dispatch logic for pathscout

use std::time::Instant;

use crate::cli::{Cli, Commands, PathCommands};
use crate::commands;
use pathscout_core::error::{PathscoutError, Result};
use pathscout_core::graph::Adjacency;
use pathscout_core::source;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Path { command }) => handle_path(cli, command, start),

        Some(Commands::Nodes) => {
            let graph = load_graph(cli, start)?;
            commands::nodes::execute(cli, &graph)
        }
    }
}

fn handle_no_command() -> Result<()> {
    println!("pathscout {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A directed-graph path finding CLI for scripts and agents.");
    println!();
    println!("Run `pathscout --help` for usage information.");
    Ok(())
}

fn handle_path(cli: &Cli, command: &PathCommands, start: Instant) -> Result<()> {
    let graph = load_graph(cli, start)?;

    match command {
        PathCommands::Find { from, to } => commands::path::execute_find(cli, &graph, from, to),

        PathCommands::All { from, to } => commands::path::execute_all(cli, &graph, from, to),

        PathCommands::Shortest { from, to, strategy } => {
            commands::path::execute_shortest(cli, &graph, from, to, *strategy)
        }
    }
}

fn load_graph(cli: &Cli, start: Instant) -> Result<Adjacency<String>> {
    let path = cli.graph.as_ref().ok_or_else(|| {
        PathscoutError::UsageError(
            "no graph file given (use --graph <FILE> or PATHSCOUT_GRAPH)".to_string(),
        )
    })?;

    let graph = source::load_adjacency(path)?;
    if cli.verbose {
        eprintln!("load_graph: {:?}", start.elapsed());
    }
    Ok(graph)
}
