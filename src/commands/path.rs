//! Path query commands for pathscout
//!
//! - `pathscout path find <from> <to>` - first DFS path
//! - `pathscout path all <from> <to>` - every simple path
//! - `pathscout path shortest <from> <to>` - minimum-hop path

use crate::cli::{Cli, OutputFormat};
use pathscout_core::error::Result;
use pathscout_core::graph::{Adjacency, AllPathsResult, GraphSearch, PathResult, Strategy};

/// Execute the path find command
#[tracing::instrument(skip(cli, graph), fields(from = %from, to = %to))]
pub fn execute_find(cli: &Cli, graph: &Adjacency<String>, from: &str, to: &str) -> Result<()> {
    let search = GraphSearch::new(graph);
    let path = search.find_path_dfs(&from.to_string(), &to.to_string());
    let result = PathResult::new(from, to, "dfs", path);
    output_path(cli, "path.find", &result)
}

/// Execute the path all command
#[tracing::instrument(skip(cli, graph), fields(from = %from, to = %to))]
pub fn execute_all(cli: &Cli, graph: &Adjacency<String>, from: &str, to: &str) -> Result<()> {
    let search = GraphSearch::new(graph);
    let paths = search.find_all_paths_dfs(&from.to_string(), &to.to_string());
    let result = AllPathsResult::new(from, to, paths);
    output_all_paths(cli, &result)
}

/// Execute the path shortest command
#[tracing::instrument(skip(cli, graph), fields(from = %from, to = %to, strategy = %strategy))]
pub fn execute_shortest(
    cli: &Cli,
    graph: &Adjacency<String>,
    from: &str,
    to: &str,
    strategy: Strategy,
) -> Result<()> {
    let search = GraphSearch::new(graph);
    let (from_node, to_node) = (from.to_string(), to.to_string());
    let path = match strategy {
        Strategy::Dfs => search.find_shortest_path_dfs(&from_node, &to_node),
        Strategy::Bfs => search.find_shortest_path_bfs(&from_node, &to_node),
    };
    let result = PathResult::new(from, to, &strategy.to_string(), path);
    output_path(cli, "path.shortest", &result)
}

fn output_path(cli: &Cli, mode: &str, result: &PathResult) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Human => {
            if result.found {
                println!("{}", result.path.join(" -> "));
                println!("Path length: {} {}", result.hops, hop_noun(result.hops));
            } else if !cli.quiet {
                println!("no path found from {} to {}", result.from, result.to);
            }
        }
        OutputFormat::Records => {
            println!(
                "H pathscout=1 records=1 mode={} from={} to={} strategy={} found={}",
                mode, result.from, result.to, result.strategy, result.found
            );
            if result.found {
                println!("P {}", result.path.join(" "));
            }
        }
    }

    Ok(())
}

fn output_all_paths(cli: &Cli, result: &AllPathsResult) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Human => {
            if result.count == 0 {
                if !cli.quiet {
                    println!("no path found from {} to {}", result.from, result.to);
                }
            } else {
                for path in &result.paths {
                    println!("{}", path.join(" -> "));
                }
                if !cli.quiet {
                    println!(
                        "{} {} from {} to {}",
                        result.count,
                        path_noun(result.count),
                        result.from,
                        result.to
                    );
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H pathscout=1 records=1 mode=path.all from={} to={} paths={}",
                result.from, result.to, result.count
            );
            for path in &result.paths {
                println!("P {}", path.join(" "));
            }
        }
    }

    Ok(())
}

fn hop_noun(hops: usize) -> &'static str {
    if hops == 1 {
        "hop"
    } else {
        "hops"
    }
}

fn path_noun(count: usize) -> &'static str {
    if count == 1 {
        "path"
    } else {
        "paths"
    }
}
