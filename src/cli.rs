//! CLI argument parsing for pathscout
//!
//! Uses clap for argument parsing.
//! Supports global flags: --graph, --format, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use pathscout_core::format::OutputFormat;
use pathscout_core::graph::Strategy;

/// Pathscout - directed-graph path finding CLI
#[derive(Parser, Debug)]
#[command(name = "pathscout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Adjacency file to query (JSON object or YAML mapping of node -> neighbors)
    #[arg(long, short = 'g', global = true, env = "PATHSCOUT_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query paths between two nodes
    Path {
        #[command(subcommand)]
        command: PathCommands,
    },

    /// List declared nodes with their out-degree
    Nodes,
}

/// Path subcommands
#[derive(Subcommand, Debug)]
pub enum PathCommands {
    /// First path found by depth-first search (not necessarily shortest)
    Find {
        /// Starting node
        from: String,

        /// Target node
        to: String,
    },

    /// Every simple path between two nodes
    All {
        /// Starting node
        from: String,

        /// Target node
        to: String,
    },

    /// Minimum-hop path between two nodes
    Shortest {
        /// Starting node
        from: String,

        /// Target node
        to: String,

        /// Search strategy (dfs, bfs)
        #[arg(long, short, default_value = "bfs", value_parser = parse_strategy)]
        strategy: Strategy,
    },
}

/// Parse search strategy from string
fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse::<Strategy>()
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
