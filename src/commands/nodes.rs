//! Node listing command for pathscout

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use pathscout_core::error::Result;
use pathscout_core::graph::Adjacency;

/// Node entry for output
#[derive(Debug, Clone, Serialize)]
pub struct NodeEntry {
    pub id: String,
    pub out_degree: usize,
}

/// Execute the nodes command
///
/// Lists declared nodes with their out-degree, sorted by id.
pub fn execute(cli: &Cli, graph: &Adjacency<String>) -> Result<()> {
    let mut entries: Vec<NodeEntry> = graph
        .nodes()
        .map(|node| NodeEntry {
            id: node.clone(),
            out_degree: graph.neighbors(node).len(),
        })
        .collect();

    // Sort for determinism
    entries.sort_by(|a, b| a.id.cmp(&b.id));

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            if entries.is_empty() {
                if !cli.quiet {
                    println!("No nodes declared");
                }
            } else {
                for entry in &entries {
                    println!("{} (out: {})", entry.id, entry.out_degree);
                }
            }
        }
        OutputFormat::Records => {
            println!("H pathscout=1 records=1 mode=nodes count={}", entries.len());
            for entry in &entries {
                println!("N {} out={}", entry.id, entry.out_degree);
            }
        }
    }

    Ok(())
}
