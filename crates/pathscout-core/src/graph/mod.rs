//! Graph representation and path-finding operations
//!
//! Provides the adjacency mapping and the search strategies over it:
//! - DFS for first-found paths and exhaustive simple-path enumeration
//! - BFS for minimum-hop shortest paths

pub mod adjacency;
pub mod search;
pub mod types;

pub use adjacency::Adjacency;
pub use search::GraphSearch;
pub use types::{AllPathsResult, PathResult, Strategy};
