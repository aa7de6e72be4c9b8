use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Search strategy for shortest-path queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Exhaustive depth-first enumeration, keeping the fewest-node path
    Dfs,
    #[default]
    /// Breadth-first frontier, guaranteed minimum hop count
    Bfs,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(Strategy::Dfs),
            "bfs" => Ok(Strategy::Bfs),
            other => Err(format!("unknown strategy '{}' (expected: dfs, bfs)", other)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::Bfs => write!(f, "bfs"),
        }
    }
}

/// Result of a single-path query
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub strategy: String,
    pub found: bool,
    pub path: Vec<String>,
    /// Edge count of the path; 0 when not found or when from == to
    pub hops: usize,
}

impl PathResult {
    /// Build a result from a query outcome; `None` means "no path"
    pub fn new(from: &str, to: &str, strategy: &str, path: Option<Vec<String>>) -> Self {
        let found = path.is_some();
        let path = path.unwrap_or_default();
        let hops = path.len().saturating_sub(1);
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            strategy: strategy.to_string(),
            found,
            path,
            hops,
        }
    }
}

/// Result of an all-paths query
#[derive(Debug, Clone, Serialize)]
pub struct AllPathsResult {
    pub from: String,
    pub to: String,
    pub count: usize,
    pub paths: Vec<Vec<String>>,
}

impl AllPathsResult {
    pub fn new(from: &str, to: &str, paths: Vec<Vec<String>>) -> Self {
        AllPathsResult {
            from: from.to_string(),
            to: to.to_string(),
            count: paths.len(),
            paths,
        }
    }
}
