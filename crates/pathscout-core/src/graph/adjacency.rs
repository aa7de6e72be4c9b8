//! Directed graph as a node-to-neighbors mapping

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A directed graph expressed as a mapping from node to its ordered
/// neighbor list.
///
/// Neighbor order is the declaration order of each node's list and drives
/// DFS visitation order. Nodes may appear as neighbors without being keys
/// (leaf nodes with no outgoing edges); [`Adjacency::neighbors`] answers
/// an empty slice for them rather than failing or inserting entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Adjacency<N: Eq + Hash>(HashMap<N, Vec<N>>);

impl<N: Eq + Hash> Adjacency<N> {
    /// Create an empty adjacency mapping
    pub fn new() -> Self {
        Adjacency(HashMap::new())
    }

    /// Declare a node with its ordered neighbor list, replacing any
    /// previous declaration
    pub fn insert(&mut self, node: N, neighbors: Vec<N>) {
        self.0.insert(node, neighbors);
    }

    /// Ordered neighbors of `node`; empty for undeclared nodes
    pub fn neighbors(&self, node: &N) -> &[N] {
        self.0.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` is declared as a key of the mapping
    pub fn contains(&self, node: &N) -> bool {
        self.0.contains_key(node)
    }

    /// Iterate over declared nodes (unordered)
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.0.keys()
    }

    /// Number of declared nodes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping declares no nodes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Eq + Hash> Default for Adjacency<N> {
    fn default() -> Self {
        Adjacency::new()
    }
}

impl<N: Eq + Hash> From<HashMap<N, Vec<N>>> for Adjacency<N> {
    fn from(map: HashMap<N, Vec<N>>) -> Self {
        Adjacency(map)
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for Adjacency<N> {
    fn from_iter<T: IntoIterator<Item = (N, Vec<N>)>>(iter: T) -> Self {
        Adjacency(iter.into_iter().collect())
    }
}
