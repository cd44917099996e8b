use std::collections::BTreeMap;

use crate::algorithm::path::{path_to_token_string, reconstruct_path};
use crate::distance::Distance;
use crate::graph::Adjacency;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult {
    /// Source airport code
    pub source: String,

    /// Distance from the source to every airport in the network
    pub distances: BTreeMap<String, Distance>,

    /// Predecessor of each reached airport in the shortest path tree.
    /// The source has no entry.
    pub predecessors: BTreeMap<String, String>,
}

impl ShortestPathResult {
    /// Distance from the source, `Unreachable` for unreached or unknown airports
    pub fn distance_to(&self, node: &str) -> Distance {
        self.distances.get(node).copied().unwrap_or_default()
    }

    pub fn is_reachable(&self, node: &str) -> bool {
        self.distance_to(node).is_finite()
    }

    pub fn predecessor_of(&self, node: &str) -> Option<&str> {
        self.predecessors.get(node).map(String::as_str)
    }

    /// Airports from the source to `destination`, or `None` if it was not reached
    pub fn path_to(&self, destination: &str) -> Option<Vec<String>> {
        if !self.is_reachable(destination) {
            return None;
        }
        reconstruct_path(&self.source, destination, &self.predecessors)
    }

    /// Path to `destination` as directed `from-to` tokens joined by `,+`
    pub fn path_url_to(&self, destination: &str) -> Option<String> {
        self.path_to(destination)
            .map(|path| path_to_token_string(&path))
    }

    /// Number of airports reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Adjacency + ?Sized,
{
    /// Compute shortest paths from a source airport to all other airports
    fn compute_shortest_paths(&self, graph: &G, source: &str) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of airports
    fn get_path(&self, result: &ShortestPathResult, target: &str) -> Option<Vec<String>> {
        result.path_to(target)
    }
}
