use log::{debug, trace};
use std::collections::BTreeMap;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::config::FrontierKind;
use crate::data_structures::{Frontier, HeapFrontier, LinearFrontier};
use crate::distance::Distance;
use crate::graph::Adjacency;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// Route distances must be non-negative; negative weights give undefined results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dijkstra {
    frontier: FrontierKind,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance with the default frontier
    pub fn new() -> Self {
        Dijkstra::default()
    }

    pub fn with_frontier(frontier: FrontierKind) -> Self {
        Dijkstra { frontier }
    }

    pub fn frontier(&self) -> FrontierKind {
        self.frontier
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Adjacency + ?Sized,
{
    fn name(&self) -> &'static str {
        match self.frontier {
            FrontierKind::LinearScan => "Dijkstra (linear scan)",
            FrontierKind::BinaryHeap => "Dijkstra (binary heap)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: &str) -> Result<ShortestPathResult> {
        if !graph.has_node(source) {
            return Err(Error::UnknownNode(source.to_string()));
        }

        let result = match self.frontier {
            FrontierKind::LinearScan => run(graph, source, LinearFrontier::new(graph.nodes())),
            FrontierKind::BinaryHeap => run(graph, source, HeapFrontier::new()),
        };
        debug!(
            "{} from {}: reached {} of {} airports",
            <Self as ShortestPathAlgorithm<G>>::name(self),
            source,
            result.reachable_count(),
            graph.node_count()
        );
        Ok(result)
    }
}

fn run<G, F>(graph: &G, source: &str, mut frontier: F) -> ShortestPathResult
where
    G: Adjacency + ?Sized,
    F: Frontier,
{
    // Every airport starts unreachable, disconnected ones stay that way
    let mut distances: BTreeMap<String, Distance> = graph
        .nodes()
        .map(|node| (node.to_string(), Distance::Unreachable))
        .collect();
    let mut predecessors: BTreeMap<String, String> = BTreeMap::new();

    distances.insert(source.to_string(), Distance::ZERO);
    frontier.push(source, Distance::ZERO);

    while let Some((u, dist_u)) = frontier.pop_min() {
        for (v, weight) in graph.outgoing(&u) {
            if frontier.is_settled(v) {
                continue;
            }

            let candidate = dist_u + Distance::finite(weight);
            let current = distances.get(v).copied().unwrap_or_default();
            if candidate < current {
                trace!("Relaxing {}-{}: {} -> {}", u, v, current, candidate);
                distances.insert(v.to_string(), candidate);
                predecessors.insert(v.to_string(), u.clone());
                frontier.push(v, candidate);
            }
        }
    }

    ShortestPathResult {
        source: source.to_string(),
        distances,
        predecessors,
    }
}
