use std::collections::BTreeMap;

use crate::algorithm::path::path_to_token_string;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::distance::Distance;
use crate::graph::Adjacency;
use crate::{Error, Result};

/// Shortest path trees from every airport, taken as a snapshot of a network.
///
/// Later mutations of the network are not reflected; evaluate again after them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortestPathTable {
    results: BTreeMap<String, ShortestPathResult>,
}

impl ShortestPathTable {
    /// Runs `algorithm` once from every airport of `graph`
    pub fn evaluate<G, A>(graph: &G, algorithm: &A) -> Result<Self>
    where
        G: Adjacency + ?Sized,
        A: ShortestPathAlgorithm<G>,
    {
        let mut results = BTreeMap::new();
        for source in graph.nodes() {
            let result = algorithm.compute_shortest_paths(graph, source)?;
            results.insert(source.to_string(), result);
        }
        Ok(ShortestPathTable { results })
    }

    pub fn get(&self, source: &str) -> Option<&ShortestPathResult> {
        self.results.get(source)
    }

    /// Shortest distance between two airports, `None` if the source is unknown
    pub fn distance(&self, source: &str, destination: &str) -> Option<Distance> {
        self.get(source).map(|result| result.distance_to(destination))
    }

    pub fn shortest_path(&self, source: &str, destination: &str) -> Result<Vec<String>> {
        let result = self
            .get(source)
            .ok_or_else(|| Error::UnknownNode(source.to_string()))?;
        if !result.distances.contains_key(destination) {
            return Err(Error::UnknownNode(destination.to_string()));
        }
        result.path_to(destination).ok_or_else(|| Error::NoPath {
            from: source.to_string(),
            to: destination.to_string(),
        })
    }

    pub fn shortest_path_url(&self, source: &str, destination: &str) -> Result<String> {
        let path = self.shortest_path(source, destination)?;
        Ok(path_to_token_string(&path))
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.results.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
