use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashSet};

use crate::distance::Distance;

/// Set of airports not yet settled by Dijkstra, with their tentative distances.
///
/// Implementations must agree on tie-breaking: among equal distances the
/// smallest airport code is settled first.
pub trait Frontier {
    /// Offers a tentative distance for an airport
    fn push(&mut self, node: &str, distance: Distance);

    /// Settles and returns the reached airport with the smallest tentative distance.
    /// Returns `None` once no reached airport remains.
    fn pop_min(&mut self) -> Option<(String, Distance)>;

    fn is_settled(&self, node: &str) -> bool;
}

/// Every unvisited airport scanned on each extraction
#[derive(Debug, Clone, Default)]
pub struct LinearFrontier {
    unvisited: BTreeMap<String, Distance>,
}

impl LinearFrontier {
    /// Starts with every airport unvisited and unreachable
    pub fn new<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        LinearFrontier {
            unvisited: nodes
                .into_iter()
                .map(|node| (node.to_string(), Distance::Unreachable))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.unvisited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unvisited.is_empty()
    }
}

impl Frontier for LinearFrontier {
    fn push(&mut self, node: &str, distance: Distance) {
        if let Some(tentative) = self.unvisited.get_mut(node) {
            if distance < *tentative {
                *tentative = distance;
            }
        }
    }

    fn pop_min(&mut self) -> Option<(String, Distance)> {
        let mut best: Option<(&String, Distance)> = None;
        for (node, distance) in &self.unvisited {
            if !distance.is_finite() {
                continue;
            }
            match best {
                Some((_, current)) if current <= *distance => {}
                _ => best = Some((node, *distance)),
            }
        }

        let node = best?.0.clone();
        self.unvisited.remove_entry(&node)
    }

    fn is_settled(&self, node: &str) -> bool {
        !self.unvisited.contains_key(node)
    }
}

/// Binary heap with lazy deletion: stale entries are skipped when popped
#[derive(Debug, Clone, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<(Distance, String)>>,
    settled: HashSet<String>,
}

impl HeapFrontier {
    pub fn new() -> Self {
        HeapFrontier {
            heap: BinaryHeap::new(),
            settled: HashSet::new(),
        }
    }

    /// Number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Frontier for HeapFrontier {
    fn push(&mut self, node: &str, distance: Distance) {
        if !self.settled.contains(node) {
            self.heap.push(Reverse((distance, node.to_string())));
        }
    }

    fn pop_min(&mut self) -> Option<(String, Distance)> {
        while let Some(Reverse((distance, node))) = self.heap.pop() {
            if self.settled.insert(node.clone()) {
                return Some((node, distance));
            }
        }
        None
    }

    fn is_settled(&self, node: &str) -> bool {
        self.settled.contains(node)
    }
}
