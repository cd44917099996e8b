use serde::{Deserialize, Serialize};

/// Strategy used to pick the next airport to settle during Dijkstra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    /// Scan every unvisited airport for the smallest tentative distance, O(V²)
    LinearScan,
    /// Lazy-deletion binary heap, O((V + E) log V)
    #[default]
    BinaryHeap,
}

/// Configuration for a network engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub frontier: FrontierKind,
}

impl EngineConfig {
    pub fn with_frontier(frontier: FrontierKind) -> Self {
        EngineConfig { frontier }
    }
}
