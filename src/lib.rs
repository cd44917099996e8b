//! Flight Network - in-memory engine for an airline route map
//!
//! Airports are nodes identified by their code, flights are directed weighted routes.
//! The engine keeps running statistics over every stored route (total distance,
//! flight count, shortest and longest flight), maintains the canonical set of
//! undirected connection tokens used to render a route map URL, and answers
//! shortest-path queries with Dijkstra's algorithm.

pub mod algorithm;
pub mod config;
pub mod connection;
pub mod data_structures;
pub mod distance;
pub mod graph;
pub mod loader;

pub use algorithm::{
    dijkstra::Dijkstra, path::path_to_token_string, path::reconstruct_path, ShortestPathAlgorithm,
    ShortestPathResult, ShortestPathTable,
};
pub use config::{EngineConfig, FrontierKind};
pub use connection::ConnectionIndex;
pub use distance::{Distance, RouteQuery};
/// Re-export main types for convenient use
pub use graph::network::NetworkGraph;
pub use graph::statistics::{Flight, NetworkStatistics};
pub use loader::{RouteDocument, RouteRecord};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown airport code: {0}")]
    UnknownNode(String),

    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("The network has no routes")]
    EmptyNetwork,

    #[error("Invalid distance {distance} for route {from}-{to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },

    #[error("Invalid route record: {0}")]
    InvalidRecord(String),

    #[error("Failed to parse route data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read route data: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
