pub mod network;
pub mod statistics;
pub mod traits;

pub use network::{AdjacencyRow, NetworkGraph};
pub use statistics::{Flight, NetworkStatistics};
pub use traits::Adjacency;
