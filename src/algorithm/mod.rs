pub mod dijkstra;
pub mod path;
pub mod table;
pub mod traits;

pub use table::ShortestPathTable;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
