pub mod traits;
pub mod result;
pub mod path;
pub mod dijkstra;
pub mod engine;

pub use traits::ShortestPathAlgorithm;
pub use result::{PathRecord, ShortestPathResult};
