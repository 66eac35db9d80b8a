//! Weighted, undirected graph ADT and shortest path computation.

pub mod error;
pub mod shortest_path;
pub mod weighted;

pub use error::{GraphError, GraphResult};
pub use shortest_path::{shortest_distances, ShortestPathEngine, ShortestPaths, VertexIndex};
pub use weighted::{Edge, Vertex, VertexId, WeightedGraph};
