//! Errors raised by graph construction and queries.

/// Precondition violations detected by [`WeightedGraph`](super::WeightedGraph)
/// and [`ShortestPathEngine`](super::ShortestPathEngine).
///
/// Vertices are carried in their display form so the error type does not
/// depend on the vertex type of the graph that produced it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Vertex {vertex} does not exist in this graph")]
    UnknownVertex { vertex: String },

    #[error("Vertex {vertex} already exists in this graph")]
    DuplicateVertex { vertex: String },

    #[error("No edge between {src} and {dest}")]
    InvalidEdge { src: String, dest: String },

    #[error("Edge {src} - {dest} has non-finite weight {weight}")]
    InvalidWeight { src: String, dest: String, weight: f64 },

    #[error("Edge {src} - {dest} has negative weight {weight}; shortest paths are undefined")]
    NegativeWeight { src: String, dest: String, weight: f64 },
}

impl GraphError {
    pub(crate) fn unknown(vertex: &impl std::fmt::Display) -> Self {
        Self::UnknownVertex { vertex: vertex.to_string() }
    }

    pub(crate) fn duplicate(vertex: &impl std::fmt::Display) -> Self {
        Self::DuplicateVertex { vertex: vertex.to_string() }
    }

    pub(crate) fn missing_edge(src: &impl std::fmt::Display, dest: &impl std::fmt::Display) -> Self {
        Self::InvalidEdge {
            src: src.to_string(),
            dest: dest.to_string(),
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
