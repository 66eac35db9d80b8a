//! Graph loading from files.
//!
//! Two on-disk formats feed the same construction interface
//! (`add_vertex` / `add_edge`):
//!
//! - `text`: a vertex file (one id per line) paired with an edge file
//!   (`src dest [weight]` per line, weight defaulting to 0)
//! - `gml`: a GML document with `node [ id .. ]` and
//!   `edge [ source .. target .. weight .. ]` entries

pub mod gml;
pub mod text;

use log::info;

use crate::config::GraphSource;
use crate::graph::{GraphError, WeightedGraph};

pub use gml::{load_gml_graph, parse_gml_graph};
pub use text::{load_text_graph, parse_text_graph, write_text_graph};

/// Errors that can occur while reading or writing graph files
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("{path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("{path}:{line}: {source}")]
    Graph {
        path: String,
        line: usize,
        source: GraphError,
    },
}

impl LoadError {
    pub(crate) fn parse(path: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_string(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn graph(path: &str, line: usize, source: GraphError) -> Self {
        Self::Graph {
            path: path.to_string(),
            line,
            source,
        }
    }
}

/// Load the graph described by a configured source.
pub fn load_graph(source: &GraphSource) -> Result<WeightedGraph, LoadError> {
    let graph = match source {
        GraphSource::Text { nodes, edges } => load_text_graph(nodes, edges)?,
        GraphSource::Gml { gml } => load_gml_graph(gml)?,
    };
    info!(
        "Loaded graph from {}: {} vertices, {} edges",
        source.describe(),
        graph.vertices_count(),
        graph.edges_count()
    );
    Ok(graph)
}
