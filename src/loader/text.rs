//! Line-oriented vertex/edge file pair.
//!
//! ```text
//! # GraphNodes.txt        # GraphEdges.txt
//! 1                       1 2 4
//! 2                       2 3
//! 3                       1 3 2.5
//! ```
//!
//! Vertex ids are signed 64-bit integers. Blank lines and lines starting
//! with `#` are ignored. A missing weight defaults to 0.

use std::fs;
use std::path::Path;

use log::debug;

use crate::graph::{VertexId, WeightedGraph};

use super::LoadError;

/// Load a graph from a vertex file and an edge file.
pub fn load_text_graph(nodes_path: &Path, edges_path: &Path) -> Result<WeightedGraph, LoadError> {
    let nodes = read(nodes_path)?;
    let edges = read(edges_path)?;
    let mut graph = WeightedGraph::new();
    add_vertices(&mut graph, &nodes, &nodes_path.display().to_string())?;
    add_edges(&mut graph, &edges, &edges_path.display().to_string())?;
    Ok(graph)
}

/// Build a graph from in-memory vertex and edge listings.
pub fn parse_text_graph(nodes: &str, edges: &str) -> Result<WeightedGraph, LoadError> {
    let mut graph = WeightedGraph::new();
    add_vertices(&mut graph, nodes, "<nodes>")?;
    add_edges(&mut graph, edges, "<edges>")?;
    Ok(graph)
}

/// Write `graph` as a vertex file and an edge file, each undirected edge
/// once.
pub fn write_text_graph(
    graph: &WeightedGraph,
    nodes_path: &Path,
    edges_path: &Path,
) -> Result<(), LoadError> {
    let mut nodes = String::new();
    for v in graph.iter_vertices() {
        nodes.push_str(&format!("{}\n", v));
    }
    let mut edges = String::new();
    for (src, dest, weight) in graph.edges() {
        edges.push_str(&format!("{} {} {}\n", src, dest, weight));
    }
    write(nodes_path, &nodes)?;
    write(edges_path, &edges)?;
    debug!(
        "Wrote {} vertices to {} and {} edges to {}",
        graph.vertices_count(),
        nodes_path.display(),
        graph.edges_count(),
        edges_path.display()
    );
    Ok(())
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn write(path: &Path, content: &str) -> Result<(), LoadError> {
    fs::write(path, content).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Non-empty, non-comment lines with their 1-based line numbers.
fn records(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_vertex(token: &str, origin: &str, line: usize) -> Result<VertexId, LoadError> {
    token
        .parse::<VertexId>()
        .map_err(|_| LoadError::parse(origin, line, format!("Invalid vertex id '{}'", token)))
}

fn add_vertices(graph: &mut WeightedGraph, content: &str, origin: &str) -> Result<(), LoadError> {
    for (line, record) in records(content) {
        let v = parse_vertex(record, origin, line)?;
        graph
            .add_vertex(v)
            .map_err(|source| LoadError::graph(origin, line, source))?;
    }
    Ok(())
}

fn add_edges(graph: &mut WeightedGraph, content: &str, origin: &str) -> Result<(), LoadError> {
    for (line, record) in records(content) {
        let fields: Vec<&str> = record.split_whitespace().collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(LoadError::parse(
                origin,
                line,
                format!("Expected 'src dest [weight]', found '{}'", record),
            ));
        }
        let src = parse_vertex(fields[0], origin, line)?;
        let dest = parse_vertex(fields[1], origin, line)?;
        let weight = match fields.get(2) {
            Some(w) => w
                .parse::<f64>()
                .map_err(|_| LoadError::parse(origin, line, format!("Invalid edge weight '{}'", w)))?,
            None => 0.0,
        };
        let added = graph
            .add_edge(src, dest, weight)
            .map_err(|source| LoadError::graph(origin, line, source))?;
        if !added {
            debug!("{}:{}: duplicate edge {} - {} ignored", origin, line, src, dest);
        }
    }
    Ok(())
}
