//! Undirected, weighted graph backed by per-vertex incidence sets.
//!
//! Every vertex owns an incidence set keyed by the destination vertex, with
//! the edge weight stored as the associated value. A pair of vertices can
//! therefore be joined by at most one edge: adding a second edge between an
//! already connected pair is a no-op that keeps the original weight.
//!
//! Vertices and incidence records iterate in insertion order, so diagnostics
//! (adjacency listings, per-vertex reports) are stable for a given graph.
//!
//! The graph is not synchronised. Analyses borrow it immutably, so any
//! number of them may run at once, but mutation requires exclusive access.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use log::{debug, trace};
use super::error::{GraphError, GraphResult};

/// Bounds required of a vertex identifier.
pub trait Vertex: Eq + Hash + Clone + fmt::Debug + fmt::Display {}

impl<T> Vertex for T where T: Eq + Hash + Clone + fmt::Debug + fmt::Display {}

/// Vertex identifier used by the loaders and generators.
pub type VertexId = i64;

/// A weighted incidence record: the far endpoint and the edge weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    pub dest: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    pub fn new(dest: V, weight: f64) -> Self {
        Self { dest, weight }
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|({})]", self.dest, self.weight)
    }
}

/// Incidence set of one vertex, ordered by insertion.
#[derive(Debug, Clone)]
struct Incidence<V> {
    edges: Vec<Edge<V>>,
    positions: HashMap<V, usize>,
}

impl<V: Vertex> Incidence<V> {
    fn new() -> Self {
        Self {
            edges: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Returns `false` when `dest` is already present (the weight is kept).
    fn insert(&mut self, dest: V, weight: f64) -> bool {
        if self.positions.contains_key(&dest) {
            return false;
        }
        self.positions.insert(dest.clone(), self.edges.len());
        self.edges.push(Edge::new(dest, weight));
        true
    }

    fn remove(&mut self, dest: &V) -> Option<f64> {
        let position = self.positions.remove(dest)?;
        let removed = self.edges.remove(position);
        for edge in &self.edges[position..] {
            if let Some(slot) = self.positions.get_mut(&edge.dest) {
                *slot -= 1;
            }
        }
        Some(removed.weight)
    }

    fn weight(&self, dest: &V) -> Option<f64> {
        self.positions.get(dest).map(|&i| self.edges[i].weight)
    }

    fn contains(&self, dest: &V) -> bool {
        self.positions.contains_key(dest)
    }

    fn len(&self) -> usize {
        self.edges.len()
    }
}

/// Undirected weighted graph over vertices of type `V`.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V: Vertex = VertexId> {
    adjacency: HashMap<V, Incidence<V>>,
    order: Vec<V>,
    vertex_count: usize,
    edge_count: usize,
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> WeightedGraph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
            vertex_count: 0,
            edge_count: 0,
        }
    }

    /// Create a graph holding the given vertices and no edges.
    pub fn with_vertices<I>(vertices: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
    {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v)?;
        }
        Ok(graph)
    }

    /// Insert `v` with an empty incidence set.
    pub fn add_vertex(&mut self, v: V) -> GraphResult<()> {
        if self.adjacency.contains_key(&v) {
            return Err(GraphError::duplicate(&v));
        }
        trace!("Adding vertex {}", v);
        self.adjacency.insert(v.clone(), Incidence::new());
        self.order.push(v);
        self.vertex_count += 1;
        Ok(())
    }

    /// Connect `src` and `dest` with an edge of weight `w`.
    ///
    /// Returns `Ok(true)` when a new edge was created and `Ok(false)` when
    /// the pair was already connected, in which case the existing weight is
    /// left untouched. All checks run before any mutation, so a failed call
    /// leaves the graph as it was.
    pub fn add_edge(&mut self, src: V, dest: V, w: f64) -> GraphResult<bool> {
        if !self.adjacency.contains_key(&src) {
            return Err(GraphError::unknown(&src));
        }
        if !self.adjacency.contains_key(&dest) {
            return Err(GraphError::unknown(&dest));
        }
        if !w.is_finite() {
            return Err(GraphError::InvalidWeight {
                src: src.to_string(),
                dest: dest.to_string(),
                weight: w,
            });
        }

        let added = match self.adjacency.get_mut(&src) {
            Some(incidence) => incidence.insert(dest.clone(), w),
            None => false,
        };
        if !added {
            debug!("Edge {} - {} already present, keeping existing weight", src, dest);
            return Ok(false);
        }
        if src != dest {
            if let Some(incidence) = self.adjacency.get_mut(&dest) {
                incidence.insert(src.clone(), w);
            }
        }
        trace!("Added edge {} - {} (w={})", src, dest, w);
        self.edge_count += 1;
        Ok(true)
    }

    /// Remove the edge between `src` and `dest`, returning its weight.
    pub fn remove_edge(&mut self, src: &V, dest: &V) -> GraphResult<f64> {
        if !self.incidence(src)?.contains(dest) {
            self.incidence(dest)?;
            return Err(GraphError::missing_edge(src, dest));
        }
        let weight = match self.adjacency.get_mut(src) {
            Some(incidence) => incidence.remove(dest),
            None => None,
        }
        .ok_or_else(|| GraphError::missing_edge(src, dest))?;
        if src != dest {
            if let Some(incidence) = self.adjacency.get_mut(dest) {
                incidence.remove(src);
            }
        }
        self.edge_count -= 1;
        Ok(weight)
    }

    /// Remove `v` together with every edge incident to it.
    pub fn remove_vertex(&mut self, v: &V) -> GraphResult<()> {
        let incidence = self.adjacency.remove(v).ok_or_else(|| GraphError::unknown(v))?;
        for edge in &incidence.edges {
            if edge.dest != *v {
                if let Some(other) = self.adjacency.get_mut(&edge.dest) {
                    other.remove(v);
                }
            }
        }
        self.edge_count -= incidence.len();
        self.order.retain(|u| u != v);
        self.vertex_count -= 1;
        Ok(())
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn has_edge(&self, src: &V, dest: &V) -> bool {
        self.adjacency
            .get(src)
            .map(|incidence| incidence.contains(dest))
            .unwrap_or(false)
    }

    /// Weight of the edge between `src` and `dest`.
    pub fn edge_weight(&self, src: &V, dest: &V) -> GraphResult<f64> {
        let incidence = self.incidence(src)?;
        self.incidence(dest)?;
        incidence
            .weight(dest)
            .ok_or_else(|| GraphError::missing_edge(src, dest))
    }

    pub fn vertices_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges_count(&self) -> usize {
        self.edge_count
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> Vec<V> {
        self.order.clone()
    }

    /// Iterate vertices without copying them.
    pub fn iter_vertices(&self) -> impl Iterator<Item = &V> {
        self.order.iter()
    }

    /// Number of edges incident to `v`.
    pub fn degree(&self, v: &V) -> GraphResult<usize> {
        Ok(self.incidence(v)?.len())
    }

    /// Sum of the weights of all edges incident to `v`.
    pub fn strength(&self, v: &V) -> GraphResult<f64> {
        Ok(self.incidence(v)?.edges.iter().map(|e| e.weight).sum())
    }

    /// Copy of the incidence records of `v`.
    pub fn neighbours(&self, v: &V) -> GraphResult<Vec<Edge<V>>> {
        Ok(self.incidence(v)?.edges.clone())
    }

    /// Borrowed view of the incidence records of `v`.
    pub fn edges_of(&self, v: &V) -> GraphResult<&[Edge<V>]> {
        Ok(&self.incidence(v)?.edges)
    }

    /// Every edge exactly once as `(src, dest, weight)`, following vertex
    /// insertion order.
    pub fn edges(&self) -> Vec<(V, V, f64)> {
        let mut visited: HashSet<&V> = HashSet::with_capacity(self.vertex_count);
        let mut edges = Vec::with_capacity(self.edge_count);
        for v in &self.order {
            visited.insert(v);
            if let Some(incidence) = self.adjacency.get(v) {
                for edge in &incidence.edges {
                    if edge.dest == *v || !visited.contains(&edge.dest) {
                        edges.push((v.clone(), edge.dest.clone(), edge.weight));
                    }
                }
            }
        }
        edges
    }

    /// Local clustering coefficient of `v`.
    ///
    /// `cc(v) = 2 * n_v / (k_v * (k_v - 1))` where `k_v` is the degree of `v`
    /// and `n_v` the number of unordered neighbour pairs that are themselves
    /// connected. Vertices with degree below 2 have a coefficient of 0.
    /// A self-loop counts towards `k_v` but never forms a neighbour pair.
    pub fn clustering_coefficient(&self, v: &V) -> GraphResult<f64> {
        let incidence = self.incidence(v)?;
        let k = incidence.len();
        if k < 2 {
            return Ok(0.0);
        }

        let neighbours: Vec<&V> = incidence
            .edges
            .iter()
            .map(|e| &e.dest)
            .filter(|dest| *dest != v)
            .collect();

        let mut linked_pairs = 0usize;
        for (i, a) in neighbours.iter().enumerate() {
            let Some(a_incidence) = self.adjacency.get(*a) else {
                continue;
            };
            linked_pairs += neighbours[i + 1..]
                .iter()
                .filter(|b| a_incidence.contains(b))
                .count();
        }

        Ok((2 * linked_pairs) as f64 / (k * (k - 1)) as f64)
    }

    /// Adjacency-list rendering, one `v -> [dest|(w)], ...` line per vertex.
    pub fn adjacency_list(&self) -> String {
        self.to_string()
    }

    fn incidence(&self, v: &V) -> GraphResult<&Incidence<V>> {
        self.adjacency.get(v).ok_or_else(|| GraphError::unknown(v))
    }
}

impl<V: Vertex> fmt::Display for WeightedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.order {
            write!(f, "{} -> ", v)?;
            if let Some(incidence) = self.adjacency.get(v) {
                let rendered: Vec<String> = incidence.edges.iter().map(|e| e.to_string()).collect();
                write!(f, "{}", rendered.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
