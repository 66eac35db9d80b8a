//! Single-source shortest paths (Dijkstra) over a [`WeightedGraph`].
//!
//! The priority queue is keyed by the cumulative distance from the source,
//! with stale entries skipped on pop. Vertices are mapped to dense indices
//! through a [`VertexIndex`], so any vertex type works.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::trace;

use super::error::{GraphError, GraphResult};
use super::weighted::{Vertex, WeightedGraph};

/// Bidirectional mapping between vertex identifiers and dense indices.
#[derive(Debug, Clone)]
pub struct VertexIndex<V> {
    ids: Vec<V>,
    slots: HashMap<V, usize>,
}

impl<V: Vertex> VertexIndex<V> {
    pub fn from_graph(graph: &WeightedGraph<V>) -> Self {
        let ids = graph.vertices();
        let slots = ids
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        Self { ids, slots }
    }

    pub fn slot(&self, v: &V) -> Option<usize> {
        self.slots.get(v).copied()
    }

    pub fn id(&self, slot: usize) -> Option<&V> {
        self.ids.get(slot)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f64,
    slot: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

/// Distances and predecessors from one source vertex.
///
/// Unreachable vertices have no distance; `distance` returns `None` for
/// them, which is distinct from the source's `Some(0.0)`.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'a, V> {
    index: &'a VertexIndex<V>,
    distances: Vec<Option<f64>>,
    predecessors: Vec<Option<usize>>,
}

impl<'a, V: Vertex> ShortestPaths<'a, V> {
    /// Shortest distance to `target`, or `None` if it is unreachable or not
    /// part of the graph.
    pub fn distance(&self, target: &V) -> Option<f64> {
        self.index.slot(target).and_then(|slot| self.distances[slot])
    }

    pub fn is_reachable(&self, target: &V) -> bool {
        self.distance(target).is_some()
    }

    /// Number of vertices reached, the source included.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Vertices along a shortest path from the source to `target`, both
    /// endpoints included.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        let mut slot = self.index.slot(target)?;
        self.distances[slot]?;
        let mut path = vec![self.index.ids[slot].clone()];
        while let Some(previous) = self.predecessors[slot] {
            path.push(self.index.ids[previous].clone());
            slot = previous;
        }
        path.reverse();
        Some(path)
    }

    /// Every vertex with its distance, in graph vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Option<f64>)> + '_ {
        self.index.ids.iter().zip(self.distances.iter().copied())
    }

    /// Distances as a map, unreachable vertices mapped to `None`.
    pub fn to_map(&self) -> HashMap<V, Option<f64>> {
        self.iter().map(|(v, d)| (v.clone(), d)).collect()
    }
}

/// Reusable shortest path solver bound to one graph.
pub struct ShortestPathEngine<'g, V: Vertex> {
    graph: &'g WeightedGraph<V>,
    index: VertexIndex<V>,
}

impl<'g, V: Vertex> ShortestPathEngine<'g, V> {
    pub fn new(graph: &'g WeightedGraph<V>) -> Self {
        Self {
            graph,
            index: VertexIndex::from_graph(graph),
        }
    }

    pub fn index(&self) -> &VertexIndex<V> {
        &self.index
    }

    /// Run Dijkstra from `source`.
    ///
    /// Fails with `UnknownVertex` if `source` is absent and with
    /// `NegativeWeight` if a negative edge is reachable from it.
    pub fn shortest_distances(&self, source: &V) -> GraphResult<ShortestPaths<'_, V>> {
        let source_slot = self.index.slot(source).ok_or_else(|| GraphError::unknown(source))?;
        let n = self.index.len();
        let mut distances: Vec<Option<f64>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();

        distances[source_slot] = Some(0.0);
        heap.push(Candidate { distance: 0.0, slot: source_slot });

        while let Some(Candidate { distance, slot }) = heap.pop() {
            if settled[slot] {
                continue;
            }
            settled[slot] = true;

            let current = &self.index.ids[slot];
            for edge in self.graph.edges_of(current)? {
                if edge.weight < 0.0 {
                    return Err(GraphError::NegativeWeight {
                        src: current.to_string(),
                        dest: edge.dest.to_string(),
                        weight: edge.weight,
                    });
                }
                let next = self
                    .index
                    .slot(&edge.dest)
                    .ok_or_else(|| GraphError::unknown(&edge.dest))?;
                if settled[next] {
                    continue;
                }
                let candidate = distance + edge.weight;
                let improves = match distances[next] {
                    Some(known) => candidate < known,
                    None => true,
                };
                if improves {
                    distances[next] = Some(candidate);
                    predecessors[next] = Some(slot);
                    heap.push(Candidate { distance: candidate, slot: next });
                }
            }
        }

        trace!(
            "Shortest paths from {}: {} of {} vertices reachable",
            source,
            distances.iter().filter(|d| d.is_some()).count(),
            n
        );

        Ok(ShortestPaths {
            index: &self.index,
            distances,
            predecessors,
        })
    }
}

/// One-shot shortest distances from `source`, unreachable vertices mapped
/// to `None`.
pub fn shortest_distances<V: Vertex>(
    graph: &WeightedGraph<V>,
    source: &V,
) -> GraphResult<HashMap<V, Option<f64>>> {
    let engine = ShortestPathEngine::new(graph);
    let paths = engine.shortest_distances(source)?;
    Ok(paths.to_map())
}
