//! Characteristic path length.
//!
//! Dijkstra runs once per source vertex. Runs are independent and only read
//! the graph, so they execute on the rayon pool; per-source totals are then
//! summed in vertex order to keep the result deterministic.

use log::{debug, info};
use rayon::prelude::*;

use crate::graph::{GraphResult, ShortestPathEngine, Vertex, WeightedGraph};

use super::types::{PathLength, PathLengthReport, UnreachablePolicy};

#[derive(Debug, Default, Clone, Copy)]
struct SourceTotals {
    distance: f64,
    reachable: usize,
    unreachable: usize,
}

/// Mean shortest-path distance over ordered vertex pairs `(i, j)`, `i != j`.
///
/// Under [`UnreachablePolicy::Exclude`] pairs without a path are left out of
/// both the sum and the pair count. Under [`UnreachablePolicy::Infinite`] a
/// single such pair makes the result [`PathLength::Infinite`]. Graphs with
/// fewer than two vertices yield [`PathLength::Undefined`].
pub fn characteristic_path_length<V>(
    graph: &WeightedGraph<V>,
    policy: UnreachablePolicy,
) -> GraphResult<PathLengthReport>
where
    V: Vertex + Send + Sync,
{
    let engine = ShortestPathEngine::new(graph);
    let sources = graph.vertices();
    let n = sources.len();

    let per_source = sources
        .par_iter()
        .map(|source| -> GraphResult<SourceTotals> {
            let paths = engine.shortest_distances(source)?;
            let mut totals = SourceTotals::default();
            for (target, distance) in paths.iter() {
                if target == source {
                    continue;
                }
                match distance {
                    Some(d) => {
                        totals.distance += d;
                        totals.reachable += 1;
                    }
                    None => totals.unreachable += 1,
                }
            }
            Ok(totals)
        })
        .collect::<GraphResult<Vec<SourceTotals>>>()?;

    let mut total_distance = 0.0;
    let mut reachable_pairs = 0;
    let mut unreachable_pairs = 0;
    for totals in &per_source {
        total_distance += totals.distance;
        reachable_pairs += totals.reachable;
        unreachable_pairs += totals.unreachable;
    }
    debug!(
        "Path totals over {} sources: distance={}, reachable={}, unreachable={}",
        n, total_distance, reachable_pairs, unreachable_pairs
    );

    let length = match policy {
        _ if n < 2 => PathLength::Undefined,
        UnreachablePolicy::Infinite if unreachable_pairs > 0 => PathLength::Infinite,
        UnreachablePolicy::Infinite => PathLength::Finite(total_distance / (n * (n - 1)) as f64),
        UnreachablePolicy::Exclude if reachable_pairs == 0 => PathLength::Undefined,
        UnreachablePolicy::Exclude => PathLength::Finite(total_distance / reachable_pairs as f64),
    };

    if unreachable_pairs > 0 {
        info!(
            "{} ordered vertex pairs are unreachable ({:?} policy)",
            unreachable_pairs, policy
        );
    }

    Ok(PathLengthReport {
        policy,
        length,
        total_distance,
        reachable_pairs,
        unreachable_pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(length: PathLength, expected: f64) {
        let value = length.finite().expect("finite path length");
        assert!((value - expected).abs() < 1e-9, "{} != {}", value, expected);
    }

    #[test]
    fn test_complete_graph_with_unit_weights() {
        let mut graph = WeightedGraph::with_vertices([1u32, 2, 3]).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        graph.add_edge(1, 3, 1.0).unwrap();
        let report = characteristic_path_length(&graph, UnreachablePolicy::Exclude).unwrap();
        assert_close(report.length, 1.0);
        assert_eq!(report.reachable_pairs, 6);
    }

    #[test]
    fn test_weighted_triangle() {
        let mut graph = WeightedGraph::with_vertices([1u32, 2, 3]).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        graph.add_edge(1, 3, 2.0).unwrap();
        let report = characteristic_path_length(&graph, UnreachablePolicy::Infinite).unwrap();
        assert_eq!(report.total_distance, 8.0);
        assert_close(report.length, 8.0 / 6.0);
    }

    #[test]
    fn test_disconnected_graph_policies() {
        // Component {1, 2} and isolated 3.
        let mut graph = WeightedGraph::with_vertices([1u32, 2, 3]).unwrap();
        graph.add_edge(1, 2, 4.0).unwrap();

        let excluded = characteristic_path_length(&graph, UnreachablePolicy::Exclude).unwrap();
        assert_eq!(excluded.reachable_pairs, 2);
        assert_eq!(excluded.unreachable_pairs, 4);
        assert_close(excluded.length, 4.0);

        let infinite = characteristic_path_length(&graph, UnreachablePolicy::Infinite).unwrap();
        assert_eq!(infinite.length, PathLength::Infinite);
    }

    #[test]
    fn test_degenerate_graphs_are_undefined() {
        let empty: WeightedGraph = WeightedGraph::new();
        let report = characteristic_path_length(&empty, UnreachablePolicy::Exclude).unwrap();
        assert_eq!(report.length, PathLength::Undefined);

        let single = WeightedGraph::with_vertices([1u32]).unwrap();
        let report = characteristic_path_length(&single, UnreachablePolicy::Infinite).unwrap();
        assert_eq!(report.length, PathLength::Undefined);

        let isolated = WeightedGraph::with_vertices([1u32, 2]).unwrap();
        let report = characteristic_path_length(&isolated, UnreachablePolicy::Exclude).unwrap();
        assert_eq!(report.length, PathLength::Undefined);
    }
}
