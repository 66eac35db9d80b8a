//! Network-wide clustering coefficient.

use log::debug;

use crate::graph::{GraphResult, Vertex, WeightedGraph};

use super::distribution::mean;
use super::types::ClusteringReport;

/// Local clustering coefficient of every vertex and their mean.
pub fn clustering_coefficient<V: Vertex>(graph: &WeightedGraph<V>) -> GraphResult<ClusteringReport<V>> {
    let per_vertex = graph
        .iter_vertices()
        .map(|v| -> GraphResult<(V, f64)> { Ok((v.clone(), graph.clustering_coefficient(v)?)) })
        .collect::<GraphResult<Vec<(V, f64)>>>()?;

    let average = mean(per_vertex.iter().map(|(_, cc)| *cc), per_vertex.len());
    debug!("Average clustering coefficient: {:?}", average);

    Ok(ClusteringReport { per_vertex, average })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_hold_on_mixed_graph() {
        let mut graph = WeightedGraph::with_vertices(1..=6u32).unwrap();
        for (u, v) in [(1, 2), (1, 3), (2, 3), (3, 4), (4, 5), (4, 6), (5, 6), (1, 6)] {
            graph.add_edge(u, v, 1.0).unwrap();
        }
        let report = clustering_coefficient(&graph).unwrap();
        for (v, cc) in &report.per_vertex {
            assert!((0.0..=1.0).contains(cc), "cc({}) = {}", v, cc);
            if graph.degree(v).unwrap() < 2 {
                assert_eq!(*cc, 0.0);
            }
        }
        // Vertex 2 only touches the 1-2-3 triangle.
        assert_eq!(report.per_vertex[1], (2, 1.0));
    }

    #[test]
    fn test_average_over_path() {
        let mut graph = WeightedGraph::with_vertices([1u32, 2, 3]).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        let report = clustering_coefficient(&graph).unwrap();
        assert_eq!(report.average, Some(0.0));
    }
}
