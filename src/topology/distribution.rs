//! Degree and strength distributions.
//!
//! For every vertex the measure (degree or strength) is computed, then the
//! values are bucketed into an exact-value histogram. The distribution
//! reported for a value `x` is `count(x) / |V|`.
//!
//! Strengths are floating-point sums taken in incidence order, so two
//! vertices with the same incident weights can differ in the last bit.
//! They are bucketed on the value rounded to [`STRENGTH_DIGITS`] places.

use std::collections::BTreeMap;

use log::debug;

use crate::graph::{GraphResult, Vertex, WeightedGraph};
use crate::utils::round_to;

use super::types::{DistributionReport, Histogram};

/// Decimal places kept when bucketing strengths
pub const STRENGTH_DIGITS: usize = 9;

/// Degree of every vertex, the degree distribution and the average degree.
pub fn degree_distribution<V: Vertex>(
    graph: &WeightedGraph<V>,
) -> GraphResult<DistributionReport<V, usize>> {
    let per_vertex = graph
        .iter_vertices()
        .map(|v| -> GraphResult<(V, usize)> { Ok((v.clone(), graph.degree(v)?)) })
        .collect::<GraphResult<Vec<(V, usize)>>>()?;

    let histogram = Histogram::from_values(per_vertex.iter().map(|(_, d)| *d));
    let average = mean(per_vertex.iter().map(|(_, d)| *d as f64), per_vertex.len());
    debug!(
        "Degree distribution: {} distinct degrees over {} vertices",
        histogram.bins.len(),
        per_vertex.len()
    );

    Ok(DistributionReport {
        per_vertex,
        histogram,
        average,
    })
}

/// Strength of every vertex, the strength distribution and the average
/// strength.
pub fn strength_distribution<V: Vertex>(
    graph: &WeightedGraph<V>,
) -> GraphResult<DistributionReport<V, f64>> {
    let per_vertex = graph
        .iter_vertices()
        .map(|v| -> GraphResult<(V, f64)> { Ok((v.clone(), graph.strength(v)?)) })
        .collect::<GraphResult<Vec<(V, f64)>>>()?;

    let histogram =
        Histogram::from_values(per_vertex.iter().map(|(_, s)| round_to(*s, STRENGTH_DIGITS)));
    let average = mean(per_vertex.iter().map(|(_, s)| *s), per_vertex.len());
    debug!(
        "Strength distribution: {} distinct strengths over {} vertices",
        histogram.bins.len(),
        per_vertex.len()
    );

    Ok(DistributionReport {
        per_vertex,
        histogram,
        average,
    })
}

/// Degree to vertex-count mapping, handed unchanged to the chart renderer
/// when judging scale-free structure.
pub fn degree_histogram<V: Vertex>(graph: &WeightedGraph<V>) -> GraphResult<BTreeMap<usize, usize>> {
    let mut histogram = BTreeMap::new();
    for v in graph.iter_vertices() {
        *histogram.entry(graph.degree(v)?).or_insert(0) += 1;
    }
    Ok(histogram)
}

pub(crate) fn mean(values: impl Iterator<Item = f64>, len: usize) -> Option<f64> {
    if len == 0 {
        return None;
    }
    Some(values.sum::<f64>() / len as f64)
}
