//! Result types produced by the topology analyses.
//!
//! Everything here is plain, serialisable data; rendering lives in
//! [`crate::report`].

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Topology properties that can be requested from [`super::analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    /// Degree of every vertex and the degree distribution
    Degree,
    /// Strength of every vertex and the strength distribution
    Strength,
    /// Local clustering coefficients and their network average
    Clustering,
    /// Characteristic path length
    PathLength,
    /// Degree histogram used to judge scale-free versus random structure
    ScaleFree,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::Degree,
        Property::Strength,
        Property::Clustering,
        Property::PathLength,
        Property::ScaleFree,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Property::Degree => "Degree of nodes and distribution",
            Property::Strength => "Strength of nodes and distribution",
            Property::Clustering => "Clustering coefficient of network",
            Property::PathLength => "Characteristic path length",
            Property::ScaleFree => "Random or scale-free network",
        }
    }
}

/// How ordered vertex pairs without a connecting path enter the
/// characteristic path length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnreachablePolicy {
    /// Leave unreachable pairs out of both the sum and the pair count
    #[default]
    Exclude,
    /// Any unreachable pair makes the path length infinite
    Infinite,
}

/// One histogram bucket: a value observed on `count` vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin<T> {
    pub value: T,
    pub count: usize,
    /// `count / total`, the share of vertices attaining `value`
    pub probability: f64,
}

/// Exact-value histogram over per-vertex measurements, bins ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram<T> {
    pub total: usize,
    pub bins: Vec<HistogramBin<T>>,
}

impl<T: Copy + PartialOrd> Histogram<T> {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let total = values.len();
        let mut bins: Vec<HistogramBin<T>> = Vec::new();
        for value in values {
            match bins.last_mut() {
                Some(bin) if bin.value == value => bin.count += 1,
                _ => bins.push(HistogramBin { value, count: 1, probability: 0.0 }),
            }
        }
        for bin in &mut bins {
            bin.probability = bin.count as f64 / total as f64;
        }

        Self { total, bins }
    }

    /// Number of vertices attaining exactly `value`.
    pub fn count(&self, value: T) -> usize {
        self.bins
            .iter()
            .find(|bin| bin.value == value)
            .map(|bin| bin.count)
            .unwrap_or(0)
    }

    pub fn probability_sum(&self) -> f64 {
        self.bins.iter().map(|bin| bin.probability).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

impl<T: Copy + Ord> Histogram<T> {
    /// Value to vertex-count mapping.
    pub fn count_map(&self) -> BTreeMap<T, usize> {
        self.bins.iter().map(|bin| (bin.value, bin.count)).collect()
    }
}

/// Per-vertex values of one measure together with their distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionReport<V, T> {
    /// `(vertex, value)` in graph vertex order
    pub per_vertex: Vec<(V, T)>,
    pub histogram: Histogram<T>,
    /// Mean over all vertices; `None` for an empty graph
    pub average: Option<f64>,
}

/// Local clustering coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringReport<V> {
    pub per_vertex: Vec<(V, f64)>,
    /// Network average; `None` for an empty graph
    pub average: Option<f64>,
}

/// Characteristic path length outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PathLength {
    Finite(f64),
    /// Some ordered pair has no connecting path
    Infinite,
    /// Fewer than two vertices, or no reachable pair at all
    Undefined,
}

impl PathLength {
    pub fn finite(&self) -> Option<f64> {
        match self {
            PathLength::Finite(value) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathLengthReport {
    pub policy: UnreachablePolicy,
    pub length: PathLength,
    /// Sum of shortest distances over reachable ordered pairs
    pub total_distance: f64,
    pub reachable_pairs: usize,
    pub unreachable_pairs: usize,
}

/// Bundle of the requested analyses for one graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyReport<V> {
    pub vertices: usize,
    pub edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<DistributionReport<V, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<DistributionReport<V, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clustering: Option<ClusteringReport<V>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_length: Option<PathLengthReport>,
    /// Degree to vertex-count mapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_free: Option<BTreeMap<usize, usize>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_groups_equal_values() {
        let histogram = Histogram::from_values(vec![3usize, 1, 3, 2, 3]);
        assert_eq!(histogram.total, 5);
        let values: Vec<usize> = histogram.bins.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(histogram.count(3), 3);
        assert_eq!(histogram.count(7), 0);
        assert!((histogram.probability_sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_of_floats() {
        let histogram = Histogram::from_values(vec![2.5f64, 0.0, 2.5]);
        assert_eq!(histogram.bins.len(), 2);
        assert_eq!(histogram.bins[0].value, 0.0);
        assert_eq!(histogram.bins[1].count, 2);
        assert!((histogram.bins[1].probability - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_histogram() {
        let histogram: Histogram<usize> = Histogram::from_values(Vec::new());
        assert!(histogram.is_empty());
        assert_eq!(histogram.probability_sum(), 0.0);
    }

    #[test]
    fn test_path_length_serialisation() {
        let json = serde_json::to_string(&PathLength::Finite(1.5)).unwrap();
        assert_eq!(json, r#"{"kind":"finite","value":1.5}"#);
        let json = serde_json::to_string(&PathLength::Infinite).unwrap();
        assert_eq!(json, r#"{"kind":"infinite"}"#);
    }

    #[test]
    fn test_property_names() {
        let parsed: Vec<Property> = serde_yaml::from_str("[degree, path-length, scale-free]").unwrap();
        assert_eq!(parsed, vec![Property::Degree, Property::PathLength, Property::ScaleFree]);
    }
}
