//! Network topology metrics.
//!
//! This module contains the read-only analyses run against a built
//! [`WeightedGraph`]: degree and strength distributions, clustering
//! coefficients, the characteristic path length and the degree histogram
//! used for scale-free classification.

pub mod clustering;
pub mod distribution;
pub mod path_length;
pub mod types;

use log::info;

use crate::graph::{GraphResult, Vertex, WeightedGraph};

// Re-export key types and functions for easier access
pub use clustering::clustering_coefficient;
pub use distribution::{degree_distribution, degree_histogram, strength_distribution};
pub use path_length::characteristic_path_length;
pub use types::{
    ClusteringReport, DistributionReport, Histogram, HistogramBin, PathLength, PathLengthReport,
    Property, TopologyReport, UnreachablePolicy,
};

/// Which analyses to run and how.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub properties: Vec<Property>,
    pub unreachable: UnreachablePolicy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            properties: Property::ALL.to_vec(),
            unreachable: UnreachablePolicy::default(),
        }
    }
}

impl AnalysisOptions {
    pub fn wants(&self, property: Property) -> bool {
        self.properties.contains(&property)
    }
}

/// Run the requested analyses against `graph`.
pub fn analyze<V>(graph: &WeightedGraph<V>, options: &AnalysisOptions) -> GraphResult<TopologyReport<V>>
where
    V: Vertex + Send + Sync,
{
    info!(
        "Analyzing graph with {} vertices and {} edges ({} properties)",
        graph.vertices_count(),
        graph.edges_count(),
        options.properties.len()
    );

    let mut report = TopologyReport {
        vertices: graph.vertices_count(),
        edges: graph.edges_count(),
        degree: None,
        strength: None,
        clustering: None,
        path_length: None,
        scale_free: None,
    };

    if options.wants(Property::Degree) {
        info!("Computing degree distribution");
        report.degree = Some(degree_distribution(graph)?);
    }
    if options.wants(Property::Strength) {
        info!("Computing strength distribution");
        report.strength = Some(strength_distribution(graph)?);
    }
    if options.wants(Property::Clustering) {
        info!("Computing clustering coefficients");
        report.clustering = Some(clustering_coefficient(graph)?);
    }
    if options.wants(Property::PathLength) {
        info!("Computing characteristic path length");
        report.path_length = Some(characteristic_path_length(graph, options.unreachable)?);
    }
    if options.wants(Property::ScaleFree) {
        info!("Computing degree histogram");
        report.scale_free = Some(degree_histogram(graph)?);
    }

    Ok(report)
}
