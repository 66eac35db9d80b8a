//! Report generation for topology analysis.
//!
//! Generates JSON and human-readable text reports, a console summary and
//! an ASCII bar chart of the degree histogram.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::Vertex;
use crate::topology::{PathLength, PathLengthReport, Property, TopologyReport, UnreachablePolicy};
use crate::utils::format_value;

/// Longest bar drawn by [`render_histogram_chart`]
const CHART_WIDTH: usize = 50;

/// Where and when a report was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub analysis_timestamp: String,
    pub graph_source: String,
    pub total_vertices: usize,
    pub total_edges: usize,
}

impl AnalysisMetadata {
    pub fn new(graph_source: impl Into<String>, total_vertices: usize, total_edges: usize) -> Self {
        Self {
            analysis_timestamp: chrono::Utc::now().to_rfc3339(),
            graph_source: graph_source.into(),
            total_vertices,
            total_edges,
        }
    }
}

/// Analysis results together with their metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullTopologyReport<V> {
    pub metadata: AnalysisMetadata,
    pub topology: TopologyReport<V>,
}

impl<V> FullTopologyReport<V> {
    pub fn new(graph_source: impl Into<String>, topology: TopologyReport<V>) -> Self {
        Self {
            metadata: AnalysisMetadata::new(graph_source, topology.vertices, topology.edges),
            topology,
        }
    }
}

/// Generate JSON report
pub fn write_json_report<V: Serialize>(report: &FullTopologyReport<V>, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Generate human-readable text report
pub fn write_text_report<V: Vertex>(
    report: &FullTopologyReport<V>,
    output_path: &Path,
    precision: usize,
) -> Result<()> {
    let text = render_text_report(report, precision);

    fs::write(output_path, text)
        .with_context(|| format!("Failed to write text report to {}", output_path.display()))?;

    log::info!("Text report written to {}", output_path.display());
    Ok(())
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push("=".repeat(80));
    lines.push(format!("{:^80}", title.to_uppercase()));
    lines.push("=".repeat(80));
    lines.push(String::new());
}

fn describe_path_length(length: &PathLength, precision: usize) -> String {
    match length {
        PathLength::Finite(value) => format_value(*value, precision),
        PathLength::Infinite => "infinite".to_string(),
        PathLength::Undefined => "undefined".to_string(),
    }
}

fn describe_average(average: Option<f64>, precision: usize) -> String {
    average
        .map(|value| format_value(value, precision))
        .unwrap_or_else(|| "n/a".to_string())
}

fn push_path_length(lines: &mut Vec<String>, report: &PathLengthReport, precision: usize) {
    let policy = match report.policy {
        UnreachablePolicy::Exclude => "exclude unreachable pairs",
        UnreachablePolicy::Infinite => "unreachable pairs are infinite",
    };
    lines.push(format!(
        "Characteristic Path Length: {}",
        describe_path_length(&report.length, precision)
    ));
    lines.push(format!("  Policy: {}", policy));
    lines.push(format!("  Reachable pairs: {}", report.reachable_pairs));
    lines.push(format!("  Unreachable pairs: {}", report.unreachable_pairs));
    lines.push(format!(
        "  Total distance: {}",
        format_value(report.total_distance, precision)
    ));
}

/// Render the full text report
pub fn render_text_report<V: Vertex>(report: &FullTopologyReport<V>, precision: usize) -> String {
    let topology = &report.topology;
    let mut lines: Vec<String> = Vec::new();

    section(&mut lines, "Network topology analysis");

    lines.push(format!("Analysis Date: {}", report.metadata.analysis_timestamp));
    lines.push(format!("Graph Source: {}", report.metadata.graph_source));
    lines.push(format!("Vertices: {}", report.metadata.total_vertices));
    lines.push(format!("Edges: {}", report.metadata.total_edges));
    lines.push(String::new());

    if let Some(ref degree) = topology.degree {
        section(&mut lines, Property::Degree.title());
        for (v, k) in &degree.per_vertex {
            lines.push(format!("  Degree of node {}: {}", v, k));
        }
        lines.push(String::new());
        lines.push("Degree Distribution:".to_string());
        for bin in &degree.histogram.bins {
            lines.push(format!(
                "  P(k = {}) = {}  ({} nodes)",
                bin.value,
                format_value(bin.probability, precision),
                bin.count
            ));
        }
        lines.push(format!("Average Degree: {}", describe_average(degree.average, precision)));
        lines.push(String::new());
    }

    if let Some(ref strength) = topology.strength {
        section(&mut lines, Property::Strength.title());
        for (v, s) in &strength.per_vertex {
            lines.push(format!("  Strength of node {}: {}", v, format_value(*s, precision)));
        }
        lines.push(String::new());
        lines.push("Strength Distribution:".to_string());
        for bin in &strength.histogram.bins {
            lines.push(format!(
                "  P(s = {}) = {}  ({} nodes)",
                format_value(bin.value, precision),
                format_value(bin.probability, precision),
                bin.count
            ));
        }
        lines.push(format!(
            "Average Strength: {}",
            describe_average(strength.average, precision)
        ));
        lines.push(String::new());
    }

    if let Some(ref clustering) = topology.clustering {
        section(&mut lines, Property::Clustering.title());
        for (v, c) in &clustering.per_vertex {
            lines.push(format!(
                "  Clustering coefficient of node {}: {}",
                v,
                format_value(*c, precision)
            ));
        }
        lines.push(String::new());
        lines.push(format!(
            "Average Clustering Coefficient: {}",
            describe_average(clustering.average, precision)
        ));
        lines.push(String::new());
    }

    if let Some(ref path_length) = topology.path_length {
        section(&mut lines, Property::PathLength.title());
        push_path_length(&mut lines, path_length, precision);
        lines.push(String::new());
    }

    if let Some(ref histogram) = topology.scale_free {
        section(&mut lines, Property::ScaleFree.title());
        lines.push(render_histogram_chart(
            histogram,
            "Degree histogram",
            "Degree",
            "Number of nodes",
        ));
    }

    lines.push("=".repeat(80));
    lines.push(String::new());
    lines.join("\n")
}

/// Horizontal ASCII bar chart of a degree to vertex-count mapping.
///
/// ```text
/// Degree histogram
/// Degree | Number of nodes
/// -------+----------------
///      1 | ################ 2
///      2 | ######## 1
/// ```
pub fn render_histogram_chart(
    histogram: &BTreeMap<usize, usize>,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(title.to_string());

    let width = histogram
        .keys()
        .map(|k| k.to_string().len())
        .chain(std::iter::once(x_label.len()))
        .max()
        .unwrap_or(0);
    lines.push(format!("{:>width$} | {}", x_label, y_label, width = width));
    lines.push(format!("{}-+-{}", "-".repeat(width), "-".repeat(y_label.len())));

    let max = histogram.values().copied().max().unwrap_or(0);
    if max == 0 {
        lines.push("(no data)".to_string());
    }
    for (degree, count) in histogram {
        let bar = if max == 0 {
            0
        } else {
            // Non-zero counts always get at least one mark.
            ((count * CHART_WIDTH) / max).max(usize::from(*count > 0))
        };
        lines.push(format!(
            "{:>width$} | {} {}",
            degree,
            "#".repeat(bar),
            count,
            width = width
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Print a short summary to the console
pub fn print_summary<V>(report: &FullTopologyReport<V>, precision: usize) {
    let topology = &report.topology;
    println!("\n=== NETWORK TOPOLOGY SUMMARY ===\n");
    println!("Source: {}", report.metadata.graph_source);
    println!("Vertices: {}", topology.vertices);
    println!("Edges: {}", topology.edges);

    if let Some(ref degree) = topology.degree {
        println!("\nDegree:");
        println!("  Average: {}", describe_average(degree.average, precision));
        if let (Some(min), Some(max)) = (degree.histogram.bins.first(), degree.histogram.bins.last()) {
            println!("  Range: {} - {}", min.value, max.value);
        }
    }

    if let Some(ref strength) = topology.strength {
        println!("\nStrength:");
        println!("  Average: {}", describe_average(strength.average, precision));
    }

    if let Some(ref clustering) = topology.clustering {
        println!("\nClustering:");
        println!("  Average: {}", describe_average(clustering.average, precision));
    }

    if let Some(ref path_length) = topology.path_length {
        println!("\nPath Length:");
        println!("  Characteristic: {}", describe_path_length(&path_length.length, precision));
        println!("  Unreachable pairs: {}", path_length.unreachable_pairs);
    }

    println!();
}
