//! # nettopo - Weighted network topology analysis
//!
//! This library models undirected weighted networks and computes the
//! classic topology properties used to characterise them.
//!
//! ## Overview
//!
//! A [`graph::WeightedGraph`] is built vertex by vertex and edge by edge,
//! either programmatically, from a vertex/edge file pair, from a GML
//! document or by one of the synthetic generators. The analyses in
//! [`topology`] then read the graph without modifying it.
//!
//! ## Key Features
//!
//! - **Degree and strength**: per-vertex values and their distributions
//! - **Clustering coefficient**: local triangle density and network average
//! - **Characteristic path length**: mean weighted shortest-path distance,
//!   computed with Dijkstra from every source in parallel
//! - **Scale-free check**: degree histogram rendered as a bar chart
//! - **Generators**: Erdős–Rényi and Barabási–Albert networks, seedable
//!
//! ## Architecture
//!
//! - `graph`: the weighted graph ADT and the shortest-path engine
//! - `topology`: metric computations and their result types
//! - `loader`: text pair and GML graph readers
//! - `generator`: synthetic network models
//! - `config`: YAML analysis configuration structures
//! - `config_loader`: configuration file loading and CLI overrides
//! - `report`: JSON, text and console reporting
//! - `utils`: formatting helpers
//!
//! ## Example Usage
//!
//! ```rust
//! use nettopo::graph::WeightedGraph;
//! use nettopo::topology::{analyze, AnalysisOptions, PathLength};
//!
//! let mut graph = WeightedGraph::with_vertices([1u32, 2, 3])?;
//! graph.add_edge(1, 2, 1.0)?;
//! graph.add_edge(2, 3, 1.0)?;
//! graph.add_edge(1, 3, 2.0)?;
//!
//! let report = analyze(&graph, &AnalysisOptions::default())?;
//! let length = report.path_length.map(|p| p.length);
//! assert!(matches!(length, Some(PathLength::Finite(l)) if (l - 8.0 / 6.0).abs() < 1e-9));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Graph operations return typed [`graph::GraphError`] values; loaders,
//! generators and configuration validation have their own error enums.
//! File-level orchestration uses `color_eyre` for context-rich reports.

pub mod config;
pub mod config_loader;
pub mod generator;
pub mod graph;
pub mod loader;
pub mod report;
pub mod topology;
pub mod utils;
