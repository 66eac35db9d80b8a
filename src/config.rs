//! Analysis configuration.
//!
//! A YAML file describes which graph to load, which properties to compute
//! and where reports go:
//!
//! ```yaml
//! graph:
//!   nodes: resources/GraphNodes1.txt
//!   edges: resources/GraphEdges1.txt
//!   # or: gml: resources/network.gml
//! analysis:
//!   properties: [degree, strength, clustering, path-length, scale-free]
//!   precision: 2
//!   unreachable: exclude   # or: infinite
//!   threads: 0             # 0 = one per core
//! output:
//!   directory: topology_output
//!   json: true
//!   text: true
//!   chart: true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::topology::{AnalysisOptions, Property, UnreachablePolicy};

/// Largest accepted display precision (decimal places)
pub const MAX_PRECISION: usize = 10;

/// Top-level configuration structure that mirrors the YAML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub graph: GraphSource,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Where the graph comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphSource {
    /// Vertex file plus edge file
    Text { nodes: PathBuf, edges: PathBuf },
    /// Single GML document
    Gml { gml: PathBuf },
}

impl GraphSource {
    pub fn describe(&self) -> String {
        match self {
            GraphSource::Text { nodes, edges } => {
                format!("{} + {}", nodes.display(), edges.display())
            }
            GraphSource::Gml { gml } => gml.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_properties")]
    pub properties: Vec<Property>,
    /// Decimal places used when displaying values
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub unreachable: UnreachablePolicy,
    /// Worker threads for path length computation (0 = auto-detect)
    #[serde(default)]
    pub threads: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            properties: default_properties(),
            precision: default_precision(),
            unreachable: UnreachablePolicy::default(),
            threads: 0,
        }
    }
}

impl AnalysisSettings {
    /// Options for [`crate::topology::analyze`], with repeated properties
    /// collapsed.
    pub fn options(&self) -> AnalysisOptions {
        let mut properties: Vec<Property> = Vec::with_capacity(self.properties.len());
        for property in &self.properties {
            if !properties.contains(property) {
                properties.push(*property);
            }
        }
        AnalysisOptions {
            properties,
            unreachable: self.unreachable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory for report files; nothing is written when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub json: bool,
    #[serde(default = "default_true")]
    pub text: bool,
    /// Print the degree histogram chart
    #[serde(default = "default_true")]
    pub chart: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: None,
            json: true,
            text: true,
            chart: true,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid graph configuration: {0}")]
    InvalidGraph(String),
    #[error("Invalid analysis configuration: {0}")]
    InvalidAnalysis(String),
    #[error("Invalid output configuration: {0}")]
    InvalidOutput(String),
}

impl AnalysisConfig {
    /// Configuration for `source` with default settings.
    pub fn for_source(source: GraphSource) -> Self {
        Self {
            graph: source,
            analysis: AnalysisSettings::default(),
            output: OutputSettings::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.graph {
            GraphSource::Text { nodes, edges } => {
                if is_blank(nodes) || is_blank(edges) {
                    return Err(ValidationError::InvalidGraph(
                        "both 'nodes' and 'edges' paths must be set".to_string(),
                    ));
                }
            }
            GraphSource::Gml { gml } => {
                if is_blank(gml) {
                    return Err(ValidationError::InvalidGraph("GML path cannot be empty".to_string()));
                }
            }
        }

        if self.analysis.properties.is_empty() {
            return Err(ValidationError::InvalidAnalysis(
                "at least one property must be selected".to_string(),
            ));
        }
        if self.analysis.precision > MAX_PRECISION {
            return Err(ValidationError::InvalidAnalysis(format!(
                "precision {} exceeds the maximum of {}",
                self.analysis.precision, MAX_PRECISION
            )));
        }

        if let Some(directory) = &self.output.directory {
            if is_blank(directory) {
                return Err(ValidationError::InvalidOutput(
                    "output directory cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

fn default_properties() -> Vec<Property> {
    Property::ALL.to_vec()
}

fn default_precision() -> usize {
    2
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_source_with_defaults() {
        let yaml = r#"
graph:
  nodes: GraphNodes1.txt
  edges: GraphEdges1.txt
"#;
        let config: AnalysisConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(config.graph, GraphSource::Text { .. }));
        assert_eq!(config.analysis, AnalysisSettings::default());
        assert_eq!(config.output, OutputSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
graph:
  gml: network.gml
analysis:
  properties: [clustering, path-length, clustering]
  precision: 4
  unreachable: infinite
  threads: 2
output:
  directory: out
  json: false
"#;
        let config: AnalysisConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.graph, GraphSource::Gml { gml: PathBuf::from("network.gml") });
        assert_eq!(config.analysis.precision, 4);
        assert_eq!(config.analysis.unreachable, UnreachablePolicy::Infinite);
        assert!(!config.output.json);
        assert!(config.output.text);

        let options = config.analysis.options();
        assert_eq!(options.properties, vec![Property::Clustering, Property::PathLength]);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = AnalysisConfig::for_source(GraphSource::Gml { gml: PathBuf::new() });
        assert!(matches!(config.validate(), Err(ValidationError::InvalidGraph(_))));

        config.graph = GraphSource::Gml { gml: PathBuf::from("g.gml") };
        config.analysis.precision = MAX_PRECISION + 1;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidAnalysis(_))));

        config.analysis.precision = 2;
        config.analysis.properties.clear();
        assert!(matches!(config.validate(), Err(ValidationError::InvalidAnalysis(_))));

        config.analysis.properties = vec![Property::Degree];
        config.output.directory = Some(PathBuf::new());
        assert!(matches!(config.validate(), Err(ValidationError::InvalidOutput(_))));
    }

    #[test]
    fn test_unknown_property_is_rejected() {
        let yaml = r#"
graph:
  gml: g.gml
analysis:
  properties: [diameter]
"#;
        assert!(serde_yaml::from_str::<AnalysisConfig>(yaml).is_err());
    }
}
