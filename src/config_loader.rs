use crate::config::{AnalysisConfig, GraphSource};
use crate::topology::{Property, UnreachablePolicy};
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use log::{debug, info};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<AnalysisConfig> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .with_context(|| format!("Failed to open configuration {}", config_path.display()))?;

    let config: AnalysisConfig = serde_yaml::from_reader(file)
        .with_context(|| format!("Failed to parse configuration {}", config_path.display()))?;

    debug!("Graph source: {}", config.graph.describe());

    config.validate()?;

    Ok(config)
}

/// Command-line values that take precedence over the YAML settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub graph: Option<GraphSource>,
    /// Replaces the configured property list when non-empty
    pub properties: Vec<Property>,
    pub precision: Option<usize>,
    pub unreachable: Option<UnreachablePolicy>,
    pub threads: Option<usize>,
    pub output_directory: Option<PathBuf>,
}

/// Apply CLI overrides to a loaded configuration
pub fn apply_cli_overrides(config: &mut AnalysisConfig, overrides: &CliOverrides) -> Result<()> {
    if let Some(graph) = &overrides.graph {
        info!("Graph source overridden: {}", graph.describe());
        config.graph = graph.clone();
    }

    if !overrides.properties.is_empty() {
        config.analysis.properties = overrides.properties.clone();
    }

    if let Some(precision) = overrides.precision {
        config.analysis.precision = precision;
    }

    if let Some(unreachable) = overrides.unreachable {
        config.analysis.unreachable = unreachable;
    }

    if let Some(threads) = overrides.threads {
        config.analysis.threads = threads;
    }

    if let Some(directory) = &overrides.output_directory {
        config.output.directory = Some(directory.clone());
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}

/// Build the effective configuration from an optional YAML file and the
/// command line. Without a file the graph source must come from the CLI.
pub fn resolve_config(config_path: Option<&Path>, overrides: &CliOverrides) -> Result<AnalysisConfig> {
    let mut config = match (config_path, &overrides.graph) {
        (Some(path), _) => load_config(path)?,
        (None, Some(graph)) => AnalysisConfig::for_source(graph.clone()),
        (None, None) => {
            return Err(eyre!(
                "No graph given: pass --config, --nodes with --edges, or --gml"
            ))
        }
    };

    apply_cli_overrides(&mut config, overrides)?;

    Ok(config)
}
