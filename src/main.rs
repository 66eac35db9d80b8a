use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;

use nettopo::config::{AnalysisConfig, GraphSource};
use nettopo::config_loader::{self, CliOverrides};
use nettopo::generator::{self, GeneratorModel, GeneratorParams};
use nettopo::loader;
use nettopo::report::{self, FullTopologyReport};
use nettopo::topology::{self, Property, UnreachablePolicy};

/// Topology analysis for weighted undirected networks
#[derive(Parser, Debug)]
#[command(name = "nettopo", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Number of parallel workers (0 = auto-detect)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,
}

/// Graph input given directly on the command line
#[derive(Args, Debug)]
struct GraphArgs {
    /// Vertex file, one id per line
    #[arg(long, requires = "edges", conflicts_with = "gml")]
    nodes: Option<PathBuf>,

    /// Edge file, `src dest [weight]` per line
    #[arg(long, requires = "nodes")]
    edges: Option<PathBuf>,

    /// GML graph file
    #[arg(long)]
    gml: Option<PathBuf>,
}

impl GraphArgs {
    fn source(&self) -> Option<GraphSource> {
        match (&self.nodes, &self.edges, &self.gml) {
            (Some(nodes), Some(edges), _) => Some(GraphSource::Text {
                nodes: nodes.clone(),
                edges: edges.clone(),
            }),
            (_, _, Some(gml)) => Some(GraphSource::Gml { gml: gml.clone() }),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute topology properties and write reports
    Analyze {
        /// Analysis configuration YAML file
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        graph: GraphArgs,

        /// Property to compute (repeatable; default all)
        #[arg(short, long = "property", value_enum)]
        properties: Vec<Property>,

        /// Decimal places in reports
        #[arg(long)]
        precision: Option<usize>,

        /// Treatment of vertex pairs without a connecting path
        #[arg(long, value_enum)]
        unreachable: Option<UnreachablePolicy>,

        /// Output directory for JSON and text reports
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not print the degree histogram chart
        #[arg(long)]
        no_chart: bool,
    },

    /// Print the adjacency list of a graph
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Generate a synthetic network as a vertex/edge file pair
    Generate {
        #[arg(long, value_enum, default_value = "random")]
        model: GeneratorModel,

        /// Number of vertices
        #[arg(short = 'n', long)]
        vertices: u32,

        /// Edge probability (random model)
        #[arg(long, default_value = "0.05")]
        probability: f64,

        /// Edges per new vertex (scale-free model)
        #[arg(short = 'm', long, default_value = "2")]
        edges_per_vertex: u32,

        #[arg(long, default_value = "1")]
        min_weight: u32,

        #[arg(long, default_value = "10")]
        max_weight: u32,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Vertex file to write
        #[arg(long)]
        nodes_out: PathBuf,

        /// Edge file to write
        #[arg(long)]
        edges_out: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    match cli.command {
        Commands::Analyze {
            config,
            graph,
            properties,
            precision,
            unreachable,
            output,
            no_chart,
        } => {
            let overrides = CliOverrides {
                graph: graph.source(),
                properties,
                precision,
                unreachable,
                threads: cli.threads,
                output_directory: output,
            };
            let mut config = config_loader::resolve_config(config.as_deref(), &overrides)?;
            if no_chart {
                config.output.chart = false;
            }
            run_analysis(&config)
        }
        Commands::Show { graph } => {
            let source = graph
                .source()
                .ok_or_else(|| eyre!("No graph given: pass --nodes with --edges, or --gml"))?;
            let graph = loader::load_graph(&source)?;
            print!("{}", graph);
            println!("Vertices: {}", graph.vertices_count());
            println!("Edges: {}", graph.edges_count());
            Ok(())
        }
        Commands::Generate {
            model,
            vertices,
            probability,
            edges_per_vertex,
            min_weight,
            max_weight,
            seed,
            nodes_out,
            edges_out,
        } => {
            let params = GeneratorParams {
                model,
                vertices,
                probability,
                edges_per_vertex,
                min_weight,
                max_weight,
                seed,
            };
            let graph = generator::generate(&params)?;
            loader::write_text_graph(&graph, &nodes_out, &edges_out)?;
            info!(
                "Wrote {} vertices to {:?} and {} edges to {:?}",
                graph.vertices_count(),
                nodes_out,
                graph.edges_count(),
                edges_out
            );
            Ok(())
        }
    }
}

fn run_analysis(config: &AnalysisConfig) -> Result<()> {
    // Set thread pool size
    if config.analysis.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.analysis.threads)
            .build_global()
            .wrap_err("Failed to configure thread pool")?;
    }

    let graph = loader::load_graph(&config.graph)?;
    let topology = topology::analyze(&graph, &config.analysis.options())
        .wrap_err_with(|| format!("Analysis of {} failed", config.graph.describe()))?;
    let report = FullTopologyReport::new(config.graph.describe(), topology);
    let precision = config.analysis.precision;

    report::print_summary(&report, precision);

    if config.output.chart {
        if let Some(ref histogram) = report.topology.scale_free {
            println!(
                "{}",
                report::render_histogram_chart(histogram, "Degree histogram", "Degree", "Number of nodes")
            );
        }
    }

    if let Some(ref output_dir) = config.output.directory {
        fs::create_dir_all(output_dir)
            .wrap_err_with(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

        if config.output.json {
            report::write_json_report(&report, &output_dir.join("topology_report.json"))?;
        }
        if config.output.text {
            report::write_text_report(&report, &output_dir.join("topology_report.txt"), precision)?;
        }
    }

    info!("Analysis completed successfully");
    Ok(())
}
