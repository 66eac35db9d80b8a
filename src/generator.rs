//! Synthetic network generation.
//!
//! Two models are available:
//!
//! - `random`: Erdős–Rényi G(n, p), each vertex pair joined independently
//!   with probability `p`
//! - `scale-free`: Barabási–Albert preferential attachment, growing from a
//!   clique of `m + 1` vertices with `m` edges per new vertex
//!
//! Vertices are numbered `1..=n`; edge weights are uniform integers in
//! `[min_weight, max_weight]`.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{GraphError, VertexId, WeightedGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GeneratorModel {
    /// Erdős–Rényi random graph
    Random,
    /// Barabási–Albert preferential attachment
    ScaleFree,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorParams {
    pub model: GeneratorModel,
    pub vertices: u32,
    /// Edge probability for the random model
    pub probability: f64,
    /// Edges attached per new vertex for the scale-free model
    pub edges_per_vertex: u32,
    pub min_weight: u32,
    pub max_weight: u32,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            model: GeneratorModel::Random,
            vertices: 100,
            probability: 0.05,
            edges_per_vertex: 2,
            min_weight: 1,
            max_weight: 10,
            seed: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Graph must have at least one vertex")]
    NoVertices,

    #[error("Edge probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("Edges per vertex must be between 1 and {vertices} - 1, got {edges_per_vertex}")]
    InvalidEdgesPerVertex { edges_per_vertex: u32, vertices: u32 },

    #[error("Minimum weight {min} exceeds maximum weight {max}")]
    InvalidWeightRange { min: u32, max: u32 },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl GeneratorParams {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.vertices == 0 {
            return Err(GeneratorError::NoVertices);
        }
        if self.min_weight > self.max_weight {
            return Err(GeneratorError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        match self.model {
            GeneratorModel::Random => {
                if !(0.0..=1.0).contains(&self.probability) {
                    return Err(GeneratorError::InvalidProbability(self.probability));
                }
            }
            GeneratorModel::ScaleFree => {
                if self.edges_per_vertex == 0 || self.edges_per_vertex >= self.vertices {
                    return Err(GeneratorError::InvalidEdgesPerVertex {
                        edges_per_vertex: self.edges_per_vertex,
                        vertices: self.vertices,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Generate a graph according to `params`.
pub fn generate(params: &GeneratorParams) -> Result<WeightedGraph, GeneratorError> {
    params.validate()?;

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut graph = WeightedGraph::with_vertices(1..=VertexId::from(params.vertices))?;
    match params.model {
        GeneratorModel::Random => random_edges(&mut graph, params, &mut rng)?,
        GeneratorModel::ScaleFree => preferential_attachment(&mut graph, params, &mut rng)?,
    }

    info!(
        "Generated {:?} graph: {} vertices, {} edges",
        params.model,
        graph.vertices_count(),
        graph.edges_count()
    );
    Ok(graph)
}

fn weight(params: &GeneratorParams, rng: &mut StdRng) -> f64 {
    rng.gen_range(params.min_weight..=params.max_weight) as f64
}

fn random_edges(
    graph: &mut WeightedGraph,
    params: &GeneratorParams,
    rng: &mut StdRng,
) -> Result<(), GeneratorError> {
    let n = VertexId::from(params.vertices);
    for src in 1..=n {
        for dest in (src + 1)..=n {
            if rng.gen_bool(params.probability) {
                let w = weight(params, rng);
                graph.add_edge(src, dest, w)?;
            }
        }
    }
    Ok(())
}

fn preferential_attachment(
    graph: &mut WeightedGraph,
    params: &GeneratorParams,
    rng: &mut StdRng,
) -> Result<(), GeneratorError> {
    let m = params.edges_per_vertex as usize;
    let seed_size = VertexId::from(params.edges_per_vertex) + 1;

    // One entry per edge endpoint, so uniform sampling is degree-proportional.
    let mut endpoints: Vec<VertexId> = Vec::new();

    for src in 1..=seed_size {
        for dest in (src + 1)..=seed_size {
            let w = weight(params, rng);
            graph.add_edge(src, dest, w)?;
            endpoints.push(src);
            endpoints.push(dest);
        }
    }
    debug!("Seeded preferential attachment with a {}-clique", seed_size);

    for v in (seed_size + 1)..=VertexId::from(params.vertices) {
        let mut targets: Vec<VertexId> = Vec::with_capacity(m);
        while targets.len() < m {
            let candidate = endpoints[rng.gen_range(0..endpoints.len())];
            if !targets.contains(&candidate) {
                targets.push(candidate);
            }
        }
        for target in targets {
            let w = weight(params, rng);
            graph.add_edge(v, target, w)?;
            endpoints.push(v);
            endpoints.push(target);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale_free(vertices: u32, m: u32, seed: u64) -> GeneratorParams {
        GeneratorParams {
            model: GeneratorModel::ScaleFree,
            vertices,
            edges_per_vertex: m,
            seed: Some(seed),
            ..GeneratorParams::default()
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let params = GeneratorParams {
            vertices: 30,
            probability: 0.2,
            seed: Some(7),
            ..GeneratorParams::default()
        };
        let a = generate(&params).unwrap();
        let b = generate(&params).unwrap();
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_random_extremes() {
        let mut params = GeneratorParams {
            vertices: 6,
            probability: 0.0,
            seed: Some(1),
            ..GeneratorParams::default()
        };
        assert_eq!(generate(&params).unwrap().edges_count(), 0);

        params.probability = 1.0;
        let complete = generate(&params).unwrap();
        assert_eq!(complete.edges_count(), 15);
        assert_eq!(complete.vertices(), (1..=6).collect::<Vec<VertexId>>());
    }

    #[test]
    fn test_scale_free_edge_count_and_clique() {
        let graph = generate(&scale_free(20, 3, 42)).unwrap();
        // 4-clique (6 edges) plus 3 per remaining vertex
        assert_eq!(graph.edges_count(), 6 + 16 * 3);
        for a in 1..=4i64 {
            for b in (a + 1)..=4 {
                assert!(graph.has_edge(&a, &b));
            }
        }
        for v in 5..=20i64 {
            assert!(graph.degree(&v).unwrap() >= 3);
        }
    }

    #[test]
    fn test_weights_within_range() {
        let params = GeneratorParams {
            vertices: 15,
            probability: 0.5,
            min_weight: 3,
            max_weight: 4,
            seed: Some(9),
            ..GeneratorParams::default()
        };
        let graph = generate(&params).unwrap();
        assert!(graph.edges().iter().all(|(_, _, w)| *w == 3.0 || *w == 4.0));
    }

    #[test]
    fn test_invalid_parameters() {
        let mut params = GeneratorParams { vertices: 0, ..GeneratorParams::default() };
        assert!(matches!(generate(&params), Err(GeneratorError::NoVertices)));

        params.vertices = 5;
        params.probability = 1.5;
        assert!(matches!(generate(&params), Err(GeneratorError::InvalidProbability(_))));

        params.probability = 0.5;
        params.min_weight = 5;
        params.max_weight = 2;
        assert!(matches!(generate(&params), Err(GeneratorError::InvalidWeightRange { .. })));

        assert!(matches!(
            generate(&scale_free(5, 5, 1)),
            Err(GeneratorError::InvalidEdgesPerVertex { .. })
        ));
        assert!(matches!(
            generate(&scale_free(5, 0, 1)),
            Err(GeneratorError::InvalidEdgesPerVertex { .. })
        ));
    }
}
