#[cfg(test)]
mod topology_tests {
    use nettopo::generator::{generate, GeneratorModel, GeneratorParams};
    use nettopo::graph::{shortest_distances, GraphError, ShortestPathEngine, WeightedGraph};
    use nettopo::topology::{
        analyze, characteristic_path_length, clustering_coefficient, degree_distribution,
        degree_histogram, strength_distribution, AnalysisOptions, PathLength, UnreachablePolicy,
    };

    const EPS: f64 = 1e-9;

    /// Triangle 1-2-3 with weights (1,2)=1, (2,3)=1, (1,3)=2
    fn weighted_triangle() -> WeightedGraph {
        let mut graph = WeightedGraph::with_vertices([1, 2, 3]).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        graph.add_edge(1, 3, 2.0).unwrap();
        graph
    }

    #[test]
    fn test_end_to_end_triangle() {
        let graph = weighted_triangle();
        let report = analyze(&graph, &AnalysisOptions::default()).unwrap();

        let degree = report.degree.unwrap();
        assert!(degree.per_vertex.iter().all(|(_, k)| *k == 2));

        let strength = strength_distribution(&graph).unwrap();
        assert_eq!(strength.per_vertex[0], (1, 3.0));

        let clustering = report.clustering.unwrap();
        assert!((clustering.per_vertex[0].1 - 1.0).abs() < EPS);
        assert!((clustering.average.unwrap() - 1.0).abs() < EPS);

        match report.path_length.unwrap().length {
            PathLength::Finite(l) => assert!((l - 8.0 / 6.0).abs() < EPS),
            other => panic!("unexpected path length {:?}", other),
        }

        assert_eq!(report.scale_free.unwrap().get(&2), Some(&3));
    }

    #[test]
    fn test_path_graph_distances() {
        let mut graph = WeightedGraph::with_vertices([1, 2, 3, 4]).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        graph.add_edge(3, 4, 5.0).unwrap();

        let distances = shortest_distances(&graph, &1).unwrap();
        assert_eq!(distances[&4], Some(7.0));

        let engine = ShortestPathEngine::new(&graph);
        let paths = engine.shortest_distances(&4).unwrap();
        assert_eq!(paths.path_to(&1), Some(vec![4, 3, 2, 1]));
    }

    #[test]
    fn test_distances_are_symmetric() {
        let params = GeneratorParams {
            model: GeneratorModel::Random,
            vertices: 25,
            probability: 0.15,
            seed: Some(11),
            ..GeneratorParams::default()
        };
        let graph = generate(&params).unwrap();
        let engine = ShortestPathEngine::new(&graph);

        for a in graph.vertices() {
            let from_a = engine.shortest_distances(&a).unwrap();
            for b in graph.vertices() {
                let from_b = engine.shortest_distances(&b).unwrap();
                match (from_a.distance(&b), from_b.distance(&a)) {
                    (Some(x), Some(y)) => assert!((x - y).abs() < EPS),
                    (None, None) => {}
                    other => panic!("asymmetric reachability {:?} between {} and {}", other, a, b),
                }
            }
        }
    }

    #[test]
    fn test_distribution_properties_on_generated_graph() {
        let params = GeneratorParams {
            model: GeneratorModel::ScaleFree,
            vertices: 60,
            edges_per_vertex: 2,
            seed: Some(5),
            ..GeneratorParams::default()
        };
        let graph = generate(&params).unwrap();

        let degree = degree_distribution(&graph).unwrap();
        assert!((degree.histogram.probability_sum() - 1.0).abs() < EPS);
        let degree_sum: usize = degree.per_vertex.iter().map(|(_, k)| k).sum();
        assert_eq!(degree_sum, 2 * graph.edges_count());

        let strength = strength_distribution(&graph).unwrap();
        assert!((strength.histogram.probability_sum() - 1.0).abs() < EPS);

        let histogram = degree_histogram(&graph).unwrap();
        assert_eq!(histogram.values().sum::<usize>(), graph.vertices_count());

        let clustering = clustering_coefficient(&graph).unwrap();
        assert!(clustering.per_vertex.iter().all(|(_, c)| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn test_disconnected_graph_policies() {
        let mut graph = WeightedGraph::with_vertices([1, 2, 3, 4]).unwrap();
        graph.add_edge(1, 2, 2.0).unwrap();
        graph.add_edge(3, 4, 4.0).unwrap();

        let excluded = characteristic_path_length(&graph, UnreachablePolicy::Exclude).unwrap();
        assert_eq!(excluded.length, PathLength::Finite(3.0));
        assert_eq!(excluded.reachable_pairs, 4);
        assert_eq!(excluded.unreachable_pairs, 8);

        let infinite = characteristic_path_length(&graph, UnreachablePolicy::Infinite).unwrap();
        assert_eq!(infinite.length, PathLength::Infinite);
    }

    #[test]
    fn test_empty_graph() {
        let graph: WeightedGraph = WeightedGraph::new();
        let report = analyze(&graph, &AnalysisOptions::default()).unwrap();
        assert_eq!(report.degree.unwrap().average, None);
        assert_eq!(report.clustering.unwrap().average, None);
        assert_eq!(report.path_length.unwrap().length, PathLength::Undefined);
    }

    #[test]
    fn test_unknown_source() {
        let graph = weighted_triangle();
        assert_eq!(
            shortest_distances(&graph, &9).unwrap_err(),
            GraphError::UnknownVertex { vertex: "9".to_string() }
        );
    }
}
