#[cfg(test)]
mod loader_tests {
    use std::fs;

    use nettopo::config::GraphSource;
    use nettopo::config_loader::{resolve_config, CliOverrides};
    use nettopo::loader::{load_graph, LoadError};
    use nettopo::report::{render_text_report, write_json_report, FullTopologyReport};
    use nettopo::topology::{analyze, Property};
    use tempfile::tempdir;

    #[test]
    fn test_config_driven_analysis() {
        let dir = tempdir().unwrap();
        let nodes = dir.path().join("GraphNodes.txt");
        let edges = dir.path().join("GraphEdges.txt");
        fs::write(&nodes, "# vertices\n1\n2\n3\n4\n").unwrap();
        fs::write(&edges, "1 2 1\n2 3 1\n1 3 2\n3 4\n").unwrap();

        let config_path = dir.path().join("analysis.yaml");
        fs::write(
            &config_path,
            format!(
                "graph:\n  nodes: {}\n  edges: {}\nanalysis:\n  properties: [degree, clustering]\n",
                nodes.display(),
                edges.display()
            ),
        )
        .unwrap();

        let config = resolve_config(Some(config_path.as_path()), &CliOverrides::default()).unwrap();
        let graph = load_graph(&config.graph).unwrap();
        assert_eq!(graph.vertices_count(), 4);
        assert_eq!(graph.edges_count(), 4);
        assert_eq!(graph.edge_weight(&3, &4).unwrap(), 0.0);

        let topology = analyze(&graph, &config.analysis.options()).unwrap();
        assert!(topology.path_length.is_none());
        let clustering = topology.clustering.as_ref().unwrap();
        // Vertex 3 has neighbours 1, 2, 4 and one link among them.
        let c3 = clustering.per_vertex.iter().find(|(v, _)| *v == 3).unwrap().1;
        assert!((c3 - 1.0 / 3.0).abs() < 1e-9);

        let report = FullTopologyReport::new(config.graph.describe(), topology);
        let text = render_text_report(&report, 2);
        assert!(text.contains("Clustering coefficient of node 3: 0.33"));

        let json_path = dir.path().join("topology_report.json");
        write_json_report(&report, &json_path).unwrap();
        assert!(fs::read_to_string(&json_path).unwrap().contains("\"clustering\""));
    }

    #[test]
    fn test_cli_source_with_gml() {
        let dir = tempdir().unwrap();
        let gml = dir.path().join("net.gml");
        fs::write(
            &gml,
            "graph [\n  node [ id 10 ]\n  node [ id 20 ]\n  edge [ source 10 target 20 weight 1.5 ]\n]\n",
        )
        .unwrap();

        let overrides = CliOverrides {
            graph: Some(GraphSource::Gml { gml }),
            properties: vec![Property::Strength],
            ..CliOverrides::default()
        };
        let config = resolve_config(None, &overrides).unwrap();
        let graph = load_graph(&config.graph).unwrap();
        assert_eq!(graph.strength(&10).unwrap(), 1.5);
    }

    #[test]
    fn test_missing_files_report_path() {
        let dir = tempdir().unwrap();
        let source = GraphSource::Text {
            nodes: dir.path().join("absent_nodes.txt"),
            edges: dir.path().join("absent_edges.txt"),
        };
        match load_graph(&source) {
            Err(LoadError::Io { path, .. }) => assert!(path.ends_with("absent_nodes.txt")),
            other => panic!("unexpected result: {:?}", other.map(|g| g.vertices_count())),
        }
    }
}
