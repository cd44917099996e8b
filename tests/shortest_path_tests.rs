use flight_network::algorithm::ShortestPathAlgorithm;
use flight_network::{
    path_to_token_string, reconstruct_path, Dijkstra, Distance, EngineConfig, Error, FrontierKind,
    NetworkGraph,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

// Direct ABC-GHI is not the shortest, direct ABC-JKL is
fn dijkstra_graph(frontier: FrontierKind) -> NetworkGraph {
    let mut graph = NetworkGraph::with_config(EngineConfig::with_frontier(frontier));
    graph.add_connection("ABC", "DEF", 20.0);
    graph.add_connection("DEF", "GHI", 20.0);
    graph.add_connection("GHI", "JKL", 20.0);
    graph.add_connection("ABC", "GHI", 50.0);
    graph.add_connection("ABC", "JKL", 50.0);
    graph
}

fn triangle() -> NetworkGraph {
    let mut graph = NetworkGraph::new();
    graph.add_connection("A", "B", 20.0);
    graph.add_connection("B", "C", 20.0);
    graph.add_connection("A", "C", 50.0);
    graph
}

const FRONTIERS: [FrontierKind; 2] = [FrontierKind::LinearScan, FrontierKind::BinaryHeap];

#[test]
fn test_triangle_distances_and_predecessors() {
    for frontier in FRONTIERS {
        let graph = triangle();
        let result = Dijkstra::with_frontier(frontier)
            .compute_shortest_paths(&graph, "A")
            .unwrap();

        let expected: BTreeMap<String, Distance> = [
            ("A".to_string(), Distance::finite(0.0)),
            ("B".to_string(), Distance::finite(20.0)),
            ("C".to_string(), Distance::finite(40.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(result.distances, expected);

        let expected_prev: BTreeMap<String, String> = [
            ("B".to_string(), "A".to_string()),
            ("C".to_string(), "B".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(result.predecessors, expected_prev);
        assert_eq!(result.predecessor_of("A"), None);

        let path = reconstruct_path("A", "C", &result.predecessors).unwrap();
        assert_eq!(path, vec!["A", "B", "C"]);
        assert_eq!(path_to_token_string(&path), "A-B,+B-C");
    }
}

#[test]
fn test_correct_dijkstra() {
    for frontier in FRONTIERS {
        let graph = dijkstra_graph(frontier);
        let result = graph.shortest_paths_from("ABC").unwrap();

        assert_eq!(result.distance_to("ABC"), Distance::finite(0.0));
        assert_eq!(result.distance_to("DEF"), Distance::finite(20.0));
        assert_eq!(result.distance_to("GHI"), Distance::finite(40.0));
        assert_eq!(result.predecessor_of("DEF"), Some("ABC"));
        assert_eq!(result.predecessor_of("GHI"), Some("DEF"));

        // A purely greedy walk would go ABC-DEF-GHI-JKL
        assert_eq!(result.distance_to("JKL"), Distance::finite(50.0));
        assert_eq!(result.predecessor_of("JKL"), Some("ABC"));
    }
}

#[test]
fn test_dijkstra_path_nodes_and_urls() {
    let graph = dijkstra_graph(FrontierKind::default());

    assert_eq!(graph.shortest_path("ABC", "ABC").unwrap(), vec!["ABC"]);
    assert_eq!(graph.shortest_path("ABC", "DEF").unwrap(), vec!["ABC", "DEF"]);
    assert_eq!(graph.shortest_path("ABC", "GHI").unwrap(), vec!["ABC", "DEF", "GHI"]);
    assert_eq!(graph.shortest_path("ABC", "JKL").unwrap(), vec!["ABC", "JKL"]);

    assert_eq!(graph.shortest_path_url("ABC", "ABC").unwrap(), "");
    assert_eq!(graph.shortest_path_url("ABC", "DEF").unwrap(), "ABC-DEF");
    assert_eq!(graph.shortest_path_url("ABC", "GHI").unwrap(), "ABC-DEF,+DEF-GHI");
    assert_eq!(graph.shortest_path_url("ABC", "JKL").unwrap(), "ABC-JKL");
}

#[test]
fn test_path_tokens_keep_direction() {
    let graph = dijkstra_graph(FrontierKind::default());
    assert_eq!(graph.shortest_path_url("GHI", "ABC").unwrap(), "GHI-DEF,+DEF-ABC");
    assert_eq!(path_to_token_string::<&str>(&[]), "");
}

#[test]
fn test_one_way_routes_are_respected() {
    let mut graph = NetworkGraph::new();
    graph.add_route("SCL", "LIM", 2453.0);
    graph.add_route("LIM", "BOG", 1879.0);

    assert_eq!(graph.shortest_path("SCL", "BOG").unwrap(), vec!["SCL", "LIM", "BOG"]);
    assert!(matches!(
        graph.shortest_path("BOG", "SCL"),
        Err(Error::NoPath { .. })
    ));
}

#[test]
fn test_disconnected_airport_stays_unreachable() {
    for frontier in FRONTIERS {
        let mut graph = dijkstra_graph(frontier);
        graph.add_node("XYZ");

        let result = graph.shortest_paths_from("ABC").unwrap();
        assert_eq!(result.distances.len(), 5);
        assert_eq!(result.distance_to("XYZ"), Distance::Unreachable);
        assert!(!result.is_reachable("XYZ"));
        assert!(result.path_to("XYZ").is_none());
        assert_eq!(result.reachable_count(), 4);

        match graph.shortest_path("ABC", "XYZ") {
            Err(Error::NoPath { from, to }) => {
                assert_eq!(from, "ABC");
                assert_eq!(to, "XYZ");
            }
            other => panic!("expected NoPath, got {:?}", other),
        }
    }
}

#[test]
fn test_unknown_airports_are_errors() {
    let graph = dijkstra_graph(FrontierKind::default());

    assert!(matches!(
        graph.shortest_paths_from("NYC"),
        Err(Error::UnknownNode(code)) if code == "NYC"
    ));
    assert!(matches!(
        graph.shortest_path("NYC", "ABC"),
        Err(Error::UnknownNode(_))
    ));
    assert!(matches!(
        graph.shortest_path("ABC", "NYC"),
        Err(Error::UnknownNode(code)) if code == "NYC"
    ));
}

#[test]
fn test_reconstruct_path_on_broken_chain() {
    let mut prev = BTreeMap::new();
    prev.insert("C".to_string(), "B".to_string());
    // B has no predecessor and is not the source
    assert!(reconstruct_path("A", "C", &prev).is_none());

    prev.insert("B".to_string(), "C".to_string());
    assert!(reconstruct_path("A", "C", &prev).is_none());

    assert_eq!(reconstruct_path("A", "A", &prev), Some(vec!["A".to_string()]));
}

#[test]
fn test_frontiers_agree_on_random_networks() {
    let codes: Vec<String> = (0..12).map(|i| format!("P{:02}", i)).collect();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut linear =
            NetworkGraph::with_config(EngineConfig::with_frontier(FrontierKind::LinearScan));
        let mut heap =
            NetworkGraph::with_config(EngineConfig::with_frontier(FrontierKind::BinaryHeap));

        for code in &codes {
            linear.add_node(code);
            heap.add_node(code);
        }
        for _ in 0..30 {
            let from = &codes[rng.gen_range(0..codes.len())];
            let to = &codes[rng.gen_range(0..codes.len())];
            // Small integer weights force plenty of ties
            let distance = rng.gen_range(0..5) as f64;
            linear.add_route(from, to, distance);
            heap.add_route(from, to, distance);
        }

        for source in &codes {
            let a = linear.shortest_paths_from(source).unwrap();
            let b = heap.shortest_paths_from(source).unwrap();
            assert_eq!(a, b, "seed {} source {}", seed, source);

            // Every reached airport's distance is its predecessor's plus the route
            for (node, prev) in &a.predecessors {
                let via = a.distance_to(prev) + linear.get_route(prev, node).distance().unwrap();
                assert_eq!(a.distance_to(node), via);
            }
        }
    }
}

#[test]
fn test_shortest_path_table() {
    let graph = dijkstra_graph(FrontierKind::default());
    let table = graph.evaluate_all_shortest_paths().unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table.sources().collect::<Vec<_>>(), vec!["ABC", "DEF", "GHI", "JKL"]);
    assert_eq!(table.distance("ABC", "GHI"), Some(Distance::finite(40.0)));
    assert_eq!(table.distance("NYC", "GHI"), None);
    assert_eq!(table.shortest_path("JKL", "DEF").unwrap(), vec!["JKL", "GHI", "DEF"]);
    assert_eq!(table.shortest_path_url("ABC", "GHI").unwrap(), "ABC-DEF,+DEF-GHI");
    assert!(matches!(table.shortest_path("ABC", "NYC"), Err(Error::UnknownNode(_))));

    let direct = Dijkstra::new().compute_shortest_paths(&graph, "GHI").unwrap();
    assert_eq!(table.get("GHI"), Some(&direct));
}
