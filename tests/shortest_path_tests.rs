use sssp_suite::algorithm::dial::{BucketSizing, Dial};
use sssp_suite::algorithm::dijkstra::Dijkstra;
use sssp_suite::algorithm::pape::Pape;
use sssp_suite::algorithm::spfa::Spfa;
use sssp_suite::algorithm::traits::ShortestPathAlgorithm;
use sssp_suite::graph::generators::{grid_graph, random_dag, random_graph};
use sssp_suite::graph::{AdjacencyList, Arc, Graph, GraphBuilder};
use sssp_suite::{Algorithm, Error};

fn arcs(list: &[(usize, usize, i64)]) -> Vec<Arc<i64>> {
    list.iter().map(|&(from, to, length)| Arc::new(from, to, length)).collect()
}

// Four nodes with a cheaper detour 1 -> 3 -> 2 -> 4
fn diamond(node_count: usize) -> GraphBuilder<i64> {
    let mut builder = GraphBuilder::new(node_count);
    builder
        .add_arc(1, 2, 4)
        .add_arc(1, 3, 1)
        .add_arc(3, 2, 1)
        .add_arc(2, 4, 1)
        .add_arc(3, 4, 5);
    builder
}

#[test]
fn test_diamond_distances_all_engines() {
    let graph = diamond(4).build().unwrap();

    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph, 1).unwrap();
        assert_eq!(result.distance(1), Some(0), "{}", algorithm);
        assert_eq!(result.distance(2), Some(2), "{}", algorithm);
        assert_eq!(result.distance(3), Some(1), "{}", algorithm);
        assert_eq!(result.distance(4), Some(3), "{}", algorithm);

        assert_eq!(result.predecessor(1), Some(1));
        assert_eq!(result.predecessor(4), Some(2));
        assert_eq!(result.predecessor(2), Some(3));
        assert_eq!(result.predecessor(3), Some(1));
        assert_eq!(result.path_to(4), Some(vec![1, 3, 2, 4]));
        assert_eq!(result.algorithm(), algorithm.name());
    }
}

#[test]
fn test_slot_zero_is_never_set() {
    let graph = diamond(4).build().unwrap();
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph, 1).unwrap();
        assert_eq!(result.distances().len(), 5);
        assert_eq!(result.predecessors().len(), 5);
        assert_eq!(result.distances()[0], None);
        assert_eq!(result.predecessors()[0], None);
    }
}

#[test]
fn test_disconnected_node_stays_unreached() {
    let graph = diamond(5).build().unwrap();

    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph, 1).unwrap();
        assert_eq!(result.distance(5), None, "{}", algorithm);
        assert_eq!(result.predecessor(5), None, "{}", algorithm);
        assert_eq!(result.path_to(5), None);
        assert_eq!(result.reachable_count(), 4);
    }
}

#[test]
fn test_negative_arc_label_correcting() {
    let mut builder = diamond(4);
    builder.add_arc(2, 4, -10);
    let graph = builder.build().unwrap();
    assert_eq!(graph.arc_length(2, 4), Some(-10));

    for algorithm in [Algorithm::Spfa, Algorithm::Pape] {
        let result = algorithm.run(&graph, 1).unwrap();
        assert_eq!(result.distance(4), Some(-8), "{}", algorithm);
        assert_eq!(result.path_to(4), Some(vec![1, 3, 2, 4]));
        assert_eq!(result.path_cost(&graph, 4), Some(-8));
    }
}

#[test]
fn test_negative_arc_rejected_by_label_setting() {
    let mut builder = diamond(4);
    builder.add_arc(2, 4, -10);
    let graph = builder.build().unwrap();

    for algorithm in [Algorithm::Dijkstra, Algorithm::Dial] {
        match algorithm.run(&graph, 1) {
            Err(Error::NegativeWeight { from, to, length }) => {
                assert_eq!((from, to), (2, 4));
                assert_eq!(length, "-10");
            }
            other => panic!("{} should reject negative arcs, got {:?}", algorithm, other),
        }
    }
}

#[test]
fn test_negative_cycle_detected() {
    let graph =
        AdjacencyList::build(4, arcs(&[(1, 2, 1), (2, 3, -2), (3, 2, 1), (3, 4, 1)])).unwrap();

    assert!(matches!(
        Spfa::new().compute_shortest_paths(&graph, 1),
        Err(Error::NegativeCycle { start: 1, .. })
    ));
    assert!(matches!(
        Pape::new().compute_shortest_paths(&graph, 1),
        Err(Error::NegativeCycle { start: 1, .. })
    ));
}

#[test]
fn test_unreachable_negative_cycle_is_ignored() {
    // The cycle 3 <-> 4 is not reachable from 1
    let graph = AdjacencyList::build(4, arcs(&[(1, 2, 3), (3, 4, -2), (4, 3, 1)])).unwrap();

    let result = Spfa::new().compute_shortest_paths(&graph, 1).unwrap();
    assert_eq!(result.distance(2), Some(3));
    assert_eq!(result.distance(3), None);
}

#[test]
fn test_parallel_arcs_keep_minimum() {
    let graph = AdjacencyList::build(2, arcs(&[(1, 2, 5), (1, 2, 2), (1, 2, 7)])).unwrap();
    assert_eq!(graph.arc_count(), 1);
    assert_eq!(graph.arc_length(1, 2), Some(2));

    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph, 1).unwrap();
        assert_eq!(result.distance(2), Some(2), "{}", algorithm);
    }
}

#[test]
fn test_relaxations_are_counted() {
    let graph = diamond(4).build().unwrap();
    let expected = [
        (Algorithm::Dijkstra, 5),
        (Algorithm::Dial, 5),
        (Algorithm::Spfa, 6),
        (Algorithm::Pape, 6),
    ];
    for (algorithm, count) in expected {
        let result = algorithm.run(&graph, 1).unwrap();
        assert_eq!(result.relaxation_count(), count, "{}", algorithm);
    }

    let single = GraphBuilder::<i64>::new(1).build().unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&single, 1).unwrap();
    assert_eq!(result.relaxation_count(), 0);
    assert_eq!(result.distance(1), Some(0));
}

#[test]
fn test_dijkstra_skips_arcs_into_settled_nodes() {
    // 2 -> 1 points back at the settled source
    let graph = AdjacencyList::build(2, arcs(&[(1, 2, 1), (2, 1, 1)])).unwrap();
    let expected = [
        (Algorithm::Dijkstra, 1),
        (Algorithm::Dial, 2),
        (Algorithm::Spfa, 2),
        (Algorithm::Pape, 2),
    ];
    for (algorithm, count) in expected {
        let result = algorithm.run(&graph, 1).unwrap();
        assert_eq!(result.relaxation_count(), count, "{}", algorithm);
        assert_eq!(result.distance(2), Some(1));
    }
}

// 1 -> 2 is expensive; the cheap route 1 -> 3 -> 5 -> 2 is found only after
// 2 has already propagated its first label down the chain 2 -> 4 -> 6 -> 7
fn late_correction_chain() -> AdjacencyList<i64> {
    AdjacencyList::build(
        7,
        arcs(&[
            (1, 2, 10),
            (1, 3, 1),
            (2, 4, 1),
            (3, 5, 1),
            (5, 2, 1),
            (4, 6, 1),
            (6, 7, 1),
        ]),
    )
    .unwrap()
}

#[test]
fn test_pape_requeues_corrected_nodes_at_front() {
    let graph = late_correction_chain();

    let spfa = Spfa::new().compute_shortest_paths(&graph, 1).unwrap();
    let pape = Pape::new().compute_shortest_paths(&graph, 1).unwrap();
    assert_eq!(spfa.distances(), pape.distances());
    assert_eq!(pape.distance(7), Some(6));
    assert_eq!(pape.path_to(7), Some(vec![1, 3, 5, 2, 4, 6, 7]));

    // FIFO order lets 6 relax its stale label before the correction reaches it
    assert_eq!(spfa.relaxation_count(), 10);
    assert_eq!(pape.relaxation_count(), 9);

    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 1).unwrap();
    assert_eq!(dijkstra.relaxation_count(), 7);
    assert_eq!(dijkstra.distances(), pape.distances());
}

#[test]
fn test_dial_rejects_distances_past_bucket_ceiling() {
    let graph = AdjacencyList::build(2, arcs(&[(1, 2, 1i64 << 42)])).unwrap();

    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 1).unwrap();
    assert_eq!(dijkstra.distance(2), Some(1i64 << 42));

    match Dial::new().compute_shortest_paths(&graph, 1) {
        Err(Error::BucketLimit { key, limit }) => {
            assert_eq!(key, 1usize << 42);
            assert_eq!(limit, 1 << 24);
        }
        other => panic!("expected a bucket limit error, got {:?}", other),
    }

    let small = Dial::new().with_max_buckets(8);
    let graph = diamond(4).build().unwrap();
    assert_eq!(small.compute_shortest_paths(&graph, 1).unwrap().distance(4), Some(3));

    let tiny = Dial::new().with_max_buckets(3);
    assert!(matches!(
        tiny.compute_shortest_paths(&graph, 1),
        Err(Error::BucketLimit { key: 4, limit: 3 })
    ));
}

#[test]
fn test_source_out_of_range() {
    let graph = diamond(4).build().unwrap();
    for algorithm in Algorithm::ALL {
        assert!(matches!(algorithm.run(&graph, 0), Err(Error::SourceNotFound(0))));
        assert!(matches!(algorithm.run(&graph, 5), Err(Error::SourceNotFound(5))));
    }
}

#[test]
fn test_arc_endpoint_out_of_range() {
    let result = AdjacencyList::build(3, arcs(&[(1, 4, 1)]));
    assert!(matches!(
        result,
        Err(Error::InvalidEdge {
            from: 1,
            to: 4,
            node_count: 3
        })
    ));

    let result = AdjacencyList::build(3, arcs(&[(0, 2, 1)]));
    assert!(matches!(result, Err(Error::InvalidEdge { from: 0, .. })));
}

#[test]
fn test_repeated_runs_start_fresh() {
    let graph = diamond(4).build().unwrap();
    let engine = Spfa::new();
    let first = engine.compute_shortest_paths(&graph, 1).unwrap();
    let from_three = engine.compute_shortest_paths(&graph, 3).unwrap();
    let again = engine.compute_shortest_paths(&graph, 1).unwrap();

    assert_eq!(from_three.distance(1), None);
    assert_eq!(from_three.distance(4), Some(2));
    assert_eq!(first.distances(), again.distances());
}

#[test]
fn test_engines_agree_on_random_graphs() {
    for seed in 0..5u64 {
        let graph = random_graph(300, 1500, 50, Some(seed)).unwrap();
        let reference = Dijkstra::new().compute_shortest_paths(&graph, 1).unwrap();
        assert_eq!(reference.reachable_count(), 300);

        for algorithm in Algorithm::ALL {
            let result = algorithm.run(&graph, 1).unwrap();
            assert_eq!(
                result.distances(),
                reference.distances(),
                "{} disagrees with dijkstra (seed {})",
                algorithm,
                seed
            );
        }
    }
}

#[test]
fn test_engines_agree_on_grid() {
    let graph = grid_graph(20, 15, 9, Some(11)).unwrap();
    assert_eq!(graph.node_count(), 300);

    let reference = Algorithm::Dijkstra.run(&graph, 1).unwrap();
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph, 150).unwrap();
        assert_eq!(result.reachable_count(), 300);
        assert_eq!(result.distance(150), Some(0));
    }
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph, 1).unwrap();
        assert_eq!(result.distances(), reference.distances(), "{}", algorithm);
    }
}

#[test]
fn test_path_cost_matches_distance() {
    let graph = random_graph(200, 1000, 20, Some(3)).unwrap();
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph, 1).unwrap();
        for node in graph.nodes() {
            assert_eq!(
                result.path_cost(&graph, node),
                result.distance(node),
                "{} node {}",
                algorithm,
                node
            );
        }
    }
}

#[test]
fn test_label_correcting_agree_on_negative_dag() {
    for seed in 0..5u64 {
        let graph = random_dag(150, 600, -20, 30, Some(seed)).unwrap();
        let spfa = Algorithm::Spfa.run(&graph, 1).unwrap();
        let pape = Algorithm::Pape.run(&graph, 1).unwrap();
        assert_eq!(spfa.distances(), pape.distances(), "seed {}", seed);

        for node in graph.nodes() {
            assert_eq!(spfa.path_cost(&graph, node), spfa.distance(node));
        }
    }
}

#[test]
fn test_dial_grows_past_small_preallocation() {
    let graph = random_graph(200, 800, 100, Some(9)).unwrap();
    let reference = Dijkstra::new().compute_shortest_paths(&graph, 1).unwrap();

    let tiny = Dial::new().with_max_preallocated_buckets(1);
    let result = tiny.compute_shortest_paths(&graph, 1).unwrap();
    assert_eq!(result.distances(), reference.distances());

    let bounded = Dial::new().with_sizing(BucketSizing::NodesTimesMaxArc);
    let result = bounded.compute_shortest_paths(&graph, 1).unwrap();
    assert_eq!(result.distances(), reference.distances());
}

#[test]
fn test_dial_size_estimates() {
    let graph = diamond(4).build().unwrap();
    let bounded = Dial::new().with_sizing(BucketSizing::NodesTimesMaxArc);
    assert_eq!(bounded.estimate_max_distance::<i64, _>(&graph), 15);

    // Sampling stops once more than node_count arcs were summed
    let sampled = Dial::new();
    assert_eq!(sampled.estimate_max_distance::<i64, _>(&graph), 12);
}

#[test]
fn test_zero_length_arcs() {
    let graph = AdjacencyList::build(3, arcs(&[(1, 2, 0), (2, 3, 0), (1, 3, 1)])).unwrap();
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph, 1).unwrap();
        assert_eq!(result.distance(3), Some(0), "{}", algorithm);
        assert_eq!(result.path_to(3), Some(vec![1, 2, 3]));
    }
}

#[test]
fn test_algorithm_names_parse() {
    assert_eq!("dijkstra".parse::<Algorithm>().unwrap(), Algorithm::Dijkstra);
    assert_eq!("DIAL".parse::<Algorithm>().unwrap(), Algorithm::Dial);
    assert_eq!("fifo".parse::<Algorithm>().unwrap(), Algorithm::Spfa);
    assert_eq!("deque".parse::<Algorithm>().unwrap(), Algorithm::Pape);
    assert!(matches!(
        "bellman".parse::<Algorithm>(),
        Err(Error::UnknownAlgorithm(_))
    ));

    assert!(Algorithm::Spfa.supports_negative_weights());
    assert!(!Algorithm::Dial.supports_negative_weights());
    assert!(ShortestPathAlgorithm::<i64, AdjacencyList<i64>>::supports_negative_weights(
        &Pape::new()
    ));
}
