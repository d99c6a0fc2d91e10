//! Property tests over randomly generated graphs.

use adtgraph::prelude::*;
use proptest::prelude::*;

/// Random graph: up to 11 vertices and 30 edges, self-loops and duplicates allowed.
fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..12).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n), 0..30)
            .prop_map(move |edges| Graph::from_edges(n, edges).unwrap())
    })
}

/// Random DAG: every edge points from a lower to a higher id.
fn arb_dag() -> impl Strategy<Value = Graph> {
    (2usize..12).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n), 0..30).prop_map(move |pairs| {
            let edges = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)));
            Graph::from_edges(n, edges).unwrap()
        })
    })
}

fn is_topological(graph: &Graph, order: &[VertexId]) -> bool {
    let mut position = vec![usize::MAX; graph.vertex_count()];
    for (index, vertex) in order.iter().enumerate() {
        position[vertex.index()] = index;
    }
    order.len() == graph.vertex_count()
        && position.iter().all(|&p| p != usize::MAX)
        && graph
            .edges()
            .all(|(source, target)| position[source.index()] < position[target.index()])
}

proptest! {
    #[test]
    fn test_dfs_is_permutation(graph in arb_graph()) {
        let mut order = graph.dfs();
        order.sort();
        prop_assert_eq!(order, graph.vertex_ids().collect::<Vec<_>>());
    }

    #[test]
    fn test_detectors_agree(graph in arb_graph()) {
        let dfs = graph.is_cyclic().unwrap();
        let bfs = graph.is_cyclic_bfs().unwrap();
        let kahn = graph.is_cyclic_kahn().unwrap();
        prop_assert_eq!(dfs, bfs, "dfs/bfs disagree on {:?}", graph);
        prop_assert_eq!(dfs, kahn, "dfs/kahn disagree on {:?}", graph);
    }

    #[test]
    fn test_topo_sort_matches_detectors(graph in arb_graph()) {
        let cyclic = graph.is_cyclic().unwrap();
        match graph.topo_sort().unwrap() {
            TopoSort::Ordered(order) => {
                prop_assert!(!cyclic);
                prop_assert!(is_topological(&graph, &order), "bad order {:?}", order);
            }
            TopoSort::Cyclic => prop_assert!(cyclic),
        }
    }

    #[test]
    fn test_find_cycle_is_closed_path(graph in arb_graph()) {
        let cyclic = graph.is_cyclic_kahn().unwrap();
        match graph.find_cycle().unwrap() {
            Some(cycle) => {
                prop_assert!(cyclic);
                prop_assert!(cycle.len() >= 2);
                prop_assert_eq!(cycle.first(), cycle.last());
                for pair in cycle.windows(2) {
                    prop_assert!(graph.neighbors(pair[0]).contains(&pair[1]));
                }
            }
            None => prop_assert!(!cyclic),
        }
    }

    #[test]
    fn test_forward_edges_sort(graph in arb_dag()) {
        prop_assert!(!graph.is_cyclic_bfs().unwrap());
        let order = graph.topo_sort().unwrap().into_order();
        prop_assert!(order.is_some());
        prop_assert!(is_topological(&graph, &order.unwrap_or_default()));
    }

    #[test]
    fn test_edge_list_round_trip(graph in arb_graph()) {
        let parsed: Graph = graph.to_string().parse().unwrap();
        prop_assert_eq!(parsed, graph);
    }
}
