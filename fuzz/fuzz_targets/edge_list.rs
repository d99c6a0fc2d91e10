#![no_main]

use libfuzzer_sys::fuzz_target;
use adtgraph::{graph::parse_edge_list, CycleStrategy};
use strum::IntoEnumIterator;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(graph) = parse_edge_list(text) else {
        return;
    };

    let verdicts: Vec<bool> = CycleStrategy::iter()
        .map(|strategy| strategy.detect(&graph).unwrap())
        .collect();
    assert!(verdicts.windows(2).all(|pair| pair[0] == pair[1]));

    let sorted = graph.topo_sort().unwrap();
    assert_eq!(sorted.has_cycle(), verdicts[0]);
    assert_eq!(graph.find_cycle().unwrap().is_some(), verdicts[0]);
    assert_eq!(graph.dfs().len(), graph.vertex_count());
});
