use std::path::Path;

use adtgraph::TopoSort;
use anyhow::bail;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_graph,
    output::{join_ids, print_output, raw_ids},
};

#[derive(Debug, Serialize)]
pub struct TopoResult {
    pub has_cycle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<usize>>,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;

    let result = match graph.topo_sort()? {
        TopoSort::Ordered(order) => TopoResult {
            has_cycle: false,
            order: Some(raw_ids(&order)),
            cycle: None,
        },
        TopoSort::Cyclic => TopoResult {
            has_cycle: true,
            order: None,
            cycle: graph.find_cycle()?.map(|cycle| raw_ids(&cycle)),
        },
    };

    print_output(&result, opts, |r| {
        if let Some(order) = &r.order {
            println!("Topological order ({} vertices):", order.len());
            println!("  {}", join_ids(order));
        } else {
            println!("No topological order: the graph has a cycle.");
            if let Some(cycle) = &r.cycle {
                let path: Vec<String> = cycle.iter().map(usize::to_string).collect();
                println!("  {}", path.join(" -> "));
            }
        }
    })?;

    if result.has_cycle {
        bail!("graph contains a cycle");
    }
    Ok(())
}
