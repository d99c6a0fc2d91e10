use std::path::Path;

use adtgraph::graph::algorithms;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, start_vertex},
    output::{join_ids, print_output, raw_ids},
};

#[derive(Debug, Serialize)]
pub struct Traversal {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<usize>,
    pub order: Vec<usize>,
}

fn print_traversal(traversal: &Traversal, opts: &GlobalOptions) -> anyhow::Result<()> {
    print_output(traversal, opts, |t| {
        match t.from {
            Some(from) => println!("{} from {from} ({} vertices):", t.kind, t.order.len()),
            None => println!("{} over all vertices ({}):", t.kind, t.order.len()),
        }
        println!("  {}", join_ids(&t.order));
    })
}

pub fn run_dfs(path: &Path, from: Option<usize>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;

    let order = match from {
        Some(index) => {
            let start = start_vertex(&graph, index)?;
            algorithms::dfs(&graph, start).collect()
        }
        None => graph.dfs(),
    };

    let traversal = Traversal {
        kind: "DFS",
        from,
        order: raw_ids(&order),
    };
    print_traversal(&traversal, opts)
}

pub fn run_bfs(path: &Path, from: usize, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    let start = start_vertex(&graph, from)?;

    let order: Vec<_> = algorithms::bfs(&graph, start).collect();
    let traversal = Traversal {
        kind: "BFS",
        from: Some(from),
        order: raw_ids(&order),
    };
    print_traversal(&traversal, opts)
}
