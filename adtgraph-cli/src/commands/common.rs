use std::{io::Read, path::Path};

use adtgraph::{graph::parse_edge_list, Graph, VertexId};
use anyhow::{bail, Context};

/// Load an edge-list graph from `path`, or from stdin when `path` is `-`.
pub fn load_graph(path: &Path) -> anyhow::Result<Graph> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read edge list from stdin")?;
        return parse_edge_list(&input).context("failed to parse edge list from stdin");
    }

    Graph::from_path(path).with_context(|| format!("failed to load graph: {}", path.display()))
}

/// Validate a user-supplied start vertex against `graph`.
pub fn start_vertex(graph: &Graph, index: usize) -> anyhow::Result<VertexId> {
    let vertex = VertexId::new(index);
    if !graph.contains_vertex(vertex) {
        bail!(
            "vertex {index} does not exist (graph has {} vertices)",
            graph.vertex_count()
        );
    }
    Ok(vertex)
}

/// Display name for the input, `<stdin>` for `-`.
pub fn input_name(path: &Path) -> String {
    if path == Path::new("-") {
        return "<stdin>".to_string();
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
