use std::path::Path;

use crate::commands::common::load_graph;

pub fn run(path: &Path, name: Option<&str>) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    print!("{}", graph.to_dot(name));
    Ok(())
}
