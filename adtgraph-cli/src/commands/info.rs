use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{input_name, load_graph},
    output::{join_ids, print_output, raw_ids, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct GraphInfo {
    pub name: String,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub self_loops: usize,
    pub sources: Vec<usize>,
    pub sinks: Vec<usize>,
    pub cyclic: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub degrees: Vec<VertexDegree>,
}

#[derive(Debug, Serialize)]
pub struct VertexDegree {
    pub vertex: usize,
    pub in_degree: usize,
    pub out_degree: usize,
}

pub fn run(path: &Path, degrees: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;

    let in_degrees = graph.in_degrees();
    let sinks: Vec<usize> = graph
        .vertex_ids()
        .filter(|&vertex| graph.out_degree(vertex) == 0)
        .map(|vertex| vertex.index())
        .collect();
    let self_loops = graph
        .edges()
        .filter(|(source, target)| source == target)
        .count();

    let degrees = if degrees {
        graph
            .vertex_ids()
            .map(|vertex| VertexDegree {
                vertex: vertex.index(),
                in_degree: in_degrees[vertex.index()],
                out_degree: graph.out_degree(vertex),
            })
            .collect()
    } else {
        Vec::new()
    };

    let info = GraphInfo {
        name: input_name(path),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        self_loops,
        sources: raw_ids(&graph.sources()),
        sinks,
        cyclic: graph.is_cyclic()?,
        degrees,
    };

    print_output(&info, opts, |info| {
        println!("Graph:       {}", info.name);
        println!("Vertices:    {}", info.vertex_count);
        println!("Edges:       {}", info.edge_count);
        println!("Self-loops:  {}", info.self_loops);
        println!("Sources:     {}", join_ids(&info.sources));
        println!("Sinks:       {}", join_ids(&info.sinks));
        let cyclic = if info.cyclic { "yes" } else { "no" };
        println!("Cyclic:      {cyclic}");

        if !info.degrees.is_empty() {
            println!("\nDegrees:");
            let mut tw = TabWriter::new(vec![
                ("Vertex", Align::Right),
                ("In", Align::Right),
                ("Out", Align::Right),
            ])
            .indent("  ");
            for d in &info.degrees {
                tw.row(vec![
                    d.vertex.to_string(),
                    d.in_degree.to_string(),
                    d.out_degree.to_string(),
                ]);
            }
            tw.print();
        }
    })
}
