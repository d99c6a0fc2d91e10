use std::path::Path;

use adtgraph::CycleStrategy;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{
    app::GlobalOptions,
    commands::common::load_graph,
    output::{print_output, Align, TabWriter},
};

/// Vertex count above which the default run leaves out the quadratic BFS detector.
const BFS_DEFAULT_LIMIT: usize = 10_000;

#[derive(Debug, Serialize)]
pub struct CycleReport {
    pub verdicts: Vec<Verdict>,
    pub skipped: Vec<String>,
    pub agree: bool,
    pub cyclic: bool,
}

#[derive(Debug, Serialize)]
pub struct Verdict {
    pub strategy: String,
    pub description: &'static str,
    pub cyclic: bool,
}

pub fn run(
    path: &Path,
    strategy: Option<CycleStrategy>,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let graph = load_graph(path)?;

    let strategies = select_strategies(strategy, graph.vertex_count());
    let skipped: Vec<String> = CycleStrategy::iter()
        .filter(|s| strategy.is_none() && !strategies.contains(s))
        .map(|s| s.to_string())
        .collect();
    if !skipped.is_empty() {
        log::warn!(
            "skipping {} detector on {} vertices (limit {BFS_DEFAULT_LIMIT}); pass -s bfs to force it",
            skipped.join(", "),
            graph.vertex_count()
        );
    }

    let verdicts = strategies
        .into_iter()
        .map(|strategy| -> adtgraph::Result<Verdict> {
            Ok(Verdict {
                strategy: strategy.to_string(),
                description: strategy.description(),
                cyclic: strategy.detect(&graph)?,
            })
        })
        .collect::<adtgraph::Result<Vec<_>>>()?;

    let cyclic = verdicts.first().is_some_and(|v| v.cyclic);
    let agree = verdicts.iter().all(|v| v.cyclic == cyclic);
    if !agree {
        log::warn!("cycle detectors disagree");
    }

    let report = CycleReport {
        verdicts,
        skipped,
        agree,
        cyclic,
    };

    print_output(&report, opts, |r| {
        let mut tw = TabWriter::new(vec![
            ("Strategy", Align::Left),
            ("Cyclic", Align::Left),
            ("Technique", Align::Left),
        ]);
        for v in &r.verdicts {
            let cyclic = if v.cyclic { "yes" } else { "no" };
            tw.row(vec![
                v.strategy.clone(),
                cyclic.to_string(),
                v.description.to_string(),
            ]);
        }
        tw.print();

        if r.verdicts.len() > 1 {
            let agreement = if r.agree { "all agree" } else { "DISAGREE" };
            println!("\nDetectors: {agreement}");
        }
        if !r.skipped.is_empty() {
            println!("Skipped:   {} (graph too large)", r.skipped.join(", "));
        }
    })
}

/// Picks the detectors to run: the requested one, otherwise all of them,
/// leaving out BFS on graphs above [`BFS_DEFAULT_LIMIT`] vertices.
fn select_strategies(
    requested: Option<CycleStrategy>,
    vertex_count: usize,
) -> Vec<CycleStrategy> {
    match requested {
        Some(strategy) => vec![strategy],
        None => CycleStrategy::iter()
            .filter(|&s| s != CycleStrategy::BfsColoring || vertex_count <= BFS_DEFAULT_LIMIT)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_on_small_graph() {
        let all: Vec<CycleStrategy> = CycleStrategy::iter().collect();
        assert_eq!(select_strategies(None, 0), all);
        assert_eq!(select_strategies(None, BFS_DEFAULT_LIMIT), all);
    }

    #[test]
    fn test_select_skips_bfs_on_large_graph() {
        let selected = select_strategies(None, BFS_DEFAULT_LIMIT + 1);
        assert!(!selected.contains(&CycleStrategy::BfsColoring));
        assert!(selected.contains(&CycleStrategy::DfsColoring));
        assert!(selected.contains(&CycleStrategy::Kahn));
    }

    #[test]
    fn test_select_requested_bfs_on_large_graph() {
        assert_eq!(
            select_strategies(Some(CycleStrategy::BfsColoring), 100_000),
            vec![CycleStrategy::BfsColoring]
        );
    }
}
