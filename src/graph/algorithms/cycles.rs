//! Cycle detection for directed graphs.
//!
//! Three independent detectors answer the same question and agree on every
//! graph, self-loops included:
//!
//! - [`is_cyclic`] - depth-first search with a recursion-path colouring
//! - [`is_cyclic_bfs`] - breadth-first search with a three-colour scheme
//! - [`is_cyclic_kahn`] - Kahn's in-degree reduction
//!
//! [`find_cycle`] goes one step further and returns a witness cycle.
//! [`CycleStrategy`] selects one of the detectors at runtime.

use log::{debug, trace};
use strum::{Display, EnumIter, EnumString};

use crate::{
    adt::{Queue, Stack},
    graph::{
        algorithms::traversal::{open_frame, Frame},
        Successors, VertexId,
    },
    Error, Result,
};

/// Per-vertex state of the depth-first detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathColor {
    /// Not yet reached
    Unvisited,
    /// Entered and still on the current path
    OnPath,
    /// All successors explored
    Finished,
}

/// Per-vertex state of the breadth-first detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BfsColor {
    /// Not reached by the current exploration
    Unvisited,
    /// Queued during the current exploration
    Discovered,
    /// Known not to lie on any cycle
    Finished,
}

/// Depth-first walk shared by [`is_cyclic`] and [`find_cycle`].
///
/// Returns the first back edge's cycle as a closed path, or `None` if the
/// walk covers the whole graph without finding one.
fn dfs_back_edge<G: Successors>(graph: &G) -> Result<Option<Vec<VertexId>>> {
    let mut colors = vec![PathColor::Unvisited; graph.vertex_count()];
    let mut frames: Stack<Frame> = Stack::new();

    for root in graph.vertex_ids() {
        if colors[root.index()] != PathColor::Unvisited {
            continue;
        }

        colors[root.index()] = PathColor::OnPath;
        frames.push(open_frame(graph, root));

        while !frames.is_empty() {
            let next = {
                let (_, successors) = frames.top_mut()?;
                successors.next()
            };

            match next {
                Some(succ) => match colors[succ.index()] {
                    PathColor::OnPath => return close_cycle(&frames, succ).map(Some),
                    PathColor::Unvisited => {
                        colors[succ.index()] = PathColor::OnPath;
                        frames.push(open_frame(graph, succ));
                    }
                    PathColor::Finished => {}
                },
                None => {
                    let (vertex, _) = frames.pop()?;
                    trace!("vertex {vertex} finished");
                    colors[vertex.index()] = PathColor::Finished;
                }
            }
        }
    }

    Ok(None)
}

/// Builds the closed path from `target`'s frame up to the top of the stack.
fn close_cycle(frames: &Stack<Frame>, target: VertexId) -> Result<Vec<VertexId>> {
    let mut path: Vec<VertexId> = frames
        .iter()
        .map(|(vertex, _)| *vertex)
        .skip_while(|&vertex| vertex != target)
        .collect();

    if path.is_empty() {
        return Err(Error::GraphError(format!(
            "vertex {target} is on the DFS path but has no open frame"
        )));
    }

    path.push(target);
    Ok(path)
}

/// Detects cycles with a depth-first search that tracks the current path.
///
/// Roots are taken in ascending id order. A vertex is on-path from the moment
/// it is entered until its last successor is explored; reaching an on-path
/// vertex again is a back edge and proves a cycle. A self-loop is a back edge
/// to the vertex itself.
///
/// # Errors
///
/// Only internal invariant violations ([`Error::EmptyStack`],
/// [`Error::GraphError`]) are reported; a cycle is `Ok(true)`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::algorithms::is_cyclic, Graph};
///
/// let dag = Graph::from_edges(3, [(0, 1), (1, 2)])?;
/// assert!(!is_cyclic(&dag)?);
///
/// let cyclic = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)])?;
/// assert!(is_cyclic(&cyclic)?);
/// # Ok::<(), adtgraph::Error>(())
/// ```
pub fn is_cyclic<G: Successors>(graph: &G) -> Result<bool> {
    let cyclic = dfs_back_edge(graph)?.is_some();
    debug!("dfs cycle check: cyclic={cyclic}");
    Ok(cyclic)
}

/// Detects cycles with breadth-first explorations and three colours.
///
/// Each root that is not yet known to be cycle-free starts an exploration
/// that queues every vertex it can reach, skipping vertices already proven
/// cycle-free. The root stays on the path for the whole exploration, so any
/// dequeued vertex with an edge back to the root closes a cycle. If the
/// exploration ends without returning to the root, the root lies on no
/// cycle and is marked finished; everything else it touched is reset.
///
/// Pruning finished vertices never hides a cycle, because every vertex of a
/// cycle through the root is itself on that cycle and cannot be finished.
///
/// # Errors
///
/// Returns [`Error::EmptyQueue`] only on an internal invariant violation.
///
/// # Complexity
///
/// - Time: O(V * (V + E)) worst case
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::algorithms::is_cyclic_bfs, Graph};
///
/// let self_loop = Graph::from_edges(1, [(0, 0)])?;
/// assert!(is_cyclic_bfs(&self_loop)?);
/// # Ok::<(), adtgraph::Error>(())
/// ```
pub fn is_cyclic_bfs<G: Successors>(graph: &G) -> Result<bool> {
    let mut colors = vec![BfsColor::Unvisited; graph.vertex_count()];
    let mut touched: Vec<VertexId> = Vec::new();
    let mut queue: Queue<VertexId> = Queue::new();

    for root in graph.vertex_ids() {
        if colors[root.index()] == BfsColor::Finished {
            continue;
        }

        colors[root.index()] = BfsColor::Discovered;
        touched.push(root);
        queue.enqueue(root);

        while !queue.is_empty() {
            let vertex = queue.dequeue()?;
            for succ in graph.successors(vertex) {
                if succ == root {
                    debug!("bfs cycle check: vertex {vertex} returns to root {root}");
                    return Ok(true);
                }
                if colors[succ.index()] == BfsColor::Unvisited {
                    colors[succ.index()] = BfsColor::Discovered;
                    touched.push(succ);
                    queue.enqueue(succ);
                }
            }
        }

        for vertex in touched.drain(..) {
            colors[vertex.index()] = BfsColor::Unvisited;
        }
        colors[root.index()] = BfsColor::Finished;
        trace!("vertex {root} lies on no cycle");
    }

    debug!("bfs cycle check: cyclic=false");
    Ok(false)
}

/// Detects cycles with Kahn's algorithm.
///
/// Vertices of in-degree zero are removed one at a time, decrementing the
/// in-degree of their successors. Every vertex is removed exactly when the
/// graph is acyclic. A non-empty graph without any in-degree-zero vertex is
/// reported cyclic immediately.
///
/// # Errors
///
/// Returns [`Error::EmptyQueue`] only on an internal invariant violation.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::algorithms::is_cyclic_kahn, Graph};
///
/// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 1), (3, 0)])?;
/// assert!(is_cyclic_kahn(&graph)?);
/// # Ok::<(), adtgraph::Error>(())
/// ```
pub fn is_cyclic_kahn<G: Successors>(graph: &G) -> Result<bool> {
    let vertex_count = graph.vertex_count();

    let mut in_degree = vec![0usize; vertex_count];
    for vertex in graph.vertex_ids() {
        for succ in graph.successors(vertex) {
            in_degree[succ.index()] += 1;
        }
    }

    let mut queue: Queue<VertexId> = graph
        .vertex_ids()
        .filter(|vertex| in_degree[vertex.index()] == 0)
        .collect();

    if vertex_count > 0 && queue.is_empty() {
        debug!("kahn cycle check: no vertex with in-degree zero");
        return Ok(true);
    }

    let mut removed = 0usize;
    while !queue.is_empty() {
        let vertex = queue.dequeue()?;
        removed += 1;

        for succ in graph.successors(vertex) {
            let degree = &mut in_degree[succ.index()];
            *degree -= 1;
            if *degree == 0 {
                queue.enqueue(succ);
            }
        }
    }

    let cyclic = removed < vertex_count;
    debug!("kahn cycle check: removed {removed} of {vertex_count} vertices, cyclic={cyclic}");
    Ok(cyclic)
}

/// Finds one cycle and returns it as a closed path.
///
/// The path starts and ends at the same vertex and every consecutive pair is
/// an edge of the graph, e.g. `[1, 2, 3, 1]`. A self-loop on `a` gives
/// `[a, a]`. Returns `None` for an acyclic graph.
///
/// # Errors
///
/// Only internal invariant violations are reported.
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::algorithms::find_cycle, Graph, VertexId};
///
/// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)])?;
/// let cycle = find_cycle(&graph)?.unwrap_or_default();
/// let raw: Vec<usize> = cycle.into_iter().map(VertexId::index).collect();
/// assert_eq!(raw, vec![1, 2, 3, 1]);
/// # Ok::<(), adtgraph::Error>(())
/// ```
pub fn find_cycle<G: Successors>(graph: &G) -> Result<Option<Vec<VertexId>>> {
    dfs_back_edge(graph)
}

/// Selects one of the cycle detectors.
///
/// Parses from and prints as `dfs`, `bfs` or `kahn` (case-insensitive).
///
/// # Examples
///
/// ```rust
/// use adtgraph::{CycleStrategy, Graph};
///
/// let graph = Graph::from_edges(2, [(0, 1), (1, 0)])?;
/// let strategy: CycleStrategy = "kahn".parse().unwrap_or_default();
/// assert_eq!(strategy, CycleStrategy::Kahn);
/// assert!(strategy.detect(&graph)?);
/// # Ok::<(), adtgraph::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum CycleStrategy {
    /// Depth-first search with path colouring ([`is_cyclic`])
    #[default]
    #[strum(to_string = "dfs")]
    DfsColoring,
    /// Breadth-first three-colour search ([`is_cyclic_bfs`])
    #[strum(to_string = "bfs")]
    BfsColoring,
    /// Kahn's in-degree reduction ([`is_cyclic_kahn`])
    #[strum(to_string = "kahn")]
    Kahn,
}

impl CycleStrategy {
    /// Runs the selected detector on `graph`.
    ///
    /// # Errors
    ///
    /// Propagates the detector's internal invariant errors.
    pub fn detect<G: Successors>(self, graph: &G) -> Result<bool> {
        match self {
            CycleStrategy::DfsColoring => is_cyclic(graph),
            CycleStrategy::BfsColoring => is_cyclic_bfs(graph),
            CycleStrategy::Kahn => is_cyclic_kahn(graph),
        }
    }

    /// Returns a short human-readable description of the technique.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            CycleStrategy::DfsColoring => "depth-first search with recursion-path colouring",
            CycleStrategy::BfsColoring => "breadth-first search with three colours",
            CycleStrategy::Kahn => "Kahn's in-degree reduction",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::{
        graph::algorithms::cycles::{
            find_cycle, is_cyclic, is_cyclic_bfs, is_cyclic_kahn, CycleStrategy,
        },
        Graph, VertexId,
    };

    fn verdicts(graph: &Graph) -> [bool; 3] {
        [
            is_cyclic(graph).unwrap(),
            is_cyclic_bfs(graph).unwrap(),
            is_cyclic_kahn(graph).unwrap(),
        ]
    }

    fn assert_all(graph: &Graph, expected: bool) {
        assert_eq!(verdicts(graph), [expected; 3], "graph: {graph:?}");
    }

    fn assert_closed_path(graph: &Graph, cycle: &[VertexId]) {
        assert!(cycle.len() >= 2);
        assert_eq!(cycle.first(), cycle.last());
        for pair in cycle.windows(2) {
            assert!(
                graph.neighbors(pair[0]).contains(&pair[1]),
                "{} -> {} is not an edge",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_acyclic_graphs() {
        assert_all(&Graph::new(0), false);
        assert_all(&Graph::new(4), false);
        assert_all(&Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap(), false);
        assert_all(
            &Graph::from_edges(6, [(5, 2), (5, 0), (2, 3), (3, 1), (4, 0), (4, 1)]).unwrap(),
            false,
        );
    }

    #[test]
    fn test_simple_cycle() {
        assert_all(&Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap(), true);
    }

    #[test]
    fn test_self_loop() {
        assert_all(&Graph::from_edges(1, [(0, 0)]).unwrap(), true);
        assert_all(&Graph::from_edges(3, [(0, 1), (1, 2), (2, 2)]).unwrap(), true);
    }

    #[test]
    fn test_diamond_is_acyclic() {
        // Two paths into 3; revisiting a finished vertex is no cycle
        assert_all(
            &Graph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap(),
            false,
        );
    }

    #[test]
    fn test_cycle_not_through_lowest_root() {
        // 0 feeds the cycle 1 -> 2 -> 3 -> 1 but is not on it
        assert_all(
            &Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)]).unwrap(),
            true,
        );
    }

    #[test]
    fn test_cycle_in_later_component() {
        assert_all(
            &Graph::from_edges(5, [(0, 1), (2, 3), (3, 4), (4, 3)]).unwrap(),
            true,
        );
    }

    #[test]
    fn test_cycle_behind_finished_vertices() {
        // 4 -> 0 enters a finished DAG part; the cycle 2 <-> 4 is found later
        assert_all(
            &Graph::from_edges(5, [(0, 1), (2, 4), (4, 0), (4, 2), (3, 1)]).unwrap(),
            true,
        );
    }

    #[test]
    fn test_duplicate_edges() {
        assert_all(&Graph::from_edges(2, [(0, 1), (0, 1)]).unwrap(), false);
        assert_all(&Graph::from_edges(2, [(0, 1), (0, 1), (1, 0)]).unwrap(), true);
    }

    #[test]
    fn test_find_cycle_paths() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)]).unwrap();
        let cycle = find_cycle(&graph).unwrap().unwrap();
        assert_eq!(cycle, [1, 2, 3, 1].map(VertexId::new).to_vec());
        assert_closed_path(&graph, &cycle);

        let self_loop = Graph::from_edges(2, [(0, 1), (1, 1)]).unwrap();
        let cycle = find_cycle(&self_loop).unwrap().unwrap();
        assert_eq!(cycle, vec![VertexId::new(1), VertexId::new(1)]);

        let dag = Graph::from_edges(3, [(0, 1), (0, 2), (1, 2)]).unwrap();
        assert_eq!(find_cycle(&dag).unwrap(), None);
    }

    #[test]
    fn test_deep_chain() {
        let n = 100_000;
        let chain = Graph::from_edges(n, (0..n - 1).map(|i| (i, i + 1))).unwrap();
        assert!(!is_cyclic(&chain).unwrap());
        assert!(!is_cyclic_kahn(&chain).unwrap());

        let mut closed = chain.clone();
        closed.add_edge(n - 1, 0).unwrap();
        assert!(is_cyclic(&closed).unwrap());
        assert!(is_cyclic_kahn(&closed).unwrap());
        assert_eq!(find_cycle(&closed).unwrap().map(|c| c.len()), Some(n + 1));
    }

    #[test]
    fn test_bfs_long_chain() {
        let n = 2_000;
        let chain = Graph::from_edges(n, (0..n - 1).map(|i| (i, i + 1))).unwrap();
        assert!(!is_cyclic_bfs(&chain).unwrap());

        let mut closed = chain;
        closed.add_edge(n - 1, n / 2).unwrap();
        assert!(is_cyclic_bfs(&closed).unwrap());
    }

    #[test]
    fn test_strategy_parse_and_display() {
        assert_eq!("dfs".parse::<CycleStrategy>().unwrap(), CycleStrategy::DfsColoring);
        assert_eq!("BFS".parse::<CycleStrategy>().unwrap(), CycleStrategy::BfsColoring);
        assert_eq!("Kahn".parse::<CycleStrategy>().unwrap(), CycleStrategy::Kahn);
        assert!("tarjan".parse::<CycleStrategy>().is_err());

        assert_eq!(CycleStrategy::default().to_string(), "dfs");
        assert_eq!(CycleStrategy::Kahn.to_string(), "kahn");
    }

    #[test]
    fn test_strategy_detect_matches_functions() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(CycleStrategy::iter().count(), 3);
        for strategy in CycleStrategy::iter() {
            assert!(strategy.detect(&graph).unwrap(), "{strategy}");
            assert!(!strategy.description().is_empty());
        }
    }
}
