//! Topological sorting for directed graphs.
//!
//! A topological order places every vertex before all of its successors. It
//! exists only for acyclic graphs, so the sort reports cycles as a normal
//! outcome through [`TopoSort::Cyclic`] instead of failing.
//!
//! The sort is depth-first: each vertex is pushed onto a [`Stack`] when it
//! finishes, and popping the stack afterwards yields dependencies before
//! dependents.

use log::{debug, trace};

use crate::{
    adt::Stack,
    graph::{
        algorithms::traversal::{open_frame, Frame},
        Successors, VertexId,
    },
    Result,
};

/// Outcome of a topological sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopoSort {
    /// The graph is acyclic; every edge `u -> v` has `u` before `v`.
    Ordered(Vec<VertexId>),
    /// The graph contains at least one cycle, so no order exists.
    Cyclic,
}

impl TopoSort {
    /// Returns `true` if the sort stopped on a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        matches!(self, TopoSort::Cyclic)
    }

    /// Returns the order, or `None` for a cyclic graph.
    #[must_use]
    pub fn order(&self) -> Option<&[VertexId]> {
        match self {
            TopoSort::Ordered(order) => Some(order),
            TopoSort::Cyclic => None,
        }
    }

    /// Consumes the outcome and returns the order, or `None` for a cyclic graph.
    #[must_use]
    pub fn into_order(self) -> Option<Vec<VertexId>> {
        match self {
            TopoSort::Ordered(order) => Some(order),
            TopoSort::Cyclic => None,
        }
    }

    /// Splits the outcome into `(order, has_cycle)`.
    ///
    /// Exactly one side is informative: `(Some(order), false)` for an
    /// acyclic graph and `(None, true)` otherwise.
    #[must_use]
    pub fn into_parts(self) -> (Option<Vec<VertexId>>, bool) {
        let has_cycle = self.has_cycle();
        (self.into_order(), has_cycle)
    }
}

/// Computes a topological ordering of all vertices.
///
/// Roots are taken in ascending id order. Each depth-first exploration marks a
/// vertex visited and on-path when it is entered; a successor that is still
/// on-path closes a cycle (self-loops included) and aborts the sort with
/// [`TopoSort::Cyclic`]. A vertex leaves the path when its last successor is
/// done and is pushed onto a [`Stack`]. Draining that stack gives the order.
///
/// # Errors
///
/// Returns [`crate::Error::EmptyStack`] only if the internal stacks are out of
/// step, which indicates a bug rather than a property of the input.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::algorithms::topological_sort, Graph, VertexId};
///
/// let graph = Graph::from_edges(6, [(5, 2), (5, 0), (2, 3), (3, 1), (4, 0), (4, 1)])?;
/// let order = topological_sort(&graph)?.into_order().unwrap_or_default();
/// let raw: Vec<usize> = order.into_iter().map(VertexId::index).collect();
/// assert_eq!(raw, vec![5, 4, 2, 3, 1, 0]);
/// # Ok::<(), adtgraph::Error>(())
/// ```
pub fn topological_sort<G: Successors>(graph: &G) -> Result<TopoSort> {
    let vertex_count = graph.vertex_count();
    debug!("topological sort over {vertex_count} vertices");

    let mut visited = vec![false; vertex_count];
    let mut on_path = vec![false; vertex_count];
    let mut finished: Stack<VertexId> = Stack::with_capacity(vertex_count);
    let mut frames: Stack<Frame> = Stack::new();

    for root in graph.vertex_ids() {
        if visited[root.index()] {
            continue;
        }

        visited[root.index()] = true;
        on_path[root.index()] = true;
        frames.push(open_frame(graph, root));

        while !frames.is_empty() {
            let next = {
                let (_, successors) = frames.top_mut()?;
                successors.next()
            };

            match next {
                Some(succ) => {
                    if on_path[succ.index()] {
                        debug!("topological sort found back edge into vertex {succ}");
                        return Ok(TopoSort::Cyclic);
                    }
                    if !visited[succ.index()] {
                        visited[succ.index()] = true;
                        on_path[succ.index()] = true;
                        frames.push(open_frame(graph, succ));
                    }
                }
                None => {
                    let (vertex, _) = frames.pop()?;
                    on_path[vertex.index()] = false;
                    trace!("vertex {vertex} finished");
                    finished.push(vertex);
                }
            }
        }
    }

    let mut order = Vec::with_capacity(finished.len());
    while !finished.is_empty() {
        order.push(finished.pop()?);
    }

    Ok(TopoSort::Ordered(order))
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::algorithms::topological::{topological_sort, TopoSort},
        Graph, VertexId,
    };

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    fn create_scenario_a_graph() -> Graph {
        Graph::from_edges(5, [(0, 3), (3, 4), (4, 1), (2, 1), (2, 0)]).unwrap()
    }

    fn create_scenario_c_graph() -> Graph {
        Graph::from_edges(6, [(5, 2), (5, 0), (2, 3), (3, 1), (4, 0), (4, 1)]).unwrap()
    }

    fn assert_valid_order(graph: &Graph, order: &[VertexId]) {
        assert_eq!(order.len(), graph.vertex_count());
        let mut position = vec![usize::MAX; graph.vertex_count()];
        for (index, vertex) in order.iter().enumerate() {
            position[vertex.index()] = index;
        }
        for (source, target) in graph.edges() {
            assert!(
                position[source.index()] < position[target.index()],
                "edge {source} -> {target} out of order"
            );
        }
    }

    #[test]
    fn test_topological_sort_scenario_a() {
        let graph = create_scenario_a_graph();
        let result = topological_sort(&graph).unwrap();
        assert_eq!(result, TopoSort::Ordered(ids(&[2, 0, 3, 4, 1])));
    }

    #[test]
    fn test_topological_sort_scenario_c() {
        let graph = create_scenario_c_graph();
        let order = topological_sort(&graph).unwrap().into_order().unwrap();
        assert_eq!(order, ids(&[5, 4, 2, 3, 1, 0]));
        assert_valid_order(&graph, &order);
    }

    #[test]
    fn test_topological_sort_cycle() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let result = topological_sort(&graph).unwrap();
        assert!(result.has_cycle());
        assert_eq!(result.into_parts(), (None, true));
    }

    #[test]
    fn test_topological_sort_self_loop() {
        let graph = Graph::from_edges(1, [(0, 0)]).unwrap();
        assert_eq!(topological_sort(&graph).unwrap(), TopoSort::Cyclic);
    }

    #[test]
    fn test_topological_sort_cross_edge_is_not_cycle() {
        // 1 is finished before 2 reaches it
        let graph = Graph::from_edges(3, [(0, 1), (2, 1), (2, 0)]).unwrap();
        let order = topological_sort(&graph).unwrap().into_order().unwrap();
        assert_valid_order(&graph, &order);
    }

    #[test]
    fn test_topological_sort_empty_and_isolated() {
        let empty = Graph::new(0);
        assert_eq!(
            topological_sort(&empty).unwrap().into_parts(),
            (Some(Vec::new()), false)
        );

        let isolated = Graph::new(3);
        let order = topological_sort(&isolated).unwrap().into_order().unwrap();
        assert_eq!(order, ids(&[2, 1, 0]));
    }

    #[test]
    fn test_topological_sort_duplicate_edges() {
        let graph = Graph::from_edges(2, [(0, 1), (0, 1)]).unwrap();
        let result = topological_sort(&graph).unwrap();
        assert_eq!(result.order(), Some(ids(&[0, 1]).as_slice()));
    }

    #[test]
    fn test_topological_sort_deep_chain() {
        let n = 100_000;
        let graph = Graph::from_edges(n, (0..n - 1).map(|i| (i, i + 1))).unwrap();
        let order = topological_sort(&graph).unwrap().into_order().unwrap();
        assert_eq!(order.len(), n);
        assert_eq!(order.first(), Some(&VertexId::new(0)));
        assert_eq!(order.last(), Some(&VertexId::new(n - 1)));
    }

    #[test]
    fn test_topological_sort_deep_cycle() {
        let n = 100_000;
        let graph = Graph::from_edges(n, (0..n).map(|i| (i, (i + 1) % n))).unwrap();
        assert!(topological_sort(&graph).unwrap().has_cycle());
    }
}
