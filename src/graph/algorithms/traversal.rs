//! Graph traversal algorithms.
//!
//! # Algorithms
//!
//! - [`dfs`] - Depth-first pre-order over the vertices reachable from a root
//! - [`dfs_all`] - Depth-first pre-order over every vertex of the graph
//! - [`bfs`] - Breadth-first order over the vertices reachable from a root
//! - [`postorder`] / [`reverse_postorder`] - Finish order of a rooted DFS
//!
//! # Iteration vs Collection
//!
//! [`dfs`], [`dfs_all`] and [`bfs`] return lazy iterators. [`postorder`] and
//! [`reverse_postorder`] return vectors since the order needs the full
//! traversal anyway.
//!
//! # Explicit Work Stacks
//!
//! The depth-first traversals keep one frame per vertex on the current path:
//! the vertex and a cursor over its remaining successors. Resuming the top
//! frame reproduces the visiting order of the textbook recursive algorithm
//! exactly, while the path length is limited by heap memory instead of the
//! thread's call stack.

use std::vec;

use crate::{
    adt::Queue,
    graph::{Successors, VertexId},
};

/// A depth-first frame: a vertex on the current path and its unexplored successors.
pub(crate) type Frame = (VertexId, vec::IntoIter<VertexId>);

/// Opens a frame for `vertex`, snapshotting its successors in edge order.
pub(crate) fn open_frame<G: Successors>(graph: &G, vertex: VertexId) -> Frame {
    let successors: Vec<VertexId> = graph.successors(vertex).collect();
    (vertex, successors.into_iter())
}

/// Depth-first search iterator over graph vertices.
///
/// Yields vertices in pre-order: a vertex is yielded when it is discovered,
/// before any of its descendants, and successors are explored in edge order.
/// Each vertex is yielded at most once.
///
/// Created by [`dfs`] (vertices reachable from one root) or [`dfs_all`]
/// (every vertex, restarting from the lowest unvisited id whenever the
/// current component is exhausted).
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    frames: Vec<Frame>,
    visited: Vec<bool>,
    /// Discovered vertex waiting to be yielded and expanded
    pending: Option<VertexId>,
    /// Scan position for the next root when covering the whole graph
    next_root: Option<usize>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn rooted(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return DfsIterator {
                graph,
                frames: Vec::new(),
                visited: Vec::new(),
                pending: None,
                next_root: None,
            };
        }

        let mut visited = vec![false; vertex_count];
        visited[start.index()] = true;

        DfsIterator {
            graph,
            frames: Vec::new(),
            visited,
            pending: Some(start),
            next_root: None,
        }
    }

    fn covering(graph: &'g G) -> Self {
        DfsIterator {
            graph,
            frames: Vec::new(),
            visited: vec![false; graph.vertex_count()],
            pending: None,
            next_root: Some(0),
        }
    }

    /// Picks the lowest unvisited vertex as the next root, if covering.
    fn advance_root(&mut self) -> Option<VertexId> {
        let cursor = self.next_root.as_mut()?;
        while *cursor < self.visited.len() && self.visited[*cursor] {
            *cursor += 1;
        }
        if *cursor >= self.visited.len() {
            return None;
        }

        self.visited[*cursor] = true;
        Some(VertexId::new(*cursor))
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(vertex) = self.pending.take() {
                self.frames.push(open_frame(self.graph, vertex));
                return Some(vertex);
            }

            if let Some((_, successors)) = self.frames.last_mut() {
                match successors.next() {
                    Some(succ) => {
                        if let Some(seen) = self.visited.get_mut(succ.index()) {
                            if !*seen {
                                *seen = true;
                                self.pending = Some(succ);
                            }
                        }
                    }
                    None => {
                        self.frames.pop();
                    }
                }
                continue;
            }

            let root = self.advance_root()?;
            self.pending = Some(root);
        }
    }
}

/// Returns a depth-first iterator over the vertices reachable from `start`.
///
/// Vertices not reachable from `start` are not visited. An out-of-range
/// `start` yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and the frame stack
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::algorithms::dfs, Graph, VertexId};
///
/// let graph = Graph::from_edges(5, [(0, 3), (3, 4), (4, 1), (2, 1), (2, 0)])?;
/// let order: Vec<usize> = dfs(&graph, VertexId::new(0)).map(VertexId::index).collect();
/// assert_eq!(order, vec![0, 3, 4, 1]);
/// # Ok::<(), adtgraph::Error>(())
/// ```
pub fn dfs<G: Successors>(graph: &G, start: VertexId) -> DfsIterator<'_, G> {
    DfsIterator::rooted(graph, start)
}

/// Returns a depth-first iterator that visits every vertex exactly once.
///
/// The traversal starts at vertex `0`. When a component is exhausted, the
/// lowest-numbered vertex not yet visited becomes the next root, so
/// disconnected components and vertices unreachable from `0` are covered in
/// ascending order of their first unvisited vertex.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::algorithms::dfs_all, Graph, VertexId};
///
/// let graph = Graph::from_edges(5, [(0, 3), (3, 4), (4, 1), (2, 1), (2, 0)])?;
/// let order: Vec<usize> = dfs_all(&graph).map(VertexId::index).collect();
/// assert_eq!(order, vec![0, 3, 4, 1, 2]);
/// # Ok::<(), adtgraph::Error>(())
/// ```
pub fn dfs_all<G: Successors>(graph: &G) -> DfsIterator<'_, G> {
    DfsIterator::covering(graph)
}

/// Breadth-first search iterator over graph vertices.
///
/// Visits each reachable vertex exactly once, all vertices at distance `d`
/// before any vertex at distance `d + 1`.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: Queue<VertexId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return BfsIterator {
                graph,
                queue: Queue::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; vertex_count];
        visited[start.index()] = true;

        let mut queue = Queue::new();
        queue.enqueue(start);

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.dequeue().ok()?;

        for succ in self.graph.successors(vertex) {
            if let Some(seen) = self.visited.get_mut(succ.index()) {
                if !*seen {
                    *seen = true;
                    self.queue.enqueue(succ);
                }
            }
        }

        Some(vertex)
    }
}

/// Returns a breadth-first iterator over the vertices reachable from `start`.
///
/// An out-of-range `start` yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::algorithms::bfs, Graph, VertexId};
///
/// let graph = Graph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)])?;
/// let order: Vec<usize> = bfs(&graph, VertexId::new(0)).map(VertexId::index).collect();
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// # Ok::<(), adtgraph::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, start: VertexId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Computes the postorder of the vertices reachable from `start`.
///
/// A vertex appears after all of its descendants. An out-of-range `start`
/// gives an empty vector.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::algorithms::postorder, Graph, VertexId};
///
/// let graph = Graph::from_edges(3, [(0, 1), (1, 2)])?;
/// let order: Vec<usize> = postorder(&graph, VertexId::new(0)).into_iter().map(VertexId::index).collect();
/// assert_eq!(order, vec![2, 1, 0]);
/// # Ok::<(), adtgraph::Error>(())
/// ```
#[allow(clippy::items_after_statements)]
pub fn postorder<G: Successors>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let vertex_count = graph.vertex_count();
    if start.index() >= vertex_count {
        return Vec::new();
    }

    let mut visited = vec![false; vertex_count];
    let mut result = Vec::with_capacity(vertex_count);

    #[derive(Clone, Copy)]
    enum State {
        Enter,
        Exit,
    }

    let mut stack = vec![(start, State::Enter)];

    while let Some((vertex, state)) = stack.pop() {
        match state {
            State::Enter => {
                if visited[vertex.index()] {
                    continue;
                }
                visited[vertex.index()] = true;
                stack.push((vertex, State::Exit));

                // Reversed so the first successor is expanded first
                let successors: Vec<VertexId> = graph.successors(vertex).collect();
                for &succ in successors.iter().rev() {
                    if !visited[succ.index()] {
                        stack.push((succ, State::Enter));
                    }
                }
            }
            State::Exit => result.push(vertex),
        }
    }

    result
}

/// Computes the reverse postorder of the vertices reachable from `start`.
///
/// On an acyclic graph every vertex comes before all of its successors.
pub fn reverse_postorder<G: Successors>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let mut result = postorder(graph, start);
    result.reverse();
    result
}
