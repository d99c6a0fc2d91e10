//! Core directed graph implementation.
//!
//! This module provides [`Graph`], an adjacency-list directed graph over the
//! dense vertex ids `0..vertex_count`. The vertex count is fixed at
//! construction; edges are only ever appended.

use log::debug;

use crate::{
    graph::{
        algorithms::{self, TopoSort},
        traits::{GraphBase, Successors},
        vertex::VertexId,
    },
    Error, Result,
};

/// A directed graph stored as adjacency lists.
///
/// `Graph` holds one ordered neighbour sequence per vertex:
///
/// - Neighbours are kept in edge-insertion order
/// - Duplicate edges (multigraph) and self-loops are allowed
/// - Every stored neighbour is a valid vertex id, enforced by
///   [`add_edge`](Self::add_edge)
///
/// There is no edge or vertex removal. All algorithms take `&self`, so the
/// graph cannot change while it is being traversed, sorted or checked.
///
/// # Thread Safety
///
/// `Graph` owns plain data and is [`Send`] and [`Sync`]; build it on one
/// thread, then analyse it from as many as needed.
///
/// # Examples
///
/// ```rust
/// use adtgraph::{Graph, VertexId};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(0, 2)?;
/// graph.add_edge(1, 2)?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.out_degree(VertexId::new(0)), 2);
/// assert_eq!(graph.in_degrees(), vec![0, 1, 2]);
/// # Ok::<(), adtgraph::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Outgoing neighbours per vertex, in insertion order
    adjacency: Vec<Vec<VertexId>>,
    /// Total number of stored edges, duplicates included
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if the adjacency table for `vertex_count` vertices cannot be
    /// allocated. Use [`try_new`](Self::try_new) for untrusted counts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtgraph::Graph;
    ///
    /// let graph = Graph::new(4);
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph with `vertex_count` vertices, reporting allocation
    /// failure instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if the adjacency table for
    /// `vertex_count` vertices cannot be reserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtgraph::Graph;
    ///
    /// assert_eq!(Graph::try_new(4)?, Graph::new(4));
    /// assert!(Graph::try_new(usize::MAX).is_err());
    /// # Ok::<(), adtgraph::Error>(())
    /// ```
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count).map_err(|err| {
            Error::GraphError(format!("cannot allocate {vertex_count} vertices: {err}"))
        })?;
        adjacency.resize_with(vertex_count, Vec::new);

        Ok(Graph {
            adjacency,
            edge_count: 0,
        })
    }

    /// Creates a graph with `vertex_count` vertices and the given edges.
    ///
    /// Edges are added in iteration order, exactly as repeated calls to
    /// [`add_edge`](Self::add_edge) would.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] for the first edge with an endpoint
    /// outside `0..vertex_count`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtgraph::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1), (1, 2)])?;
    /// assert_eq!(graph.edge_count(), 2);
    ///
    /// assert!(Graph::from_edges(3, [(0, 3)]).is_err());
    /// # Ok::<(), adtgraph::Error>(())
    /// ```
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Graph::new(vertex_count);
        for (source, target) in edges {
            graph.add_edge(source, target)?;
        }
        Ok(graph)
    }

    /// Adds the directed edge `source -> target`.
    ///
    /// The target is appended to the end of `source`'s neighbour sequence.
    /// Duplicate edges are kept and self-loops are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if either endpoint is not below
    /// [`vertex_count`](Self::vertex_count). The graph is left unchanged.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<()> {
        for vertex in [source, target] {
            if vertex >= self.adjacency.len() {
                return Err(Error::InvalidVertex {
                    vertex,
                    vertex_count: self.adjacency.len(),
                });
            }
        }

        self.adjacency[source].push(VertexId::new(target));
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if `vertex` is one of this graph's vertices.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.adjacency.len()
    }

    /// Iterates over all vertex ids in ascending order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.adjacency.len()).map(VertexId::new)
    }

    /// Returns the successors of `vertex` in edge-insertion order, as a slice.
    ///
    /// An unknown vertex has no successors. Generic code reaches the same
    /// sequence through [`Successors::successors`].
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        self.adjacency
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates over all edges as `(source, target)` pairs.
    ///
    /// Edges are grouped by source in ascending order and, within a source,
    /// listed in insertion order. Re-adding them in this order rebuilds an
    /// identical graph.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |&target| (VertexId::new(source), target))
            })
    }

    /// Returns the number of outgoing edges of `vertex`.
    #[must_use]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).len()
    }

    /// Returns the in-degree of every vertex, indexed by vertex id.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut in_degree = vec![0; self.adjacency.len()];
        for (_, target) in self.edges() {
            in_degree[target.index()] += 1;
        }
        in_degree
    }

    /// Returns the vertices without incoming edges, in ascending order.
    #[must_use]
    pub fn sources(&self) -> Vec<VertexId> {
        self.in_degrees()
            .iter()
            .enumerate()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(index, _)| VertexId::new(index))
            .collect()
    }

    /// Visits every vertex exactly once in depth-first pre-order.
    ///
    /// The traversal starts at vertex `0`; once its component is exhausted,
    /// the remaining vertices are scanned in ascending order and each one
    /// still unvisited starts a fresh traversal. See
    /// [`algorithms::dfs_all`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtgraph::{Graph, VertexId};
    ///
    /// let graph = Graph::from_edges(5, [(0, 3), (3, 4), (4, 1), (2, 1), (2, 0)])?;
    /// let order: Vec<usize> = graph.dfs().into_iter().map(VertexId::index).collect();
    /// assert_eq!(order, vec![0, 3, 4, 1, 2]);
    /// # Ok::<(), adtgraph::Error>(())
    /// ```
    #[must_use]
    pub fn dfs(&self) -> Vec<VertexId> {
        algorithms::dfs_all(self).collect()
    }

    /// Computes a topological order, or reports that the graph has a cycle.
    ///
    /// See [`algorithms::topological_sort`].
    ///
    /// # Errors
    ///
    /// Only fails if the algorithm's internal bookkeeping is inconsistent.
    pub fn topo_sort(&self) -> Result<TopoSort> {
        algorithms::topological_sort(self)
    }

    /// Cycle check by depth-first recursion-stack colouring.
    ///
    /// See [`algorithms::is_cyclic`].
    ///
    /// # Errors
    ///
    /// Only fails if the algorithm's internal bookkeeping is inconsistent.
    pub fn is_cyclic(&self) -> Result<bool> {
        algorithms::is_cyclic(self)
    }

    /// Cycle check by breadth-first three-colour exploration.
    ///
    /// See [`algorithms::is_cyclic_bfs`].
    ///
    /// # Errors
    ///
    /// Only fails if the algorithm's internal bookkeeping is inconsistent.
    pub fn is_cyclic_bfs(&self) -> Result<bool> {
        algorithms::is_cyclic_bfs(self)
    }

    /// Cycle check by Kahn-style in-degree reduction.
    ///
    /// See [`algorithms::is_cyclic_kahn`].
    ///
    /// # Errors
    ///
    /// Only fails if the algorithm's internal bookkeeping is inconsistent.
    pub fn is_cyclic_kahn(&self) -> Result<bool> {
        algorithms::is_cyclic_kahn(self)
    }

    /// Returns one cycle as a closed path, if the graph has any.
    ///
    /// See [`algorithms::find_cycle`].
    ///
    /// # Errors
    ///
    /// Only fails if the algorithm's internal bookkeeping is inconsistent.
    pub fn find_cycle(&self) -> Result<Option<Vec<VertexId>>> {
        let cycle = algorithms::find_cycle(self)?;
        if let Some(path) = &cycle {
            debug!("found cycle of length {}", path.len() - 1);
        }
        Ok(cycle)
    }
}

impl GraphBase for Graph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.adjacency.len()).map(VertexId::new)
    }
}

impl Successors for Graph {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.neighbors(vertex).iter().copied()
    }
}
