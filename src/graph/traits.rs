//! Trait definitions for graph abstractions.
//!
//! The algorithms in [`crate::graph::algorithms`] are written against these
//! traits rather than against [`Graph`](crate::Graph) directly:
//!
//! - [`GraphBase`] - Vertex count and vertex iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)
//!
//! Implementations must use dense ids: every id yielded by
//! [`GraphBase::vertex_ids`] or [`Successors::successors`] is below
//! [`GraphBase::vertex_count`]. The algorithms size their per-vertex state by
//! the vertex count and index it directly.

use crate::graph::VertexId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in ascending order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::Successors, Graph, VertexId};
///
/// let graph = Graph::from_edges(3, [(0, 2), (0, 1)])?;
///
/// let successors: Vec<VertexId> = graph.successors(VertexId::new(0)).collect();
/// assert_eq!(successors, vec![VertexId::new(2), VertexId::new(1)]);
/// assert_eq!(graph.neighbors(VertexId::new(0)), successors.as_slice());
/// # Ok::<(), adtgraph::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of `vertex`.
    ///
    /// Successors are yielded in edge-insertion order. Duplicate edges yield
    /// the same successor more than once; a self-loop yields `vertex` itself.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}
