//! Vertex identifier for directed graphs.
//!
//! Vertices are dense integer ids `0..vertex_count`. [`VertexId`] wraps that
//! index so it cannot be confused with counts, degrees or positions in an
//! ordering.

use std::fmt;

/// A strongly-typed identifier for a vertex of a [`Graph`](crate::Graph).
///
/// Vertex ids are the dense indices `0..vertex_count` fixed when the graph
/// is created. Every algorithm in this crate returns its results as
/// `VertexId` values.
///
/// # Examples
///
/// ```rust
/// use adtgraph::{Graph, VertexId};
///
/// let mut graph = Graph::new(2);
/// graph.add_edge(0, 1)?;
///
/// let successors = graph.neighbors(VertexId::new(0));
/// assert_eq!(successors, &[VertexId::new(1)]);
/// assert_eq!(successors[0].index(), 1);
/// # Ok::<(), adtgraph::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a `VertexId` from a raw index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index, suitable for indexing per-vertex vectors.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    /// Displays the bare index, matching the edge-list text format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
