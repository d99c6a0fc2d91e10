//! # adtgraph Prelude
//!
//! Convenient re-exports of the most commonly used types. Import this module
//! to get the graph, its identifiers and the algorithm entry points in one go.
//!
//! ```rust
//! use adtgraph::prelude::*;
//!
//! let graph = Graph::from_edges(2, [(0, 1)])?;
//! assert_eq!(topological_sort(&graph)?.into_order(), Some(vec![VertexId::new(0), VertexId::new(1)]));
//! # Ok::<(), adtgraph::Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all adtgraph operations
pub use crate::Error;

/// The result type used throughout adtgraph
pub use crate::Result;

// ================================================================================================
// Graph Model
// ================================================================================================

/// Adjacency-list directed graph and its vertex identifier
pub use crate::graph::{Graph, VertexId};

/// Traits the algorithms are written against
pub use crate::graph::{GraphBase, Successors};

/// Edge-list text parsing
pub use crate::graph::{parse_edge_list, MAX_VERTEX_COUNT};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Traversals
pub use crate::graph::algorithms::{bfs, dfs, dfs_all, postorder, reverse_postorder};

/// Topological ordering
pub use crate::graph::algorithms::{topological_sort, TopoSort};

/// Cycle detection
pub use crate::graph::algorithms::{
    find_cycle, is_cyclic, is_cyclic_bfs, is_cyclic_kahn, CycleStrategy,
};

// ================================================================================================
// Containers
// ================================================================================================

/// LIFO and FIFO containers used by the algorithms
pub use crate::adt::{Queue, Stack};
