//! Graph algorithms over the [`Successors`](crate::graph::Successors) trait.
//!
//! # Traversal
//!
//! - [`dfs`] / [`dfs_all`] - Depth-first pre-order, rooted or whole-graph
//! - [`bfs`] - Breadth-first order from a root
//! - [`postorder`] / [`reverse_postorder`] - Depth-first finish order
//!
//! # Ordering
//!
//! - [`topological_sort`] - Depth-first topological sort reporting cycles as [`TopoSort::Cyclic`]
//!
//! # Cycle Detection
//!
//! - [`is_cyclic`] - Depth-first path colouring
//! - [`is_cyclic_bfs`] - Breadth-first three-colour search
//! - [`is_cyclic_kahn`] - Kahn's in-degree reduction
//! - [`find_cycle`] - A witness cycle as a closed path
//! - [`CycleStrategy`] - Runtime selection between the three detectors
//!
//! No algorithm here recurses natively; depth-first work lives on explicit
//! heap stacks, so a path of any length fits in memory.

mod cycles;
mod topological;
mod traversal;

pub use cycles::{find_cycle, is_cyclic, is_cyclic_bfs, is_cyclic_kahn, CycleStrategy};
pub use topological::{topological_sort, TopoSort};
pub use traversal::{bfs, dfs, dfs_all, postorder, reverse_postorder, BfsIterator, DfsIterator};
