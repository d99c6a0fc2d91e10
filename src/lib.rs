// Copyright 2025 The adtgraph Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # adtgraph
//!
//! Directed graphs over dense integer vertex ids `0..N`, stored as adjacency
//! lists, together with the classic algorithms that operate on them:
//!
//! - **Depth-first traversal** covering every vertex, including disconnected
//!   components and vertices unreachable from `0`
//! - **Topological ordering** by reversed DFS finish order, reporting cycles
//!   through an explicit flag instead of an error
//! - **Cycle detection** through three independent strategies (DFS
//!   recursion-stack colouring, BFS three-colour exploration and Kahn's
//!   in-degree reduction) which are kept separate so they can be
//!   cross-validated against each other
//!
//! The algorithms are written against the [`graph::Successors`] trait and use
//! explicit work stacks, so deeply chained graphs do not exhaust the call
//! stack. The small [`Stack`] and [`Queue`] containers they rely on are
//! exported as well.
//!
//! ## Quick Start
//!
//! ```rust
//! use adtgraph::prelude::*;
//!
//! let mut graph = Graph::new(5);
//! graph.add_edge(0, 3)?;
//! graph.add_edge(3, 4)?;
//! graph.add_edge(4, 1)?;
//! graph.add_edge(2, 1)?;
//! graph.add_edge(2, 0)?;
//!
//! let dfs: Vec<usize> = graph.dfs().iter().map(|v| v.index()).collect();
//! assert_eq!(dfs, vec![0, 3, 4, 1, 2]);
//!
//! let order = graph.topo_sort()?;
//! assert!(!order.has_cycle());
//!
//! assert!(!graph.is_cyclic()?);
//! assert!(!graph.is_cyclic_bfs()?);
//! assert!(!graph.is_cyclic_kahn()?);
//! # Ok::<(), adtgraph::Error>(())
//! ```
//!
//! ## Loading Graphs
//!
//! Graphs can be read from a small edge-list text format: the first
//! significant line holds the vertex count, every further line one edge.
//!
//! ```rust
//! use adtgraph::Graph;
//!
//! let graph: Graph = "3\n0 -> 1\n1 -> 2\n2 -> 0\n".parse()?;
//! assert!(graph.topo_sort()?.has_cycle());
//! # Ok::<(), adtgraph::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `debug` for algorithm results,
//! `trace` for per-vertex events. Install any logger in the binary to see them.

#[macro_use]
pub(crate) mod error;

pub mod adt;
pub mod graph;
pub mod prelude;

/// `adtgraph` Result type
///
/// A type alias for `std::result::Result<T, Error>` used by every fallible
/// operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// `adtgraph` Error type
///
/// Every fallible operation in this crate reports one of its variants.
pub use error::Error;

pub use adt::{Queue, Stack};
pub use graph::{CycleStrategy, Graph, TopoSort, VertexId};
