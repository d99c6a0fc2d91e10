//! Directed graph model and algorithms.
//!
//! # Architecture
//!
//! The module separates storage from algorithms:
//!
//! - [`Graph`] - Adjacency-list storage over dense vertex ids
//! - [`VertexId`] - Strongly-typed vertex identifier
//! - [`GraphBase`] / [`Successors`] - Traits the algorithms are generic over
//! - [`algorithms`] - Traversal, topological sort and cycle detection
//!
//! [`Graph`] also reads and writes a line-oriented edge-list text format
//! ([`parse_edge_list`], [`std::str::FromStr`], [`std::fmt::Display`]) and
//! renders Graphviz DOT through [`Graph::to_dot`].
//!
//! # Edge-List Format
//!
//! ```text
//! # five vertices
//! 5
//! 0 -> 3
//! 3 4        # whitespace-separated pairs work too
//! 4 -> 1
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adtgraph::graph::{algorithms, parse_edge_list};
//!
//! let graph = parse_edge_list("3\n0 -> 1\n1 -> 2\n")?;
//! assert_eq!(graph.edge_count(), 2);
//! assert!(!algorithms::is_cyclic_kahn(&graph)?);
//! # Ok::<(), adtgraph::Error>(())
//! ```

pub mod algorithms;
mod directed;
mod dot;
mod parse;
mod traits;
mod vertex;

pub use algorithms::{CycleStrategy, TopoSort};
pub use directed::Graph;
pub use parse::{parse_edge_list, MAX_VERTEX_COUNT};
pub use traits::{GraphBase, Successors};
pub use vertex::VertexId;
