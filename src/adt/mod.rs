//! Abstract data types used by the graph algorithms.
//!
//! - [`Stack`] - LIFO container; drives the explicit depth-first work stacks
//!   and the finish-order stack of the topological sort
//! - [`Queue`] - FIFO container; drives the breadth-first and Kahn-style
//!   algorithms
//!
//! Both are generic over their item type, so the graph code stores
//! [`crate::VertexId`] values directly. Accessing an empty container is a
//! recoverable [`crate::Error`] rather than a panic.

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;
