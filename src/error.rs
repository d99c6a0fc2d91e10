use thiserror::Error;

macro_rules! parse_error {
    // Single string version
    ($line:expr, $msg:expr) => {
        crate::Error::Parse {
            line: $line,
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($line:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::Parse {
            line: $line,
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which covers every error this library can return.
///
/// # Error Categories
///
/// ## Graph Construction Errors
/// - [`Error::InvalidVertex`] - A vertex id outside `0..vertex_count`
/// - [`Error::Parse`] - Malformed edge-list input
/// - [`Error::Io`] - Reading an edge-list file failed
///
/// ## Container Errors
/// - [`Error::EmptyStack`] - `pop`/`top` on an empty [`crate::Stack`]
/// - [`Error::EmptyQueue`] - `dequeue`/`front` on an empty [`crate::Queue`]
///
/// Inside the graph algorithms the container errors, as well as
/// [`Error::GraphError`], signal a broken internal invariant rather than a
/// property of the input. A cycle is never an error: it is reported through
/// [`crate::TopoSort::Cyclic`] or a `true` detector result.
///
/// # Examples
///
/// ```rust
/// use adtgraph::{Error, Graph};
///
/// let mut graph = Graph::new(2);
/// match graph.add_edge(0, 5) {
///     Err(Error::InvalidVertex { vertex, vertex_count }) => {
///         assert_eq!((vertex, vertex_count), (5, 2));
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex id was outside the graph's `0..vertex_count` range.
    ///
    /// Returned by [`crate::Graph::add_edge`] and everything built on top of
    /// it. The graph is left unchanged.
    #[error("vertex {vertex} does not exist in graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex id
        vertex: usize,
        /// Number of vertices in the graph
        vertex_count: usize,
    },

    /// Attempted to pop or peek an empty stack.
    #[error("Stack is empty")]
    EmptyStack,

    /// Attempted to dequeue from or peek an empty queue.
    #[error("Queue is empty")]
    EmptyQueue,

    /// The edge-list input could not be parsed.
    ///
    /// `line` is 1-based and refers to the input text.
    #[error("Parse error - line {line}: {message}")]
    Parse {
        /// Line of the input where the error was detected
        line: usize,
        /// What was wrong with that line
        message: String,
    },

    /// A graph algorithm found its own bookkeeping in an inconsistent state.
    #[error("{0}")]
    GraphError(String),

    /// File I/O error while loading a graph.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_vertex_message() {
        let err = Error::InvalidVertex {
            vertex: 7,
            vertex_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "vertex 7 does not exist in graph with 3 vertices"
        );
    }

    #[test]
    fn test_parse_error_macro() {
        let err = parse_error!(4, "expected {} fields, found {}", 2, 3);
        assert!(matches!(err, Error::Parse { line: 4, .. }));
        assert_eq!(err.to_string(), "Parse error - line 4: expected 2 fields, found 3");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
