//! Edge-list text format.
//!
//! A line-oriented format for storing graphs:
//!
//! - `#` starts a comment that runs to the end of the line
//! - blank lines are ignored
//! - the first significant line is the vertex count, at most
//!   [`MAX_VERTEX_COUNT`]
//! - every further significant line is one edge, written `u v` or `u -> v`
//!
//! [`Graph`]'s [`Display`](fmt::Display) implementation writes the same
//! format, one `u -> v` line per stored edge, so formatting a graph and
//! parsing the result rebuilds an identical graph.

use std::{fmt, path::Path, str::FromStr};

use log::debug;

use crate::{graph::Graph, Result};

/// Largest vertex count the edge-list parser accepts.
///
/// The whole adjacency table is allocated when the header line is read, so
/// the header alone decides how much memory a parse needs.
pub const MAX_VERTEX_COUNT: usize = 1 << 24;

/// Parses a graph from edge-list text.
///
/// # Errors
///
/// - [`crate::Error::Parse`] with the 1-based line number for a malformed
///   vertex count, a vertex count above [`MAX_VERTEX_COUNT`] or one that
///   cannot be allocated, a malformed edge line, or input without a vertex
///   count
/// - [`crate::Error::InvalidVertex`] for an edge endpoint outside the
///   declared vertex range
///
/// # Examples
///
/// ```rust
/// use adtgraph::{graph::parse_edge_list, Error};
///
/// let graph = parse_edge_list("# triangle\n3\n0 1\n1 -> 2\n2 0  # closes it\n")?;
/// assert_eq!((graph.vertex_count(), graph.edge_count()), (3, 3));
///
/// let err = parse_edge_list("3\n0 1 2\n").unwrap_err();
/// assert!(matches!(err, Error::Parse { line: 2, .. }));
/// # Ok::<(), adtgraph::Error>(())
/// ```
pub fn parse_edge_list(input: &str) -> Result<Graph> {
    let mut graph: Option<Graph> = None;
    let mut last_line = 0;

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        last_line = line;

        let content = strip_comment(raw).trim();
        if content.is_empty() {
            continue;
        }

        match graph.as_mut() {
            None => graph = Some(allocate_graph(parse_vertex_count(content, line)?, line)?),
            Some(graph) => {
                let (source, target) = parse_edge(content, line)?;
                graph.add_edge(source, target)?;
            }
        }
    }

    let graph = graph.ok_or_else(|| parse_error!(last_line.max(1), "missing vertex count"))?;
    debug!(
        "parsed edge list: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(content, _)| content)
}

fn parse_vertex_count(content: &str, line: usize) -> Result<usize> {
    let count: usize = content
        .parse()
        .map_err(|_| parse_error!(line, "invalid vertex count '{}'", content))?;

    if count > MAX_VERTEX_COUNT {
        return Err(parse_error!(
            line,
            "vertex count {} exceeds the maximum of {}",
            count,
            MAX_VERTEX_COUNT
        ));
    }
    Ok(count)
}

fn allocate_graph(vertex_count: usize, line: usize) -> Result<Graph> {
    Graph::try_new(vertex_count).map_err(|err| parse_error!(line, "{}", err))
}

fn parse_edge(content: &str, line: usize) -> Result<(usize, usize)> {
    let (source, target) = match content.split_once("->") {
        Some((source, target)) => (source.trim(), target.trim()),
        None => {
            let mut tokens = content.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(source), Some(target), None) => (source, target),
                _ => {
                    return Err(parse_error!(
                        line,
                        "expected 'u v' or 'u -> v', found '{}'",
                        content
                    ))
                }
            }
        }
    };

    Ok((parse_vertex(source, line)?, parse_vertex(target, line)?))
}

fn parse_vertex(token: &str, line: usize) -> Result<usize> {
    token
        .parse()
        .map_err(|_| parse_error!(line, "invalid vertex id '{}'", token))
}

impl FromStr for Graph {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_edge_list(s)
    }
}

impl fmt::Display for Graph {
    /// Writes the graph in edge-list format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertex_count())?;
        for (source, target) in self.edges() {
            writeln!(f, "{source} -> {target}")?;
        }
        Ok(())
    }
}

impl Graph {
    /// Loads a graph from an edge-list file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read, otherwise the
    /// errors of [`parse_edge_list`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Graph> {
        let input = std::fs::read_to_string(path)?;
        parse_edge_list(&input)
    }
}
