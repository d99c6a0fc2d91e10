//! Graphviz DOT rendering for [`Graph`].

use std::fmt::Write;

use crate::graph::Graph;

/// Escapes a string for use inside a quoted DOT identifier or label.
fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}

impl Graph {
    /// Renders the graph in Graphviz DOT format.
    ///
    /// Every vertex becomes a node `n<id>` labelled with its id, so isolated
    /// vertices are shown too. Every stored edge becomes one edge statement,
    /// duplicates included, in the order of [`Graph::edges`]. The optional
    /// `name` is used as the graph identifier and label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtgraph::Graph;
    ///
    /// let graph = Graph::from_edges(2, [(0, 1)])?;
    /// let dot = graph.to_dot(Some("pair"));
    /// assert!(dot.starts_with("digraph \"pair\" {"));
    /// assert!(dot.contains("n0 -> n1;"));
    /// # Ok::<(), adtgraph::Error>(())
    /// ```
    #[must_use]
    pub fn to_dot(&self, name: Option<&str>) -> String {
        let mut dot = String::new();

        match name {
            Some(name) => {
                let name = escape_dot(name);
                let _ = writeln!(dot, "digraph \"{name}\" {{");
                let _ = writeln!(dot, "    label=\"{name}\";");
                dot.push_str("    labelloc=t;\n");
            }
            None => dot.push_str("digraph G {\n"),
        }
        dot.push_str("    node [shape=circle];\n\n");

        for vertex in self.vertex_ids() {
            let _ = writeln!(dot, "    n{vertex} [label=\"{vertex}\"];");
        }

        if self.edge_count() > 0 {
            dot.push('\n');
        }
        for (source, target) in self.edges() {
            let _ = writeln!(dot, "    n{source} -> n{target};");
        }

        dot.push_str("}\n");
        dot
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{dot::escape_dot, Graph};

    #[test]
    fn test_escape_dot() {
        assert_eq!(escape_dot("plain"), "plain");
        assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_dot("a\\b"), "a\\\\b");
        assert_eq!(escape_dot("l1\r\nl2"), "l1\\nl2");
    }

    #[test]
    fn test_to_dot_lists_vertices_and_edges() {
        let graph = Graph::from_edges(4, [(0, 1), (0, 1), (1, 1)]).unwrap();
        let dot = graph.to_dot(None);

        assert!(dot.starts_with("digraph G {\n"));
        assert!(dot.ends_with("}\n"));
        for vertex in 0..4 {
            assert!(dot.contains(&format!("n{vertex} [label=\"{vertex}\"];")));
        }
        assert_eq!(dot.matches("n0 -> n1;").count(), 2);
        assert!(dot.contains("n1 -> n1;"));
    }

    #[test]
    fn test_to_dot_named() {
        let graph = Graph::new(1);
        let dot = graph.to_dot(Some("build \"deps\""));
        assert!(dot.starts_with("digraph \"build \\\"deps\\\"\" {\n"));
        assert!(dot.contains("label=\"build \\\"deps\\\"\";"));
        assert!(!dot.contains("->"));
    }
}
