//! GraphViz DOT output.

use std::collections::HashSet;

use crate::graph::Graph;
use crate::types::NodeId;

/// Emits DOT descriptions of graphs and traversal sequences.
pub struct DotWriter;

impl DotWriter {
    /// One statement per vertex and one per logical edge, in list order.
    /// Undirected pairs are written once. Non-zero weights become labels.
    pub fn graph_to_dot(graph: &Graph) -> String {
        let directed = graph.is_directed();
        let connector = if directed { "->" } else { "--" };
        let mut out = String::from(if directed { "digraph G {\n" } else { "graph G {\n" });
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();

        for node in graph.nodes_in_list_order() {
            out.push_str(&format!("  {};\n", node.id));

            for edge in graph.arcs_of(node) {
                if !seen.insert((edge.source_id, edge.target_id)) {
                    continue;
                }
                if !directed {
                    seen.insert((edge.target_id, edge.source_id));
                }
                let label = if edge.weight != 0.0 {
                    format!(" [label={}]", edge.weight)
                } else {
                    String::new()
                };
                out.push_str(&format!(
                    "  {} {connector} {}{label};\n",
                    edge.source_id, edge.target_id
                ));
            }
        }

        out.push_str("}\n");
        out
    }

    /// A path over a visiting sequence: position `i` is drawn as a vertex
    /// labelled with `ids[i]`, joined to position `i + 1`. `None` when the
    /// sequence is empty.
    pub fn path_graph(ids: &[NodeId]) -> Option<String> {
        if ids.is_empty() {
            return None;
        }
        let mut lines = vec!["graph G {".to_string()];
        for (i, id) in ids.iter().enumerate() {
            lines.push(format!("  {i} [label=\"{id}\"];"));
            if i + 1 < ids.len() {
                lines.push(format!("  {i} -- {};", i + 1));
            }
        }
        lines.push("}".to_string());
        Some(lines.join("\n"))
    }
}

impl Graph {
    /// DOT description of this graph.
    pub fn to_graphviz(&self) -> String {
        DotWriter::graph_to_dot(self)
    }
}
