//! Human-readable text for algorithm results. Indices are printed 1-based.

use crate::engine::{EulerianCycle, MstResult, ShortestPaths};
use crate::types::NodeId;

/// `Peso total: <sum>` then one `aresta: (s,t), peso: w` line per tree edge.
pub fn format_prim_result(result: &MstResult) -> String {
    let mut text = format!("Peso total: {}\n", result.total_weight);
    for edge in &result.edges {
        text.push_str(&format!(
            "aresta: ({},{}), peso: {}\n",
            edge.source + 1,
            edge.target + 1,
            edge.weight
        ));
    }
    for v in &result.unreachable {
        text.push_str(&format!("vertice: {}, inalcancavel\n", v + 1));
    }
    text
}

/// The closed walk as `1 - 2 - 3 - 1`.
pub fn format_eulerian_cycle(cycle: &EulerianCycle) -> String {
    cycle
        .vertices()
        .iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(" - ")
}

/// One line per target: the path and its cost, or `sem caminho`.
pub fn format_shortest_paths(result: &ShortestPaths) -> String {
    let mut text = String::new();
    for entry in &result.paths {
        match entry.weight {
            Some(weight) => {
                let path = entry
                    .path
                    .iter()
                    .map(|v| (v + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                text.push_str(&format!("{}: {path} (custo: {weight})\n", entry.target + 1));
            }
            None => text.push_str(&format!("{}: sem caminho\n", entry.target + 1)),
        }
    }
    text
}

/// Vertex ids joined with ` -> `.
pub fn format_topological_order(order: &[NodeId]) -> String {
    order
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
