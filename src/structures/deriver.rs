//! Dense matrix and table projections of a Graph.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::EdgeId;

use super::NodeIndex;

/// Dense `rows × cols` table of cell values.
pub type Matrix = Vec<Vec<f64>>;

/// One row of the incidence table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncidenceEntry {
    /// Matrix index of the arc's source vertex.
    pub node: usize,
    /// Logical edge index.
    pub edge: EdgeId,
    /// Arc weight, or 1 when the graph is not edge-weighted.
    pub weight: f64,
}

/// Everything `StructureDeriver::derive` produces in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStructures {
    /// `order × order`; cell = weight (or 1), 0 = no edge.
    pub adjacency_matrix: Matrix,
    /// `order × edge_count`; see [`incidence_values`].
    pub incidence_matrix: Matrix,
    /// One entry per stored arc, list order.
    pub incidence_table: Vec<IncidenceEntry>,
}

/// Values recorded at the (source, target) rows of an arc's incidence column.
///
/// Undirected arcs record 1 at both ends, directed weighted arcs record
/// `-weight` at the source and `+weight` at the target, directed unweighted
/// arcs record 1 at both ends.
pub fn incidence_values(directed: bool, edge_weighted: bool, weight: f64) -> (f64, f64) {
    if directed && edge_weighted {
        (-weight, weight)
    } else {
        (1.0, 1.0)
    }
}

/// Stateless projection of a Graph onto matrices.
pub struct StructureDeriver;

impl StructureDeriver {
    /// Id-to-index mapping under the graph's own policy.
    pub fn node_index(graph: &Graph) -> NodeIndex {
        NodeIndex::build(graph, graph.index_mapping())
    }

    /// Derive adjacency matrix, incidence matrix and incidence table.
    pub fn derive(graph: &Graph) -> GraphStructures {
        let order = graph.order();
        let columns = graph.edge_count();
        let index = Self::node_index(graph);

        let mut adjacency_matrix = vec![vec![0.0; order]; order];
        let mut incidence_matrix = vec![vec![0.0; columns]; order];
        let mut incidence_table = Vec::new();

        for node in graph.nodes_in_list_order() {
            let Some(source) = index.index_of(node.id) else {
                continue;
            };
            for edge in graph.arcs_of(node) {
                let Some(target) = index.index_of(edge.target_id) else {
                    log::warn!(
                        "Skipping dangling arc {} -> {}",
                        edge.source_id,
                        edge.target_id
                    );
                    continue;
                };
                let cell = Self::cell_value(graph, edge.weight);
                adjacency_matrix[source][target] = cell;

                if edge.id < columns {
                    let (at_source, at_target) = incidence_values(
                        graph.is_directed(),
                        graph.is_edge_weighted(),
                        edge.weight,
                    );
                    incidence_matrix[source][edge.id] = at_source;
                    incidence_matrix[target][edge.id] = at_target;
                }

                incidence_table.push(IncidenceEntry {
                    node: source,
                    edge: edge.id,
                    weight: cell,
                });
            }
        }

        log::debug!(
            "Derived structures: order={order}, edges={columns}, arcs={}",
            incidence_table.len()
        );

        GraphStructures {
            adjacency_matrix,
            incidence_matrix,
            incidence_table,
        }
    }

    /// Only the adjacency matrix, as used by the algorithms.
    pub fn adjacency_matrix(graph: &Graph) -> Matrix {
        let order = graph.order();
        let index = Self::node_index(graph);
        let mut matrix = vec![vec![0.0; order]; order];
        for edge in graph.arcs() {
            let source = index.index_of(edge.source_id);
            let target = index.index_of(edge.target_id);
            if let (Some(s), Some(t)) = (source, target) {
                matrix[s][t] = Self::cell_value(graph, edge.weight);
            }
        }
        matrix
    }

    fn cell_value(graph: &Graph, weight: f64) -> f64 {
        if graph.is_edge_weighted() {
            weight
        } else {
            1.0
        }
    }
}
