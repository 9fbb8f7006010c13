//! Vertex id to matrix index mapping.

use std::collections::HashMap;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, NodeId};

/// Policy assigning dense matrix indices to vertex ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexMapping {
    /// Walk vertices in list order (most recent first), assigning indices
    /// downwards from `order - 1`. A graph whose vertices `1..=order` were
    /// inserted ascending ends up with `index == id - 1`.
    #[default]
    ListPosition,
    /// Sort vertex ids ascending and number them from 0.
    AscendingId,
}

/// A materialised mapping between vertex ids and matrix indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIndex {
    by_id: HashMap<NodeId, usize>,
    by_index: Vec<Option<NodeId>>,
}

impl NodeIndex {
    /// Compute the mapping for the graph's current vertices.
    pub fn build(graph: &Graph, mapping: IndexMapping) -> Self {
        let order = graph.order();
        let mut by_id = HashMap::with_capacity(graph.node_count());
        let mut by_index = vec![None; order];

        match mapping {
            IndexMapping::ListPosition => {
                let indices = (0..order).rev();
                for (node, index) in graph.nodes_in_list_order().zip(indices) {
                    by_id.insert(node.id, index);
                    by_index[index] = Some(node.id);
                }
            }
            IndexMapping::AscendingId => {
                let mut ids = graph.node_ids();
                ids.sort_unstable();
                for (index, id) in ids.into_iter().take(order).enumerate() {
                    by_id.insert(id, index);
                    by_index[index] = Some(id);
                }
            }
        }

        Self { by_id, by_index }
    }

    /// Matrix index of a vertex, if mapped.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Matrix index of a vertex or `VertexNotFound`.
    pub fn require_index(&self, id: NodeId) -> GraphResult<usize> {
        self.index_of(id).ok_or(GraphError::VertexNotFound(id))
    }

    /// Vertex id occupying a matrix index, if any.
    pub fn id_at(&self, index: usize) -> Option<NodeId> {
        self.by_index.get(index).copied().flatten()
    }

    /// Number of mapped vertices.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Occupied indices in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_index
            .iter()
            .enumerate()
            .filter_map(|(i, id)| id.map(|_| i))
    }
}
