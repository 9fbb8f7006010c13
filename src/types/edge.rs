//! The arc record stored per source vertex.

use serde::Serialize;

use super::NodeId;

/// Index of a logical edge. Both arcs of an undirected edge share it.
pub type EdgeId = usize;

/// A directed arc from `source_id` to `target_id`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Logical edge index (column in the incidence matrix).
    pub id: EdgeId,
    /// Vertex owning this arc.
    pub source_id: NodeId,
    /// Vertex the arc points at.
    pub target_id: NodeId,
    /// Edge weight (0.0 for unweighted graphs).
    pub weight: f64,
}

impl Edge {
    /// Create a new arc.
    pub fn new(id: EdgeId, source_id: NodeId, target_id: NodeId, weight: f64) -> Self {
        Self {
            id,
            source_id,
            target_id,
            weight,
        }
    }

    /// The same logical edge seen from the other endpoint.
    pub fn reversed(&self) -> Self {
        Self {
            id: self.id,
            source_id: self.target_id,
            target_id: self.source_id,
            weight: self.weight,
        }
    }

    /// Whether the arc starts and ends at the same vertex.
    pub fn is_loop(&self) -> bool {
        self.source_id == self.target_id
    }
}
