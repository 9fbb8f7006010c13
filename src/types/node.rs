//! Graph vertices.

use serde::Serialize;

/// External vertex identifier (1-based in the matrix text format).
pub type NodeId = u32;

/// A vertex and the arena handles of its outgoing arcs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Vertex identifier, unique within a graph.
    pub id: NodeId,
    /// Vertex weight, meaningful for vertex-weighted graphs only.
    pub weight: f64,
    /// Arc handles in insertion order.
    #[serde(skip)]
    pub(crate) arcs: Vec<usize>,
}

impl Node {
    /// Create a vertex with no arcs and weight 0.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            weight: 0.0,
            arcs: Vec::new(),
        }
    }

    /// Number of outgoing arcs.
    pub fn out_degree(&self) -> usize {
        self.arcs.len()
    }

    /// Arc handles, most recently inserted first.
    pub(crate) fn arc_handles(&self) -> impl Iterator<Item = usize> + '_ {
        self.arcs.iter().rev().copied()
    }
}
