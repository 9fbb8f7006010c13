//! Connectivity check.

use crate::graph::traversal::depth_first_walk;
use crate::graph::Graph;
use crate::structures::StructureDeriver;
use crate::types::GraphResult;
use crate::types::NodeId;

impl Graph {
    /// Whether a depth-first walk from matrix index 0 reaches every index.
    /// For directed graphs this is reachability from index 0, not strong
    /// connectivity. The empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        let order = self.order();
        if order == 0 {
            return true;
        }
        let matrix = StructureDeriver::adjacency_matrix(self);
        let mut visited = vec![false; order];
        depth_first_walk(&matrix, 0, &mut visited).len() == order
    }

    /// Number of vertices reachable from a vertex, itself included.
    pub fn reachable_count(&self, start_id: NodeId) -> GraphResult<usize> {
        let start = self.index_of(start_id)?;
        let matrix = StructureDeriver::adjacency_matrix(self);
        let mut visited = vec![false; self.order()];
        Ok(depth_first_walk(&matrix, start, &mut visited).len())
    }
}
