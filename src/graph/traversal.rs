//! Graph traversal algorithms (BFS, DFS) over the adjacency matrix.

use std::collections::VecDeque;

use crate::structures::{Matrix, NodeIndex, StructureDeriver};
use crate::types::{GraphResult, NodeId};

use super::Graph;

/// A vertex discovered during a walk, with the index it was reached from.
pub(crate) type Discovery = (Option<usize>, usize);

/// Depth-first walk from `start`, scanning neighbours in ascending index
/// order. Uses an explicit stack but yields the same discovery sequence as
/// the recursive formulation.
pub(crate) fn depth_first_walk(
    matrix: &Matrix,
    start: usize,
    visited: &mut [bool],
) -> Vec<Discovery> {
    let order = matrix.len();
    let mut discovered = vec![(None, start)];
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    visited[start] = true;

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        let next = (cursor..order).find(|&n| matrix[node][n] != 0.0 && !visited[n]);
        match next {
            Some(neighbor) => {
                frame.1 = neighbor + 1;
                visited[neighbor] = true;
                discovered.push((Some(node), neighbor));
                stack.push((neighbor, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    discovered
}

/// Breadth-first walk from `start` with a FIFO queue.
pub(crate) fn breadth_first_walk(
    matrix: &Matrix,
    start: usize,
    visited: &mut [bool],
) -> Vec<Discovery> {
    let order = matrix.len();
    let mut discovered = vec![(None, start)];
    let mut queue: VecDeque<usize> = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in 0..order {
            if matrix[current][neighbor] != 0.0 && !visited[neighbor] {
                visited[neighbor] = true;
                discovered.push((Some(current), neighbor));
                queue.push_back(neighbor);
            }
        }
    }

    discovered
}

impl Graph {
    /// Depth-first search from a vertex id. Returns the visited subgraph
    /// with its discovery edges; vertices are inserted in discovery order.
    pub fn depth_first_search(&self, start_id: NodeId) -> GraphResult<Graph> {
        self.search(start_id, depth_first_walk)
    }

    /// Breadth-first search from a vertex id. Returns the visited subgraph
    /// with its discovery edges; vertices are inserted in discovery order.
    pub fn breadth_first_search(&self, start_id: NodeId) -> GraphResult<Graph> {
        self.search(start_id, breadth_first_walk)
    }

    fn search(
        &self,
        start_id: NodeId,
        walk: fn(&Matrix, usize, &mut [bool]) -> Vec<Discovery>,
    ) -> GraphResult<Graph> {
        let index = StructureDeriver::node_index(self);
        let start = index.require_index(start_id)?;
        let matrix = StructureDeriver::adjacency_matrix(self);
        let mut visited = vec![false; self.order()];

        let discovered = walk(&matrix, start, &mut visited);
        log::debug!(
            "Search from {start_id} visited {} of {} vertices",
            discovered.len(),
            self.order()
        );
        self.discovery_tree(&index, &matrix, &discovered)
    }

    /// Build the subgraph made of discovered vertices and discovery edges.
    fn discovery_tree(
        &self,
        index: &NodeIndex,
        matrix: &Matrix,
        discovered: &[Discovery],
    ) -> GraphResult<Graph> {
        let mut tree = Graph::new(
            discovered.len(),
            self.is_directed(),
            self.is_edge_weighted(),
            self.is_node_weighted(),
        );

        for &(_, vertex) in discovered {
            if let Some(id) = index.id_at(vertex) {
                tree.insert_node(id)?;
                if let Some(node) = self.find_node(id) {
                    tree.set_node_weight(id, node.weight)?;
                }
            }
        }

        for &(parent, vertex) in discovered {
            let Some(parent) = parent else { continue };
            if let (Some(source), Some(target)) = (index.id_at(parent), index.id_at(vertex)) {
                let weight = if self.is_edge_weighted() {
                    matrix[parent][vertex]
                } else {
                    0.0
                };
                tree.insert_edge(source, target, weight);
            }
        }

        Ok(tree)
    }
}
