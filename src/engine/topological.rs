//! Topological sort with explicit cycle detection.

use crate::graph::Graph;
use crate::structures::StructureDeriver;
use crate::types::{GraphError, GraphResult, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Finished,
}

impl Graph {
    /// Vertex ids in topological order.
    ///
    /// Depth-first from every unvisited index in ascending order; a vertex
    /// is recorded when it finishes and the finish order is reversed. A
    /// neighbour still on the active path is a back edge and fails with
    /// `CyclicGraph`.
    pub fn topological_sort(&self) -> GraphResult<Vec<NodeId>> {
        if !self.is_directed() {
            return Err(GraphError::InvalidGraphKind(
                "topological sort requires a directed graph".to_string(),
            ));
        }

        let order = self.order();
        let index = StructureDeriver::node_index(self);
        let matrix = StructureDeriver::adjacency_matrix(self);
        let mut marks = vec![Mark::Unvisited; order];
        let mut finished: Vec<usize> = Vec::with_capacity(order);

        for root in index.occupied() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::OnPath;
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

            while let Some(frame) = stack.last_mut() {
                let (vertex, cursor) = *frame;
                let next = (cursor..order).find(|&n| matrix[vertex][n] != 0.0);
                match next {
                    Some(neighbor) => {
                        frame.1 = neighbor + 1;
                        match marks[neighbor] {
                            Mark::Unvisited => {
                                marks[neighbor] = Mark::OnPath;
                                stack.push((neighbor, 0));
                            }
                            Mark::OnPath => {
                                let id = index.id_at(neighbor).unwrap_or_default();
                                log::debug!("Back edge into vertex {id}");
                                return Err(GraphError::CyclicGraph(id));
                            }
                            Mark::Finished => {}
                        }
                    }
                    None => {
                        marks[vertex] = Mark::Finished;
                        finished.push(vertex);
                        stack.pop();
                    }
                }
            }
        }

        Ok(finished
            .into_iter()
            .rev()
            .filter_map(|i| index.id_at(i))
            .collect())
    }
}
