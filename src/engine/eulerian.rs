//! Eulerian cycle detection.

use serde::Serialize;

use crate::graph::Graph;
use crate::structures::{Matrix, StructureDeriver};

/// One traversed edge of the cycle, in matrix indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleEdge {
    pub source: usize,
    pub target: usize,
}

/// A closed walk using every edge once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EulerianCycle {
    pub edges: Vec<CycleEdge>,
}

impl EulerianCycle {
    /// Visited indices: each edge's source, then the closing target.
    pub fn vertices(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.edges.iter().map(|e| e.source).collect();
        if let Some(last) = self.edges.last() {
            out.push(last.target);
        }
        out
    }
}

impl Graph {
    /// Eulerian cycle starting at matrix index 0, or `None` when the graph
    /// is disconnected or some vertex has odd degree.
    ///
    /// The matrix is walked as if undirected: using `(u, v)` also consumes
    /// `(v, u)`.
    pub fn eulerian_cycle(&self) -> Option<EulerianCycle> {
        if !self.is_connected() {
            log::debug!("No Eulerian cycle: graph is disconnected");
            return None;
        }
        let matrix = StructureDeriver::adjacency_matrix(self);
        if let Some(odd) = first_odd_degree(&matrix) {
            log::debug!("No Eulerian cycle: index {odd} has odd degree");
            return None;
        }
        if matrix.is_empty() {
            return Some(EulerianCycle { edges: Vec::new() });
        }

        let mut edges = walk_edges(&matrix, 0);
        edges.reverse();
        Some(EulerianCycle { edges })
    }
}

/// First row with an odd count of non-zero cells.
fn first_odd_degree(matrix: &Matrix) -> Option<usize> {
    matrix
        .iter()
        .position(|row| row.iter().filter(|&&w| w != 0.0).count() % 2 != 0)
}

/// Post-order edge walk: an edge is emitted once everything reachable
/// through it has been consumed.
fn walk_edges(matrix: &Matrix, start: usize) -> Vec<CycleEdge> {
    let order = matrix.len();
    let mut used = vec![vec![false; order]; order];
    let mut emitted = Vec::new();
    // (vertex, next neighbour to scan, edge that entered this vertex)
    let mut stack: Vec<(usize, usize, Option<CycleEdge>)> = vec![(start, 0, None)];

    while let Some(frame) = stack.last_mut() {
        let (vertex, cursor, _) = *frame;
        let next = (cursor..order).find(|&n| matrix[vertex][n] != 0.0 && !used[vertex][n]);
        match next {
            Some(neighbor) => {
                frame.1 = neighbor + 1;
                used[vertex][neighbor] = true;
                used[neighbor][vertex] = true;
                let edge = CycleEdge {
                    source: vertex,
                    target: neighbor,
                };
                stack.push((neighbor, 0, Some(edge)));
            }
            None => {
                if let Some((_, _, Some(edge))) = stack.pop() {
                    emitted.push(edge);
                }
            }
        }
    }

    emitted
}
