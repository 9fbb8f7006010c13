//! Minimum spanning tree (Prim, array based).

use serde::Serialize;

use crate::graph::Graph;
use crate::structures::StructureDeriver;

/// One tree edge, in matrix indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MstEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Result of [`Graph::prim_mst`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResult {
    /// Tree edges for every reached vertex other than the root.
    pub edges: Vec<MstEdge>,
    /// Sum of the tree edge weights.
    pub total_weight: f64,
    /// Matrix indices the tree could not reach.
    pub unreachable: Vec<usize>,
}

impl MstResult {
    /// Whether the tree spans every index of the matrix.
    pub fn is_spanning(&self) -> bool {
        self.unreachable.is_empty()
    }
}

impl Graph {
    /// Prim's algorithm rooted at matrix index 0, selecting the next
    /// vertex by linear scan.
    pub fn prim_mst(&self) -> MstResult {
        let order = self.order();
        let matrix = StructureDeriver::adjacency_matrix(self);
        let mut parent: Vec<Option<usize>> = vec![None; order];
        let mut key: Vec<f64> = vec![f64::INFINITY; order];
        let mut in_tree = vec![false; order];

        if order == 0 {
            return MstResult {
                edges: Vec::new(),
                total_weight: 0.0,
                unreachable: Vec::new(),
            };
        }
        key[0] = 0.0;

        for _ in 0..order {
            let Some(u) = min_key(&key, &in_tree) else {
                break;
            };
            in_tree[u] = true;

            for v in 0..order {
                let w = matrix[u][v];
                if w != 0.0 && !in_tree[v] && w < key[v] {
                    parent[v] = Some(u);
                    key[v] = w;
                }
            }
        }

        let mut edges = Vec::with_capacity(order.saturating_sub(1));
        let mut unreachable = Vec::new();
        for v in 1..order {
            match parent[v] {
                Some(p) => edges.push(MstEdge {
                    source: p,
                    target: v,
                    weight: matrix[p][v],
                }),
                None => unreachable.push(v),
            }
        }
        let total_weight = edges.iter().map(|e| e.weight).sum();

        log::debug!(
            "Prim: {} edges, total weight {total_weight}, {} unreachable",
            edges.len(),
            unreachable.len()
        );

        MstResult {
            edges,
            total_weight,
            unreachable,
        }
    }
}

/// Unvisited index with the smallest finite key.
fn min_key(key: &[f64], in_tree: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for v in 0..key.len() {
        if in_tree[v] || !key[v].is_finite() {
            continue;
        }
        if best.map_or(true, |b| key[v] < key[b]) {
            best = Some(v);
        }
    }
    best
}
