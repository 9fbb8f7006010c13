//! Single-source shortest paths (Dijkstra, array based).
//!
//! Weights must be non-negative; negative cells are not detected.

use serde::Serialize;

use crate::graph::Graph;
use crate::structures::StructureDeriver;
use crate::types::{GraphError, GraphResult, NodeId};

/// Shortest path to one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry {
    /// Target matrix index.
    pub target: usize,
    /// Indices from the source to the target, both included. Empty when
    /// the target is unreachable.
    pub path: Vec<usize>,
    /// Path cost, `None` when unreachable.
    pub weight: Option<f64>,
}

impl PathEntry {
    pub fn is_reachable(&self) -> bool {
        self.weight.is_some()
    }
}

/// Result of [`Graph::dijkstra`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    /// Source matrix index.
    pub source: usize,
    /// One entry per index other than the source, ascending.
    pub paths: Vec<PathEntry>,
}

impl ShortestPaths {
    /// Distance per matrix index; the source is `Some(0.0)`.
    pub fn distances(&self) -> Vec<Option<f64>> {
        let order = self.paths.len() + 1;
        let mut out = vec![None; order];
        out[self.source] = Some(0.0);
        for entry in &self.paths {
            out[entry.target] = entry.weight;
        }
        out
    }

    /// Entry for a target index.
    pub fn to(&self, target: usize) -> Option<&PathEntry> {
        self.paths.iter().find(|p| p.target == target)
    }
}

impl Graph {
    /// Dijkstra from a 0-based matrix index.
    pub fn dijkstra(&self, source: usize) -> GraphResult<ShortestPaths> {
        let order = self.order();
        if source >= order {
            return Err(GraphError::IndexOutOfRange {
                index: source,
                order,
            });
        }

        let matrix = StructureDeriver::adjacency_matrix(self);
        let mut distance: Vec<Option<f64>> = vec![None; order];
        let mut parent: Vec<Option<usize>> = vec![None; order];
        let mut settled = vec![false; order];
        distance[source] = Some(0.0);

        while let Some(u) = closest_unsettled(&distance, &settled) {
            settled[u] = true;
            let Some(du) = distance[u] else { break };

            for v in 0..order {
                let w = matrix[u][v];
                if settled[v] || w == 0.0 {
                    continue;
                }
                let candidate = du + w;
                if distance[v].map_or(true, |dv| candidate < dv) {
                    distance[v] = Some(candidate);
                    parent[v] = Some(u);
                }
            }
        }

        let paths = (0..order)
            .filter(|&v| v != source)
            .map(|v| PathEntry {
                target: v,
                path: distance[v]
                    .map(|_| trace_path(&parent, source, v))
                    .unwrap_or_default(),
                weight: distance[v],
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Dijkstra from {source}: {} of {} targets reachable",
            paths.iter().filter(|p| p.is_reachable()).count(),
            paths.len()
        );

        Ok(ShortestPaths { source, paths })
    }

    /// Dijkstra from a vertex id, resolved through the graph's index mapping.
    pub fn dijkstra_from_vertex(&self, id: NodeId) -> GraphResult<ShortestPaths> {
        let source = self.index_of(id)?;
        self.dijkstra(source)
    }
}

/// Unsettled index with the smallest known distance.
fn closest_unsettled(distance: &[Option<f64>], settled: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (v, d) in distance.iter().enumerate() {
        if settled[v] {
            continue;
        }
        if let Some(d) = *d {
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((v, d));
            }
        }
    }
    best.map(|(v, _)| v)
}

/// Walk the parent chain back from `target` to `source`.
fn trace_path(parent: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match parent[current] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
