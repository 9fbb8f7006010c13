//! Fluent API for building Graph instances.

use crate::structures::IndexMapping;
use crate::types::{GraphResult, NodeId};

use super::Graph;

/// Fluent builder for constructing a Graph.
pub struct GraphBuilder {
    order: usize,
    directed: bool,
    edge_weighted: bool,
    node_weighted: bool,
    index_mapping: IndexMapping,
    nodes: Vec<(NodeId, Option<f64>)>,
    edges: Vec<(NodeId, NodeId, f64)>,
}

impl GraphBuilder {
    /// Start an undirected, unweighted graph of the given order.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            directed: false,
            edge_weighted: false,
            node_weighted: false,
            index_mapping: IndexMapping::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn edge_weighted(mut self, weighted: bool) -> Self {
        self.edge_weighted = weighted;
        self
    }

    pub fn node_weighted(mut self, weighted: bool) -> Self {
        self.node_weighted = weighted;
        self
    }

    pub fn index_mapping(mut self, mapping: IndexMapping) -> Self {
        self.index_mapping = mapping;
        self
    }

    /// Add a vertex.
    pub fn node(mut self, id: NodeId) -> Self {
        self.nodes.push((id, None));
        self
    }

    /// Add a weighted vertex.
    pub fn weighted_node(mut self, id: NodeId, weight: f64) -> Self {
        self.nodes.push((id, Some(weight)));
        self
    }

    /// Add vertices `1..=order` in ascending order.
    pub fn all_nodes(mut self) -> Self {
        let top = NodeId::try_from(self.order).unwrap_or(NodeId::MAX);
        self.nodes.extend((1..=top).map(|id| (id, None)));
        self
    }

    /// Add an edge; endpoints are resolved at build time.
    pub fn edge(mut self, source_id: NodeId, target_id: NodeId, weight: f64) -> Self {
        self.edges.push((source_id, target_id, weight));
        self
    }

    /// Build the final Graph. Edges with a missing endpoint are skipped.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(
            self.order,
            self.directed,
            self.edge_weighted,
            self.node_weighted,
        )
        .with_index_mapping(self.index_mapping);

        for (id, weight) in self.nodes {
            graph.insert_node(id)?;
            if let Some(w) = weight {
                graph.set_node_weight(id, w)?;
            }
        }
        for (source, target, weight) in self.edges {
            graph.insert_edge(source, target, weight);
        }
        Ok(graph)
    }
}
