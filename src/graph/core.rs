//! Core graph structure: vertices plus an arena of arcs.

use crate::structures::{IndexMapping, NodeIndex, StructureDeriver};
use crate::types::{Edge, GraphError, GraphResult, Node, NodeId};

/// A mutable graph with a fixed declared order.
///
/// Vertices and arcs are stored in insertion order. "List order" (most
/// recently inserted first) is the iteration order every derivation and
/// serialization uses.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Declared vertex count, the dimension of every matrix.
    order: usize,
    /// Logical edge count (one per undirected edge).
    edge_count: usize,
    directed: bool,
    edge_weighted: bool,
    node_weighted: bool,
    /// Vertices, insertion order.
    nodes: Vec<Node>,
    /// Arc arena; vertices refer into it by handle.
    arcs: Vec<Edge>,
    /// How vertex ids map onto matrix indices.
    index_mapping: IndexMapping,
}

impl Graph {
    /// Create an empty graph with a fixed declared order.
    pub fn new(order: usize, directed: bool, edge_weighted: bool, node_weighted: bool) -> Self {
        Self {
            order,
            edge_count: 0,
            directed,
            edge_weighted,
            node_weighted,
            nodes: Vec::with_capacity(order),
            arcs: Vec::new(),
            index_mapping: IndexMapping::default(),
        }
    }

    /// Replace the vertex-to-index mapping policy.
    pub fn with_index_mapping(mut self, mapping: IndexMapping) -> Self {
        self.index_mapping = mapping;
        self
    }

    /// Declared order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of logical edges inserted so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of vertices currently present.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_edge_weighted(&self) -> bool {
        self.edge_weighted
    }

    pub fn is_node_weighted(&self) -> bool {
        self.node_weighted
    }

    /// The vertex-to-index mapping policy.
    pub fn index_mapping(&self) -> IndexMapping {
        self.index_mapping
    }

    /// All vertices in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Vertex ids in insertion order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    /// Vertices in list order (most recently inserted first).
    pub fn nodes_in_list_order(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().rev()
    }

    /// Arcs leaving `node`, most recently inserted first.
    pub fn arcs_of<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Edge> + 'a {
        node.arc_handles().map(move |h| &self.arcs[h])
    }

    /// Linear scan for a vertex.
    pub fn find_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn find_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Validated vertex lookup.
    pub fn get_node(&self, id: NodeId) -> GraphResult<&Node> {
        self.find_node(id).ok_or(GraphError::VertexNotFound(id))
    }

    /// Add a vertex with the given id.
    pub fn insert_node(&mut self, id: NodeId) -> GraphResult<()> {
        if self.find_node(id).is_some() {
            return Err(GraphError::DuplicateVertex(id));
        }
        if self.nodes.len() >= self.order {
            return Err(GraphError::OrderExceeded { order: self.order });
        }
        self.nodes.push(Node::new(id));
        Ok(())
    }

    /// Add an edge. Returns `false` without touching the graph when an
    /// endpoint is missing or, for undirected graphs, when the pair is
    /// already connected in either direction.
    pub fn insert_edge(&mut self, source_id: NodeId, target_id: NodeId, weight: f64) -> bool {
        let (source_has, target_has) = match (self.find_node(source_id), self.find_node(target_id))
        {
            (Some(s), Some(t)) => (
                self.arcs_of(s).any(|e| e.target_id == target_id),
                self.arcs_of(t).any(|e| e.target_id == source_id),
            ),
            _ => {
                log::warn!("Ignoring edge {source_id} -> {target_id}: missing endpoint");
                return false;
            }
        };

        if !self.directed && (source_has || target_has) {
            log::trace!("Edge {source_id} -- {target_id} already present");
            return false;
        }

        let edge = Edge::new(self.edge_count, source_id, target_id, weight);
        self.push_arc(edge);
        if !self.directed && !edge.is_loop() {
            self.push_arc(edge.reversed());
        }
        self.edge_count += 1;
        true
    }

    fn push_arc(&mut self, edge: Edge) {
        let handle = self.arcs.len();
        self.arcs.push(edge);
        if let Some(node) = self.find_node_mut(edge.source_id) {
            node.arcs.push(handle);
        }
    }

    /// Unlink a vertex and its outgoing arcs. Arcs pointing at it from
    /// other vertices are left in place.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let pos = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or(GraphError::VertexNotFound(id))?;
        let removed = self.nodes.remove(pos);
        log::debug!(
            "Removed vertex {id} with {} outgoing arcs",
            removed.out_degree()
        );
        Ok(removed)
    }

    /// Whether `source_id` has an arc to `target_id`.
    pub fn has_edge(&self, source_id: NodeId, target_id: NodeId) -> GraphResult<bool> {
        let node = self.get_node(source_id)?;
        Ok(self.arcs_of(node).any(|e| e.target_id == target_id))
    }

    /// Arcs leaving a vertex, most recently inserted first.
    pub fn edges_from(&self, id: NodeId) -> GraphResult<Vec<&Edge>> {
        let node = self.get_node(id)?;
        Ok(self.arcs_of(node).collect())
    }

    /// All arcs of live vertices, in list order.
    pub fn arcs(&self) -> impl Iterator<Item = &Edge> {
        self.nodes_in_list_order()
            .flat_map(move |node| self.arcs_of(node))
    }

    /// Number of arcs leaving a vertex.
    pub fn out_degree(&self, id: NodeId) -> GraphResult<usize> {
        Ok(self.get_node(id)?.out_degree())
    }

    /// Number of arcs of live vertices pointing at a vertex.
    pub fn in_degree(&self, id: NodeId) -> GraphResult<usize> {
        self.get_node(id)?;
        Ok(self.arcs().filter(|e| e.target_id == id).count())
    }

    /// Set the weight of a vertex.
    pub fn set_node_weight(&mut self, id: NodeId, weight: f64) -> GraphResult<()> {
        let node = self
            .find_node_mut(id)
            .ok_or(GraphError::VertexNotFound(id))?;
        node.weight = weight;
        Ok(())
    }

    /// Matrix index of a vertex under this graph's mapping.
    pub fn index_of(&self, id: NodeId) -> GraphResult<usize> {
        StructureDeriver::node_index(self).require_index(id)
    }

    /// Current id-to-index mapping.
    pub fn node_index(&self) -> NodeIndex {
        StructureDeriver::node_index(self)
    }
}
