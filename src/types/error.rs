//! Error types for the graph engine.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the graphwork library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Malformed weighted-matrix text.
    #[error("Malformed input at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Vertex id not present in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(NodeId),

    /// Matrix index outside `0..order`.
    #[error("Vertex index {index} out of range for order {order}")]
    IndexOutOfRange { index: usize, order: usize },

    /// Vertex id already present in the graph.
    #[error("Vertex {0} already exists")]
    DuplicateVertex(NodeId),

    /// The graph already holds as many vertices as its declared order.
    #[error("Graph already holds its declared order of {order} vertices")]
    OrderExceeded { order: usize },

    /// Operation not defined for this kind of graph.
    #[error("Invalid graph kind: {0}")]
    InvalidGraphKind(String),

    /// Directed graph contains a cycle through the given vertex.
    #[error("Graph contains a cycle through vertex {0}")]
    CyclicGraph(NodeId),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Shorthand for a parse failure at a 1-based line number.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Convenience result type for graphwork operations.
pub type GraphResult<T> = Result<T, GraphError>;
