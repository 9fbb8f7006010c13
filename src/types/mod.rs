//! All data types for the graphwork library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::{Edge, EdgeId};
pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};

/// Cell value that the matrix format reads as "no edge" besides zero.
pub const MISSING_EDGE_SENTINEL: f64 = 999.0;

/// Cell values that the matrix format reads as "no edge" by default.
pub const NO_EDGE_VALUES: [f64; 2] = [0.0, MISSING_EDGE_SENTINEL];
