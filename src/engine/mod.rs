//! Matrix-based graph algorithms, exposed as methods on [`Graph`](crate::graph::Graph).

pub mod connectivity;
pub mod eulerian;
pub mod shortest_path;
pub mod spanning_tree;
pub mod topological;

pub use eulerian::{CycleEdge, EulerianCycle};
pub use shortest_path::{PathEntry, ShortestPaths};
pub use spanning_tree::{MstEdge, MstResult};
