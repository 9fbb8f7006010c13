//! graphwork: weighted graph engine.
//!
//! A mutable graph with a fixed declared order, dense matrix projections of
//! it, and classical algorithms (BFS/DFS, Prim, Dijkstra, Eulerian cycle,
//! topological sort, connectivity) plus the weighted-matrix text and DOT
//! formats.

#[cfg(feature = "cli")]
pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod structures;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{CycleEdge, EulerianCycle, MstEdge, MstResult, PathEntry, ShortestPaths};
pub use format::{
    parse_weighted_matrix, Directedness, DotWriter, MatrixReader, MatrixWriter, ParseOptions,
};
pub use graph::{Graph, GraphBuilder};
pub use structures::{
    GraphStructures, IncidenceEntry, IndexMapping, Matrix, NodeIndex, StructureDeriver,
};
pub use types::{
    Edge, EdgeId, GraphError, GraphResult, Node, NodeId, MISSING_EDGE_SENTINEL, NO_EDGE_VALUES,
};
