//! Derived structures: index mapping, adjacency/incidence matrices.
//!
//! Nothing here is cached. Every call recomputes from the live Graph.

pub mod deriver;
pub mod index;

pub use deriver::{incidence_values, GraphStructures, IncidenceEntry, Matrix, StructureDeriver};
pub use index::{IndexMapping, NodeIndex};
