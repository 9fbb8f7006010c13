//! In-memory graph: the core data structure, builder and traversals.

pub mod builder;
pub mod core;
pub mod traversal;

pub use self::core::Graph;
pub use builder::GraphBuilder;
