//! Text formats: weighted-matrix reader/writer, DOT output, result reports.

pub mod dot;
pub mod reader;
pub mod report;
pub mod writer;

pub use dot::DotWriter;
pub use reader::{parse_weighted_matrix, Directedness, MatrixReader, ParseOptions};
pub use report::{
    format_eulerian_cycle, format_prim_result, format_shortest_paths, format_topological_order,
};
pub use writer::MatrixWriter;
