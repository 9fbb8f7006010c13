//! Writes a Graph back to the weighted-matrix text format.

use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::structures::StructureDeriver;
use crate::types::{GraphResult, MISSING_EDGE_SENTINEL};

/// Writer for weighted-matrix text.
pub struct MatrixWriter;

impl MatrixWriter {
    /// Render the adjacency matrix as text: the order, then one row per
    /// line. Undirected graphs keep only the upper triangle so that reading
    /// the text back detects them as undirected again. Directed graphs write
    /// absent off-diagonal cells as the missing-edge sentinel, which keeps
    /// the lower triangle non-zero and the graph directed on re-read.
    pub fn to_text(graph: &Graph) -> String {
        let mut matrix = StructureDeriver::adjacency_matrix(graph);
        let directed = graph.is_directed();
        for (i, row) in matrix.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                if !directed && j < i {
                    *cell = 0.0;
                } else if directed && j != i && *cell == 0.0 {
                    *cell = MISSING_EDGE_SENTINEL;
                }
            }
        }

        let mut out = format!("{}\n", graph.order());
        for row in &matrix {
            let cells: Vec<String> = row.iter().map(|w| w.to_string()).collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out
    }

    /// Write matrix text to any writer.
    pub fn write_to(graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        writer.write_all(Self::to_text(graph).as_bytes())?;
        Ok(())
    }

    /// Write matrix text to a file.
    pub fn write_to_file(graph: &Graph, path: &Path) -> GraphResult<()> {
        let mut file = std::fs::File::create(path)?;
        Self::write_to(graph, &mut file)?;
        log::debug!("Wrote order-{} matrix to {}", graph.order(), path.display());
        Ok(())
    }
}
