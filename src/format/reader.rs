//! Reads the weighted-matrix text format into a Graph.
//!
//! ```text
//! 3
//! 0 2 999
//! 0 0 3
//! 0 0 0
//! ```
//!
//! Line 1 holds the order, then one row of `order` numbers per vertex.
//! Blank lines are ignored.

use std::io::Read;
use std::path::Path;

use crate::graph::Graph;
use crate::structures::{IndexMapping, Matrix};
use crate::types::{GraphError, GraphResult, NodeId, NO_EDGE_VALUES};

/// How the reader decides whether the graph is directed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Directedness {
    /// Directed unless the strict lower triangle is entirely zero.
    #[default]
    Detect,
    Directed,
    Undirected,
}

/// Reader configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    /// Cell values meaning "no edge".
    pub no_edge_values: Vec<f64>,
    pub directedness: Directedness,
    /// Index mapping given to the produced graph.
    pub index_mapping: IndexMapping,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            no_edge_values: NO_EDGE_VALUES.to_vec(),
            directedness: Directedness::Detect,
            index_mapping: IndexMapping::default(),
        }
    }
}

/// Reader for weighted-matrix text.
#[derive(Debug, Clone, Default)]
pub struct MatrixReader {
    options: ParseOptions,
}

impl MatrixReader {
    /// Reader with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Read a matrix file into a Graph.
    pub fn read_from_file(&self, path: &Path) -> GraphResult<Graph> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Read {} bytes from {}", text.len(), path.display());
        self.parse(&text)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(&self, reader: &mut impl Read) -> GraphResult<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse(&text)
    }

    /// Parse matrix text into a fully populated Graph. No partial graph is
    /// returned on error.
    pub fn parse(&self, text: &str) -> GraphResult<Graph> {
        let (order, matrix) = parse_matrix(text)?;

        let directed = match self.options.directedness {
            Directedness::Detect => has_lower_triangle(&matrix),
            Directedness::Directed => true,
            Directedness::Undirected => false,
        };

        let mut graph =
            Graph::new(order, directed, true, false).with_index_mapping(self.options.index_mapping);

        for id in 1..=order {
            graph.insert_node(vertex_id(id)?)?;
        }
        for (i, row) in matrix.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if self.is_no_edge(weight) {
                    continue;
                }
                graph.insert_edge(vertex_id(i + 1)?, vertex_id(j + 1)?, weight);
            }
        }

        log::debug!(
            "Parsed {} graph: order={order}, edges={}",
            if directed { "directed" } else { "undirected" },
            graph.edge_count()
        );
        Ok(graph)
    }

    fn is_no_edge(&self, value: f64) -> bool {
        self.options.no_edge_values.iter().any(|&v| v == value)
    }
}

/// Parse text with the default options.
pub fn parse_weighted_matrix(text: &str) -> GraphResult<Graph> {
    MatrixReader::new().parse(text)
}

/// Whether any cell strictly below the diagonal is non-zero.
pub fn has_lower_triangle(matrix: &Matrix) -> bool {
    matrix
        .iter()
        .enumerate()
        .any(|(i, row)| row.iter().take(i).any(|&w| w != 0.0))
}

/// Split text into the declared order and its rows, validating shape.
fn parse_matrix(text: &str) -> GraphResult<(usize, Matrix)> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| GraphError::parse(1, "missing vertex count"))?;
    let order: usize = header.parse().map_err(|_| {
        GraphError::parse(header_line, format!("invalid vertex count {header:?}"))
    })?;

    let mut matrix = Vec::new();
    let mut last_line = header_line;
    for (line_no, line) in lines {
        if matrix.len() == order {
            return Err(GraphError::parse(
                line_no,
                format!("expected {order} matrix rows, found more"),
            ));
        }
        matrix.push(parse_row(line_no, line, order)?);
        last_line = line_no;
    }

    if matrix.len() < order {
        return Err(GraphError::parse(
            last_line + 1,
            format!("expected {order} matrix rows, found {}", matrix.len()),
        ));
    }
    Ok((order, matrix))
}

fn parse_row(line_no: usize, line: &str, order: usize) -> GraphResult<Vec<f64>> {
    let row = line
        .split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(GraphError::parse(line_no, format!("invalid weight {token:?}"))),
        })
        .collect::<GraphResult<Vec<f64>>>()?;

    if row.len() != order {
        return Err(GraphError::parse(
            line_no,
            format!("expected {order} columns, found {}", row.len()),
        ));
    }
    Ok(row)
}

fn vertex_id(id: usize) -> GraphResult<NodeId> {
    NodeId::try_from(id).map_err(|_| GraphError::parse(1, format!("vertex count {id} too large")))
}
