//! CLI command implementations.

use std::path::Path;

use crate::format::{
    format_eulerian_cycle, format_prim_result, format_shortest_paths, format_topological_order,
    DotWriter, MatrixReader, MatrixWriter,
};
use crate::structures::StructureDeriver;
use crate::types::{GraphResult, NodeId};

/// Display summary information about a matrix file.
pub fn cmd_info(reader: &MatrixReader, path: &Path, json: bool) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    let connected = graph.is_connected();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "order": graph.order(),
            "edges": graph.edge_count(),
            "directed": graph.is_directed(),
            "edge_weighted": graph.is_edge_weighted(),
            "connected": connected,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Order: {}", graph.order());
        println!("Edges: {}", graph.edge_count());
        println!(
            "Kind: {}",
            if graph.is_directed() {
                "directed"
            } else {
                "undirected"
            }
        );
        println!("Connected: {}", connected);
    }
    Ok(())
}

/// Print adjacency matrix, incidence matrix and incidence table.
pub fn cmd_structures(reader: &MatrixReader, path: &Path, json: bool) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    let structures = StructureDeriver::derive(&graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&structures).unwrap_or_default()
        );
    } else {
        println!("Adjacency matrix:");
        for row in &structures.adjacency_matrix {
            println!("  {}", join_row(row));
        }
        println!("Incidence matrix:");
        for row in &structures.incidence_matrix {
            println!("  {}", join_row(row));
        }
        println!("Incidence table:");
        for entry in &structures.incidence_table {
            println!(
                "  node {} edge {} weight {}",
                entry.node, entry.edge, entry.weight
            );
        }
    }
    Ok(())
}

/// Print the DOT description of the graph.
pub fn cmd_dot(reader: &MatrixReader, path: &Path) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    print!("{}", graph.to_graphviz());
    Ok(())
}

/// Run a traversal and print its visiting order.
pub fn cmd_traverse(
    reader: &MatrixReader,
    path: &Path,
    start_id: NodeId,
    breadth_first: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    let tree = if breadth_first {
        graph.breadth_first_search(start_id)?
    } else {
        graph.depth_first_search(start_id)?
    };
    let visited = tree.node_ids();

    if json {
        let info = serde_json::json!({
            "start": start_id,
            "visited": visited,
            "tree_edges": tree.arcs().collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Visited: {}", join_ids(&visited));
        if let Some(dot) = DotWriter::path_graph(&visited) {
            println!("{}", dot);
        }
    }
    Ok(())
}

/// Minimum spanning tree.
pub fn cmd_prim(reader: &MatrixReader, path: &Path, json: bool) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    let result = graph.prim_mst();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else {
        print!("{}", format_prim_result(&result));
    }
    Ok(())
}

/// Shortest paths from a vertex id.
pub fn cmd_dijkstra(
    reader: &MatrixReader,
    path: &Path,
    start_id: NodeId,
    json: bool,
) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    let result = graph.dijkstra_from_vertex(start_id)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else {
        print!("{}", format_shortest_paths(&result));
    }
    Ok(())
}

/// Eulerian cycle, if any.
pub fn cmd_euler(reader: &MatrixReader, path: &Path, json: bool) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    let cycle = graph.eulerian_cycle();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&cycle).unwrap_or_default()
        );
    } else {
        match cycle {
            Some(cycle) => println!("{}", format_eulerian_cycle(&cycle)),
            None => println!("No Eulerian cycle"),
        }
    }
    Ok(())
}

/// Topological order.
pub fn cmd_topo(reader: &MatrixReader, path: &Path, json: bool) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    let order = graph.topological_sort()?;
    if json {
        println!("{}", serde_json::json!({ "order": order }));
    } else {
        println!("{}", format_topological_order(&order));
    }
    Ok(())
}

/// Connectivity check.
pub fn cmd_connected(reader: &MatrixReader, path: &Path, json: bool) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    let connected = graph.is_connected();
    if json {
        println!("{}", serde_json::json!({ "connected": connected }));
    } else {
        println!("{}", if connected { "connected" } else { "disconnected" });
    }
    Ok(())
}

/// Re-write the graph as matrix text.
pub fn cmd_export(reader: &MatrixReader, path: &Path, out: &Path) -> GraphResult<()> {
    let graph = reader.read_from_file(path)?;
    MatrixWriter::write_to_file(&graph, out)?;
    println!("Exported order-{} graph to {}", graph.order(), out.display());
    Ok(())
}

fn join_row(row: &[f64]) -> String {
    row.iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
