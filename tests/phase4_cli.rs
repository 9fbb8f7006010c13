//! Phase 4 tests: CLI integration and end-to-end flows.

#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use graphwork::format::{MatrixReader, MatrixWriter};
use graphwork::structures::StructureDeriver;

// ==================== CLI Helpers ====================

/// Locate the `gwork` binary built alongside test binaries.
fn gwork_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("gwork");
    path
}

/// Run the `gwork` CLI with the given arguments and return the output.
fn run_gwork(args: &[&str]) -> Output {
    Command::new(gwork_bin())
        .args(args)
        .output()
        .expect("Failed to run gwork")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "gwork failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write matrix text to a temp file that lives as long as the handle.
fn matrix_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SQUARE: &str = "4\n0 1 0 1\n0 0 1 0\n0 0 0 1\n0 0 0 0\n";
const COMPLETE: &str = "4\n0 1 4 3\n0 0 2 5\n0 0 0 6\n0 0 0 0\n";
const DAG: &str = "3\n0 1 1\n0 0 1\n0 0 0\n";

// ==================== CLI Tests ====================

#[test]
fn test_cli_info() {
    let file = matrix_file(SQUARE);
    let output = run_gwork(&["info", file.path().to_str().unwrap()]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Order: 4"));
    assert!(out.contains("Edges: 4"));
    assert!(out.contains("Kind: undirected"));
    assert!(out.contains("Connected: true"));
}

#[test]
fn test_cli_info_json() {
    let file = matrix_file(SQUARE);
    let output = run_gwork(&["--format", "json", "info", file.path().to_str().unwrap()]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["order"], 4);
    assert_eq!(value["edges"], 4);
    assert_eq!(value["directed"], false);
}

#[test]
fn test_cli_prim() {
    let file = matrix_file(COMPLETE);
    let output = run_gwork(&["prim", file.path().to_str().unwrap()]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output),
        "Peso total: 6\naresta: (1,2), peso: 1\naresta: (2,3), peso: 2\naresta: (1,4), peso: 3\n"
    );
}

#[test]
fn test_cli_dijkstra() {
    let file = matrix_file("3\n0 2 0\n0 0 3\n0 0 0\n");
    let output = run_gwork(&["dijkstra", file.path().to_str().unwrap(), "1"]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output),
        "2: 1 -> 2 (custo: 2)\n3: 1 -> 2 -> 3 (custo: 5)\n"
    );
}

#[test]
fn test_cli_euler() {
    let file = matrix_file(SQUARE);
    let output = run_gwork(&["euler", file.path().to_str().unwrap()]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "1 - 2 - 3 - 4 - 1");

    let star = matrix_file("4\n0 1 1 1\n0 0 0 0\n0 0 0 0\n0 0 0 0\n");
    let output = run_gwork(&["euler", star.path().to_str().unwrap()]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "No Eulerian cycle");
}

#[test]
fn test_cli_traversals() {
    let file = matrix_file("4\n0 1 1 0\n0 0 0 1\n0 0 0 0\n0 0 0 0\n");
    let path = file.path().to_str().unwrap();

    let dfs = run_gwork(&["dfs", path, "1"]);
    assert_success(&dfs);
    assert!(stdout_str(&dfs).starts_with("Visited: 1 2 4 3\n"));

    let bfs = run_gwork(&["bfs", path, "1"]);
    assert_success(&bfs);
    let out = stdout_str(&bfs);
    assert!(out.starts_with("Visited: 1 2 3 4\n"));
    assert!(out.contains("graph G {"));
}

#[test]
fn test_cli_topo() {
    let file = matrix_file(DAG);
    let path = file.path().to_str().unwrap();

    // Upper-triangle input reads as undirected unless forced.
    let undirected = run_gwork(&["topo", path]);
    assert_eq!(undirected.status.code(), Some(5));

    let output = run_gwork(&["--directed", "topo", path]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "1 -> 2 -> 3");
}

#[test]
fn test_cli_connected_and_dot() {
    let file = matrix_file("3\n0 1 0\n0 0 0\n0 0 0\n");
    let path = file.path().to_str().unwrap();

    let output = run_gwork(&["connected", path]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "disconnected");

    let output = run_gwork(&["dot", path]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("2 -- 1 [label=1];"));
}

#[test]
fn test_cli_structures_json() {
    let file = matrix_file("2\n0 5\n0 0\n");
    let output = run_gwork(&["--format", "json", "structures", file.path().to_str().unwrap()]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["adjacency_matrix"][0][1], 5.0);
    assert_eq!(value["adjacency_matrix"][1][0], 5.0);
    assert_eq!(value["incidence_table"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_error_exit_codes() {
    let bad = matrix_file("2\n0 x\n0 0\n");
    let output = run_gwork(&["info", bad.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));

    let file = matrix_file(SQUARE);
    let output = run_gwork(&["dijkstra", file.path().to_str().unwrap(), "9"]);
    assert_eq!(output.status.code(), Some(4));

    let output = run_gwork(&["info", "/nonexistent/graph.txt"]);
    assert_eq!(output.status.code(), Some(1));
}

// ==================== End-to-End Tests ====================

#[test]
fn test_cli_export_round_trip() {
    let file = matrix_file("3\n0 1.5 0\n2 0 0\n0 7 0\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("exported.txt");

    let output = run_gwork(&[
        "export",
        file.path().to_str().unwrap(),
        out.to_str().unwrap(),
    ]);
    assert_success(&output);

    let original = MatrixReader::new().read_from_file(file.path()).unwrap();
    let exported = MatrixReader::new().read_from_file(&out).unwrap();
    assert!(exported.is_directed());
    assert_eq!(
        StructureDeriver::adjacency_matrix(&exported),
        StructureDeriver::adjacency_matrix(&original)
    );
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        MatrixWriter::to_text(&original)
    );
}

#[test]
fn test_library_pipeline_matches_cli() {
    let file = matrix_file(COMPLETE);
    let graph = MatrixReader::new().read_from_file(file.path()).unwrap();

    let tree = graph.breadth_first_search(1).unwrap();
    assert_eq!(tree.order(), 4);
    assert!(graph.is_connected());
    assert_eq!(graph.prim_mst().total_weight, 6.0);

    let output = run_gwork(&["bfs", file.path().to_str().unwrap(), "1"]);
    assert_success(&output);
    assert!(stdout_str(&output).starts_with("Visited: 1 2 3 4\n"));
}
