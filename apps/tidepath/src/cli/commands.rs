//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use std::io::{BufRead, Write};
use std::path::Path;
use tidepath_core::{
    Graph, LoadReport, PathArtifact, TidepathError, VertexId, load_graph_from_path, shortest_path,
};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum file size for graph loading (64 MB).
///
/// This prevents memory exhaustion from malicious or accidental large files.
const MAX_GRAPH_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), TidepathError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| TidepathError::Io(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(TidepathError::Io(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

// =============================================================================
// GRAPH LOADING
// =============================================================================

/// Load the graph file, surfacing loader issues per the strictness flag.
///
/// Non-strict: each rejected line is logged as a warning and skipped.
/// Strict: the first rejected line aborts the command.
fn load_checked(path: &Path, strict: bool) -> Result<LoadReport, TidepathError> {
    validate_file_size(path, MAX_GRAPH_FILE_SIZE)?;

    let report = load_graph_from_path(path)?;
    for issue in &report.issues {
        tracing::warn!(line = issue.line, "skipped graph line: {}", issue.error);
    }
    if strict {
        if let Some(first) = report.issues.first() {
            return Err(first.error.clone());
        }
    }
    tracing::debug!(
        vertices = report.graph.vertex_count(),
        period = report.graph.period(),
        edges = report.graph.edge_count(),
        "graph loaded"
    );
    Ok(report)
}

// =============================================================================
// INFO COMMAND
// =============================================================================

/// Show graph dimensions and loader diagnostics.
pub fn cmd_info(path: &Path, strict: bool, json_mode: bool) -> Result<(), TidepathError> {
    let report = load_checked(path, strict)?;
    let graph = &report.graph;

    if json_mode {
        let output = serde_json::json!({
            "file": path.to_string_lossy(),
            "vertices": graph.vertex_count(),
            "period": graph.period(),
            "edges": graph.edge_count(),
            "states": graph.state_count(),
            "skipped_lines": report.issues.len(),
        });
        println!("{}", output);
    } else {
        println!("Graph:    {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Period:   {}", graph.period());
        println!("Edges:    {}", graph.edge_count());
        println!("States:   {}", graph.state_count());
        if !report.is_clean() {
            println!("Skipped:  {} malformed line(s)", report.issues.len());
        }
    }
    Ok(())
}

// =============================================================================
// ROUTE COMMAND
// =============================================================================

/// Answer a single shortest-path query.
///
/// An unreachable end vertex prints nothing (text mode) or a null path
/// (JSON mode) and is not a process failure; invalid vertices are.
pub fn cmd_route(
    path: &Path,
    strict: bool,
    json_mode: bool,
    start: usize,
    end: usize,
) -> Result<(), TidepathError> {
    let report = load_checked(path, strict)?;
    let start = VertexId(start);
    let end = VertexId(end);

    match shortest_path(&report.graph, start, end) {
        Ok(artifact) => {
            if json_mode {
                println!("{}", route_json(start, end, Some(&artifact)));
            } else {
                println!("{}", format_path(&artifact.vertices));
            }
            Ok(())
        }
        Err(TidepathError::NoPathFound) => {
            if json_mode {
                println!("{}", route_json(start, end, None));
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn route_json(start: VertexId, end: VertexId, artifact: Option<&PathArtifact>) -> serde_json::Value {
    match artifact {
        Some(artifact) => serde_json::json!({
            "start": start.index(),
            "end": end.index(),
            "path": artifact.vertices.iter().map(|v| v.index()).collect::<Vec<_>>(),
            "cost": artifact.cost,
            "arrival_phase": artifact.arrival_phase,
        }),
        None => serde_json::json!({
            "start": start.index(),
            "end": end.index(),
            "path": serde_json::Value::Null,
        }),
    }
}

/// Render a vertex sequence the way the batch protocol expects it:
/// space-separated indices.
fn format_path(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// BATCH COMMAND
// =============================================================================

/// Answer one query per stdin line.
pub fn cmd_batch(path: &Path, strict: bool, json_mode: bool) -> Result<(), TidepathError> {
    let report = load_checked(path, strict)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    run_batch(&report.graph, stdin.lock(), &mut stdout, json_mode)
}

/// The batch query loop: one `start end` pair per input line, one output
/// line per query. Unreachable targets produce an empty line so output
/// lines stay aligned with input lines; malformed query lines and
/// out-of-range vertices are logged and also produce an empty line.
pub fn run_batch<R: BufRead, W: Write>(
    graph: &Graph,
    reader: R,
    out: &mut W,
    json_mode: bool,
) -> Result<(), TidepathError> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| TidepathError::Io(e.to_string()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let answer = match parse_query_line(trimmed) {
            Some((start, end)) => match shortest_path(graph, start, end) {
                Ok(artifact) => {
                    if json_mode {
                        route_json(start, end, Some(&artifact)).to_string()
                    } else {
                        format_path(&artifact.vertices)
                    }
                }
                Err(TidepathError::NoPathFound) => {
                    if json_mode {
                        route_json(start, end, None).to_string()
                    } else {
                        String::new()
                    }
                }
                Err(e) => {
                    tracing::warn!(line = idx + 1, "query failed: {}", e);
                    String::new()
                }
            },
            None => {
                tracing::warn!(line = idx + 1, "malformed query line: '{}'", trimmed);
                String::new()
            }
        };
        writeln!(out, "{}", answer).map_err(|e| TidepathError::Io(e.to_string()))?;
    }
    Ok(())
}

/// Parse a query line into `(start, end)`; `None` if it is not exactly
/// two non-negative integers.
fn parse_query_line(line: &str) -> Option<(VertexId, VertexId)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[start, end] = fields.as_slice() else {
        return None;
    };
    let start = start.parse::<usize>().ok()?;
    let end = end.parse::<usize>().ok()?;
    Some((VertexId(start), VertexId(end)))
}

// =============================================================================
// TESTS
// =============================================================================
