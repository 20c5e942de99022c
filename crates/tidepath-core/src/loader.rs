//! # Loader
//!
//! Text edge-list loader for the graph store.
//!
//! Format: a header line `V N`, then one directed edge per line as
//! `src dst w_0 w_1 ... w_{N-1}`. Blank lines and `#` comment lines are
//! skipped. A bad header is fatal (the graph dimensions are unknowable);
//! a bad edge line is recorded as a per-line issue, excluded from the
//! graph, and loading continues — the caller decides whether issues are
//! fatal.

use crate::graph::Graph;
use crate::types::{Cost, TidepathError, VertexId};
use std::io::BufRead;
use std::path::Path;

// =============================================================================
// LOAD REPORT
// =============================================================================

/// One rejected input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    /// 1-based line number of the offending line.
    pub line: usize,
    /// Why the line was rejected.
    pub error: TidepathError,
}

/// The outcome of a load: the graph plus every line that was rejected.
#[derive(Debug)]
pub struct LoadReport {
    /// The constructed graph, containing every line that parsed.
    pub graph: Graph,
    /// Rejected lines, in input order.
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    /// Check whether every input line parsed cleanly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Load a graph from line-oriented text.
///
/// # Errors
///
/// Fatal errors only: an unreadable input ([`TidepathError::Io`]), a
/// missing or malformed header ([`TidepathError::MalformedLine`]), or a
/// zero dimension in the header
/// ([`TidepathError::InvalidConfiguration`]). Edge-line problems are
/// collected in the report instead.
pub fn load_graph<R: BufRead>(reader: R) -> Result<LoadReport, TidepathError> {
    let mut graph: Option<Graph> = None;
    let mut issues = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| TidepathError::Io(e.to_string()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match graph.as_mut() {
            None => {
                graph = Some(parse_header(line_no, trimmed)?);
            }
            Some(graph) => {
                if let Err(error) = parse_edge_line(graph, trimmed) {
                    // Shape errors come back without a line number; stamp it.
                    let error = match error {
                        TidepathError::MalformedLine { reason, .. } => {
                            TidepathError::MalformedLine {
                                line: line_no,
                                reason,
                            }
                        }
                        other => other,
                    };
                    issues.push(LoadIssue {
                        line: line_no,
                        error,
                    });
                }
            }
        }
    }

    let graph = graph.ok_or_else(|| TidepathError::MalformedLine {
        line: 0,
        reason: "missing header line 'V N'".to_string(),
    })?;
    Ok(LoadReport { graph, issues })
}

/// Load a graph from a file on disk.
///
/// # Errors
///
/// [`TidepathError::Io`] if the file cannot be opened, plus everything
/// [`load_graph`] can return.
pub fn load_graph_from_path(path: &Path) -> Result<LoadReport, TidepathError> {
    let file = std::fs::File::open(path)
        .map_err(|e| TidepathError::Io(format!("cannot open {}: {}", path.display(), e)))?;
    load_graph(std::io::BufReader::new(file))
}

fn parse_header(line_no: usize, line: &str) -> Result<Graph, TidepathError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[vertices, period] = fields.as_slice() else {
        return Err(TidepathError::MalformedLine {
            line: line_no,
            reason: format!("header must be 'V N', got {} fields", fields.len()),
        });
    };
    let vertices = parse_count(line_no, vertices, "vertex count")?;
    let period = parse_count(line_no, period, "period")?;
    Graph::new(vertices, period)
}

fn parse_count(line_no: usize, token: &str, what: &str) -> Result<usize, TidepathError> {
    token
        .parse::<usize>()
        .map_err(|_| TidepathError::MalformedLine {
            line: line_no,
            reason: format!("{} '{}' is not a non-negative integer", what, token),
        })
}

/// Parse one edge line `src dst w_0 ... w_{N-1}` and insert it.
///
/// Line numbers are attached by the caller; errors out of here describe
/// the shape problem only.
fn parse_edge_line(graph: &mut Graph, line: &str) -> Result<(), TidepathError> {
    let mut tokens = line.split_whitespace();

    let src = parse_vertex(tokens.next(), "source")?;
    let dst = parse_vertex(tokens.next(), "target")?;

    let mut weights: Vec<Cost> = Vec::with_capacity(graph.period());
    for token in tokens {
        let weight = token
            .parse::<Cost>()
            .map_err(|_| TidepathError::MalformedLine {
                line: 0,
                reason: format!("weight '{}' is not a non-negative integer", token),
            })?;
        weights.push(weight);
    }

    // add_edge rejects out-of-range vertices and wrong-length weight
    // vectors; both surface as per-line issues.
    graph.add_edge(src, dst, weights)
}

fn parse_vertex(token: Option<&str>, which: &str) -> Result<VertexId, TidepathError> {
    let token = token.ok_or_else(|| TidepathError::MalformedLine {
        line: 0,
        reason: format!("missing {} vertex", which),
    })?;
    let index = token
        .parse::<usize>()
        .map_err(|_| TidepathError::MalformedLine {
            line: 0,
            reason: format!("{} vertex '{}' is not a non-negative integer", which, token),
        })?;
    Ok(VertexId(index))
}

// =============================================================================
// TESTS
// =============================================================================
