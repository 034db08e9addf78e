//! Plain-text edge list format: `n m` followed by `m` pairs `from to`.
//!
//! Tokens are unsigned integers separated by arbitrary whitespace, so one edge
//! per line and everything on one line parse the same way.

use std::fmt;
use std::fmt::Write as _;

use crate::eulerian::Edge;

/// Parsed graph input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphInput {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    MissingHeader,
    InvalidToken { position: usize, token: String },
    TooFewEdges { expected: usize, found: usize },
    TrailingInput { position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "expected header `<vertex_count> <edge_count>`"),
            Self::InvalidToken { position, token } => {
                write!(f, "token {position} is not an unsigned integer: {token:?}")
            }
            Self::TooFewEdges { expected, found } => {
                write!(f, "header announces {expected} edges, found {found}")
            }
            Self::TrailingInput { position } => {
                write!(f, "unexpected input after the last edge at token {position}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse the text format. Endpoints are not range-checked here; the solver does that.
pub fn parse_edge_list(input: &str) -> Result<GraphInput, ParseError> {
    let mut tokens = input.split_whitespace().enumerate();
    let vertex_count = next_number(&mut tokens).ok_or(ParseError::MissingHeader)??;
    let edge_count = next_number(&mut tokens).ok_or(ParseError::MissingHeader)??;
    // Cap the reservation; the header is untrusted.
    let mut edges = Vec::with_capacity(edge_count.min(1 << 20));
    for found in 0..edge_count {
        let too_few = ParseError::TooFewEdges {
            expected: edge_count,
            found,
        };
        let from = match next_number(&mut tokens) {
            Some(v) => v?,
            None => return Err(too_few),
        };
        let to = match next_number(&mut tokens) {
            Some(v) => v?,
            None => return Err(too_few),
        };
        edges.push((from, to));
    }
    if let Some((position, _)) = tokens.next() {
        return Err(ParseError::TrailingInput { position });
    }
    Ok(GraphInput {
        vertex_count,
        edges,
    })
}

fn next_number<'a>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
) -> Option<Result<usize, ParseError>> {
    tokens.next().map(|(position, tok)| {
        tok.parse::<usize>().map_err(|_| ParseError::InvalidToken {
            position,
            token: tok.to_string(),
        })
    })
}

/// Render `(n, edges)` in the same format, one edge per line.
pub fn format_edge_list(vertex_count: usize, edges: &[Edge]) -> String {
    let mut out = String::with_capacity(16 + edges.len() * 12);
    let _ = writeln!(out, "{vertex_count} {}", edges.len());
    for &(from, to) in edges {
        let _ = writeln!(out, "{from} {to}");
    }
    out
}
