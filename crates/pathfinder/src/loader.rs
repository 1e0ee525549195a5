use std::fs;

use common::types::Edge;
use pathfind_core::GraphCsr;

use super::error::Error;
use super::labels::LabelTable;

/// Loader for the whitespace-separated edge-list text format.
///
/// The first line is either `<n> <m>` (node count and edge count) or a bare
/// `<m>` with the node count implied by the label table length. The next `m`
/// lines each hold `<sourceLabel> <targetLabel> <weight>`. Anything after
/// the declared `m` edge lines is ignored.
///
/// When `directed` is false every input edge is inserted in both directions,
/// so the solvers themselves never deal with undirectedness.
pub struct EdgeListLoader {
    path: String,
    directed: bool,
}

impl EdgeListLoader {
    pub fn new(path: String, directed: bool) -> Self {
        EdgeListLoader { path, directed }
    }

    /// Reads and parses the file into an immutable CSR graph.
    pub fn load(&self, labels: &LabelTable) -> Result<GraphCsr, Error> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            eprintln!("Failed to read file {}: {:?}", self.path, e);
            Error::Io(e)
        })?;

        self.parse(&contents, labels)
    }

    fn parse(&self, input: &str, labels: &LabelTable) -> Result<GraphCsr, Error> {
        let mut lines = input.lines().enumerate();

        let (_, header) = lines.next().ok_or_else(|| Error::Parse {
            line: 1,
            reason: "empty input, expected a header line".to_string(),
        })?;

        let (num_nodes, num_edges) = parse_header(header)?;
        let num_nodes = num_nodes.unwrap_or_else(|| labels.len());

        let mut edges: Vec<Edge> = Vec::with_capacity(if self.directed {
            num_edges
        } else {
            num_edges * 2
        });

        for edge_no in 0..num_edges {
            let (line_idx, line) = lines.next().ok_or_else(|| Error::Parse {
                line: edge_no + 2,
                reason: format!("expected {} edge lines, input ended early", num_edges),
            })?;
            let line_no = line_idx + 1;

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let &[source, target, weight] = tokens.as_slice() else {
                return Err(Error::Parse {
                    line: line_no,
                    reason: format!(
                        "expected `<source> <target> <weight>`, found {} token(s)",
                        tokens.len()
                    ),
                });
            };

            let u = labels.index(source)?;
            let v = labels.index(target)?;
            let w: i64 = weight.parse().map_err(|_| Error::Parse {
                line: line_no,
                reason: format!("weight `{}` is not an integer", weight),
            })?;

            edges.push((u, v, w));
            if !self.directed {
                edges.push((v, u, w));
            }
        }

        Ok(GraphCsr::from_edges(num_nodes, &mut edges)?)
    }
}

/// Parses the header line: `<n> <m>` or a bare `<m>`.
fn parse_header(header: &str) -> Result<(Option<usize>, usize), Error> {
    let parse_count = |token: &str| {
        token.parse::<usize>().map_err(|_| Error::Parse {
            line: 1,
            reason: format!("header count `{}` is not a non-negative integer", token),
        })
    };

    let tokens: Vec<&str> = header.split_whitespace().collect();
    match tokens[..] {
        [m] => Ok((None, parse_count(m)?)),
        [n, m] => Ok((Some(parse_count(n)?), parse_count(m)?)),
        _ => Err(Error::Parse {
            line: 1,
            reason: format!(
                "expected `<n> <m>` or `<m>` in the header, found {} token(s)",
                tokens.len()
            ),
        }),
    }
}
