//! Reader for the DIMACS shortest-path challenge format (`.gr`).
//!
//! ```text
//! c comment
//! p sp <nodes> <arcs>
//! a <from> <to> <length>
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::graph::adjacency::{AdjacencyList, GraphBuilder};
use crate::graph::arc::Weight;
use crate::{Error, Result};

/// Loads a DIMACS graph from a file on disk
pub fn load_file<W: Weight, P: AsRef<Path>>(path: P) -> Result<AdjacencyList<W>> {
    let file = File::open(path)?;
    read(BufReader::new(file))
}

/// Parses a DIMACS graph from an in-memory string
pub fn parse_str<W: Weight>(input: &str) -> Result<AdjacencyList<W>> {
    read(input.as_bytes())
}

/// Parses a DIMACS graph from any buffered reader
pub fn read<W: Weight, R: BufRead>(reader: R) -> Result<AdjacencyList<W>> {
    let mut builder: Option<GraphBuilder<W>> = None;
    let mut declared_arcs = 0usize;
    let mut seen_arcs = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let mut fields = line.split_whitespace();

        match fields.next() {
            None | Some("c") => continue,
            Some("p") => {
                if builder.is_some() {
                    return Err(parse_error(line_no, "duplicate problem line"));
                }
                match fields.next() {
                    Some("sp") => {}
                    other => {
                        return Err(parse_error(
                            line_no,
                            format!("expected problem type 'sp', found {:?}", other),
                        ))
                    }
                }
                let nodes = parse_count(fields.next(), line_no, "node count")?;
                declared_arcs = parse_count(fields.next(), line_no, "arc count")?;
                builder = Some(GraphBuilder::new(nodes));
            }
            Some("a") => {
                let builder = builder
                    .as_mut()
                    .ok_or_else(|| parse_error(line_no, "arc before problem line"))?;
                let from = parse_count(fields.next(), line_no, "arc tail")?;
                let to = parse_count(fields.next(), line_no, "arc head")?;
                let length = parse_weight::<W>(fields.next(), line_no)?;
                builder.add_arc(from, to, length);
                seen_arcs += 1;
            }
            Some(tag) => {
                return Err(parse_error(line_no, format!("unknown line type '{}'", tag)));
            }
        }
    }

    let builder = builder.ok_or_else(|| parse_error(0, "missing problem line"))?;
    if seen_arcs != declared_arcs {
        warn!(
            "problem line declares {} arcs but {} were read",
            declared_arcs, seen_arcs
        );
    }
    builder.build()
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn parse_count(field: Option<&str>, line: usize, what: &str) -> Result<usize> {
    let field = field.ok_or_else(|| parse_error(line, format!("missing {}", what)))?;
    field
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {} '{}'", what, field)))
}

fn parse_weight<W: Weight>(field: Option<&str>, line: usize) -> Result<W> {
    let field = field.ok_or_else(|| parse_error(line, "missing arc length"))?;
    W::from_str_radix(field, 10)
        .map_err(|_| parse_error(line, format!("invalid arc length '{}'", field)))
}
