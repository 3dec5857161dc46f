//! # Set-of-sets text format
//!
//! A hypergraph family is stored one hypergraph per line, each written as a
//! set of edge sets:
//!
//! ```text
//! {{1, 2}, {2, 3, 4}}
//! {{1, 2}, {3, 4}}
//! ```
//!
//! Edges are ordered by size and then by their member labels, members by
//! label. Only edges are recorded, so isolated vertices do not survive a round
//! trip. The writer refuses vertex labels that contain `{`, `}` or `,`, or
//! that would lose whitespace. Edges must be separated by exactly one comma.
//! Blank lines and lines starting with `#` are ignored when reading.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{HypergraphError, Result};
use crate::hypergraph::Hypergraph;

lazy_static! {
    static ref EDGE_RE: Regex = Regex::new(r"\{[^{}]*\}").expect("edge pattern is a valid regex");
}

/// Render a hypergraph as a single `{{..}, {..}}` line.
///
/// Labels are rendered as-is; see [`write_hypergraphs`] for the checked form.
pub fn to_set_of_sets_string<V: Display>(h: &Hypergraph<V>) -> String {
    render(&sorted_labels(h))
}

/// Edge member labels, members sorted within an edge and edges by size then
/// label.
fn sorted_labels<V: Display>(h: &Hypergraph<V>) -> Vec<Vec<String>> {
    let mut edges: Vec<Vec<String>> = h
        .edges()
        .iter()
        .map(|e| {
            let mut labels: Vec<String> = h.edge_members(e).map(ToString::to_string).collect();
            labels.sort();
            labels
        })
        .collect();
    edges.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    edges
}

fn render(edges: &[Vec<String>]) -> String {
    let parts: Vec<String> = edges
        .iter()
        .map(|labels| format!("{{{}}}", labels.join(", ")))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

/// A label reads back unchanged only if it is non-empty, unpadded and free of
/// the format's delimiters.
fn is_writable_label(label: &str) -> bool {
    !label.is_empty() && label.trim() == label && !label.contains(['{', '}', ','])
}

/// Write hypergraphs to any writer, one per line.
///
/// # Errors
///
/// Returns `InvalidArgument` for a vertex label the reader could not recover
/// (empty, padded with whitespace, or containing `{`, `}` or `,`); nothing is
/// written for that hypergraph. I/O failures surface as `Io`.
pub fn write_hypergraphs<'a, W, V, I>(writer: &mut W, hypergraphs: I) -> Result<()>
where
    W: Write,
    V: Display + 'a,
    I: IntoIterator<Item = &'a Hypergraph<V>>,
{
    for h in hypergraphs {
        let edges = sorted_labels(h);
        if let Some(bad) = edges.iter().flatten().find(|l| !is_writable_label(l)) {
            return Err(HypergraphError::invalid_argument(format!(
                "vertex label {bad:?} cannot be written in set-of-sets form"
            )));
        }
        writeln!(writer, "{}", render(&edges))?;
    }
    Ok(())
}

/// Write hypergraphs to `path`, truncating any existing file.
///
/// The file handle is dropped on every return path, including write errors.
pub fn write_hypergraphs_to_file<'a, P, V, I>(path: P, hypergraphs: I) -> Result<()>
where
    P: AsRef<Path>,
    V: Display + 'a,
    I: IntoIterator<Item = &'a Hypergraph<V>>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_hypergraphs(&mut writer, hypergraphs)?;
    writer.flush()?;
    tracing::debug!("wrote hypergraph family to {}", path.display());
    Ok(())
}

/// Parse one `{{..}, {..}}` line.
pub fn parse_set_of_sets<V>(line: &str) -> Result<Hypergraph<V>>
where
    V: FromStr + Clone + Eq + Hash,
{
    parse_line(line, 1)
}

/// Parse one `{{..}, {..}}` line into its member lists, keeping repeats.
///
/// Used for partitions, where a repeated or empty block is an error the
/// caller must see rather than a duplicate to drop.
pub fn parse_set_list<V: FromStr>(line: &str) -> Result<Vec<Vec<V>>> {
    parse_members(line, 1)
}

fn parse_line<V>(line: &str, line_no: usize) -> Result<Hypergraph<V>>
where
    V: FromStr + Clone + Eq + Hash,
{
    let mut h = Hypergraph::new();
    for members in parse_members(line, line_no)? {
        h.add_edge(members).map_err(|e| HypergraphError::parse(line_no, e.to_string()))?;
    }
    Ok(h)
}

fn parse_members<V: FromStr>(line: &str, line_no: usize) -> Result<Vec<Vec<V>>> {
    let text = line.trim();
    let inner = text
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .ok_or_else(|| HypergraphError::parse(line_no, "expected an outer {...} set"))?;

    let mut edges = Vec::new();
    let mut prev_end = 0;
    for m in EDGE_RE.find_iter(inner) {
        check_separator(&inner[prev_end..m.start()], !edges.is_empty(), line_no)?;
        prev_end = m.end();

        let body = &inner[m.start() + 1..m.end() - 1];
        let members = body
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<V>()
                    .map_err(|_| HypergraphError::parse(line_no, format!("invalid vertex label {token:?}")))
            })
            .collect::<Result<Vec<V>>>()?;
        edges.push(members);
    }

    let trailing = inner[prev_end..].trim();
    if !trailing.is_empty() {
        return Err(HypergraphError::parse(
            line_no,
            format!("unexpected {trailing:?} after the last edge"),
        ));
    }
    Ok(edges)
}

/// Text between two edges must be a single comma; before the first, nothing.
fn check_separator(gap: &str, after_edge: bool, line_no: usize) -> Result<()> {
    match (gap.trim(), after_edge) {
        ("", false) | (",", true) => Ok(()),
        ("", true) => Err(HypergraphError::parse(line_no, "missing ',' between edges")),
        (other, _) => Err(HypergraphError::parse(
            line_no,
            format!("unexpected {other:?} outside of an edge"),
        )),
    }
}

/// Read every hypergraph from a buffered reader.
pub fn read_hypergraphs<R, V>(reader: R) -> Result<Vec<Hypergraph<V>>>
where
    R: BufRead,
    V: FromStr + Clone + Eq + Hash,
{
    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        out.push(parse_line(trimmed, i + 1)?);
    }
    Ok(out)
}

/// Read every hypergraph stored in `path`.
pub fn read_hypergraphs_from_file<P, V>(path: P) -> Result<Vec<Hypergraph<V>>>
where
    P: AsRef<Path>,
    V: FromStr + Clone + Eq + Hash,
{
    read_hypergraphs(BufReader::new(File::open(path)?))
}
