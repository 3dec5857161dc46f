//! Error types shared by every hgprop crate.
//!
//! Only genuinely exceptional conditions live here. Expected outcomes such as
//! a duplicate edge insertion, a failed isomorphism search or a graphlet
//! mismatch are ordinary return values.

use thiserror::Error;

/// Errors raised while building or analysing hypergraphs.
#[derive(Debug, Error)]
pub enum HypergraphError {
    /// A hyperedge with no vertices was supplied.
    #[error("Empty hyperedges are not allowed")]
    EmptyEdge,

    /// The partition handed to a quotient is not a partition of the vertex set.
    #[error("Invalid partition: {0}")]
    InvalidPartition(String),

    /// An operation needed a specific number of hyperedges.
    #[error("Expected exactly {expected} hyperedges, found {actual}")]
    EdgeCount {
        /// Required number of hyperedges.
        expected: usize,
        /// Number the hypergraph actually has.
        actual: usize,
    },

    /// A numeric or structural argument is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The backtracking search hit its state budget before finishing.
    #[error("Search truncated after exploring {explored} states")]
    SearchTruncated {
        /// States visited before giving up.
        explored: u64,
    },

    /// A line of the set-of-sets text format could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Reading or writing a hypergraph family failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HypergraphError {
    /// Create an invalid partition error.
    pub fn invalid_partition(msg: impl Into<String>) -> Self {
        Self::InvalidPartition(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a parse error for a 1-based line number.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, HypergraphError>;
