//! Common types for the hgprop workspace.
//!
//! This crate provides the hypergraph container, vertex partitions and
//! quotients, the shared error type and search configuration, and the
//! set-of-sets text format used to persist hypergraph families.

mod config;
mod error;
mod hypergraph;
mod ids;

pub mod io;
pub mod partition;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::hypergraph::*;
pub use crate::ids::*;
pub use crate::partition::{Block, Partition, all_partitions, moebius};
