//! Isomorphism search over hypergraphs.
//!
//! A hypergraph is encoded as its bipartite incidence graph
//! ([`IncidenceGraph`]) and handed to a class-constrained backtracking
//! matcher ([`GraphMatcher`]). The matcher works on any labeled graph
//! ([`GraphIndex`]); the hypergraph operations in [`isomorphism`] are thin
//! layers on top of it.

pub mod assignment;
pub mod bipartite;
pub mod graph_index;
pub mod isomorphism;
pub mod matcher;
pub mod node;

mod search;

pub use assignment::{Assignment, AssignmentSet};
pub use bipartite::{IncidenceGraph, NodeClass};
pub use graph_index::GraphIndex;
pub use isomorphism::{
    IsomorphismReport, Rejection, VertexMapping, automorphism_group_order, check_isomorphism,
    find_isomorphism, hypergraph_automorphisms, hypergraph_automorphisms_with, is_isomorphic,
};
pub use matcher::{GraphMatcher, SearchStats};
pub use node::NodeIdx;
