use crate::error::{HypergraphError, Result};
use crate::ids::VertexId;

/// A hyperedge stored as a sorted, duplicate-free list of vertex ids.
///
/// The sorted list doubles as the structural key used to deduplicate edges:
/// two hyperedges of the same hypergraph are equal iff they contain the same
/// vertices, regardless of the order the caller listed them in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hyperedge {
    members: Vec<VertexId>,
}

impl Hyperedge {
    /// Builds the canonical form of an edge, rejecting empty member lists.
    pub fn new(members: impl IntoIterator<Item = VertexId>) -> Result<Self> {
        let mut members: Vec<VertexId> = members.into_iter().collect();
        if members.is_empty() {
            return Err(HypergraphError::EmptyEdge);
        }
        members.sort_unstable();
        members.dedup();
        Ok(Self { members })
    }

    /// Member vertex ids in ascending order.
    #[must_use]
    pub fn members(&self) -> &[VertexId] {
        &self.members
    }

    /// Number of vertices in the edge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for a constructed edge; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `vertex` belongs to this edge.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.members.binary_search(&vertex).is_ok()
    }

    /// Iterate over member ids.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.members.iter().copied()
    }
}
