//! The hypergraph container.
//!
//! A [`Hypergraph`] owns an insertion-ordered vertex set and an
//! insertion-ordered list of structurally unique hyperedges. Every algorithm
//! in the workspace reads it through the query methods below and treats it as
//! frozen while it runs.

mod builder;
mod edge;
mod quotient;

pub use builder::HypergraphBuilder;
pub use edge::Hyperedge;

use indexmap::IndexSet;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::Result;
use crate::ids::{EdgeId, VertexId};

/// Free-form attributes attached to a vertex or an edge.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// A hypergraph `H = (V, E)` with deduplicated, non-empty hyperedges.
#[derive(Clone, Debug)]
pub struct Hypergraph<V> {
    /// Vertex set in insertion order; positions are the [`VertexId`]s.
    vertices: IndexSet<V>,
    /// Attributes attached through `add_vertex_with_attrs`.
    vertex_attrs: HashMap<VertexId, Attributes>,
    /// Hyperedges in insertion order; positions are the [`EdgeId`]s.
    edges: Vec<Hyperedge>,
    /// One attribute map per edge, parallel to `edges`.
    edge_attrs: Vec<Attributes>,
    /// Structural key of every edge, for duplicate detection.
    edge_lookup: HashMap<Hyperedge, EdgeId>,
}

impl<V> Default for Hypergraph<V> {
    fn default() -> Self {
        Self {
            vertices: IndexSet::default(),
            vertex_attrs: HashMap::new(),
            edges: Vec::new(),
            edge_attrs: Vec::new(),
            edge_lookup: HashMap::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> Hypergraph<V> {
    /// Creates an empty hypergraph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a hypergraph with attributes.
    #[must_use]
    pub fn builder() -> HypergraphBuilder<V> {
        HypergraphBuilder::new()
    }

    /// Builds a hypergraph whose vertex set is the union of the given edges.
    ///
    /// Duplicate edges are skipped; an empty edge fails the whole build.
    pub fn from_edges<I, E>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = V>,
    {
        Self::from_parts(std::iter::empty(), edges)
    }

    /// Builds a hypergraph from an explicit vertex list plus edges.
    ///
    /// Vertices only mentioned by edges are added after the explicit ones.
    pub fn from_parts<IV, I, E>(vertices: IV, edges: I) -> Result<Self>
    where
        IV: IntoIterator<Item = V>,
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = V>,
    {
        let mut h = Self::new();
        for v in vertices {
            h.add_vertex(v);
        }
        for e in edges {
            h.add_edge(e)?;
        }
        Ok(h)
    }

    /// Adds a vertex, returning its id. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, v: V) -> VertexId {
        let (idx, _) = self.vertices.insert_full(v);
        VertexId::from(idx)
    }

    /// Adds a vertex and merges `attrs` into its attribute map.
    pub fn add_vertex_with_attrs(&mut self, v: V, attrs: Attributes) -> VertexId {
        let id = self.add_vertex(v);
        if !attrs.is_empty() {
            self.vertex_attrs.entry(id).or_default().extend(attrs);
        }
        id
    }

    /// Adds a hyperedge.
    ///
    /// Returns `Ok(Some(id))` for a new edge and `Ok(None)` when an equal edge
    /// is already present. Unknown member vertices are added to the vertex set.
    pub fn add_edge<E>(&mut self, members: E) -> Result<Option<EdgeId>>
    where
        E: IntoIterator<Item = V>,
    {
        self.add_edge_with_attrs(members, Attributes::new())
    }

    /// Adds a hyperedge carrying attributes. See [`Hypergraph::add_edge`].
    pub fn add_edge_with_attrs<E>(&mut self, members: E, attrs: Attributes) -> Result<Option<EdgeId>>
    where
        E: IntoIterator<Item = V>,
    {
        let ids: Vec<VertexId> = members.into_iter().map(|v| self.add_vertex(v)).collect();
        self.insert_edge(Hyperedge::new(ids)?, attrs)
    }

    /// Adds an edge whose members are already ids of this hypergraph.
    pub(crate) fn insert_edge(&mut self, edge: Hyperedge, attrs: Attributes) -> Result<Option<EdgeId>> {
        if self.edge_lookup.contains_key(&edge) {
            tracing::trace!("skipping duplicate hyperedge {:?}", edge.members());
            return Ok(None);
        }
        let id = EdgeId::from(self.edges.len());
        self.edge_lookup.insert(edge.clone(), id);
        self.edges.push(edge);
        self.edge_attrs.push(attrs);
        Ok(Some(id))
    }

    /// Whether an edge with exactly these members exists.
    pub fn contains_edge<E>(&self, members: E) -> bool
    where
        E: IntoIterator<Item = V>,
    {
        self.find_edge(members).is_some()
    }

    /// Id of the edge with exactly these members, if present.
    pub fn find_edge<E>(&self, members: E) -> Option<EdgeId>
    where
        E: IntoIterator<Item = V>,
    {
        let ids: Option<Vec<VertexId>> = members.into_iter().map(|v| self.vertex_id(&v)).collect();
        let edge = Hyperedge::new(ids?).ok()?;
        self.edge_lookup.get(&edge).copied()
    }

    /// Id of a vertex, if present.
    pub fn vertex_id(&self, v: &V) -> Option<VertexId> {
        self.vertices.get_index_of(v).map(VertexId::from)
    }

    /// Number of edges containing `v`; zero for unknown vertices.
    pub fn degree(&self, v: &V) -> usize {
        self.vertex_id(v).map_or(0, |id| self.degree_of(id))
    }

    /// Attributes attached to `v`.
    pub fn vertex_attrs(&self, v: &V) -> Option<&Attributes> {
        self.vertex_id(v).and_then(|id| self.vertex_attrs.get(&id))
    }
}

impl<V> Hypergraph<V> {
    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of hyperedges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Size of each edge, in edge order.
    #[must_use]
    pub fn edge_sizes(&self) -> Vec<usize> {
        self.edges.iter().map(Hyperedge::len).collect()
    }

    /// Edge sizes sorted ascending (the edge-size multiset).
    #[must_use]
    pub fn edge_size_sequence(&self) -> Vec<usize> {
        let mut sizes = self.edge_sizes();
        sizes.sort_unstable();
        sizes
    }

    /// Degree of every vertex, indexed by [`VertexId`].
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertices.len()];
        for v in self.edges.iter().flat_map(Hyperedge::iter) {
            degrees[v.as_usize()] += 1;
        }
        degrees
    }

    /// Vertex degrees sorted ascending (the degree multiset).
    #[must_use]
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees = self.degrees();
        degrees.sort_unstable();
        degrees
    }

    /// Number of edges containing the vertex with this id.
    #[must_use]
    pub fn degree_of(&self, id: VertexId) -> usize {
        self.edges.iter().filter(|e| e.contains(id)).count()
    }

    /// The vertex stored under `id`.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get_index(id.as_usize())
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> {
        self.vertices.iter()
    }

    /// All vertex ids in order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::from)
    }

    /// The edge stored under `id`.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Hyperedge> {
        self.edges.get(id.as_usize())
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Hyperedge] {
        &self.edges
    }

    /// Resolve the member ids of an edge of this hypergraph to vertices.
    pub fn edge_members<'a>(&'a self, edge: &'a Hyperedge) -> impl Iterator<Item = &'a V> + 'a {
        edge.iter().filter_map(|id| self.vertex(id))
    }

    /// Attributes attached to an edge.
    #[must_use]
    pub fn edge_attrs(&self, id: EdgeId) -> Option<&Attributes> {
        self.edge_attrs.get(id.as_usize())
    }
}

/// Structural equality: same vertex set and same set of edges.
///
/// Insertion order and attributes are ignored.
impl<V: Clone + Eq + Hash> PartialEq for Hypergraph<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() || self.num_edges() != other.num_edges() {
            return false;
        }
        if !self.vertices.iter().all(|v| other.vertices.contains(v)) {
            return false;
        }
        self.edges
            .iter()
            .all(|e| other.find_edge(self.edge_members(e).cloned()).is_some())
    }
}

impl<V: Clone + Eq + Hash> Eq for Hypergraph<V> {}

impl<V: fmt::Display> fmt::Display for Hypergraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hypergraph:")?;
        writeln!(f, "  |V| = {}", self.num_vertices())?;
        writeln!(f, "  |E| = {}", self.num_edges())?;
        writeln!(f, "  Vertices:")?;
        let mut labels: Vec<String> = self.vertices.iter().map(ToString::to_string).collect();
        labels.sort();
        for label in labels {
            writeln!(f, "    - {label}")?;
        }
        write!(f, "  Hyperedges:")?;
        for (i, e) in self.edges.iter().enumerate() {
            let mut members: Vec<String> = self.edge_members(e).map(ToString::to_string).collect();
            members.sort();
            write!(f, "\n    e{i}: {{{}}}", members.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HypergraphError;
    use serde_json::json;

    fn sample() -> Hypergraph<u32> {
        Hypergraph::from_edges([vec![1, 2, 3], vec![3, 4], vec![2, 4]]).unwrap()
    }

    #[test]
    fn from_edges_infers_vertices() {
        let h = sample();
        assert_eq!(h.num_vertices(), 4);
        assert_eq!(h.num_edges(), 3);
        assert_eq!(h.edge_sizes(), vec![3, 2, 2]);
        assert_eq!(h.degree(&3), 2);
        assert_eq!(h.degree(&1), 1);
        assert_eq!(h.degree(&99), 0);
        assert_eq!(h.degree_sequence(), vec![1, 2, 2, 2]);
    }

    #[test]
    fn duplicate_edges_are_not_inserted() {
        let mut h = sample();
        assert_eq!(h.add_edge([4, 3]).unwrap(), None);
        assert_eq!(h.num_edges(), 3);
        assert_eq!(h.add_edge([1, 4]).unwrap(), Some(EdgeId::new(3)));
    }

    #[test]
    fn from_edges_skips_duplicates() {
        let h = Hypergraph::from_edges([vec![1, 2], vec![2, 1], vec![1, 2, 2]]).unwrap();
        assert_eq!(h.num_edges(), 1);
    }

    #[test]
    fn empty_edge_fails() {
        let mut h = sample();
        assert!(matches!(h.add_edge(Vec::<u32>::new()), Err(HypergraphError::EmptyEdge)));
        assert!(Hypergraph::<u32>::from_edges([vec![1], vec![]]).is_err());
    }

    #[test]
    fn explicit_vertices_may_be_isolated() {
        let h = Hypergraph::from_parts([0, 1, 2, 9], [vec![0, 1]]).unwrap();
        assert_eq!(h.num_vertices(), 4);
        assert_eq!(h.degree(&9), 0);
    }

    #[test]
    fn vertex_attributes_merge() {
        let mut h: Hypergraph<&str> = Hypergraph::new();
        let mut a = Attributes::new();
        a.insert("color".into(), json!("red"));
        h.add_vertex_with_attrs("x", a);
        let mut b = Attributes::new();
        b.insert("weight".into(), json!(3));
        h.add_vertex_with_attrs("x", b);
        let attrs = h.vertex_attrs(&"x").unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(h.num_vertices(), 1);
    }

    #[test]
    fn structural_equality_ignores_order() {
        let a = Hypergraph::from_edges([vec![1, 2], vec![2, 3]]).unwrap();
        let b = Hypergraph::from_edges([vec![3, 2], vec![2, 1]]).unwrap();
        let c = Hypergraph::from_edges([vec![1, 2], vec![1, 3]]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_lists_sorted_members() {
        let h = Hypergraph::from_edges([vec!["b", "a"]]).unwrap();
        let text = h.to_string();
        assert!(text.contains("|V| = 2"));
        assert!(text.contains("e0: {a, b}"));
    }
}
