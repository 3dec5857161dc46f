use std::hash::Hash;

use super::{Attributes, Hypergraph};
use crate::error::Result;

/// Incremental construction of a [`Hypergraph`] with attributes.
///
/// Nothing is validated until [`HypergraphBuilder::build`], which reports the
/// first empty edge it meets.
///
/// ```
/// use hgprop_common::{Attributes, Hypergraph};
///
/// let h = Hypergraph::builder()
///     .vertex("isolated")
///     .edge(["a", "b"])
///     .edge_with_attrs(["b", "c"], Attributes::new())
///     .build()
///     .unwrap();
/// assert_eq!(h.num_vertices(), 4);
/// assert_eq!(h.num_edges(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct HypergraphBuilder<V> {
    vertices: Vec<(V, Attributes)>,
    edges: Vec<(Vec<V>, Attributes)>,
}

impl<V> Default for HypergraphBuilder<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> HypergraphBuilder<V> {
    /// Start an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a vertex.
    #[must_use]
    pub fn vertex(self, v: V) -> Self {
        self.vertex_with_attrs(v, Attributes::new())
    }

    /// Queue a vertex with attributes.
    #[must_use]
    pub fn vertex_with_attrs(mut self, v: V, attrs: Attributes) -> Self {
        self.vertices.push((v, attrs));
        self
    }

    /// Queue an edge.
    #[must_use]
    pub fn edge(self, members: impl IntoIterator<Item = V>) -> Self {
        self.edge_with_attrs(members, Attributes::new())
    }

    /// Queue an edge with attributes. Attributes of a later duplicate are dropped.
    #[must_use]
    pub fn edge_with_attrs(mut self, members: impl IntoIterator<Item = V>, attrs: Attributes) -> Self {
        self.edges.push((members.into_iter().collect(), attrs));
        self
    }

    /// Build the hypergraph.
    pub fn build(self) -> Result<Hypergraph<V>> {
        let mut h = Hypergraph::new();
        for (v, attrs) in self.vertices {
            h.add_vertex_with_attrs(v, attrs);
        }
        for (members, attrs) in self.edges {
            h.add_edge_with_attrs(members, attrs)?;
        }
        Ok(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::EdgeId;
    use serde_json::json;

    #[test]
    fn edge_attributes_follow_their_edge() {
        let mut first = Attributes::new();
        first.insert("label".into(), json!("first"));
        let mut dup = Attributes::new();
        dup.insert("label".into(), json!("dup"));

        let h = Hypergraph::builder()
            .edge_with_attrs([1, 2], first)
            .edge_with_attrs([2, 1], dup)
            .edge([3])
            .build()
            .unwrap();

        assert_eq!(h.num_edges(), 2);
        assert_eq!(h.edge_attrs(EdgeId::new(0)).unwrap()["label"], json!("first"));
        assert!(h.edge_attrs(EdgeId::new(1)).unwrap().is_empty());
    }

    #[test]
    fn empty_edge_fails_on_build() {
        let res = Hypergraph::<u8>::builder().edge([1]).edge([]).build();
        assert!(res.is_err());
    }
}
