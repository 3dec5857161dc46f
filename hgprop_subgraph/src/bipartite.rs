//! Bipartite incidence encoding of a hypergraph.
//!
//! Vertex `v` becomes node `v`, edge `e` becomes node `|V| + e`, and a link
//! joins them iff `v ∈ e`. The node class label keeps the two sides apart
//! during matching.

use hgprop_common::{EdgeId, Hypergraph, VertexId};

use crate::graph_index::GraphIndex;
use crate::node::NodeIdx;

/// Which side of the incidence graph a node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeClass {
    /// Stands for a hypergraph vertex.
    Vertex,
    /// Stands for a hyperedge.
    Edge,
}

/// The incidence graph `B(H)` of a hypergraph.
#[derive(Clone, Debug)]
pub struct IncidenceGraph {
    index: GraphIndex<NodeClass>,
    num_vertices: usize,
    num_edges: usize,
}

impl IncidenceGraph {
    /// Encode `h`. Node numbering follows the hypergraph's vertex and edge order.
    pub fn from_hypergraph<V>(h: &Hypergraph<V>) -> Self {
        let num_vertices = h.num_vertices();
        let num_edges = h.num_edges();

        let mut labels = vec![NodeClass::Vertex; num_vertices];
        labels.resize(num_vertices + num_edges, NodeClass::Edge);

        let links = h.edges().iter().enumerate().flat_map(|(e, edge)| {
            edge.iter().map(move |v| (v.as_usize(), num_vertices + e))
        });

        Self {
            index: GraphIndex::build(labels, links),
            num_vertices,
            num_edges,
        }
    }

    /// The underlying labeled graph.
    #[must_use]
    pub const fn index(&self) -> &GraphIndex<NodeClass> {
        &self.index
    }

    /// Number of vertex-class nodes.
    #[must_use]
    pub const fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of edge-class nodes.
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Node standing for vertex `v`.
    #[must_use]
    pub fn vertex_node(&self, v: VertexId) -> NodeIdx {
        NodeIdx::from(v.as_usize())
    }

    /// Node standing for edge `e`.
    #[must_use]
    pub fn edge_node(&self, e: EdgeId) -> NodeIdx {
        NodeIdx::from(self.num_vertices + e.as_usize())
    }

    /// The vertex a node stands for, if it is vertex-class.
    #[must_use]
    pub fn node_vertex(&self, node: NodeIdx) -> Option<VertexId> {
        (node.as_usize() < self.num_vertices).then(|| VertexId::from(node.as_usize()))
    }

    /// The edge a node stands for, if it is edge-class.
    #[must_use]
    pub fn node_edge(&self, node: NodeIdx) -> Option<EdgeId> {
        let i = node.as_usize();
        (i >= self.num_vertices && i < self.num_vertices + self.num_edges)
            .then(|| EdgeId::from(i - self.num_vertices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_membership_as_links() {
        let h = Hypergraph::from_edges([vec![1, 2, 3], vec![3, 4]]).unwrap();
        let b = IncidenceGraph::from_hypergraph(&h);
        let g = b.index();

        assert_eq!(g.node_count(), 6);
        assert_eq!(g.link_count(), 5);
        assert_eq!(g.nodes_with_label(&NodeClass::Vertex).len(), 4);
        assert_eq!(g.nodes_with_label(&NodeClass::Edge).len(), 2);

        let v3 = b.vertex_node(h.vertex_id(&3).unwrap());
        let e0 = b.edge_node(EdgeId::new(0));
        let e1 = b.edge_node(EdgeId::new(1));
        assert!(g.is_adjacent(v3, e0));
        assert!(g.is_adjacent(v3, e1));
        assert_eq!(g.degree(e0), 3);
        assert_eq!(*g.label(e1), NodeClass::Edge);
    }

    #[test]
    fn node_classes_round_trip() {
        let h = Hypergraph::from_edges([vec!['a', 'b']]).unwrap();
        let b = IncidenceGraph::from_hypergraph(&h);
        assert_eq!(b.node_vertex(NodeIdx::new(1)), Some(VertexId::new(1)));
        assert_eq!(b.node_vertex(NodeIdx::new(2)), None);
        assert_eq!(b.node_edge(NodeIdx::new(2)), Some(EdgeId::new(0)));
        assert_eq!(b.node_edge(NodeIdx::new(3)), None);
    }

    #[test]
    fn isolated_vertices_keep_their_node() {
        let h = Hypergraph::from_parts([0, 1, 2], Vec::<Vec<i32>>::new()).unwrap();
        let b = IncidenceGraph::from_hypergraph(&h);
        assert_eq!(b.index().node_count(), 3);
        assert_eq!(b.index().link_count(), 0);
    }
}
