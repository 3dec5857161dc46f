//! Labeled undirected graph used as the matcher's search substrate.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node::NodeIdx;

/// An undirected graph whose nodes carry a label.
///
/// Labels partition the nodes into classes; the matcher only ever maps a node
/// to a node of the same class. Neighbor lists are sorted and duplicate-free.
#[derive(Clone, Debug)]
pub struct GraphIndex<L> {
    labels: Vec<L>,
    adjacency: Vec<Vec<NodeIdx>>,
    by_label: HashMap<L, Vec<NodeIdx>>,
    link_count: usize,
}

impl<L: Clone + Eq + Hash> GraphIndex<L> {
    /// Build from one label per node and a list of undirected links.
    ///
    /// Repeated links are merged. A link `(a, a)` is a self-loop.
    ///
    /// # Panics
    ///
    /// Panics if a link references a node that has no label.
    pub fn build(labels: Vec<L>, links: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let n = labels.len();
        let mut adjacency: Vec<Vec<NodeIdx>> = vec![Vec::new(); n];
        for (a, b) in links {
            assert!(a < n && b < n, "link ({a}, {b}) is out of range for {n} nodes");
            adjacency[a].push(NodeIdx::from(b));
            if a != b {
                adjacency[b].push(NodeIdx::from(a));
            }
        }
        let mut link_count = 0;
        for (i, list) in adjacency.iter_mut().enumerate() {
            list.sort_unstable();
            list.dedup();
            // count each link once, from its lower endpoint
            link_count += list.iter().filter(|m| m.as_usize() >= i).count();
        }

        let mut by_label: HashMap<L, Vec<NodeIdx>> = HashMap::new();
        for (i, label) in labels.iter().enumerate() {
            by_label.entry(label.clone()).or_default().push(NodeIdx::from(i));
        }

        Self {
            labels,
            adjacency,
            by_label,
            link_count,
        }
    }

    /// Nodes carrying `label`, in ascending order.
    pub fn nodes_with_label(&self, label: &L) -> &[NodeIdx] {
        self.by_label.get(label).map_or(&[], Vec::as_slice)
    }

    /// Size of every label class.
    pub fn class_sizes(&self) -> HashMap<&L, usize> {
        self.by_label.iter().map(|(l, nodes)| (l, nodes.len())).collect()
    }
}

impl<L> GraphIndex<L> {
    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct undirected links.
    #[must_use]
    pub const fn link_count(&self) -> usize {
        self.link_count
    }

    /// Label of `node`.
    #[must_use]
    pub fn label(&self, node: NodeIdx) -> &L {
        &self.labels[node.as_usize()]
    }

    /// Sorted neighbors of `node`.
    #[must_use]
    pub fn neighbors(&self, node: NodeIdx) -> &[NodeIdx] {
        &self.adjacency[node.as_usize()]
    }

    /// Number of distinct neighbors of `node`.
    #[must_use]
    pub fn degree(&self, node: NodeIdx) -> usize {
        self.adjacency[node.as_usize()].len()
    }

    /// Whether `a` and `b` are linked.
    #[must_use]
    pub fn is_adjacent(&self, a: NodeIdx, b: NodeIdx) -> bool {
        self.adjacency[a.as_usize()].binary_search(&b).is_ok()
    }

    /// All node indices.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeIdx> {
        (0..self.labels.len()).map(NodeIdx::from)
    }
}
