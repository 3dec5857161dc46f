use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use crate::graph_index::GraphIndex;
use crate::node::NodeIdx;

/// Order in which pattern nodes are assigned.
///
/// Each step picks the unordered node with the most already-ordered
/// neighbors, so candidates can be drawn from a mapped neighbor's adjacency.
/// Ties, and the anchor of every connected component, go to the node whose
/// `(label, degree)` class is rarest, then to higher degree, then to the
/// lower index.
pub(crate) fn matching_order<L: Clone + Eq + Hash>(pattern: &GraphIndex<L>) -> Vec<NodeIdx> {
    let n = pattern.node_count();
    let class_sizes: HashMap<(&L, usize), usize> = pattern
        .nodes()
        .map(|node| (pattern.label(node), pattern.degree(node)))
        .counts();
    let rarity = |node: NodeIdx| {
        class_sizes
            .get(&(pattern.label(node), pattern.degree(node)))
            .copied()
            .unwrap_or(0)
    };

    let mut ordered = vec![false; n];
    let mut ordered_neighbors = vec![0usize; n];
    let mut order = Vec::with_capacity(n);

    loop {
        let next = pattern
            .nodes()
            .filter(|node| !ordered[node.as_usize()])
            .min_by_key(|&node| {
                (
                    Reverse(ordered_neighbors[node.as_usize()]),
                    rarity(node),
                    Reverse(pattern.degree(node)),
                    node,
                )
            });
        let Some(next) = next else {
            break;
        };
        ordered[next.as_usize()] = true;
        for &m in pattern.neighbors(next) {
            ordered_neighbors[m.as_usize()] += 1;
        }
        order.push(next);
    }

    order
}
