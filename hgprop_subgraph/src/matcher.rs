//! Class-constrained graph isomorphism search.
//!
//! This module provides the reusable matching engine that the hypergraph
//! operations are built on. It knows nothing about hypergraphs: it decides
//! whether two labeled graphs are isomorphic under a bijection that preserves
//! labels and adjacency exactly, and can enumerate every such bijection.
//! Search is plain backtracking over a heuristic node order with degree,
//! label and adjacency pruning.

use std::hash::Hash;

use hgprop_common::{Config, Result};
use tracing::debug;

use crate::assignment::{Assignment, AssignmentSet};
use crate::graph_index::GraphIndex;
use crate::search::{SearchState, backtrack, matching_order};

/// Counters collected across the runs of one [`GraphMatcher`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Times a search was started.
    pub searches: u64,
    /// Candidate pairs tried.
    pub states: u64,
    /// Complete assignments found.
    pub solutions: u64,
}

/// Entry point for label-preserving isomorphism searches.
pub struct GraphMatcher<'a, L> {
    /// The graph whose nodes are being mapped.
    pattern: &'a GraphIndex<L>,
    /// The graph being mapped onto.
    target: &'a GraphIndex<L>,
    /// Configuration settings for the matcher.
    config: &'a Config,
    stats: SearchStats,
}

impl<'a, L: Clone + Eq + Hash> GraphMatcher<'a, L> {
    /// Prepare a search from `pattern` onto `target`.
    #[must_use]
    pub const fn new(pattern: &'a GraphIndex<L>, target: &'a GraphIndex<L>, config: &'a Config) -> Self {
        Self {
            pattern,
            target,
            config,
            stats: SearchStats {
                searches: 0,
                states: 0,
                solutions: 0,
            },
        }
    }

    /// First isomorphism found, or `None` when the graphs are not isomorphic.
    ///
    /// Fails with `SearchTruncated` if the configured state budget runs out.
    pub fn find_first(&mut self) -> Result<Option<Assignment>> {
        Ok(self.enumerate(Some(1))?.into_iter().next())
    }

    /// Every isomorphism, up to `Config::automorphism_limit` of them.
    pub fn enumerate_all(&mut self) -> Result<AssignmentSet> {
        self.enumerate(self.config.automorphism_limit)
    }

    /// Isomorphisms in discovery order, stopping after `limit` of them.
    pub fn enumerate(&mut self, limit: Option<usize>) -> Result<AssignmentSet> {
        self.stats.searches += 1;

        if !self.shapes_agree() {
            debug!("graph shapes differ, no isomorphism");
            return Ok(AssignmentSet::default());
        }
        if limit == Some(0) {
            return Ok(AssignmentSet::default());
        }

        let order = matching_order(self.pattern);
        let mut st = SearchState::new(
            self.pattern.node_count(),
            self.target.node_count(),
            self.config.max_states,
            limit,
        );
        let mut out = Vec::new();
        let outcome = backtrack(self.pattern, self.target, &order, 0, &mut st, &mut out);

        self.stats.states += st.states;
        self.stats.solutions += out.len() as u64;
        let hit_limit = outcome?.is_break();

        debug!(
            "search over {} nodes tried {} states, found {} isomorphisms{}",
            self.pattern.node_count(),
            st.states,
            out.len(),
            if hit_limit { " (limit reached)" } else { "" }
        );
        Ok(AssignmentSet::new(out))
    }

    /// Counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Node count, link count and class sizes must agree for any isomorphism.
    fn shapes_agree(&self) -> bool {
        self.pattern.node_count() == self.target.node_count()
            && self.pattern.link_count() == self.target.link_count()
            && self.pattern.class_sizes() == self.target.class_sizes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeIdx;
    use hgprop_common::HypergraphError;

    fn cycle(n: usize) -> GraphIndex<()> {
        GraphIndex::build(vec![(); n], (0..n).map(|i| (i, (i + 1) % n)))
    }

    fn path(n: usize) -> GraphIndex<()> {
        GraphIndex::build(vec![(); n], (1..n).map(|i| (i - 1, i)))
    }

    fn is_isomorphism<L: Eq>(a: &Assignment, p: &GraphIndex<L>, t: &GraphIndex<L>) -> bool {
        a.is_complete()
            && p.nodes().all(|x| {
                p.nodes().all(|y| {
                    let (tx, ty) = (a.get_target(x).unwrap(), a.get_target(y).unwrap());
                    p.is_adjacent(x, y) == t.is_adjacent(tx, ty) && p.label(x) == t.label(tx)
                })
            })
    }

    #[test]
    fn cycle_automorphisms_form_the_dihedral_group() {
        let g = cycle(5);
        let cfg = Config::default();
        let mut m = GraphMatcher::new(&g, &g, &cfg);
        let all = m.enumerate_all().unwrap();
        assert_eq!(all.len(), 10);
        assert!(all.iter().all(|a| is_isomorphism(a, &g, &g)));
    }

    #[test]
    fn cycle_and_path_are_not_isomorphic() {
        let (c, p) = (cycle(4), path(4));
        let cfg = Config::default();
        let mut m = GraphMatcher::new(&c, &p, &cfg);
        assert!(m.find_first().unwrap().is_none());
        // link counts differ, so nothing was explored
        assert_eq!(m.stats().states, 0);
    }

    #[test]
    fn labels_constrain_the_mapping() {
        // path a - b - a versus a - a - b
        let g1 = GraphIndex::build(vec!['a', 'b', 'a'], [(0, 1), (1, 2)]);
        let g2 = GraphIndex::build(vec!['a', 'a', 'b'], [(0, 1), (1, 2)]);
        let cfg = Config::default();
        assert!(GraphMatcher::new(&g1, &g2, &cfg).find_first().unwrap().is_none());

        let g3 = GraphIndex::build(vec!['b', 'a', 'a'], [(1, 0), (0, 2)]);
        let found = GraphMatcher::new(&g1, &g3, &cfg).find_first().unwrap().unwrap();
        assert_eq!(found.get_target(NodeIdx::new(1)), Some(NodeIdx::new(0)));
        assert!(is_isomorphism(&found, &g1, &g3));
    }

    #[test]
    fn same_degrees_but_different_structure() {
        // two triangles versus a hexagon: 2-regular on six nodes both
        let triangles = GraphIndex::build(vec![(); 6], [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let hexagon = cycle(6);
        let cfg = Config::default();
        let mut m = GraphMatcher::new(&triangles, &hexagon, &cfg);
        assert!(m.find_first().unwrap().is_none());
        assert!(m.stats().states > 0);
    }

    #[test]
    fn limit_stops_enumeration() {
        let g = cycle(6);
        let cfg = Config::default();
        let mut m = GraphMatcher::new(&g, &g, &cfg);
        assert_eq!(m.enumerate(Some(3)).unwrap().len(), 3);
        assert_eq!(m.enumerate(Some(0)).unwrap().len(), 0);
        assert_eq!(m.stats().searches, 2);
    }

    #[test]
    fn budget_reports_truncation() {
        let g = GraphIndex::build(vec![(); 7], std::iter::empty());
        let cfg = Config::builder().max_states(20).build();
        let mut m = GraphMatcher::new(&g, &g, &cfg);
        assert!(matches!(
            m.enumerate_all(),
            Err(HypergraphError::SearchTruncated { explored: 21 })
        ));
    }

    #[test]
    fn empty_graphs_have_one_empty_isomorphism() {
        let g: GraphIndex<()> = GraphIndex::build(Vec::new(), std::iter::empty());
        let cfg = Config::default();
        let all = GraphMatcher::new(&g, &g, &cfg).enumerate_all().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all.items[0].is_empty());
    }
}
