//! Mapping between pattern and target nodes.

use contracts::*;

use crate::node::NodeIdx;

/// A collection of complete assignments found during a search.
#[derive(Clone, Debug, Default)]
pub struct AssignmentSet {
    /// The assignments, in discovery order.
    pub items: Vec<Assignment>,
}

impl AssignmentSet {
    /// Creates a set from a list of assignments.
    #[must_use]
    pub const fn new(items: Vec<Assignment>) -> Self {
        Self { items }
    }

    /// Returns true if no assignment was found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of assignments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over the assignments.
    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.items.iter()
    }
}

impl IntoIterator for AssignmentSet {
    type Item = Assignment;
    type IntoIter = std::vec::IntoIter<Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A partial injective mapping from pattern nodes to target nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// Pattern to target node mapping
    pattern_to_target: Vec<Option<NodeIdx>>,
    /// Target to pattern node mapping
    target_to_pattern: Vec<Option<NodeIdx>>,
    /// Number of assigned pairs.
    assigned: usize,
}

impl Assignment {
    /// Checks that both directions describe the same set of pairs.
    pub fn is_consistent(&self) -> bool {
        let forward = self.pattern_to_target.iter().flatten().count();
        let backward = self.target_to_pattern.iter().flatten().count();
        if forward != self.assigned || backward != self.assigned {
            return false;
        }
        self.pattern_to_target.iter().enumerate().all(|(p, t)| {
            t.is_none_or(|t| {
                self.target_to_pattern
                    .get(t.as_usize())
                    .copied()
                    .flatten()
                    .is_some_and(|back| back.as_usize() == p)
            })
        })
    }

    /// Creates an empty assignment between graphs of the given sizes.
    #[ensures(ret.is_consistent())]
    #[must_use]
    pub fn new(pattern_len: usize, target_len: usize) -> Self {
        Self {
            pattern_to_target: vec![None; pattern_len],
            target_to_pattern: vec![None; target_len],
            assigned: 0,
        }
    }

    /// Record a pair. Both nodes must currently be free.
    #[debug_requires(self.pattern_to_target[pattern.as_usize()].is_none())]
    #[debug_requires(self.target_is_free(target))]
    #[debug_ensures(self.is_consistent())]
    pub(crate) fn assign(&mut self, pattern: NodeIdx, target: NodeIdx) {
        self.pattern_to_target[pattern.as_usize()] = Some(target);
        self.target_to_pattern[target.as_usize()] = Some(pattern);
        self.assigned += 1;
    }

    /// Remove the pair recorded for `pattern`, returning its target.
    #[debug_ensures(self.is_consistent())]
    pub(crate) fn unassign(&mut self, pattern: NodeIdx) -> Option<NodeIdx> {
        let target = self.pattern_to_target[pattern.as_usize()].take()?;
        self.target_to_pattern[target.as_usize()] = None;
        self.assigned -= 1;
        Some(target)
    }

    /// Target node assigned to `pattern`.
    #[must_use]
    pub fn get_target(&self, pattern: NodeIdx) -> Option<NodeIdx> {
        self.pattern_to_target.get(pattern.as_usize()).copied().flatten()
    }

    /// Pattern node assigned to `target`.
    #[must_use]
    pub fn get_pattern(&self, target: NodeIdx) -> Option<NodeIdx> {
        self.target_to_pattern.get(target.as_usize()).copied().flatten()
    }

    /// Returns true if the target node is not yet assigned.
    #[must_use]
    pub fn target_is_free(&self, target: NodeIdx) -> bool {
        self.get_pattern(target).is_none()
    }

    /// Number of assigned pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.assigned
    }

    /// Returns true if nothing is assigned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// Every pattern node has a target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned == self.pattern_to_target.len()
    }

    /// Assigned pairs in pattern order.
    pub fn pairs(&self) -> impl Iterator<Item = (NodeIdx, NodeIdx)> + '_ {
        self.pattern_to_target
            .iter()
            .enumerate()
            .filter_map(|(p, t)| t.map(|t| (NodeIdx::from(p), t)))
    }

    /// Target indices in pattern order; used as a dedupe key.
    #[must_use]
    pub fn signature(&self) -> Vec<u32> {
        self.pairs().map(|(_, t)| t.into()).collect()
    }
}
