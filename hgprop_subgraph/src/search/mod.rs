use std::hash::Hash;
use std::ops::ControlFlow;

use hgprop_common::{HypergraphError, Result};
use tracing::trace;

use crate::assignment::Assignment;
use crate::graph_index::GraphIndex;
use crate::node::NodeIdx;

pub(crate) mod heuristics;
pub(crate) use heuristics::matching_order;

/// Mutable state threaded through one backtracking run.
pub(crate) struct SearchState {
    pub(crate) assignment: Assignment,
    /// Candidate pairs tried so far.
    pub(crate) states: u64,
    /// Abort once `states` exceeds this.
    pub(crate) budget: Option<u64>,
    /// Stop after this many complete assignments.
    pub(crate) limit: Option<usize>,
}

impl SearchState {
    pub(crate) fn new(
        pattern_len: usize,
        target_len: usize,
        budget: Option<u64>,
        limit: Option<usize>,
    ) -> Self {
        Self {
            assignment: Assignment::new(pattern_len, target_len),
            states: 0,
            budget,
            limit,
        }
    }
}

/// Extend the assignment along `order`, collecting every complete one.
///
/// Returns `Break` once the solution limit is reached.
pub(crate) fn backtrack<L: Clone + Eq + Hash>(
    pattern: &GraphIndex<L>,
    target: &GraphIndex<L>,
    order: &[NodeIdx],
    depth: usize,
    st: &mut SearchState,
    out: &mut Vec<Assignment>,
) -> Result<ControlFlow<()>> {
    let Some(&next_p) = order.get(depth) else {
        trace!("complete assignment #{}", out.len() + 1);
        out.push(st.assignment.clone());
        if st.limit.is_some_and(|limit| out.len() >= limit) {
            return Ok(ControlFlow::Break(()));
        }
        return Ok(ControlFlow::Continue(()));
    };

    // Phase 1: compute candidates with only immutable access to `st`.
    let candidates = candidates_for(next_p, pattern, target, &st.assignment);
    trace!("depth {depth}: {next_p} has {} candidates", candidates.len());

    // Phase 2: iterate candidates and perform scoped mutable updates.
    for t_cand in candidates {
        st.states += 1;
        if st.budget.is_some_and(|budget| st.states > budget) {
            return Err(HypergraphError::SearchTruncated {
                explored: st.states,
            });
        }
        let flow = with_mapping(st, next_p, t_cand, |st_inner| {
            backtrack(pattern, target, order, depth + 1, st_inner, out)
        })?;
        if flow.is_break() {
            return Ok(flow);
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// Scoped helper that maps `p -> t`, runs `f`, then unmaps.
fn with_mapping<R>(
    st: &mut SearchState,
    p: NodeIdx,
    t: NodeIdx,
    f: impl FnOnce(&mut SearchState) -> R,
) -> R {
    st.assignment.assign(p, t);
    let res = f(st);
    st.assignment.unassign(p);
    res
}

/// Target nodes `p` may be mapped to under the current assignment.
///
/// When a neighbor of `p` is already mapped the pool is that image's
/// adjacency, otherwise every target node of `p`'s class.
fn candidates_for<L: Clone + Eq + Hash>(
    p: NodeIdx,
    pattern: &GraphIndex<L>,
    target: &GraphIndex<L>,
    assignment: &Assignment,
) -> Vec<NodeIdx> {
    let anchor = pattern
        .neighbors(p)
        .iter()
        .find_map(|&q| assignment.get_target(q));

    let pool = match anchor {
        Some(t_anchor) => target.neighbors(t_anchor),
        None => target.nodes_with_label(pattern.label(p)),
    };

    pool.iter()
        .copied()
        .filter(|&t| nodes_compatible(p, t, pattern, target, assignment))
        .collect()
}

/// Whether mapping `p -> t` keeps the assignment a partial isomorphism.
fn nodes_compatible<L: Eq>(
    p: NodeIdx,
    t: NodeIdx,
    pattern: &GraphIndex<L>,
    target: &GraphIndex<L>,
    assignment: &Assignment,
) -> bool {
    if !assignment.target_is_free(t)
        || pattern.label(p) != target.label(t)
        || pattern.degree(p) != target.degree(t)
        || pattern.is_adjacent(p, p) != target.is_adjacent(t, t)
    {
        return false;
    }

    let mut mapped_links = 0;
    for &q in pattern.neighbors(p) {
        if let Some(t_q) = assignment.get_target(q) {
            if !target.is_adjacent(t, t_q) {
                return false;
            }
            mapped_links += 1;
        }
    }

    // every mapped neighbor of t must be the image of a neighbor of p
    let target_links = target
        .neighbors(t)
        .iter()
        .filter(|&&m| !assignment.target_is_free(m))
        .count();
    target_links == mapped_links
}
