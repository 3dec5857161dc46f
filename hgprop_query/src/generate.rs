//! Enumeration of hypergraphs up to isomorphism.
//!
//! For every vertex count `n` the generator lists the admissible edges on
//! `{1..n}` as bitmasks, walks all k-combinations of distinct edges, and keeps
//! a candidate only if it is not isomorphic to a representative already kept
//! for the same `n`. Representatives for different `n` can never be
//! isomorphic, so they are not compared.
//!
//! Deduplication is quadratic in the number of representatives. That is fine
//! for the single-digit `k` and `alpha` this is meant for; larger inputs are
//! slow, not wrong.

use hgprop_common::{Config, Hypergraph, HypergraphError, Result};
use hgprop_subgraph::is_isomorphic;
use itertools::Itertools;
use tracing::{debug, trace};

/// Widest vertex set an edge bitmask can describe.
pub const MAX_GENERATED_VERTICES: usize = u64::BITS as usize;

/// Every hypergraph with `k` edges of exactly `alpha` vertices and no
/// isolated vertex, one per isomorphism class.
///
/// Vertices are labeled `1..=n`. Output is in admission order.
///
/// # Errors
///
/// Returns `InvalidArgument` if `k` or `alpha` is zero, or if more than
/// [`MAX_GENERATED_VERTICES`] vertices would be needed.
pub fn generate_nonisomorphic_hypergraphs(k: usize, alpha: usize) -> Result<Vec<Hypergraph<usize>>> {
    generate_with(k, alpha, &Config::default())
}

/// [`generate_nonisomorphic_hypergraphs`] with the edge-size rule, vertex
/// budget and coverage filter taken from `config`.
///
/// With `require_no_isolated` off, uncovered vertices stay in the generated
/// hypergraph so candidates with different `n` remain distinct.
///
/// # Errors
///
/// See [`generate_nonisomorphic_hypergraphs`].
pub fn generate_with(k: usize, alpha: usize, config: &Config) -> Result<Vec<Hypergraph<usize>>> {
    if k == 0 {
        return Err(HypergraphError::invalid_argument("k must be at least 1"));
    }
    if alpha == 0 {
        return Err(HypergraphError::invalid_argument("alpha must be at least 1"));
    }
    let max_n = config.vertex_budget(k, alpha).ok_or_else(|| {
        HypergraphError::invalid_argument(format!("vertex budget {k} * {alpha} overflows"))
    })?;
    if max_n > MAX_GENERATED_VERTICES {
        return Err(HypergraphError::invalid_argument(format!(
            "at most {MAX_GENERATED_VERTICES} vertices are supported, {max_n} requested"
        )));
    }

    let mut reps: Vec<Hypergraph<usize>> = Vec::new();
    for n in 1..=max_n {
        let edges = candidate_edges(n, alpha, config);
        if edges.len() < k {
            trace!("n = {n}: only {} admissible edges, skipping", edges.len());
            continue;
        }

        let first_of_n = reps.len();
        let full = full_mask(n);
        let mut candidates = 0usize;
        for combo in edges.iter().copied().combinations(k) {
            if config.require_no_isolated && combo.iter().fold(0, |acc, m| acc | m) != full {
                continue;
            }
            candidates += 1;
            let candidate = from_masks(n, &combo)?;
            if reps[first_of_n..].iter().all(|rep| !is_isomorphic(rep, &candidate)) {
                reps.push(candidate);
            }
        }
        debug!(
            "n = {n}: {candidates} candidates, {} new classes",
            reps.len() - first_of_n
        );
    }

    debug!("generated {} classes for k = {k}, alpha = {alpha}", reps.len());
    Ok(reps)
}

/// All admissible edges on `n` vertices, by size then lexicographically.
fn candidate_edges(n: usize, alpha: usize, config: &Config) -> Vec<u64> {
    config
        .edge_sizes
        .range(alpha, n)
        .flat_map(|r| {
            (0..n)
                .combinations(r)
                .map(|members| members.into_iter().fold(0u64, |m, i| m | (1 << i)))
        })
        .collect()
}

const fn full_mask(n: usize) -> u64 {
    if n >= MAX_GENERATED_VERTICES {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// Bit `i` of a mask stands for vertex `i + 1`.
fn from_masks(n: usize, masks: &[u64]) -> Result<Hypergraph<usize>> {
    let edges = masks
        .iter()
        .map(|&m| (0..n).filter(|i| m & (1 << i) != 0).map(|i| i + 1).collect::<Vec<_>>());
    Hypergraph::from_parts(1..=n, edges)
}
