//! Vertex partitions, quotient blocks and set-partition enumeration.

use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::error::{HypergraphError, Result};

/// A list of non-empty vertex blocks.
///
/// [`Partition::new`] only normalizes the blocks; whether they partition a
/// particular vertex set is checked by [`Partition::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition<V> {
    blocks: Vec<Vec<V>>,
}

impl<V: Clone + Eq + Hash> Partition<V> {
    /// Normalize raw blocks: repeated members collapse, empty blocks are rejected.
    pub fn new<P, B>(blocks: P) -> Result<Self>
    where
        P: IntoIterator<Item = B>,
        B: IntoIterator<Item = V>,
    {
        let blocks = blocks
            .into_iter()
            .map(|block| {
                let members: IndexSet<V> = block.into_iter().collect();
                if members.is_empty() {
                    return Err(HypergraphError::invalid_partition(
                        "partition blocks must be non-empty",
                    ));
                }
                Ok(members.into_iter().collect())
            })
            .collect::<Result<Vec<Vec<V>>>>()?;
        Ok(Self { blocks })
    }

    /// The blocks in the order they were supplied.
    #[must_use]
    pub fn blocks(&self) -> &[Vec<V>] {
        &self.blocks
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether there are no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Index of the block containing `v`.
    pub fn block_of(&self, v: &V) -> Option<usize> {
        self.blocks.iter().position(|b| b.contains(v))
    }

    /// Map every vertex to the index of its block.
    #[must_use]
    pub fn vertex_to_block(&self) -> HashMap<&V, usize> {
        self.blocks
            .iter()
            .enumerate()
            .flat_map(|(i, block)| block.iter().map(move |v| (v, i)))
            .collect()
    }

    /// Check that the blocks are pairwise disjoint and cover exactly `vertices`.
    pub fn validate<'a, I>(&self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a V>,
        V: fmt::Debug + 'a,
    {
        let mut union: HashSet<&V> = HashSet::new();
        for block in &self.blocks {
            for v in block {
                if !union.insert(v) {
                    return Err(HypergraphError::invalid_partition(format!(
                        "partition is not disjoint ({v:?} appears in more than one block)"
                    )));
                }
            }
        }

        let vertices: HashSet<&V> = vertices.into_iter().collect();
        if union == vertices {
            return Ok(());
        }

        let mut missing: Vec<String> = vertices.difference(&union).map(|v| format!("{v:?}")).collect();
        let mut extra: Vec<String> = union.difference(&vertices).map(|v| format!("{v:?}")).collect();
        missing.sort();
        extra.sort();

        let mut parts = Vec::new();
        if !missing.is_empty() {
            parts.push(format!("missing vertices: [{}]", missing.join(", ")));
        }
        if !extra.is_empty() {
            parts.push(format!("extra vertices: [{}]", extra.join(", ")));
        }
        Err(HypergraphError::invalid_partition(format!(
            "partition does not cover exactly V ({})",
            parts.join(", ")
        )))
    }
}

/// One block of a partition, used as a vertex of a quotient hypergraph.
///
/// Members are stored in the source hypergraph's vertex order, which makes
/// equality and hashing structural.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block<V> {
    members: Vec<V>,
}

impl<V> Block<V> {
    pub(crate) const fn from_ordered(members: Vec<V>) -> Self {
        Self { members }
    }

    /// Source vertices merged into this block.
    #[must_use]
    pub fn members(&self) -> &[V] {
        &self.members
    }

    /// Number of merged vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for blocks produced by a quotient.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<V: PartialEq> Block<V> {
    /// Whether `v` was merged into this block.
    pub fn contains(&self, v: &V) -> bool {
        self.members.contains(v)
    }
}

impl<V: fmt::Display> fmt::Display for Block<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "}}")
    }
}

/// Every set partition of `{1, ..., n}`.
///
/// Built recursively: each partition of `{1..n-1}` yields one partition with
/// `{n}` as a new singleton block followed by one partition per existing
/// block with `n` added to it. The result has Bell(n) entries; `n == 0`
/// yields the single empty partition.
#[must_use]
pub fn all_partitions(n: usize) -> Vec<Partition<usize>> {
    let mut partitions: Vec<Vec<Vec<usize>>> = vec![Vec::new()];
    for item in 1..=n {
        let mut next = Vec::new();
        for part in &partitions {
            let mut with_singleton = part.clone();
            with_singleton.push(vec![item]);
            next.push(with_singleton);

            for i in 0..part.len() {
                let mut joined = part.clone();
                joined[i].push(item);
                next.push(joined);
            }
        }
        partitions = next;
    }
    partitions.into_iter().map(|blocks| Partition { blocks }).collect()
}

/// Möbius function of the partition lattice from a partition to the top:
/// `(-1)^(|ρ|-1) * (|ρ|-1)!` where `|ρ|` is the number of blocks.
///
/// The empty partition is treated like a single block.
#[must_use]
pub fn moebius<V>(partition: &Partition<V>) -> i64 {
    let rank = partition.blocks.len().saturating_sub(1);
    let magnitude: i64 = (1..=rank as i64).product();
    if rank % 2 == 0 { magnitude } else { -magnitude }
}
