//! Venn graphlets of three hyperedges.
//!
//! Three sets cut their union into seven Venn regions. A [`VennGraphlet3`]
//! records which of them are non-empty as a 7-bit signature:
//!
//! | bit | region            |
//! |-----|-------------------|
//! | 0   | only `e1`         |
//! | 1   | only `e2`         |
//! | 2   | only `e3`         |
//! | 3   | `e1 ∩ e2` only    |
//! | 4   | `e2 ∩ e3` only    |
//! | 5   | `e3 ∩ e1` only    |
//! | 6   | `e1 ∩ e2 ∩ e3`    |
//!
//! The canonical signature is the smallest value over the six orderings of
//! the edges, so it identifies the graphlet regardless of edge order.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use hgprop_common::{Hypergraph, HypergraphError, Result};
use itertools::Itertools;

/// One of the seven regions of a three-set Venn diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// In `e1` only.
    Only1,
    /// In `e2` only.
    Only2,
    /// In `e3` only.
    Only3,
    /// In `e1` and `e2`, not `e3`.
    Pair12,
    /// In `e2` and `e3`, not `e1`.
    Pair23,
    /// In `e3` and `e1`, not `e2`.
    Pair31,
    /// In all three.
    Triple,
}

impl Region {
    /// Every region, in signature bit order.
    pub const ALL: [Self; 7] = [
        Self::Only1,
        Self::Only2,
        Self::Only3,
        Self::Pair12,
        Self::Pair23,
        Self::Pair31,
        Self::Triple,
    ];

    /// Bit index of this region in a signature.
    #[must_use]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Region holding the elements whose membership mask is `mask`
    /// (bit 0 for `e1`, bit 1 for `e2`, bit 2 for `e3`).
    const fn from_membership(mask: u8) -> Option<Self> {
        match mask {
            0b001 => Some(Self::Only1),
            0b010 => Some(Self::Only2),
            0b100 => Some(Self::Only3),
            0b011 => Some(Self::Pair12),
            0b110 => Some(Self::Pair23),
            0b101 => Some(Self::Pair31),
            0b111 => Some(Self::Triple),
            _ => None,
        }
    }

    /// Short set-algebra label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Only1 => "1-only",
            Self::Only2 => "2-only",
            Self::Only3 => "3-only",
            Self::Pair12 => "1∩2-only",
            Self::Pair23 => "2∩3-only",
            Self::Pair31 => "3∩1-only",
            Self::Triple => "1∩2∩3",
        }
    }

    /// Color-coded phrase used by [`VennGraphlet3::describe`].
    const fn phrase(self) -> &'static str {
        match self {
            Self::Only1 => "a green zone of e1",
            Self::Only2 => "a green zone of e2",
            Self::Only3 => "a green zone of e3",
            Self::Pair12 => "a blue zone of e1 and e2",
            Self::Pair23 => "a blue zone of e2 and e3",
            Self::Pair31 => "a blue zone of e3 and e1",
            Self::Triple => "a red zone (e1, e2, e3)",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Venn-region signature of an ordered triple of hyperedges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VennGraphlet3 {
    raw_signature: u8,
    signature: u8,
}

impl VennGraphlet3 {
    /// Classify three edges given by their members.
    pub fn from_edges<V, A, B, C>(e1: A, e2: B, e3: C) -> Self
    where
        V: Eq + Hash,
        A: IntoIterator<Item = V>,
        B: IntoIterator<Item = V>,
        C: IntoIterator<Item = V>,
    {
        let sets: [HashSet<V>; 3] = [
            e1.into_iter().collect(),
            e2.into_iter().collect(),
            e3.into_iter().collect(),
        ];
        let raw = regions_signature(&sets);
        Self {
            raw_signature: raw,
            signature: canonical_signature(raw),
        }
    }

    /// Classify a hypergraph with exactly three edges, taken in edge order.
    ///
    /// # Errors
    ///
    /// Returns `EdgeCount` if `h` does not have exactly three edges.
    pub fn classify_hypergraph<V>(h: &Hypergraph<V>) -> Result<Self> {
        match h.edges() {
            [e1, e2, e3] => Ok(Self::from_edges(e1.iter(), e2.iter(), e3.iter())),
            edges => Err(HypergraphError::EdgeCount {
                expected: 3,
                actual: edges.len(),
            }),
        }
    }

    /// Whether `h` has three edges forming the same canonical graphlet.
    pub fn matches_hypergraph<V>(&self, h: &Hypergraph<V>) -> bool {
        Self::classify_hypergraph(h).is_ok_and(|g| g.signature == self.signature)
    }

    /// Canonical signature, independent of edge order.
    #[must_use]
    pub const fn signature(&self) -> u8 {
        self.signature
    }

    /// Signature for the edges in the order given.
    #[must_use]
    pub const fn raw_signature(&self) -> u8 {
        self.raw_signature
    }

    /// Canonical signature bits, least significant first.
    #[must_use]
    pub fn bits(&self) -> [bool; 7] {
        Region::ALL.map(|r| self.region_present(r))
    }

    /// Whether `region` is non-empty in the canonical ordering.
    #[must_use]
    pub const fn region_present(&self, region: Region) -> bool {
        (self.signature >> region.bit()) & 1 == 1
    }

    /// Populated regions of the canonical ordering, e.g.
    /// `a green zone of e1 (1-only) and a blue zone of e1 and e2 (1∩2-only).`
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<String> = Region::ALL
            .into_iter()
            .filter(|&r| self.region_present(r))
            .map(|r| format!("{} ({})", r.phrase(), r.label()))
            .collect();

        match parts.split_last() {
            None => "No zones present.".to_string(),
            Some((last, [])) => format!("{last}."),
            Some((last, rest)) => format!("{} and {last}.", rest.join(", ")),
        }
    }
}

impl fmt::Display for VennGraphlet3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VennGraphlet3(signature={:07b})", self.signature)
    }
}

fn regions_signature<V: Eq + Hash>(sets: &[HashSet<V>; 3]) -> u8 {
    sets.iter()
        .flatten()
        .filter_map(|x| {
            let membership = sets
                .iter()
                .enumerate()
                .filter(|(_, s)| s.contains(x))
                .fold(0u8, |m, (i, _)| m | (1 << i));
            Region::from_membership(membership)
        })
        .fold(0u8, |sig, r| sig | (1 << r.bit()))
}

/// Signature after reordering the edges: new edge `i` is old edge `perm[i]`.
fn permute_signature(sig: u8, perm: [usize; 3]) -> u8 {
    let bit = |i: usize| (sig >> i) & 1;
    let pair = |a: usize, b: usize| match (a.min(b), a.max(b)) {
        (0, 1) => bit(3),
        (1, 2) => bit(4),
        _ => bit(5),
    };
    let [p0, p1, p2] = perm;
    let new_bits = [
        bit(p0),
        bit(p1),
        bit(p2),
        pair(p0, p1),
        pair(p1, p2),
        pair(p2, p0),
        bit(6),
    ];
    new_bits
        .into_iter()
        .enumerate()
        .fold(0u8, |out, (i, b)| out | (b << i))
}

/// Smallest signature over the six orderings of the edges.
fn canonical_signature(sig: u8) -> u8 {
    (0..3usize)
        .permutations(3)
        .map(|p| permute_signature(sig, [p[0], p[1], p[2]]))
        .min()
        .unwrap_or(sig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_signature_follows_bit_table() {
        let g = VennGraphlet3::from_edges([0, 1, 2], [2, 3], [4, 5, 6]);
        assert_eq!(g.raw_signature(), 0b000_1111);
        assert_eq!(g.signature(), 0b000_1111);

        let g = VennGraphlet3::from_edges([1, 2], [2, 3], [3, 1]);
        assert_eq!(g.raw_signature(), 0b011_1000);
    }

    #[test]
    fn canonical_form_ignores_edge_order() {
        let a = VennGraphlet3::from_edges([1, 2, 3], [3, 4], [9]);
        let b = VennGraphlet3::from_edges([9], [3, 4], [1, 2, 3]);
        let c = VennGraphlet3::from_edges([3, 4], [9], [1, 2, 3]);
        assert_ne!(a.raw_signature(), b.raw_signature());
        assert_eq!(a.signature(), b.signature());
        assert_eq!(a.signature(), c.signature());
    }

    #[test]
    fn identity_permutation_is_a_no_op() {
        for sig in 0..128u8 {
            assert_eq!(permute_signature(sig, [0, 1, 2]), sig);
            assert!(canonical_signature(sig) <= sig);
        }
    }

    #[test]
    fn describe_joins_with_and() {
        let g = VennGraphlet3::from_edges([1, 2, 3], [1, 2, 3], [1, 2, 3]);
        assert_eq!(g.describe(), "a red zone (e1, e2, e3) (1∩2∩3).");

        let g = VennGraphlet3::from_edges([1], [2], [3]);
        assert_eq!(
            g.describe(),
            "a green zone of e1 (1-only), a green zone of e2 (2-only) and a green zone of e3 (3-only)."
        );
        assert_eq!(g.to_string(), "VennGraphlet3(signature=0000111)");
    }
}
