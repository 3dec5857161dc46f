//! Questions asked of whole hypergraphs and hypergraph families.
//!
//! [`generate`] enumerates small hypergraphs up to isomorphism; [`venn`]
//! classifies three-edge hypergraphs by their Venn regions. Family files are
//! written and read with the set-of-sets format from `hgprop_common::io`.

pub mod generate;
pub mod venn;

pub use generate::{MAX_GENERATED_VERTICES, generate_nonisomorphic_hypergraphs, generate_with};
pub use hgprop_common::io::{read_hypergraphs_from_file, write_hypergraphs_to_file};
pub use venn::{Region, VennGraphlet3};

use std::hash::Hash;

use hgprop_common::Hypergraph;
use hgprop_subgraph::is_isomorphic;

/// Keep the first member of every isomorphism class, in input order.
///
/// Uses the same pairwise check as the generator, so it is quadratic in the
/// number of classes.
pub fn isomorphism_class_representatives<V>(family: Vec<Hypergraph<V>>) -> Vec<Hypergraph<V>>
where
    V: Clone + Eq + Hash,
{
    let mut reps: Vec<Hypergraph<V>> = Vec::new();
    for h in family {
        if reps.iter().all(|rep| !is_isomorphic(rep, &h)) {
            reps.push(h);
        }
    }
    tracing::debug!("{} isomorphism classes", reps.len());
    reps
}
