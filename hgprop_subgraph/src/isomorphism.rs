//! Isomorphism and automorphisms of hypergraphs.
//!
//! Both operations reduce to the matcher over bipartite incidence graphs:
//! H1 and H2 are isomorphic iff B(H1) and B(H2) are, under a bijection that
//! keeps vertex-nodes and edge-nodes apart. Restricting that bijection to the
//! vertex-nodes gives the vertex mapping; the edge correspondence follows
//! from it and is not reported.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use hgprop_common::{Config, Hypergraph, Result, VertexId};
use indexmap::IndexMap;
use tracing::debug;

use crate::assignment::Assignment;
use crate::bipartite::IncidenceGraph;
use crate::matcher::{GraphMatcher, SearchStats};

/// Which necessary condition ruled out an isomorphism before any search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// `|V1| != |V2|`.
    VertexCount,
    /// `|E1| != |E2|`.
    EdgeCount,
    /// The sorted vertex degrees differ.
    DegreeSequence,
    /// The sorted edge sizes differ.
    EdgeSizes,
}

impl Rejection {
    /// Run the pre-filters in order, returning the first that fails.
    #[must_use]
    pub fn check<V, W>(h1: &Hypergraph<V>, h2: &Hypergraph<W>) -> Option<Self> {
        if h1.num_vertices() != h2.num_vertices() {
            Some(Self::VertexCount)
        } else if h1.num_edges() != h2.num_edges() {
            Some(Self::EdgeCount)
        } else if h1.degree_sequence() != h2.degree_sequence() {
            Some(Self::DegreeSequence)
        } else if h1.edge_size_sequence() != h2.edge_size_sequence() {
            Some(Self::EdgeSizes)
        } else {
            None
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::VertexCount => "vertex counts differ",
            Self::EdgeCount => "edge counts differ",
            Self::DegreeSequence => "degree sequences differ",
            Self::EdgeSizes => "edge size sequences differ",
        };
        f.write_str(reason)
    }
}

/// A vertex bijection between two hypergraphs that carries edges onto edges.
#[derive(Clone, Debug)]
pub struct VertexMapping<V, W> {
    /// Source vertex to image, in source vertex order.
    pairs: IndexMap<V, W>,
    /// Image ids, indexed by source vertex id.
    images: Vec<VertexId>,
}

impl<V: Clone + Eq + Hash, W: Clone> VertexMapping<V, W> {
    fn from_images(source: &Hypergraph<V>, target: &Hypergraph<W>, images: Vec<VertexId>) -> Self {
        let pairs = source
            .vertices()
            .cloned()
            .zip(images.iter().filter_map(|&id| target.vertex(id).cloned()))
            .collect();
        Self { pairs, images }
    }
}

impl<V: Eq + Hash, W> VertexMapping<V, W> {
    /// Image of `v`.
    pub fn get(&self, v: &V) -> Option<&W> {
        self.pairs.get(v)
    }

    /// `(vertex, image)` pairs in source vertex order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, V, W> {
        self.pairs.iter()
    }

    /// Number of mapped vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True for the mapping between two empty hypergraphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Every vertex id maps to itself.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(i, id)| id.as_usize() == i)
    }

    /// Image ids indexed by source vertex id.
    #[must_use]
    pub fn map_vertex_ids(&self) -> &[VertexId] {
        &self.images
    }

    /// Image of a member list, or `None` if some member is not mapped.
    pub fn map_edge<'a, I>(&self, members: I) -> Option<Vec<W>>
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
        W: Clone,
    {
        members.into_iter().map(|v| self.get(v).cloned()).collect()
    }
}

impl<V: Eq + Hash, W: PartialEq> PartialEq for VertexMapping<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<V: Eq + Hash, W: Eq> Eq for VertexMapping<V, W> {}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for VertexMapping<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (v, w)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v} -> {w}")?;
        }
        write!(f, "}}")
    }
}

/// Outcome of [`check_isomorphism`].
#[derive(Clone, Debug)]
pub struct IsomorphismReport<V, W> {
    /// A witnessing mapping, if the hypergraphs are isomorphic.
    pub mapping: Option<VertexMapping<V, W>>,
    /// Set when a pre-filter decided the answer without searching.
    pub rejection: Option<Rejection>,
    /// Matcher counters; all zero when a pre-filter fired.
    pub stats: SearchStats,
}

impl<V, W> IsomorphismReport<V, W> {
    /// Whether a mapping was found.
    #[must_use]
    pub const fn is_isomorphic(&self) -> bool {
        self.mapping.is_some()
    }
}

/// Decide isomorphism, reporting the mapping, any pre-filter rejection and
/// the search counters.
///
/// # Errors
///
/// Returns `SearchTruncated` if `config.max_states` is exceeded.
pub fn check_isomorphism<V, W>(
    h1: &Hypergraph<V>,
    h2: &Hypergraph<W>,
    config: &Config,
) -> Result<IsomorphismReport<V, W>>
where
    V: Clone + Eq + Hash,
    W: Clone,
{
    if let Some(rejection) = Rejection::check(h1, h2) {
        debug!("not isomorphic: {rejection}");
        return Ok(IsomorphismReport {
            mapping: None,
            rejection: Some(rejection),
            stats: SearchStats::default(),
        });
    }

    let b1 = IncidenceGraph::from_hypergraph(h1);
    let b2 = IncidenceGraph::from_hypergraph(h2);
    let mut matcher = GraphMatcher::new(b1.index(), b2.index(), config);
    let found = matcher.find_first()?;

    let mapping = found
        .and_then(|a| vertex_images(&b1, &b2, &a))
        .map(|images| VertexMapping::from_images(h1, h2, images));
    debug!(
        "isomorphism check over {} vertices: {}",
        h1.num_vertices(),
        if mapping.is_some() { "found" } else { "none" }
    );

    Ok(IsomorphismReport {
        mapping,
        rejection: None,
        stats: matcher.stats(),
    })
}

/// Whether `h1` and `h2` are isomorphic.
pub fn is_isomorphic<V, W>(h1: &Hypergraph<V>, h2: &Hypergraph<W>) -> bool
where
    V: Clone + Eq + Hash,
    W: Clone,
{
    find_isomorphism(h1, h2).is_some()
}

/// A vertex mapping witnessing `h1 ≅ h2`, or `None`.
pub fn find_isomorphism<V, W>(h1: &Hypergraph<V>, h2: &Hypergraph<W>) -> Option<VertexMapping<V, W>>
where
    V: Clone + Eq + Hash,
    W: Clone,
{
    // no state budget in the default config, so the search cannot fail
    check_isomorphism(h1, h2, &Config::default())
        .ok()
        .and_then(|report| report.mapping)
}

/// Every automorphism of `h`, the identity included.
pub fn hypergraph_automorphisms<V: Clone + Eq + Hash>(h: &Hypergraph<V>) -> Vec<VertexMapping<V, V>> {
    hypergraph_automorphisms_with(h, &Config::default()).unwrap_or_default()
}

/// Automorphisms of `h` under `config`.
///
/// With `automorphism_limit` set at most that many are returned (never fewer
/// than one); the identity is always among them.
///
/// # Errors
///
/// Returns `SearchTruncated` if `config.max_states` is exceeded.
pub fn hypergraph_automorphisms_with<V: Clone + Eq + Hash>(
    h: &Hypergraph<V>,
    config: &Config,
) -> Result<Vec<VertexMapping<V, V>>> {
    let b = IncidenceGraph::from_hypergraph(h);
    let mut matcher = GraphMatcher::new(b.index(), b.index(), config);
    let found = matcher.enumerate_all()?;

    let mut seen = HashSet::new();
    let mut images: Vec<Vec<VertexId>> = found
        .iter()
        .filter_map(|a| vertex_images(&b, &b, a))
        .filter(|img| seen.insert(img.clone()))
        .collect();

    let identity: Vec<VertexId> = h.vertex_ids().collect();
    if !seen.contains(&identity) {
        // a limited enumeration may stop before reaching it
        images.insert(0, identity);
        if let Some(limit) = config.automorphism_limit {
            images.truncate(limit.max(1));
        }
    }

    debug!(
        "{} automorphisms over {} vertices ({} states)",
        images.len(),
        h.num_vertices(),
        matcher.stats().states
    );
    Ok(images
        .into_iter()
        .map(|img| VertexMapping::from_images(h, h, img))
        .collect())
}

/// `|Aut(h)|`.
pub fn automorphism_group_order<V: Clone + Eq + Hash>(h: &Hypergraph<V>) -> usize {
    hypergraph_automorphisms(h).len()
}

/// Restrict a complete incidence-graph assignment to vertex-nodes.
fn vertex_images(source: &IncidenceGraph, target: &IncidenceGraph, a: &Assignment) -> Option<Vec<VertexId>> {
    (0..source.num_vertices())
        .map(|i| {
            a.get_target(source.vertex_node(VertexId::from(i)))
                .and_then(|t| target.node_vertex(t))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn paths_with_different_labels_are_isomorphic() {
        let h1 = Hypergraph::from_edges([vec![1, 2], vec![2, 3]]).unwrap();
        let h2 = Hypergraph::from_edges([vec!["b", "a"], vec!["b", "c"]]).unwrap();
        let m = find_isomorphism(&h1, &h2).unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.get(&2), Some(&"b"));
        for e in h1.edges() {
            let mut image = m.map_edge(h1.edge_members(e)).unwrap();
            image.sort_unstable();
            assert!(h2.contains_edge(image));
        }
    }

    #[rstest]
    #[case::vertex_count(vec![vec![1, 2, 3]], vec![vec![1, 2]], Rejection::VertexCount)]
    #[case::edge_count(
        vec![vec![1, 2, 3], vec![4, 5]],
        vec![vec![1, 2], vec![3, 4], vec![5]],
        Rejection::EdgeCount
    )]
    #[case::degree_sequence(
        vec![vec![1, 2], vec![2, 3], vec![3, 4]],
        vec![vec![1, 2], vec![1, 3], vec![1, 4]],
        Rejection::DegreeSequence
    )]
    #[case::edge_sizes(vec![vec![1, 2, 3], vec![4]], vec![vec![1, 2], vec![3, 4]], Rejection::EdgeSizes)]
    fn prefilter_rejects_without_searching(
        #[case] a: Vec<Vec<u32>>,
        #[case] b: Vec<Vec<u32>>,
        #[case] expected: Rejection,
    ) {
        let h1 = Hypergraph::from_edges(a).unwrap();
        let h2 = Hypergraph::from_edges(b).unwrap();
        let report = check_isomorphism(&h1, &h2, &Config::default()).unwrap();
        assert!(!report.is_isomorphic());
        assert!(report.mapping.is_none());
        assert_eq!(report.rejection, Some(expected));
        assert_eq!(report.stats.searches, 0);
        assert_eq!(report.stats.states, 0);
    }

    #[test]
    fn prefilter_order() {
        let path = Hypergraph::from_edges([vec![1, 2], vec![2, 3], vec![3, 4]]).unwrap();
        let star = Hypergraph::from_edges([vec![1, 2], vec![1, 3], vec![1, 4]]).unwrap();
        assert_eq!(Rejection::check(&path, &star), Some(Rejection::DegreeSequence));

        let a = Hypergraph::from_edges([vec![1, 2, 3], vec![3, 4]]).unwrap();
        let b = Hypergraph::from_parts([1, 2, 3, 4], [vec![1, 2], vec![3, 4], vec![1, 3]]).unwrap();
        assert_eq!(Rejection::check(&a, &b), Some(Rejection::EdgeCount));

        let short = Hypergraph::from_edges([vec![1, 2]]).unwrap();
        assert_eq!(Rejection::check(&a, &short), Some(Rejection::VertexCount));
    }

    #[test]
    fn search_runs_when_invariants_agree() {
        // same degrees and edge sizes, different structure
        let h1 = Hypergraph::from_edges([vec![1, 2], vec![2, 3], vec![3, 1], vec![4, 5], vec![5, 6], vec![6, 4]])
            .unwrap();
        let h2 = Hypergraph::from_edges([vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5], vec![5, 6], vec![6, 1]])
            .unwrap();
        let report = check_isomorphism(&h1, &h2, &Config::default()).unwrap();
        assert!(report.mapping.is_none());
        assert_eq!(report.rejection, None);
        assert_eq!(report.stats.searches, 1);
    }

    #[test]
    fn identity_is_listed() {
        let h = Hypergraph::from_edges([vec!['x', 'y'], vec!['y', 'z']]).unwrap();
        let autos = hypergraph_automorphisms(&h);
        assert_eq!(autos.len(), 2);
        assert_eq!(autos.iter().filter(|m| m.is_identity()).count(), 1);
        let identity = autos.iter().find(|m| m.is_identity()).unwrap();
        assert_eq!(identity.to_string(), "{x -> x, y -> y, z -> z}");
    }

    #[test]
    fn limited_enumeration_keeps_the_identity() {
        let h = Hypergraph::from_edges([vec![0, 1, 2, 3]]).unwrap();
        let cfg = Config::builder().automorphism_limit(5).build();
        let autos = hypergraph_automorphisms_with(&h, &cfg).unwrap();
        assert_eq!(autos.len(), 5);
        assert!(autos.iter().any(VertexMapping::is_identity));

        let cfg = Config::builder().automorphism_limit(0).build();
        let autos = hypergraph_automorphisms_with(&h, &cfg).unwrap();
        assert_eq!(autos.len(), 1);
        assert!(autos[0].is_identity());
    }
}
