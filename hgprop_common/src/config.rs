//! Configuration for isomorphism search and family generation.
//!
//! A single [`Config`] parameterizes both the backtracking matcher in
//! `hgprop_subgraph` and the generator in `hgprop_query`. Every field has a
//! default that reproduces the plain behaviour:
//!
//! - edge_sizes: every generated edge has exactly `alpha` vertices.
//! - max_vertices: try up to `k * alpha` vertices.
//! - require_no_isolated: every vertex of a candidate is covered by an edge.
//! - automorphism_limit: enumerate the whole automorphism group.
//! - max_states: never cut a search short.
//!
//! Quick examples
//!
//! ```
//! use hgprop_common::{Config, EdgeSizes};
//!
//! // Edges of any size from 1 to alpha.
//! let cfg = Config::builder().edge_sizes(EdgeSizes::UpTo).build();
//! assert_eq!(cfg.edge_sizes, EdgeSizes::UpTo);
//!
//! // Bail out of large searches instead of running forever.
//! let cfg = Config::builder().max_states(10_000).build();
//! assert_eq!(cfg.max_states, Some(10_000));
//! ```

use serde::{Deserialize, Serialize};

/// Global search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Which edge sizes the generator may use.
    pub edge_sizes: EdgeSizes,
    /// Largest vertex count the generator tries (defaults to `k * alpha`).
    pub max_vertices: Option<usize>,
    /// Drop generated candidates that leave a vertex uncovered.
    pub require_no_isolated: bool,
    /// Stop automorphism enumeration after this many mappings.
    pub automorphism_limit: Option<usize>,
    /// Abort a backtracking search after visiting this many states.
    pub max_states: Option<u64>,
}

impl Config {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Vertex budget for a generator run with `k` edges of arity `alpha`.
    ///
    /// `None` when no explicit maximum is set and `k * alpha` overflows.
    #[must_use]
    pub fn vertex_budget(&self, k: usize, alpha: usize) -> Option<usize> {
        self.max_vertices.or_else(|| k.checked_mul(alpha))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edge_sizes: EdgeSizes::Exact,
            max_vertices: None,
            require_no_isolated: true,
            automorphism_limit: None,
            max_states: None,
        }
    }
}

/// Edge sizes admitted by the generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeSizes {
    /// Every edge has exactly `alpha` vertices.
    #[default]
    Exact,
    /// Edges have between 1 and `alpha` vertices.
    UpTo,
}

impl EdgeSizes {
    /// The inclusive range of sizes allowed for arity `alpha` on `n` vertices.
    #[must_use]
    pub fn range(self, alpha: usize, n: usize) -> std::ops::RangeInclusive<usize> {
        match self {
            Self::Exact => alpha..=alpha,
            Self::UpTo => 1..=alpha.min(n),
        }
    }
}

/// Fluent builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    inner: Config,
}

impl From<Config> for ConfigBuilder {
    fn from(inner: Config) -> Self {
        Self { inner }
    }
}

impl ConfigBuilder {
    /// Set which edge sizes the generator uses.
    #[must_use]
    pub const fn edge_sizes(mut self, edge_sizes: EdgeSizes) -> Self {
        self.inner.edge_sizes = edge_sizes;
        self
    }

    /// Set the largest vertex count the generator tries.
    #[must_use]
    pub const fn max_vertices(mut self, n: usize) -> Self {
        self.inner.max_vertices = Some(n);
        self
    }

    /// Keep or drop candidates with uncovered vertices.
    #[must_use]
    pub const fn require_no_isolated(mut self, yes: bool) -> Self {
        self.inner.require_no_isolated = yes;
        self
    }

    /// Cap the number of automorphisms returned.
    #[must_use]
    pub const fn automorphism_limit(mut self, limit: usize) -> Self {
        self.inner.automorphism_limit = Some(limit);
        self
    }

    /// Cap the number of search states explored.
    #[must_use]
    pub const fn max_states(mut self, states: u64) -> Self {
        self.inner.max_states = Some(states);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Config {
        self.inner
    }
}
