use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hgprop_common::{Config, ConfigBuilder, EdgeSizes};

/// hgprop - hypergraph isomorphism, generation and graphlet tools
///
/// Hypergraphs are written as sets of sets, e.g. "{{a, b}, {b, c}}".
#[derive(Parser, Debug)]
#[command(name = "hgprop")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file holding a serialized configuration to start from
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Abort any isomorphism search after this many states
    #[arg(long, global = true)]
    pub max_states: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enumerate hypergraphs with K edges of size ALPHA up to isomorphism
    Generate {
        /// Number of edges
        #[arg(short = 'k', long)]
        k: usize,
        /// Edge size
        #[arg(short = 'a', long)]
        alpha: usize,
        /// Allow every edge size from 1 to ALPHA
        #[arg(long, default_value_t = false)]
        up_to: bool,
        /// Largest vertex count to try (default K * ALPHA)
        #[arg(long)]
        max_vertices: Option<usize>,
        /// Keep hypergraphs with uncovered vertices
        #[arg(long, default_value_t = false)]
        allow_isolated: bool,
        /// Write the family here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Decide whether two hypergraphs are isomorphic
    Iso {
        /// First hypergraph
        first: String,
        /// Second hypergraph
        second: String,
    },
    /// List the automorphisms of a hypergraph
    Automorphisms {
        /// The hypergraph
        hypergraph: String,
        /// Stop after this many automorphisms
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Merge the vertices of a hypergraph along a partition
    Quotient {
        /// The hypergraph
        hypergraph: String,
        /// The partition, as a set of blocks
        partition: String,
    },
    /// Venn graphlet of a three-edge hypergraph
    Classify {
        /// The hypergraph
        hypergraph: String,
    },
    /// Count the isomorphism classes in a family file
    Dedupe {
        /// File with one hypergraph per line
        path: PathBuf,
    },
}

impl Args {
    /// Convert command-line arguments into internal configuration.
    ///
    /// Flags override values loaded from `--config`.
    pub fn to_config(&self) -> Result<Config, Box<dyn Error>> {
        let base = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => Config::default(),
        };
        let mut builder = ConfigBuilder::from(base);

        if let Some(states) = self.max_states {
            builder = builder.max_states(states);
        }
        match &self.command {
            Command::Generate {
                up_to,
                max_vertices,
                allow_isolated,
                ..
            } => {
                if *up_to {
                    builder = builder.edge_sizes(EdgeSizes::UpTo);
                }
                if let Some(n) = *max_vertices {
                    builder = builder.max_vertices(n);
                }
                if *allow_isolated {
                    builder = builder.require_no_isolated(false);
                }
            }
            Command::Automorphisms {
                limit: Some(limit), ..
            } => builder = builder.automorphism_limit(*limit),
            _ => {}
        }
        Ok(builder.build())
    }
}
