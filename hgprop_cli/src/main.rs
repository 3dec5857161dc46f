//! hgprop CLI
//!
//! Entry point for the hgprop command-line tool. Parses hypergraphs given in
//! set-of-sets form and runs isomorphism, automorphism, quotient, generation
//! and graphlet queries on them.

#[global_allocator]
/// Global allocator using jemalloc.
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod args;

use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use hgprop_common::io::{parse_set_list, parse_set_of_sets, write_hypergraphs};
use hgprop_common::{Config, Hypergraph};
use hgprop_query::{
    VennGraphlet3, generate_with, isomorphism_class_representatives, read_hypergraphs_from_file,
    write_hypergraphs_to_file,
};
use hgprop_subgraph::{check_isomorphism, hypergraph_automorphisms_with};
use tracing::info;

use args::{Args, Command};

/// Hypergraphs read from the command line carry their labels as text.
type Labeled = Hypergraph<String>;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = args.to_config()?;

    match &args.command {
        Command::Generate {
            k, alpha, output, ..
        } => generate(*k, *alpha, output.as_deref(), &config),
        Command::Iso { first, second } => iso(first, second, &config),
        Command::Automorphisms { hypergraph, .. } => automorphisms(hypergraph, &config),
        Command::Quotient {
            hypergraph,
            partition,
        } => quotient(hypergraph, partition),
        Command::Classify { hypergraph } => classify(hypergraph),
        Command::Dedupe { path } => dedupe(path),
    }
}

fn generate(k: usize, alpha: usize, output: Option<&Path>, config: &Config) -> Result<(), Box<dyn Error>> {
    let family = generate_with(k, alpha, config)?;
    info!("{} isomorphism classes for k = {k}, alpha = {alpha}", family.len());

    match output {
        Some(path) => {
            write_hypergraphs_to_file(path, &family)?;
            println!("wrote {} hypergraphs to {}", family.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_hypergraphs(&mut stdout, &family)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn iso(first: &str, second: &str, config: &Config) -> Result<(), Box<dyn Error>> {
    let h1: Labeled = parse_set_of_sets(first)?;
    let h2: Labeled = parse_set_of_sets(second)?;
    let report = check_isomorphism(&h1, &h2, config)?;

    match (&report.mapping, report.rejection) {
        (Some(mapping), _) => println!("isomorphic: {mapping}"),
        (None, Some(reason)) => println!("not isomorphic: {reason}"),
        (None, None) => println!("not isomorphic"),
    }
    info!(
        "searches = {}, states = {}",
        report.stats.searches, report.stats.states
    );
    Ok(())
}

fn automorphisms(hypergraph: &str, config: &Config) -> Result<(), Box<dyn Error>> {
    let h: Labeled = parse_set_of_sets(hypergraph)?;
    let autos = hypergraph_automorphisms_with(&h, config)?;

    println!("|Aut| = {}", autos.len());
    for mapping in &autos {
        println!("{mapping}");
    }
    Ok(())
}

fn quotient(hypergraph: &str, partition: &str) -> Result<(), Box<dyn Error>> {
    let h: Labeled = parse_set_of_sets(hypergraph)?;
    let blocks: Vec<Vec<String>> = parse_set_list(partition)?;
    let hq = h.quotient(blocks)?;
    println!("{hq}");
    Ok(())
}

fn classify(hypergraph: &str) -> Result<(), Box<dyn Error>> {
    let h: Labeled = parse_set_of_sets(hypergraph)?;
    let graphlet = VennGraphlet3::classify_hypergraph(&h)?;
    println!("{graphlet}");
    println!("{}", graphlet.describe());
    Ok(())
}

fn dedupe(path: &Path) -> Result<(), Box<dyn Error>> {
    let family: Vec<Labeled> = read_hypergraphs_from_file(path)?;
    let total = family.len();
    let reps = isomorphism_class_representatives(family);
    println!("{total} hypergraphs, {} isomorphism classes", reps.len());
    Ok(())
}
