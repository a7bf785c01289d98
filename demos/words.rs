//! Load the words of a text file into a filter, then query a list of words.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shabloom::{words, BloomFilter, Config};
use tracing_subscriber::EnvFilter;

const QUERIES: [&str; 8] = [
    "requirement",
    "apple",
    "kafka",
    "bloom",
    "filter",
    "over",
    "banana",
    "fwefwe",
];

#[derive(Parser)]
#[command(author, version, about = "Query words against a Bloom filter built from a file")]
struct Cli {
    /// Text file whose words are inserted
    #[arg(long, short, default_value = "input.txt")]
    input: PathBuf,

    /// Size of the bit array, in bits
    #[arg(long, default_value_t = 1_000_000)]
    bits: usize,

    /// Number of hash probes per word
    #[arg(long, default_value_t = 3)]
    hashes: usize,

    /// Words to query; a built-in list is used when none are given
    queries: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let config = Config::new(cli.bits, cli.hashes).context("failed to create bloom filter")?;
    let mut filter = BloomFilter::new(config).context("failed to create bloom filter")?;

    let count = words::insert_words_from_file(&mut filter, &cli.input)
        .with_context(|| format!("error opening file: {}", cli.input.display()))?;
    tracing::info!(words = count, fill = filter.fill_ratio(), "Filter ready");

    let queries: Vec<&str> = if cli.queries.is_empty() {
        QUERIES.to_vec()
    } else {
        cli.queries.iter().map(String::as_str).collect()
    };
    for word in queries {
        println!(
            "'{}' might be in the filter: {}",
            word,
            filter.contains(word)
        );
    }
    Ok(())
}
