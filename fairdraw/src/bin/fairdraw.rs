//! Command-line front end for the fairdraw sampling primitives.
//!
//! # Usage
//!
//! ```bash
//! fairdraw int 100
//! fairdraw string 24 --alphabet base36
//! fairdraw shuffle alice bob carol dave
//! fairdraw pick 1 3 0.5
//! fairdraw order 5 0 2 2
//! ```
//!
//! Reproducible output:
//!
//! ```bash
//! fairdraw --seed 42 shuffle a b c d e
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`).

use std::process;

use clap::{Parser, Subcommand};
use fairdraw::{Alphabet, EntropySource, SampleResult, Sampler, SamplerConfiguration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "fairdraw")]
#[command(about = "Unbiased shuffles, weighted picks and random strings", long_about = None)]
struct Args {
    /// Seed for a reproducible stream (uses OS entropy if not provided)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Draw once per shuffle position instead of batching positions
    #[arg(long, global = true)]
    unbatched: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print an integer uniform over [0, BOUND)
    Int { bound: u64 },

    /// Print a random string of LEN characters
    #[command(name = "string")]
    RandomString {
        len: usize,

        /// base36, base62, or the literal characters to draw from
        #[arg(long, default_value = "base62")]
        alphabet: String,
    },

    /// Print the items in shuffled order, one per line
    Shuffle { items: Vec<String> },

    /// Print an index chosen in proportion to its weight
    Pick {
        #[arg(required = true, allow_negative_numbers = true)]
        weights: Vec<f64>,
    },

    /// Print every positive-weight index in weighted random order
    Order {
        #[arg(required = true, allow_negative_numbers = true)]
        weights: Vec<f64>,
    },
}

fn parse_alphabet(name: &str) -> SampleResult<Alphabet> {
    match name {
        "base36" => Ok(Alphabet::base36()),
        "base62" => Ok(Alphabet::base62()),
        symbols => Alphabet::new(symbols),
    }
}

/// Execute one command and return the lines to print.
fn run<E: EntropySource>(
    sampler: &mut Sampler<E>,
    command: Command,
) -> SampleResult<Vec<String>> {
    match command {
        Command::Int { bound } => Ok(vec![sampler.uniform_int(bound)?.to_string()]),
        Command::RandomString { len, alphabet } => {
            let alphabet = parse_alphabet(&alphabet)?;
            Ok(vec![sampler.random_string(len, &alphabet)?])
        }
        Command::Shuffle { mut items } => {
            sampler.shuffle_slice(&mut items)?;
            Ok(items)
        }
        Command::Pick { weights } => Ok(vec![sampler.weighted_choice(&weights)?.to_string()]),
        Command::Order { weights } => Ok(sampler
            .weighted_order(&weights)?
            .into_iter()
            .map(|index| index.to_string())
            .collect()),
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    let config = if args.unbatched {
        SamplerConfiguration::unbatched()
    } else {
        SamplerConfiguration::default()
    };

    let result = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded entropy");
            run(&mut Sampler::seeded(seed).with_config(config), args.command)
        }
        None => run(&mut Sampler::os().with_config(config), args.command),
    };

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "draw failed");
            process::exit(1);
        }
    }
}
