//! Prints a batch of synthetic Danish person records as JSON.
//!
//! Reads the name corpus and town table from disk, generates a clamped batch
//! and writes it to stdout. Passing `--seed` makes the output reproducible.

use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8PathBuf;
use chrono::Local;
use clap::Parser;
use fake_person::{NameCorpus, PersonGenerator, TownTable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `fake-persons` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fake-persons",
    about = "Generate synthetic Danish person records as JSON",
    version
)]
struct CliArgs {
    /// Path to the name corpus JSON file.
    #[arg(long, value_name = "path")]
    names: Utf8PathBuf,
    /// Path to the town table JSON file.
    #[arg(long, value_name = "path")]
    towns: Utf8PathBuf,
    /// Number of records; clamped to 2..=100.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    count: i64,
    /// RNG seed (defaults to random).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    match run(CliArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "fake-persons: {err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> io::Result<()> {
    let names = NameCorpus::from_file(args.names.as_std_path()).map_err(io::Error::other)?;
    let towns = TownTable::from_file(args.towns.as_std_path()).map_err(io::Error::other)?;
    let generator = PersonGenerator::new(names, towns);

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let today = Local::now().date_naive();
    let people = generator.persons(&mut rng, today, args.count);

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &people).map_err(io::Error::other)?;
    writeln!(out)
}
