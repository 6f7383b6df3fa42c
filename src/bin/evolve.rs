//! Runs one genetic generation against a reference vowel recording and
//! prints each tournament winner's fitness.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use voxpop::{FitnessEvaluator, GeneticEngine, wav};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let reference_path = args
        .next()
        .context("usage: evolve <reference.wav> [seed]")?;
    let seed: Option<u64> = args
        .next()
        .map(|raw| raw.parse())
        .transpose()
        .context("seed must be an unsigned integer")?;

    let reference = wav::read_mono(&reference_path)
        .with_context(|| format!("reading {}", reference_path))?;
    let evaluator = FitnessEvaluator::new(&reference);

    let winners = match seed {
        Some(seed) => {
            GeneticEngine::with_rng(StdRng::seed_from_u64(seed)).run_generation(&evaluator)?
        }
        None => GeneticEngine::new().run_generation(&evaluator)?,
    };

    for (round, winner) in winners.iter().enumerate() {
        println!("{}: {}", round, winner.fitness());
    }

    Ok(())
}
