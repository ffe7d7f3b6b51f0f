use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tsp_anneal::sa::{self, AnnealConfig, AnnealRunner};
use tsp_anneal::tour::random_tour;
use tsp_anneal::tsplib;

#[derive(Parser)]
#[command(name = "tsp-anneal")]
#[command(about = "Approximate Euclidean TSP tours with simulated annealing", long_about = None)]
struct Cli {
    /// TSPLIB-style input file with a NODE_COORD_SECTION
    input: PathBuf,

    /// Random seed; omit to seed from the OS
    #[arg(long)]
    seed: Option<u64>,

    /// Perturbation budget
    #[arg(long, default_value_t = sa::MAX_ITERATIONS)]
    iterations: usize,

    /// Report the last accepted tour instead of the best one seen
    #[arg(long)]
    last_accepted: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cities = tsplib::load_cities(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let mut config = AnnealConfig::default()
        .with_max_iterations(cli.iterations)
        .with_return_best(!cli.last_accepted);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let initial = random_tour(cities.len(), &mut rng);

    let result = AnnealRunner::run(&cities, initial, &config)
        .context("annealing search failed")?;

    log::info!(
        "{} of {} moves accepted ({} improving), final temperature {:.6}",
        result.accepted_moves,
        result.iterations,
        result.improving_moves,
        result.final_temperature
    );

    println!("Final achieved cost: {}", result.cost);
    let sequence = result
        .tour
        .iter()
        .map(|idx| idx.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("Solution [sequence of cities]: {sequence}");

    Ok(())
}
