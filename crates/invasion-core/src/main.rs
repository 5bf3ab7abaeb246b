//! Alien invasion simulator.
//!
//! Loads a city map, unleashes aliens on it, and plays rounds until no
//! progress is possible, then prints what is left of the world.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use invasion_core::{parse_map, EventLog, SimulationEngine, SmallRngSource, World};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "alien_invasion")]
#[command(about = "Simulates an alien invasion over a city map")]
struct Args {
    /// Path to the map file
    #[arg(long, short = 'm', default_value = "data/map.txt")]
    map: PathBuf,

    /// Number of aliens to unleash
    #[arg(long, short = 'a', default_value_t = 2)]
    aliens: u32,

    /// Random seed for reproducibility (time-based entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the remaining map after each round
    #[arg(long)]
    print_each_round: bool,

    /// Append destruction events to this JSONL file
    #[arg(long)]
    events: Option<PathBuf>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let input = match std::fs::read_to_string(&args.map) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error reading map file {}: {}", args.map.display(), e);
            return ExitCode::FAILURE;
        }
    };

    // Defective lines are dropped but reported; the rest of the map loads.
    let (records, parse_errors) = parse_map(&input);
    for error in &parse_errors {
        tracing::warn!("{}", error);
    }
    let (world, build_errors) = World::build(records);
    for error in &build_errors {
        tracing::warn!("{}", error);
    }

    // A graph that fails validation never starts simulating.
    if let Err(report) = world.validate() {
        eprintln!("{}", report);
        return ExitCode::FAILURE;
    }

    let mut event_log = match &args.events {
        Some(path) => match EventLog::new(path) {
            Ok(log) => log,
            Err(e) => {
                eprintln!("error opening event log {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => EventLog::null(),
    };

    let mut rng = match args.seed {
        Some(seed) => SmallRngSource::seeded(seed),
        None => SmallRngSource::from_entropy(),
    };

    let mut engine = SimulationEngine::new(world);
    if let Err(e) = engine.seed(args.aliens, &mut rng) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    while engine.is_running() {
        let outcome = engine.advance_round(&mut rng);
        for event in &outcome.destroyed {
            println!("{}", event);
            if let Err(e) = event_log.log(event) {
                eprintln!("error writing event log: {}", e);
                return ExitCode::FAILURE;
            }
        }
        if args.print_each_round {
            print!("{}", engine.report());
        }
    }

    if !args.print_each_round {
        print!("{}", engine.report());
    }
    ExitCode::SUCCESS
}
