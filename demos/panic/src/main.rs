//! panic: terminal demo of a safeswarm rescue episode.
//!
//! Places a handful of rescuers around a victim, presses the panic button,
//! and refreshes the response every `refresh_interval_secs` until everyone
//! has arrived.  The response log and rescuer tracks are written as CSV.
//!
//! ```text
//! cargo run -p panic -- --seed 42 --fast
//! RUST_LOG=debug cargo run -p panic -- --config swarm.json
//! ```

mod display;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ss_core::{Clock, EtaModel, ManualClock, SimRng, SwarmConfig, SystemClock};
use ss_output::{CsvWriter, OutputWriter, SwarmOutputObserver};
use ss_sim::{EpisodeEnd, PollLoop, Swarm};

use display::ConsoleObserver;

/// Simulate a panic-button emergency and watch rescuers converge.
#[derive(Parser, Debug)]
#[command(name = "panic", version)]
struct Args {
    /// JSON file with a `SwarmConfig`; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rescuers (overrides the config file).
    #[arg(long)]
    rescuers: Option<usize>,

    /// Seconds between refreshes (overrides the config file).
    #[arg(long)]
    interval: Option<f64>,

    /// Derive initial ETA and distance from actual placement.
    #[arg(long)]
    kinematic: bool,

    /// Run this many episodes, resetting the swarm in between.
    #[arg(long, default_value_t = 1)]
    episodes: usize,

    /// Stop refreshing after this many ticks even if rescuers are en route.
    #[arg(long, default_value_t = 240)]
    max_ticks: usize,

    /// Directory for response_log.csv and rescuer_snapshots.csv.
    #[arg(long, default_value = "output/panic")]
    output: PathBuf,

    /// Use a simulated clock: no real waiting between refreshes.
    #[arg(long)]
    fast: bool,

    /// Print only the start and end tables, not a line per refresh.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    println!("=== SAFESWARM: peer rescue simulation ===");
    println!(
        "Victim: {}  |  Rescuers: {}  |  Refresh: {} s  |  Seed: {}",
        config.victim,
        config.rescuer_count,
        config.refresh_interval_secs,
        config.seed.map_or_else(|| "random".to_owned(), |s| s.to_string()),
    );
    println!();

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let writer = CsvWriter::new(&args.output)?;
    let mut obs = ConsoleObserver::new(SwarmOutputObserver::new(writer), !args.quiet);

    let ends = if args.fast {
        let clock = ManualClock::new(SystemClock.now());
        run_episodes(clock, config, args.episodes, args.max_ticks, &mut obs)?
    } else {
        run_episodes(SystemClock, config, args.episodes, args.max_ticks, &mut obs)?
    };

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    for (i, end) in ends.iter().enumerate() {
        match end {
            EpisodeEnd::Settled { ticks } => {
                println!("Episode {}: all rescuers arrived after {ticks} refreshes.", i + 1)
            }
            EpisodeEnd::TickLimit { ticks } => {
                println!("Episode {}: stopped after {ticks} refreshes, rescuers still en route.", i + 1)
            }
        }
    }
    print_outputs(&args.output);

    Ok(())
}

/// Defaults, then the optional JSON file, then command-line overrides.
fn load_config(args: &Args) -> Result<SwarmConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SwarmConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(n) = args.rescuers {
        config.rescuer_count = n;
    }
    if let Some(secs) = args.interval {
        config.refresh_interval_secs = secs;
    }
    if args.kinematic {
        config.eta_model = EtaModel::Kinematic;
    }

    config.validate()?;
    Ok(config)
}

fn run_episodes<C: Clock, W: OutputWriter>(
    clock:     C,
    config:    SwarmConfig,
    episodes:  usize,
    max_ticks: usize,
    obs:       &mut ConsoleObserver<W>,
) -> Result<Vec<EpisodeEnd>> {
    let interval = config.refresh_interval_secs;
    let rng = SimRng::from_seed_opt(config.seed);
    let mut swarm = Swarm::new(config, rng, clock.now())?;
    let mut poll = PollLoop::new(clock, interval);

    let mut ends = Vec::with_capacity(episodes);
    for episode in 0..episodes {
        if episode > 0 {
            println!();
            poll.reset(&mut swarm, obs);
        }
        println!("System ready. Pressing the panic button…");
        println!();
        poll.activate(&mut swarm, obs)?;
        ends.push(poll.run_until_settled(&mut swarm, max_ticks, obs)?);
    }
    Ok(ends)
}

fn print_outputs(dir: &Path) {
    for name in ["response_log.csv", "rescuer_snapshots.csv"] {
        println!("  {}", dir.join(name).display());
    }
}
