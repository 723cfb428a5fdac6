//! automail: runs one mail-delivery simulation and prints the score.
//!
//! ```text
//! automail [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! Without a config path the built-in defaults are used.  The delivery log
//! is written to `OUTPUT_DIR` (default `output/automail`).  Set `RUST_LOG=debug`
//! to see robot state changes.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use am_core::{RobotKind, SimConfig};
use am_output::{CsvWriter, SimOutputObserver};
use am_sim::SimBuilder;

const DEFAULT_OUTPUT_DIR: &str = "output/automail";

fn load_config(path: &Path) -> Result<SimConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config: SimConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig::default(),
    };
    let output_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    println!("=== automail ===");
    println!(
        "Floors: {}..={}  |  Mailroom: {}  |  Mail: {}  |  Seed: {}",
        config.lowest_floor,
        config.lowest_floor + config.floors - 1,
        config.mailroom_floor,
        config.mail_to_create,
        config.seed,
    );
    println!(
        "Robots: {} regular, {} fast, {} bulk  |  Fee charging: {}",
        config.regular_robots, config.fast_robots, config.bulk_robots, config.fee_charging,
    );
    println!();

    // 1. Build sim.
    let mut sim = SimBuilder::new(config).build()?;

    // 2. Set up output.
    let writer = CsvWriter::new(&output_dir)
        .with_context(|| format!("creating output in {}", output_dir.display()))?;
    let mut obs = SimOutputObserver::new(writer);

    // 3. Run.
    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "run finished");

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!();
    println!("{report}");
    println!();
    println!("{:<10} {:<8} {:<16}", "Variant", "Robots", "Avg. op. ticks");
    println!("{}", "-".repeat(36));
    for kind in RobotKind::ALL {
        let count = sim.ledger.robot_count(kind);
        if count == 0 {
            continue;
        }
        println!("{:<10} {:<8} {:<16.2}", kind.to_string(), count, sim.ledger.average_operating_time(kind));
    }
    println!();
    println!("Delivery log: {}", output_dir.join("deliveries.csv").display());

    Ok(())
}
