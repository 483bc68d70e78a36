//! ecosim: grain, deer, and grasshoppers on four lockstep threads.
//!
//! Prints one progress line per simulated month to stderr:
//!
//! ```text
//! month , year , temperature , precipitation , grain height , deer, grasshoppers
//! ```
//!
//! Configuration comes from `EcoConfig::default()`, optionally replaced by a
//! TOML file (`--config`), then overridden field by field from the command
//! line.  Set `RUST_LOG=debug` to see thread start/stop and barrier events.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use eco_core::{BarrierKind, Calendar, EcoConfig, HopperRule};
use eco_output::{ConsoleWriter, CsvWriter, OutputReporter};
use eco_sim::{EcoSimBuilder, Fanout};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "ecosim")]
#[command(about = "Simulate a grain/deer/grasshopper ecosystem on lockstep threads")]
struct Args {
    /// TOML file with an `EcoConfig`; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Weather RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// First simulated year (starts in January)
    #[arg(long)]
    start_year: Option<i32>,

    /// Stop in January of this year
    #[arg(long)]
    end_year: Option<i32>,

    /// Barrier implementation used for the three monthly rendezvous
    #[arg(long, value_enum)]
    barrier: Option<BarrierArg>,

    /// Grasshopper update rule
    #[arg(long, value_enum)]
    hopper_rule: Option<HopperRuleArg>,

    /// Also write every month to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Suppress the per-month progress lines
    #[arg(long, short = 'q')]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum BarrierArg {
    Blocking,
    Spin,
}

impl From<BarrierArg> for BarrierKind {
    fn from(arg: BarrierArg) -> Self {
        match arg {
            BarrierArg::Blocking => BarrierKind::Blocking,
            BarrierArg::Spin     => BarrierKind::Spin,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum HopperRuleArg {
    Intended,
    AsWritten,
}

impl From<HopperRuleArg> for HopperRule {
    fn from(arg: HopperRuleArg) -> Self {
        match arg {
            HopperRuleArg::Intended  => HopperRule::Intended,
            HopperRuleArg::AsWritten => HopperRule::AsWritten,
        }
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_tracing(quiet: bool) {
    let fallback = if quiet { "warn" } else { "info" };
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<EcoConfig> {
    let Some(path) = path else {
        return Ok(EcoConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn apply_overrides(config: &mut EcoConfig, args: &Args) {
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(year) = args.start_year {
        config.start = Calendar::january(year);
    }
    if let Some(year) = args.end_year {
        config.terminal = Calendar::january(year);
    }
    if let Some(barrier) = args.barrier {
        config.barrier = barrier.into();
    }
    if let Some(rule) = args.hopper_rule {
        config.growth.hopper_rule = rule.into();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet);

    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    let mut sim = EcoSimBuilder::new(config)
        .build()
        .context("invalid simulation configuration")?;

    let mut csv = match &args.csv {
        Some(path) => Some(OutputReporter::new(
            CsvWriter::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => None,
    };

    let mut console = (!args.quiet).then(|| OutputReporter::new(ConsoleWriter::stderr()));

    let t0 = Instant::now();
    let summary = {
        let mut reporters = Fanout::new();
        if let Some(console) = console.as_mut() {
            reporters = reporters.with(console);
        }
        if let Some(csv) = csv.as_mut() {
            reporters = reporters.with(csv);
        }
        sim.run(&mut reporters)?
    };
    let elapsed = t0.elapsed();

    if let Some(e) = console.as_mut().and_then(|c| c.take_error()) {
        bail!("progress output failed: {e}");
    }
    if let Some(csv) = csv.as_mut() {
        if let Some(e) = csv.take_error() {
            bail!("CSV output failed: {e}");
        }
        info!(rows = csv.rows(), "CSV written");
    }

    let last = sim.state.snapshot();
    info!(
        months  = summary.rounds,
        agents  = summary.agents,
        date    = %last.calendar,
        deer    = last.deer,
        hoppers = last.hoppers,
        elapsed = ?elapsed,
        "simulation complete"
    );

    Ok(())
}
