//! cgm-crosscheck - compare cgm against glam on random inputs

use anyhow::{Result, bail};
use cgm_tests::{CrossCheckConfig, run};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cgm-crosscheck")]
#[command(author, version, about = "Cross-check cgm against glam on seeded random inputs")]
struct Cli {
    /// RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of random rounds
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Maximum relative error per component
    #[arg(short, long)]
    tolerance: Option<f32>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> CrossCheckConfig {
        let defaults = CrossCheckConfig::default();
        CrossCheckConfig {
            seed: self.seed.unwrap_or(defaults.seed),
            iterations: self.iterations.unwrap_or(defaults.iterations),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let report = run(cli.config());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{:<24} {:>8} {:>12}", "operation", "checks", "max error");
        for (op, stats) in &report.ops {
            println!("{:<24} {:>8} {:>12.3e}", op, stats.checks, stats.max_error);
        }
        println!();
        for m in report.mismatches.iter().take(20) {
            println!("MISMATCH {} @ {}: error {:.3e}", m.op, m.iteration, m.error);
            println!("  ours      {:?}", m.ours);
            println!("  reference {:?}", m.reference);
        }
    }

    if !report.is_ok() {
        bail!(
            "{} of {} comparisons exceeded tolerance {}",
            report.mismatches.len(),
            report.checks(),
            cli.config().tolerance
        );
    }
    println!("OK: {} comparisons", report.checks());
    Ok(())
}
