//! Voting Complexes: Betti Numbers Across Election Years
//!
//! For each election-year table and each affiliation:
//!
//! 1. Load the county adjacency CSV
//! 2. Connect bordering counties of the same affiliation
//! 3. Turn every maximal clique into a simplex
//! 4. Compute the Betti numbers of the resulting complex
//! 5. Render the complex to `{label}{vote}.svg`
//!
//! Finally the Betti sequences of each affiliation are compared year to year.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use vote_topology::config::{LogLevel, OutputFormat};
use vote_topology::{run_batch, BatchReport, Config};

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level.into()).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_text(report: &BatchReport) {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Voting Complexes: Betti Numbers by Election Year");
    println!("═══════════════════════════════════════════════════════════════\n");

    for r in &report.reports {
        let dimension = r
            .dimension
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        println!("{}{} ({}):", r.label, r.vote, r.affiliation);
        println!("  Counties:   {} ({} edges, {} components)", r.counties, r.edges, r.components);
        println!("  Simplices:  {} maximal, dimension {}", r.simplices, dimension);
        println!("  f-vector:   {:?}  χ = {}", r.f_vector, r.euler_characteristic);
        println!("  Betti:      {}", r.betti);
        if let Some(image) = &r.image {
            println!("  Image:      {}", image.display());
        }
        println!();
    }

    for comparison in &report.comparisons {
        println!("──────────────────────────────────────────────────────────────");
        println!("  {} ({}) across datasets", comparison.affiliation, comparison.affiliation.vote());
        println!("──────────────────────────────────────────────────────────────");

        for k in 0..comparison.max_len() {
            let row: Vec<String> = comparison
                .curve(k)
                .iter()
                .map(|(label, b)| format!("{label}: {b}"))
                .collect();
            println!("  β{k}  {}", row.join("   "));
        }
        for delta in comparison.deltas() {
            println!("  {} → {}: Δβ = {:?}", delta.from, delta.to, delta.delta);
        }
        println!();
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.log_level);

    let run = config.run_config().context("invalid configuration")?;
    let report = run_batch(&run).context("voting complex analysis failed")?;

    match config.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serializing report")?;
            println!("{json}");
        }
    }

    Ok(())
}
