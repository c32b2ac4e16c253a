pub mod chart;
pub mod config;
pub mod csv_writer;
pub mod display;
pub mod error;
pub mod table;

use std::io;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use common::types::SizeResult;
use crate::config::{Config, HarnessConfig};
use error::Error;
use layout_bench_core::Harness;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::load_config()?;
    log::info!(
        "Benchmarking sizes {:?} with {} runs each.",
        config.harness.sizes,
        config.harness.runs
    );

    let results = run_benchmark(&config.harness)?;
    report(&results, &config)?;

    Ok(())
}

/// Builds the harness from configuration and measures every configured size.
fn run_benchmark(harness_config: &HarnessConfig) -> Result<Vec<SizeResult>, Error> {
    let rng = match harness_config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut harness = Harness::new(rng, harness_config.runs)?;
    Ok(harness.benchmark(&harness_config.sizes)?)
}

/// Hands the finished results to every reporter: table, chart, optional CSV, preview.
fn report(results: &[SizeResult], config: &Config) -> Result<(), Error> {
    let stdout = io::stdout();
    table::render_table(&mut stdout.lock(), results)?;

    let chart_path = Path::new(&config.report.chart_path);
    chart::render_chart(chart_path, results)?;
    log::info!("Chart saved to {}", chart_path.display());

    if let Some(csv_path) = &config.report.csv_path {
        csv_writer::write_results(Path::new(csv_path), results)?;
    }

    if config.report.show_chart {
        display::show_chart(chart_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_run_reports_every_size() {
        let harness_config = HarnessConfig {
            sizes: vec![1_000, 0, 500],
            runs: 2,
            seed: Some(17),
        };

        let results = run_benchmark(&harness_config).unwrap();
        let sizes: Vec<usize> = results.iter().map(|r| r.n).collect();
        assert_eq!(sizes, vec![1_000, 0, 500]);
    }

    #[test]
    fn test_zero_runs_fails_the_run() {
        let harness_config = HarnessConfig {
            sizes: vec![1_000],
            runs: 0,
            seed: None,
        };

        let result = run_benchmark(&harness_config);
        assert!(
            matches!(
                result,
                Err(Error::BenchError(common::error::Error::ZeroTrials))
            ),
            "Expected ZeroTrials, got: {:?}",
            result
        );
    }
}
