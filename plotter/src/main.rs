use kv_bench_plotter::{render_all_reports, ReportConfig};
use log::debug;
use std::path::PathBuf;

/// Environment variable name to set a custom results directory
const RESULTS_DIR_ENV: &str = "KV_BENCH_RESULTS_DIR";
/// Environment variable name to set a custom chart output directory
const OUTPUT_DIR_ENV: &str = "KV_BENCH_OUTPUT_DIR";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config = ReportConfig::default();
    if let Ok(dir) = std::env::var(RESULTS_DIR_ENV) {
        config.results_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
        config.output_dir = PathBuf::from(dir);
    }
    debug!(
        "Reading results from {}, writing charts to {}",
        config.results_dir.display(),
        config.output_dir.display()
    );

    render_all_reports(&config)?;

    println!("All plots generated successfully.");

    Ok(())
}
