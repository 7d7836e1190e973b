use anyhow::Context;
use std::path::PathBuf;

use crate::model::Scenario;

mod chart;
mod frame;
pub mod model;
mod scenario;

/// Where the results tables are read from and the chart images written to.
///
/// Both locations default to the current working directory, which is where
/// the load-test client leaves its CSVs.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub results_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Render the throughput and latency charts for all four scenarios.
///
/// Scenarios run sequentially in [`Scenario::ALL`] order. The first failure
/// halts the run; remaining scenarios are not attempted and already written
/// images are left in place.
pub fn render_all_reports(config: &ReportConfig) -> anyhow::Result<()> {
    for scenario in Scenario::ALL {
        println!("Processing {} ...", scenario.source_name());
        scenario::render_scenario_report(scenario, &config.results_dir, &config.output_dir)
            .with_context(|| format!("Report for scenario {scenario}"))?;
    }

    Ok(())
}
