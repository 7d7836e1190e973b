use anyhow::Context;
use std::path::Path;

use crate::chart::{render_line_chart, LineChart};
use crate::frame::{coerce_measurements, load_results};
use crate::model::Scenario;

/// Render both charts for one scenario: throughput vs VUs, then average
/// response time vs VUs, both over the same coerced results table.
pub(crate) fn render_scenario_report(
    scenario: Scenario,
    results_dir: &Path,
    output_dir: &Path,
) -> anyhow::Result<()> {
    let source = results_dir.join(scenario.source_name());
    let frame = load_results(&source).context("Load results table")?;
    let frame = coerce_measurements(frame).context("Coerce measurement columns")?;

    let label = scenario.label();

    render_line_chart(
        &frame,
        "vus",
        "tps",
        &LineChart {
            caption: format!("Throughput vs VUs ({label})"),
            x_desc: "Virtual Users (VUs)",
            y_desc: "Throughput (req/s)",
        },
        &output_dir.join(format!("{label}_tps.png")),
    )
    .context("Render throughput chart")?;

    render_line_chart(
        &frame,
        "vus",
        "avg_ms",
        &LineChart {
            caption: format!("Avg Response Time vs VUs ({label})"),
            x_desc: "Virtual Users (VUs)",
            y_desc: "Average Response Time (ms)",
        },
        &output_dir.join(format!("{label}_avg.png")),
    )
    .context("Render latency chart")?;

    Ok(())
}
