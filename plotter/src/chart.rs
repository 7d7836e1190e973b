use anyhow::Context;
use plotters::prelude::*;
use polars::frame::DataFrame;
use std::ops::Range;
use std::path::Path;

/// Canvas size of every chart, in pixels.
const CANVAS_SIZE: (u32, u32) = (640, 480);
/// Radius of the per-row circle markers, in pixels.
const MARKER_SIZE: i32 = 3;
/// Proportional padding applied around the data when sizing an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Captions and axis labels for one chart.
pub(crate) struct LineChart {
    pub caption: String,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
}

/// Render one line chart with a circle marker per present row.
///
/// Rows where either coordinate is null are skipped and break the connecting
/// line at that row, so lenient coercion upstream shows up as gaps here.
/// The drawing surface lives only for this call; nothing is shared between
/// charts.
pub(crate) fn render_line_chart(
    frame: &DataFrame,
    x_column: &str,
    y_column: &str,
    chart: &LineChart,
    out_path: &Path,
) -> anyhow::Result<()> {
    let points = extract_points(frame, x_column, y_column)?;
    let segments = present_segments(&points);
    let (x_range, y_range) = axis_ranges(&segments);

    let root = BitMapBackend::new(out_path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    ctx.configure_mesh()
        .x_desc(chart.x_desc)
        .y_desc(chart.y_desc)
        .draw()?;

    for segment in &segments {
        ctx.draw_series(LineSeries::new(segment.iter().copied(), &BLUE))?;
        ctx.draw_series(
            segment
                .iter()
                .map(|&point| Circle::new(point, MARKER_SIZE, BLUE.filled())),
        )?;
    }

    root.present()
        .with_context(|| format!("Write chart {}", out_path.display()))?;

    log::debug!("Rendered {}", out_path.display());

    Ok(())
}

fn extract_points(
    frame: &DataFrame,
    x_column: &str,
    y_column: &str,
) -> anyhow::Result<Vec<(Option<f64>, Option<f64>)>> {
    let xs = frame.column(x_column)?.f64()?;
    let ys = frame.column(y_column)?.f64()?;

    Ok(xs.into_iter().zip(ys.into_iter()).collect())
}

/// Split the rows into runs of consecutive fully-present points.
///
/// A row with a null in either coordinate ends the current run; the line is
/// drawn per run, which is what leaves the gap. Row order is preserved.
fn present_segments(points: &[(Option<f64>, Option<f64>)]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for &(x, y) in points {
        match (x, y) {
            (Some(x), Some(y)) => current.push((x, y)),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Axis ranges sized to the present points with a proportional margin.
///
/// An empty or all-null series falls back to `0..1` so that an empty table
/// still yields a valid, blank chart.
fn axis_ranges(segments: &[Vec<(f64, f64)>]) -> (Range<f64>, Range<f64>) {
    let mut x_bounds: Option<(f64, f64)> = None;
    let mut y_bounds: Option<(f64, f64)> = None;

    for &(x, y) in segments.iter().flatten() {
        x_bounds = Some(extend(x_bounds, x));
        y_bounds = Some(extend(y_bounds, y));
    }

    (padded(x_bounds), padded(y_bounds))
}

fn extend(bounds: Option<(f64, f64)>, value: f64) -> (f64, f64) {
    match bounds {
        None => (value, value),
        Some((min, max)) => (min.min(value), max.max(value)),
    }
}

fn padded(bounds: Option<(f64, f64)>) -> Range<f64> {
    let Some((min, max)) = bounds else {
        return 0.0..1.0;
    };

    let span = max - min;
    let pad = if span > 0.0 { span * AXIS_MARGIN } else { 0.5 };
    (min - pad)..(max + pad)
}
