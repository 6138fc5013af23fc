use crate::errors::{Result, SimulationError};
use crate::models::state::FlightSample;
use crate::simulation::flight::FlightRun;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::Path;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;

fn plot_err<E: std::fmt::Display>(err: E) -> SimulationError {
    SimulationError::Plot(err.to_string())
}

/// Axis range covering `value` over every sample of every run. Degenerate ranges
/// are widened so the chart always has a non-zero span.
pub fn value_range(runs: &[FlightRun], value: fn(&FlightSample) -> f64) -> (f64, f64) {
    let (lo, hi) = runs
        .iter()
        .flat_map(|run| run.history.samples().iter().map(value))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let lo = lo.min(0.0);
    if hi - lo < f64::EPSILON {
        (lo, lo + 1.0)
    } else {
        (lo, hi)
    }
}

/// Renders fuel-vs-time and distance-vs-time side by side, one line per run.
pub fn render_comparison(path: &Path, runs: &[FlightRun]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let (left, right) = root.split_horizontally((WIDTH / 2) as i32);

    draw_panel(
        &left,
        "Fuel Consumption Over Time",
        "Fuel (kg)",
        "Fuel",
        runs,
        |s| s.fuel,
    )?;
    draw_panel(
        &right,
        "Distance Covered Over Time",
        "Distance (m)",
        "Distance",
        runs,
        |s| s.distance,
    )?;

    root.present().map_err(plot_err)?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    y_desc: &str,
    label: &str,
    runs: &[FlightRun],
    value: fn(&FlightSample) -> f64,
) -> Result<()> {
    let (_, t_max) = value_range(runs, |s| s.time);
    let (y_min, y_max) = value_range(runs, value);

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(caption, ("sans-serif", 22))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc(y_desc)
        .draw()
        .map_err(plot_err)?;

    for (idx, run) in runs.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(
                run.history.samples().iter().map(|s| (s.time, value(s))),
                color.stroke_width(2),
            ))
            .map_err(plot_err)?
            .label(format!("{} {}", run.name, label))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    Ok(())
}
