//! Chart generation for a calibration scenario run. Plots straight from the
//! in-memory `Snapshot` history the harness already collected, rather than
//! re-parsing the CSV trace the way the teacher's plotting module re-reads
//! its own log file — there is exactly one consumer of this data per run, so
//! the extra round trip through disk buys nothing.

use anyhow::Result;
use aquasim_core::Snapshot;
use plotters::prelude::*;

/// Generates every chart for a finished scenario run into `output_dir`.
pub fn generate_all_plots(output_dir: &str, history: &[Snapshot]) -> Result<()> {
    if history.is_empty() {
        tracing::warn!("no history to plot");
        return Ok(());
    }

    plot_nitrogen_cycle(output_dir, history)?;
    plot_water_chemistry(output_dir, history)?;
    plot_livestock(output_dir, history)?;
    Ok(())
}

fn plot_nitrogen_cycle(output_dir: &str, history: &[Snapshot]) -> Result<()> {
    let path = format!("{}/1_nitrogen_cycle.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = history.last().map_or(1, |s| s.tick);
    let max_ppm = history
        .iter()
        .map(|s| {
            s.resources
                .ammonia_ppm()
                .max(s.resources.nitrite_ppm())
                .max(s.resources.nitrate_ppm())
        })
        .fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Nitrogen Cycle", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, 0f64..max_ppm * 1.1 + 0.01)?;

    chart.configure_mesh().x_desc("Hour").y_desc("ppm").draw()?;

    chart
        .draw_series(LineSeries::new(
            history.iter().map(|s| (s.tick, s.resources.ammonia_ppm())),
            RED.stroke_width(2),
        ))?
        .label("Ammonia")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));

    chart
        .draw_series(LineSeries::new(
            history.iter().map(|s| (s.tick, s.resources.nitrite_ppm())),
            MAGENTA.stroke_width(2),
        ))?
        .label("Nitrite")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MAGENTA.filled()));

    chart
        .draw_series(LineSeries::new(
            history.iter().map(|s| (s.tick, s.resources.nitrate_ppm())),
            GREEN.stroke_width(2),
        ))?
        .label("Nitrate")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

fn plot_water_chemistry(output_dir: &str, history: &[Snapshot]) -> Result<()> {
    let path = format!("{}/2_water_chemistry.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = history.last().map_or(1, |s| s.tick);

    let mut chart = ChartBuilder::on(&root)
        .caption("Temperature & pH", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, 0f64..40f64)?;

    chart.configure_mesh().x_desc("Hour").y_desc("Value").draw()?;

    chart
        .draw_series(LineSeries::new(
            history.iter().map(|s| (s.tick, s.resources.temperature)),
            BLUE.stroke_width(2),
        ))?
        .label("Temperature (\u{b0}C)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    chart
        .draw_series(LineSeries::new(
            history.iter().map(|s| (s.tick, s.resources.ph)),
            BLACK.stroke_width(2),
        ))?
        .label("pH")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

fn plot_livestock(output_dir: &str, history: &[Snapshot]) -> Result<()> {
    let path = format!("{}/3_livestock.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = history.last().map_or(1, |s| s.tick);
    let max_count = history
        .iter()
        .map(|s| s.plants.len().max(s.fish.len()))
        .max()
        .unwrap_or(1)
        .max(1) as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Plant & Fish Counts", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, 0i32..max_count + 1)?;

    chart.configure_mesh().x_desc("Hour").y_desc("Count").draw()?;

    chart
        .draw_series(LineSeries::new(
            history.iter().map(|s| (s.tick, s.plants.len() as i32)),
            GREEN.stroke_width(2),
        ))?
        .label("Plants")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));

    chart
        .draw_series(LineSeries::new(
            history.iter().map(|s| (s.tick, s.fish.len() as i32)),
            CYAN.stroke_width(2),
        ))?
        .label("Fish")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CYAN.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
