//! This module is responsible for generating all charts from the care log.

use anyhow::Result;
use axolog_core::analysis;
use axolog_schemas::{FeedingType, Observation, ParameterKind};
use plotters::prelude::*;
use std::path::Path;

fn parameter_color(kind: ParameterKind) -> RGBColor {
    match kind {
        ParameterKind::Temperature => RGBColor(255, 110, 199),
        ParameterKind::Ph => RGBColor(72, 209, 204),
        ParameterKind::Ammonia => RGBColor(255, 77, 77),
        ParameterKind::Nitrite => RGBColor(255, 154, 61),
    }
}

/// The main function to generate and save all charts for a session.
pub fn generate_all_plots(output_dir: &Path, records: &[Observation]) -> Result<()> {
    println!("[Plotting] Generating charts from the care log...");

    if records.is_empty() {
        println!("[Plotting] Warning: No data to plot.");
        return Ok(());
    }

    plot_parameter_trends(output_dir, records)?;
    plot_feeding_distribution(output_dir, records)?;

    println!("[Plotting] Charts have been saved to '{}'.", output_dir.display());
    Ok(())
}

/// Line chart of all four water parameters, one point per entry.
fn plot_parameter_trends(output_dir: &Path, records: &[Observation]) -> Result<()> {
    let path = output_dir.join("1_parameter_trends.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_value = records
        .iter()
        .flat_map(|r| ParameterKind::ALL.map(|kind| r.value(kind)))
        .fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Parameter History", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0usize..records.len(), 0f64..max_value * 1.1)?;

    let date_label = |i: &usize| {
        records
            .get(*i)
            .map(|r| r.date.format("%d.%m").to_string())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .x_desc("Entry date")
        .y_desc("Value")
        .x_label_formatter(&date_label)
        .draw()?;

    for kind in ParameterKind::ALL {
        let color = parameter_color(kind);
        chart
            .draw_series(LineSeries::new(
                records.iter().enumerate().map(|(i, r)| (i, r.value(kind))),
                color.stroke_width(3),
            ))?
            .label(kind.column())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Bar chart of how often each food was given.
///
/// Drawn as bars on a labelled count axis instead of pie slices, so exact
/// counts and small differences between foods stay readable.
fn plot_feeding_distribution(output_dir: &Path, records: &[Observation]) -> Result<()> {
    let path = output_dir.join("2_feeding_distribution.png");
    let root = BitMapBackend::new(&path, (1024, 512)).into_drawing_area();
    root.fill(&WHITE)?;

    let counts = analysis::feeding_distribution(records);
    let max_count = counts.iter().map(|c| c.count as u32).max().unwrap_or(1);
    let food_count = FeedingType::ALL.len() as u32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Feeding Distribution", ("sans-serif", 40).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d((0u32..food_count).into_segmented(), 0u32..max_count + 1)?;

    let food_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => FeedingType::ALL
            .get(*i as usize)
            .map(|f| f.label().to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Food")
        .y_desc("Entries")
        .x_label_formatter(&food_label)
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RGBColor(72, 209, 204).filled())
            .margin(30)
            .data(counts.iter().map(|c| (c.feeding as u32, c.count as u32))),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_writes_no_files() {
        let dir = tempfile::tempdir().unwrap();
        generate_all_plots(dir.path(), &[]).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
