// Plotters chart backend: bar chart and word-cloud PNGs.
//
// The bar chart keeps the counts' provided key order (not count order):
// one horizontal bar per category with the count printed next to it.
// The word-cloud is the degenerate single-word case: the "Other" label
// scaled by its count on a white canvas.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::classify::counts::CategoryCounts;

use super::traits::ChartBackend;

const BAR_COLOR: RGBColor = RGBColor(38, 70, 83);

/// Chart renderer backed by plotters' bitmap backend.
pub struct PlottersBackend {
    pub width: u32,
    pub height: u32,
    pub caption: String,
}

impl PlottersBackend {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            width: 1200,
            height: 800,
            caption: caption.into(),
        }
    }
}

impl ChartBackend for PlottersBackend {
    fn bar_chart(&self, counts: &CategoryCounts, path: &Path) -> Result<()> {
        let labels: Vec<&str> = counts.iter().map(|(l, _)| l).collect();
        let values: Vec<u32> = counts.iter().map(|(_, c)| c).collect();

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        if labels.is_empty() {
            // Nothing fetched; leave an empty captioned canvas
            root.draw(&Text::new(
                self.caption.clone(),
                (20, 20),
                ("sans-serif", 32).into_font().color(&BLACK),
            ))?;
            root.present()?;
            return Ok(());
        }

        let n = labels.len() as u32;
        let max = counts.max_count();
        let x_max = max + max / 10 + 1;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.caption, ("sans-serif", 32))
            .margin(20)
            .x_label_area_size(48)
            .y_label_area_size(180)
            .build_cartesian_2d(0u32..x_max, (0u32..n).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Number of Papers")
            .y_desc("Categories")
            .y_labels(labels.len())
            .y_label_formatter(&|seg: &SegmentValue<u32>| match seg {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => labels
                    .get(*i as usize)
                    .map(|l| l.to_string())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 20))
            .draw()?;

        chart.draw_series(values.iter().enumerate().map(|(i, &count)| {
            let i = i as u32;
            let mut bar = Rectangle::new(
                [
                    (0, SegmentValue::Exact(i)),
                    (count, SegmentValue::Exact(i + 1)),
                ],
                BAR_COLOR.filled(),
            );
            bar.set_margin(8, 8, 0, 0);
            bar
        }))?;

        // Count labels just past the end of each bar
        let label_offset = (x_max / 100).max(1);
        chart.draw_series(values.iter().enumerate().map(|(i, &count)| {
            Text::new(
                count.to_string(),
                (count + label_offset, SegmentValue::CenterOf(i as u32)),
                ("sans-serif", 16).into_font().color(&BLACK),
            )
        }))?;

        root.present()?;
        Ok(())
    }

    fn word_cloud(&self, label: &str, count: u32, path: &Path) -> Result<()> {
        const WIDTH: u32 = 800;
        const HEIGHT: u32 = 400;

        let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        root.draw(&Text::new(
            "Unclassified Papers (Other)".to_string(),
            (20, 16),
            ("sans-serif", 24).into_font().color(&BLACK),
        ))?;

        // Font size grows with the count but stays on the canvas
        let size = (24.0 + 8.0 * f64::from(count).sqrt()).min(200.0) as i32;
        let style = ("sans-serif", size)
            .into_font()
            .color(&BAR_COLOR)
            .pos(Pos::new(HPos::Center, VPos::Center));

        root.draw(&Text::new(
            label.to_string(),
            ((WIDTH / 2) as i32, (HEIGHT / 2) as i32),
            style,
        ))?;

        root.present()?;
        Ok(())
    }
}
