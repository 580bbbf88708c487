//! Department pie and marital-status bar charts.
//!
//! Chart data is built straight from a record table, so a chart never
//! depends on a prior summary. Drawing goes through [`ChartRenderer`]; the
//! crate ships a terminal renderer and an SVG renderer backed by `plotters`.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::{self, Write as _};

use plotters::prelude::*;

use crate::{
    error::{Error, Result},
    frequency,
    records::RecordTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Proportional slices labelled with their percentage share.
    Pie,
    /// Raw counts on the vertical axis.
    Bar,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Bar => write!(f, "bar"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Categories ordered by count descending.
    pub categories: Vec<(String, usize)>,
}

impl ChartData {
    pub fn total(&self) -> usize {
        self.categories.iter().map(|(_, count)| count).sum()
    }

    /// Percentage share of each category.
    pub fn shares(&self) -> Vec<(String, f64)> {
        let total = self.total() as f64;
        self.categories
            .iter()
            .map(|(label, count)| (label.clone(), *count as f64 / total * 100.0))
            .collect()
    }

    /// `Label (12.5%)` slice captions.
    pub fn slice_labels(&self) -> Vec<String> {
        self.shares()
            .into_iter()
            .map(|(label, share)| format!("{label} ({share:.1}%)"))
            .collect()
    }

    fn error(&self, message: impl fmt::Display) -> Error {
        Error::Render {
            chart: self.title.clone(),
            message: message.to_string(),
        }
    }

    fn ensure_data(&self) -> Result<()> {
        if self.total() == 0 {
            Err(self.error("no data to plot"))
        } else {
            Ok(())
        }
    }
}

pub fn department_pie(table: &RecordTable) -> Result<ChartData> {
    Ok(ChartData {
        kind: ChartKind::Pie,
        title: "Employees per Department".to_string(),
        x_label: "Department".to_string(),
        y_label: "Share".to_string(),
        categories: frequency::ranked(&frequency::department_counts(table)?),
    })
}

pub fn marital_bar(table: &RecordTable) -> Result<ChartData> {
    Ok(ChartData {
        kind: ChartKind::Bar,
        title: "Marital Status Distribution".to_string(),
        x_label: "Marital Status".to_string(),
        y_label: "Count".to_string(),
        categories: frequency::ranked(&frequency::marital_status_counts(table)?),
    })
}

pub trait ChartRenderer {
    /// Renders `chart` into a self-contained document.
    fn render(&self, chart: &ChartData) -> Result<String>;
}

/// Unicode block charts for terminal output.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Width of the longest bar in characters.
    pub bar_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { bar_width: 40 }
    }
}

impl ChartRenderer for TextRenderer {
    fn render(&self, chart: &ChartData) -> Result<String> {
        chart.ensure_data()?;
        let label_width = chart
            .categories
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let mut output = String::new();
        let _ = writeln!(output, "{}", chart.title);
        let _ = writeln!(output, "{}", "=".repeat(chart.title.chars().count()));

        match chart.kind {
            ChartKind::Pie => {
                for (label, share) in chart.shares() {
                    let cells = (share / 100.0 * self.bar_width as f64).round() as usize;
                    let bar = "█".repeat(cells);
                    let _ = writeln!(
                        output,
                        "{label:<label_width$}  {bar:<width$}  {share:>5.1}%",
                        width = self.bar_width
                    );
                }
            }
            ChartKind::Bar => {
                let max = chart
                    .categories
                    .iter()
                    .map(|(_, count)| *count)
                    .max()
                    .unwrap_or(0);
                for (label, count) in &chart.categories {
                    let cells =
                        (*count as f64 / max as f64 * self.bar_width as f64).round() as usize;
                    let bar = "█".repeat(cells);
                    let _ = writeln!(
                        output,
                        "{label:<label_width$}  {bar:<width$}  {count}",
                        width = self.bar_width
                    );
                }
                let _ = writeln!(output, "({} by {})", chart.y_label, chart.x_label);
            }
        }
        Ok(output)
    }
}

/// SVG documents drawn with `plotters`.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl ChartRenderer for SvgRenderer {
    fn render(&self, chart: &ChartData) -> Result<String> {
        chart.ensure_data()?;
        match chart.kind {
            ChartKind::Pie => self.draw_pie(chart),
            ChartKind::Bar => self.draw_bar(chart),
        }
    }
}

impl SvgRenderer {
    fn draw_pie(&self, chart: &ChartData) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(|e| chart.error(e))?;
            let plot = root
                .titled(&chart.title, ("sans-serif", 24).into_font())
                .map_err(|e| chart.error(e))?;

            let (width, height) = plot.dim_in_pixel();
            let center = (width as i32 / 2, height as i32 / 2);
            let radius = f64::from(width.min(height)) * 0.35;
            let total = chart.total() as f64;
            let mut start = -FRAC_PI_2;

            for (idx, ((_, count), label)) in chart
                .categories
                .iter()
                .zip(chart.slice_labels())
                .enumerate()
            {
                let sweep = *count as f64 / total * TAU;
                let steps = ((sweep / TAU) * 180.0).ceil().max(2.0) as usize;
                let mut points = Vec::with_capacity(steps + 2);
                points.push(center);
                points.extend(
                    (0..=steps).map(|step| {
                        polar(center, radius, start + sweep * step as f64 / steps as f64)
                    }),
                );
                plot.draw(&Polygon::new(points, Palette99::pick(idx).filled()))
                    .map_err(|e| chart.error(e))?;

                let anchor = polar(center, radius * 1.12, start + sweep / 2.0);
                plot.draw(&Text::new(label, anchor, ("sans-serif", 14).into_font()))
                    .map_err(|e| chart.error(e))?;
                start += sweep;
            }
            root.present().map_err(|e| chart.error(e))?;
        }
        Ok(svg)
    }

    fn draw_bar(&self, chart: &ChartData) -> Result<String> {
        let labels = chart
            .categories
            .iter()
            .map(|(label, _)| label.as_str())
            .collect::<Vec<_>>();
        let label_for = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(idx) => labels
                .get(*idx as usize)
                .map(|label| label.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };
        let max = chart
            .categories
            .iter()
            .map(|(_, count)| *count as u32)
            .max()
            .unwrap_or(0);

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(|e| chart.error(e))?;

            let mut context = ChartBuilder::on(&root)
                .caption(&chart.title, ("sans-serif", 24))
                .margin(16)
                .x_label_area_size(40)
                .y_label_area_size(48)
                .build_cartesian_2d((0u32..labels.len() as u32).into_segmented(), 0u32..max + 1)
                .map_err(|e| chart.error(e))?;

            context
                .configure_mesh()
                .disable_x_mesh()
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .x_labels(labels.len())
                .x_label_formatter(&label_for)
                .draw()
                .map_err(|e| chart.error(e))?;

            context
                .draw_series(
                    Histogram::vertical(&context)
                        .style(BLUE.filled())
                        .margin(12)
                        .data(
                            chart
                                .categories
                                .iter()
                                .enumerate()
                                .map(|(idx, (_, count))| (idx as u32, *count as u32)),
                        ),
                )
                .map_err(|e| chart.error(e))?;

            root.present().map_err(|e| chart.error(e))?;
        }
        Ok(svg)
    }
}

fn polar(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        center.0 + (radius * angle.cos()).round() as i32,
        center.1 + (radius * angle.sin()).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DEPARTMENT, MARITAL_STATUS};

    fn table() -> RecordTable {
        RecordTable::new(
            vec![DEPARTMENT.to_string(), MARITAL_STATUS.to_string()],
            vec![
                vec!["ICU".into(), "Single".into()],
                vec!["ICU".into(), "Married".into()],
                vec!["ER".into(), "Married".into()],
                vec!["Maternity".into(), "Married".into()],
            ],
        )
    }

    #[test]
    fn pie_labels_carry_one_decimal_share() {
        let chart = department_pie(&table()).expect("pie data");
        assert_eq!(
            chart.slice_labels(),
            vec!["ICU (50.0%)", "ER (25.0%)", "Maternity (25.0%)"]
        );
    }

    #[test]
    fn charts_only_need_their_own_column() {
        let departments_only = RecordTable::new(
            vec![DEPARTMENT.to_string()],
            vec![vec!["ICU".into()]],
        );
        assert!(department_pie(&departments_only).is_ok());
        assert!(matches!(
            marital_bar(&departments_only),
            Err(Error::Schema { .. })
        ));
    }

    #[test]
    fn text_bar_scales_to_largest_count() {
        let chart = marital_bar(&table()).expect("bar data");
        let rendered = TextRenderer { bar_width: 6 }.render(&chart).expect("render");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Marital Status Distribution");
        assert_eq!(lines[2], "Married  ██████  3");
        assert_eq!(lines[3], "Single   ██      1");
        assert_eq!(lines[4], "(Count by Marital Status)");
    }

    #[test]
    fn text_pie_shows_percentages() {
        let chart = department_pie(&table()).expect("pie data");
        let rendered = TextRenderer { bar_width: 4 }.render(&chart).expect("render");
        assert!(rendered.contains("ICU        ██     50.0%"));
        assert!(rendered.contains("Maternity  █      25.0%"));
    }

    #[test]
    fn empty_table_cannot_be_plotted() {
        let empty = RecordTable::new(vec![DEPARTMENT.to_string()], Vec::new());
        let chart = department_pie(&empty).expect("pie data");
        match TextRenderer::default().render(&chart) {
            Err(Error::Render { chart, message }) => {
                assert_eq!(chart, "Employees per Department");
                assert_eq!(message, "no data to plot");
            }
            other => panic!("expected render error, got {other:?}"),
        }
        assert!(SvgRenderer::default().render(&chart).is_err());
    }

    #[test]
    fn svg_documents_contain_titles() {
        let pie = SvgRenderer::default()
            .render(&department_pie(&table()).expect("pie data"))
            .expect("svg pie");
        assert!(pie.contains("<svg"));
        assert!(pie.contains("Employees per Department"));
        assert!(pie.contains("ICU (50.0%)"));

        let bar = SvgRenderer::default()
            .render(&marital_bar(&table()).expect("bar data"))
            .expect("svg bar");
        assert!(bar.contains("Marital Status Distribution"));
        assert!(bar.contains("Married"));
    }
}
