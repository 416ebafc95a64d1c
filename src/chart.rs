use crate::error::{Result, TechfitError};
use crate::types::config::ChartSettings;
use crate::types::department::DepartmentRecord;
use plotters::prelude::*;
use plotters::style::register_font;
use std::path::Path;
use std::sync::OnceLock;

const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
const FONT_FAMILY: &str = "sans-serif";
static CHART_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Recommendation counts, most frequent first. Equal counts keep the order in
/// which the tool first appears in `records`.
pub fn distribution(records: &[DepartmentRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        match counts
            .iter_mut()
            .find(|(tool, _)| *tool == record.recommended_tool)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((record.recommended_tool.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn render_distribution(
    records: &[DepartmentRecord],
    path: &Path,
    settings: &ChartSettings,
) -> Result<()> {
    let counts = distribution(records);

    if font_registered() {
        match draw(&counts, path, settings, true) {
            Ok(()) => return finish(path, &counts),
            Err(err) => {
                tracing::warn!(error = %err, "labelled chart failed, drawing bars only");
            }
        }
    }

    draw(&counts, path, settings, false)?;
    finish(path, &counts)
}

/// Registers the bundled face under the family used for all chart text.
fn font_registered() -> bool {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    *REGISTERED.get_or_init(|| {
        match register_font(FONT_FAMILY, FontStyle::Normal, CHART_FONT) {
            Ok(()) => true,
            Err(_) => {
                tracing::warn!("bundled chart font rejected, labels disabled");
                false
            }
        }
    })
}

fn finish(path: &Path, counts: &[(String, usize)]) -> Result<()> {
    tracing::info!(path = %path.display(), tools = counts.len(), "chart written");
    Ok(())
}

fn chart_error(err: impl std::fmt::Display) -> TechfitError {
    TechfitError::Chart(err.to_string())
}

fn draw(counts: &[(String, usize)], path: &Path, settings: &ChartSettings, labelled: bool) -> Result<()> {
    let root = BitMapBackend::new(path, (settings.width, settings.height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let bars = counts.len().max(1) as u32;
    let peak = counts.iter().map(|(_, count)| *count).max().unwrap_or(0) as u32;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if labelled {
        builder
            .caption(&settings.title, (FONT_FAMILY, 24))
            .x_label_area_size(170)
            .y_label_area_size(50);
    }
    let mut chart = builder
        .build_cartesian_2d((0u32..bars).into_segmented(), 0u32..peak + 1)
        .map_err(chart_error)?;

    if labelled {
        let label = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(index) => counts
                .get(*index as usize)
                .map(|(tool, _)| tool.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Technology Tool")
            .y_desc("Number of Departments")
            .x_labels(counts.len().max(1))
            .y_labels((peak + 1) as usize)
            .x_label_formatter(&label)
            .y_label_style((FONT_FAMILY, 14))
            .axis_desc_style((FONT_FAMILY, 16))
            .x_label_style(
                (FONT_FAMILY, 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .draw()
            .map_err(chart_error)?;
    }

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(STEEL_BLUE.filled())
                .margin(12)
                .data(
                    counts
                        .iter()
                        .enumerate()
                        .map(|(index, (_, count))| (index as u32, *count as u32)),
                ),
        )
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::department::Rationale;
    use tempfile::TempDir;

    fn record(tool: &str) -> DepartmentRecord {
        DepartmentRecord {
            department: "Finance".to_string(),
            current_tool: "Excel".to_string(),
            pain_point: "Manual data entry".to_string(),
            recommended_tool: tool.to_string(),
            tool_score: 8.0,
            rationale: Rationale::TopScore,
        }
    }

    #[test]
    fn distribution_orders_by_count_then_first_appearance() {
        let records = [
            record("Zoho One"),
            record("Odoo ERP"),
            record("Salesforce"),
            record("Odoo ERP"),
            record("Salesforce"),
            record("Odoo ERP"),
        ];

        assert_eq!(
            distribution(&records),
            vec![
                ("Odoo ERP".to_string(), 3),
                ("Salesforce".to_string(), 2),
                ("Zoho One".to_string(), 1),
            ]
        );
    }

    #[test]
    fn distribution_counts_sum_to_record_count() {
        let records = [record("Odoo ERP"), record("Zoho One"), record("Odoo ERP")];
        let total: usize = distribution(&records).iter().map(|(_, count)| count).sum();
        assert_eq!(total, records.len());
    }

    fn render_to_bytes(dir: &TempDir, name: &str, records: &[DepartmentRecord]) -> Vec<u8> {
        let path = dir.path().join(name);
        render_distribution(records, &path, &ChartSettings::default()).expect("chart should render");
        std::fs::read(&path).expect("chart should exist")
    }

    #[test]
    fn render_distribution_writes_png_on_default_canvas() {
        let dir = TempDir::new().expect("temp dir should be created");
        let bytes = render_to_bytes(&dir, "chart.png", &[record("Odoo ERP"), record("Salesforce")]);

        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        let width = u32::from_be_bytes(bytes[16..20].try_into().expect("ihdr width"));
        let height = u32::from_be_bytes(bytes[20..24].try_into().expect("ihdr height"));
        assert_eq!((width, height), (1000, 600));
    }

    #[test]
    fn tool_names_are_drawn_on_the_chart() {
        let dir = TempDir::new().expect("temp dir should be created");
        let first = render_to_bytes(&dir, "first.png", &[record("Odoo ERP"), record("Salesforce")]);
        let second = render_to_bytes(
            &dir,
            "second.png",
            &[record("Zoho One"), record("Custom Cloud Solution")],
        );

        assert_ne!(first, second, "same counts with different tools must render differently");
    }

    #[test]
    fn bundled_font_registers() {
        assert!(font_registered());
    }

    #[test]
    fn render_distribution_handles_empty_table() {
        let dir = TempDir::new().expect("temp dir should be created");
        let bytes = render_to_bytes(&dir, "empty.png", &[]);
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
