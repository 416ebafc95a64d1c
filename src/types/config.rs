use crate::error::TechfitError;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CSV_FILE: &str = "Deloitte_Tech_Recommendations.csv";
pub const DEFAULT_CHART_FILE: &str = "recommendation_distribution.png";
pub const DEFAULT_CHART_TITLE: &str = "Tool Recommendation Distribution Across Departments";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TechfitConfig {
    pub sampling: Option<SamplingConfig>,
    pub output: Option<OutputConfig>,
    pub chart: Option<ChartConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SamplingConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
    pub csv_file: Option<String>,
    pub chart_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    pub enabled: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSettings {
    pub enabled: bool,
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        // 10x6 canvas at 100 px per unit
        Self {
            enabled: true,
            width: 1000,
            height: 600,
            title: DEFAULT_CHART_TITLE.to_string(),
        }
    }
}

/// Fully resolved settings for one `run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub csv_file: String,
    pub chart_file: String,
    pub chart: ChartSettings,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            seed: None,
            output_dir: PathBuf::from("."),
            csv_file: DEFAULT_CSV_FILE.to_string(),
            chart_file: DEFAULT_CHART_FILE.to_string(),
            chart: ChartSettings::default(),
        }
    }
}

impl RunSettings {
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file)
    }

    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.chart_file)
    }
}

impl TechfitConfig {
    pub fn run_settings(&self) -> RunSettings {
        let defaults = RunSettings::default();
        let output = self.output.as_ref();
        let chart = self.chart.as_ref();
        RunSettings {
            seed: self.sampling.as_ref().and_then(|sampling| sampling.seed),
            output_dir: output
                .and_then(|output| output.dir.clone())
                .unwrap_or(defaults.output_dir),
            csv_file: output
                .and_then(|output| output.csv_file.clone())
                .unwrap_or(defaults.csv_file),
            chart_file: output
                .and_then(|output| output.chart_file.clone())
                .unwrap_or(defaults.chart_file),
            chart: ChartSettings {
                enabled: chart
                    .and_then(|chart| chart.enabled)
                    .unwrap_or(defaults.chart.enabled),
                width: chart
                    .and_then(|chart| chart.width)
                    .unwrap_or(defaults.chart.width),
                height: chart
                    .and_then(|chart| chart.height)
                    .unwrap_or(defaults.chart.height),
                title: chart
                    .and_then(|chart| chart.title.clone())
                    .unwrap_or(defaults.chart.title),
            },
        }
    }

    pub fn validate(&self) -> Result<(), TechfitError> {
        if let Some(output) = &self.output {
            for (key, value) in [
                ("output.csv_file", &output.csv_file),
                ("output.chart_file", &output.chart_file),
            ] {
                if value.as_deref().is_some_and(|name| name.trim().is_empty()) {
                    return Err(TechfitError::InvalidConfig(format!("{key} must not be empty")));
                }
            }
        }

        if let Some(chart) = &self.chart {
            if chart.width == Some(0) || chart.height == Some(0) {
                return Err(TechfitError::InvalidConfig(
                    "chart.width and chart.height must be greater than zero".to_string(),
                ));
            }
        }

        Ok(())
    }
}
