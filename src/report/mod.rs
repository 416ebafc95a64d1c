pub mod csv;
pub mod json;
pub mod text;

use crate::error::TechfitError;
use crate::types::report::{AssessmentReport, CatalogEntry};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(report: &AssessmentReport, format: OutputFormat) -> Result<String, TechfitError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(TechfitError::Json),
    }
}

pub fn render_catalog(entries: &[CatalogEntry], format: OutputFormat) -> Result<String, TechfitError> {
    match format {
        OutputFormat::Text => Ok(text::catalog_to_text(entries)),
        OutputFormat::Json => json::catalog_to_json(entries).map_err(TechfitError::Json),
    }
}
