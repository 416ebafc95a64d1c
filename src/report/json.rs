use crate::types::report::{AssessmentReport, CatalogEntry};

pub fn to_json(report: &AssessmentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn catalog_to_json(entries: &[CatalogEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}
