use crate::types::department::DepartmentRecord;
use crate::types::scoring::{Attributes, Score};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_at: String,
    pub seed: Option<u64>,
    pub departments: Vec<DepartmentRecord>,
}

impl AssessmentReport {
    pub fn new(seed: Option<u64>, departments: Vec<DepartmentRecord>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            seed,
            departments,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub attributes: Attributes,
    pub average_score: Score,
    pub fallback: bool,
}
