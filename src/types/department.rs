use crate::types::scoring::Score;
use serde::Serialize;

/// A department as drawn by the sampler, before any recommendation is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledDepartment {
    pub department: &'static str,
    pub current_tool: &'static str,
    pub pain_point: &'static str,
}

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rationale {
    Keyword { field: Field, keyword: &'static str },
    TopScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CurrentTool,
    PainPoint,
}

impl std::fmt::Display for Rationale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword { field, keyword } => {
                let field = match field {
                    Field::CurrentTool => "current tool",
                    Field::PainPoint => "pain point",
                };
                write!(f, "{field} mentions \"{keyword}\"")
            }
            Self::TopScore => write!(f, "highest average catalog score"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRecord {
    pub department: String,
    pub current_tool: String,
    pub pain_point: String,
    pub recommended_tool: String,
    pub tool_score: Score,
    pub rationale: Rationale,
}
