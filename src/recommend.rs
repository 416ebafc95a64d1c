use crate::catalog::{RankedTool, RecommendationTable};
use crate::error::{Result, TechfitError};
use crate::types::department::{DepartmentRecord, Field, Rationale, SampledDepartment};
use crate::types::scoring::Score;

/// A case-insensitive substring check on one department field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub field: Field,
    pub keyword: &'static str,
    pub tool: &'static str,
}

/// Evaluated top to bottom; the first match wins and anything unmatched falls
/// through to the top-scoring catalog tool.
pub const KEYWORD_RULES: [KeywordRule; 6] = [
    KeywordRule {
        field: Field::PainPoint,
        keyword: "manual",
        tool: "Odoo ERP",
    },
    KeywordRule {
        field: Field::CurrentTool,
        keyword: "no",
        tool: "Odoo ERP",
    },
    KeywordRule {
        field: Field::PainPoint,
        keyword: "engagement",
        tool: "Salesforce",
    },
    KeywordRule {
        field: Field::PainPoint,
        keyword: "security",
        tool: "Microsoft Power Platform",
    },
    KeywordRule {
        field: Field::PainPoint,
        keyword: "vendor",
        tool: "Zoho One",
    },
    KeywordRule {
        field: Field::CurrentTool,
        keyword: "legacy",
        tool: "Oracle NetSuite",
    },
];

impl KeywordRule {
    fn matches(&self, current_tool: &str, pain_point: &str) -> bool {
        let haystack = match self.field {
            Field::CurrentTool => current_tool,
            Field::PainPoint => pain_point,
        };
        haystack.to_lowercase().contains(self.keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub tool: &'static str,
    pub score: Score,
    pub rationale: Rationale,
}

#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<(KeywordRule, Score)>,
    fallback: RankedTool,
}

impl RuleEngine {
    /// Resolves every rule target against the table up front so that each
    /// recommendation names a tool the catalog actually scores.
    pub fn new(table: &RecommendationTable) -> Result<Self> {
        let fallback = table
            .top()
            .ok_or_else(|| TechfitError::Catalog("tool catalog is empty".to_string()))?;

        let rules = KEYWORD_RULES
            .iter()
            .map(|rule| {
                table
                    .score_of(rule.tool)
                    .map(|score| (*rule, score))
                    .ok_or_else(|| {
                        TechfitError::Catalog(format!("rule target {} is not in the catalog", rule.tool))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules, fallback })
    }

    pub fn recommend(&self, current_tool: &str, pain_point: &str) -> Recommendation {
        let matched = self
            .rules
            .iter()
            .find(|(rule, _)| rule.matches(current_tool, pain_point));

        match matched {
            Some((rule, score)) => Recommendation {
                tool: rule.tool,
                score: *score,
                rationale: Rationale::Keyword {
                    field: rule.field,
                    keyword: rule.keyword,
                },
            },
            None => Recommendation {
                tool: self.fallback.name,
                score: self.fallback.score,
                rationale: Rationale::TopScore,
            },
        }
    }

    pub fn assess(&self, sampled: &[SampledDepartment]) -> Vec<DepartmentRecord> {
        sampled
            .iter()
            .map(|department| {
                let recommendation = self.recommend(department.current_tool, department.pain_point);
                tracing::debug!(
                    department = department.department,
                    tool = recommendation.tool,
                    rationale = %recommendation.rationale,
                    "recommendation assigned"
                );
                DepartmentRecord {
                    department: department.department.to_string(),
                    current_tool: department.current_tool.to_string(),
                    pain_point: department.pain_point.to_string(),
                    recommended_tool: recommendation.tool.to_string(),
                    tool_score: recommendation.score,
                    rationale: recommendation.rationale,
                }
            })
            .collect()
    }
}
