use crate::types::report::{AssessmentReport, CatalogEntry};
use crate::types::scoring::format_score;

pub fn to_text(report: &AssessmentReport) -> String {
    let mut output = String::new();
    output.push_str("\n📘 Deloitte Technology Consulting Report\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    for record in &report.departments {
        output.push_str(&format!(
            "\nDepartment: {}\nCurrent Tool: {}\nPain Point: {}\n✅ Recommendation: {} (Score: {}/10)\n",
            record.department,
            record.current_tool,
            record.pain_point,
            record.recommended_tool,
            format_score(record.tool_score)
        ));
    }
    output.push_str("\nReport generation completed.\n");
    output
}

pub fn catalog_to_text(entries: &[CatalogEntry]) -> String {
    let mut output = String::new();
    output.push_str("Tool Catalog\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    for entry in entries {
        let attributes = entry.attributes;
        output.push_str(&format!(
            "{}{}\n  cost {} | ease of use {} | integration {} | scalability {} | average {}\n",
            entry.name,
            if entry.fallback { " (fallback)" } else { "" },
            format_score(attributes.cost),
            format_score(attributes.ease_of_use),
            format_score(attributes.integration),
            format_score(attributes.scalability),
            format_score(entry.average_score)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{describe, TOOL_CATALOG};
    use crate::types::department::{DepartmentRecord, Rationale};

    fn record(department: &str, tool: &str, score: f64) -> DepartmentRecord {
        DepartmentRecord {
            department: department.to_string(),
            current_tool: "SAP".to_string(),
            pain_point: "High cost and licensing issues".to_string(),
            recommended_tool: tool.to_string(),
            tool_score: score,
            rationale: Rationale::TopScore,
        }
    }

    #[test]
    fn text_report_has_one_block_per_department() {
        let report = AssessmentReport::new(
            None,
            vec![record("HR", "Odoo ERP", 8.0), record("IT", "Oracle NetSuite", 7.75)],
        );

        let rendered = to_text(&report);
        assert!(rendered.starts_with("\n📘 Deloitte Technology Consulting Report\n"));
        assert!(rendered.contains(&"-".repeat(60)));
        assert_eq!(rendered.matches("Department: ").count(), 2);
        assert!(rendered.contains("Current Tool: SAP\n"));
        assert!(rendered.contains("✅ Recommendation: Odoo ERP (Score: 8.0/10)"));
        assert!(rendered.contains("✅ Recommendation: Oracle NetSuite (Score: 7.75/10)"));
        assert!(rendered.ends_with("Report generation completed.\n"));
    }

    #[test]
    fn catalog_text_marks_fallback() {
        let rendered = catalog_to_text(&describe(&TOOL_CATALOG));
        assert!(rendered.contains("Odoo ERP (fallback)\n"));
        assert!(rendered.contains("Salesforce\n  cost 5.0 | ease of use 6.0 | integration 10.0"));
        assert_eq!(rendered.matches("(fallback)").count(), 1);
    }
}
