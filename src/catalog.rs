use crate::types::report::CatalogEntry;
use crate::types::scoring::{round2, Attributes, Score, ToolProfile};

/// Candidate tools in catalog order. Order matters: the top-score fallback
/// picks the first maximum.
pub const TOOL_CATALOG: [ToolProfile; 6] = [
    ToolProfile {
        name: "Odoo ERP",
        attributes: Attributes::new(8.0, 7.0, 9.0, 8.0),
    },
    ToolProfile {
        name: "Oracle NetSuite",
        attributes: Attributes::new(6.0, 7.0, 9.0, 9.0),
    },
    ToolProfile {
        name: "Zoho One",
        attributes: Attributes::new(9.0, 8.0, 8.0, 7.0),
    },
    ToolProfile {
        name: "Salesforce",
        attributes: Attributes::new(5.0, 6.0, 10.0, 9.0),
    },
    ToolProfile {
        name: "Microsoft Power Platform",
        attributes: Attributes::new(7.0, 9.0, 8.0, 8.0),
    },
    ToolProfile {
        name: "Custom Cloud Solution",
        attributes: Attributes::new(4.0, 6.0, 9.0, 10.0),
    },
];

/// Mean of the four attribute scores, rounded to two decimals.
pub fn average_score(attributes: &Attributes) -> Score {
    let values = attributes.values();
    round2(values.iter().sum::<Score>() / values.len() as Score)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedTool {
    pub name: &'static str,
    pub score: Score,
}

/// Averaged score per catalog tool, kept in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationTable {
    entries: Vec<RankedTool>,
}

impl RecommendationTable {
    pub fn from_catalog(catalog: &[ToolProfile]) -> Self {
        let entries = catalog
            .iter()
            .map(|profile| RankedTool {
                name: profile.name,
                score: average_score(&profile.attributes),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedTool] {
        &self.entries
    }

    pub fn score_of(&self, name: &str) -> Option<Score> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.score)
    }

    /// Highest averaged score; ties resolve to the earliest catalog entry.
    pub fn top(&self) -> Option<RankedTool> {
        self.entries.iter().copied().fold(None, |best, entry| match best {
            Some(current) if current.score >= entry.score => Some(current),
            _ => Some(entry),
        })
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        Self::from_catalog(&TOOL_CATALOG)
    }
}

/// Catalog rows with their averaged score, flagging the top-score fallback.
pub fn describe(catalog: &[ToolProfile]) -> Vec<CatalogEntry> {
    let table = RecommendationTable::from_catalog(catalog);
    let fallback = table.top().map(|top| top.name);
    catalog
        .iter()
        .zip(table.entries())
        .map(|(profile, ranked)| CatalogEntry {
            name: profile.name,
            attributes: profile.attributes,
            average_score: ranked.score,
            fallback: fallback == Some(profile.name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_score_is_rounded_mean_within_bounds() {
        for profile in &TOOL_CATALOG {
            let values = profile.attributes.values();
            let expected = round2(values.iter().sum::<f64>() / 4.0);
            let score = average_score(&profile.attributes);
            assert_eq!(score, expected, "{}", profile.name);
            assert!((0.0..=10.0).contains(&score));
        }
    }

    #[test]
    fn table_holds_expected_catalog_averages() {
        let table = RecommendationTable::default();
        assert_eq!(table.score_of("Odoo ERP"), Some(8.0));
        assert_eq!(table.score_of("Oracle NetSuite"), Some(7.75));
        assert_eq!(table.score_of("Zoho One"), Some(8.0));
        assert_eq!(table.score_of("Salesforce"), Some(7.5));
        assert_eq!(table.score_of("Microsoft Power Platform"), Some(8.0));
        assert_eq!(table.score_of("Custom Cloud Solution"), Some(7.25));
        assert_eq!(table.score_of("Excel"), None);
    }

    #[test]
    fn top_prefers_first_entry_among_ties() {
        let top = RecommendationTable::default().top().expect("catalog is not empty");
        assert_eq!(top.name, "Odoo ERP");
        assert_eq!(top.score, 8.0);

        let reordered = [TOOL_CATALOG[4], TOOL_CATALOG[2], TOOL_CATALOG[0]];
        let top = RecommendationTable::from_catalog(&reordered)
            .top()
            .expect("catalog is not empty");
        assert_eq!(top.name, "Microsoft Power Platform");
    }

    #[test]
    fn describe_flags_only_the_fallback_tool() {
        let entries = describe(&TOOL_CATALOG);
        assert_eq!(entries.len(), TOOL_CATALOG.len());
        let flagged: Vec<_> = entries
            .iter()
            .filter(|entry| entry.fallback)
            .map(|entry| entry.name)
            .collect();
        assert_eq!(flagged, ["Odoo ERP"]);
    }

    #[test]
    fn top_of_empty_table_is_none() {
        assert!(RecommendationTable::from_catalog(&[]).top().is_none());
    }
}
