use serde::Serialize;

pub type Score = f64;

/// The four attribute scores a catalog entry is rated on, each in `[0, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attributes {
    pub cost: Score,
    pub ease_of_use: Score,
    pub integration: Score,
    pub scalability: Score,
}

impl Attributes {
    pub const fn new(cost: Score, ease_of_use: Score, integration: Score, scalability: Score) -> Self {
        Self {
            cost,
            ease_of_use,
            integration,
            scalability,
        }
    }

    pub fn values(&self) -> [Score; 4] {
        [self.cost, self.ease_of_use, self.integration, self.scalability]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToolProfile {
    pub name: &'static str,
    pub attributes: Attributes,
}

pub fn round2(value: Score) -> Score {
    (value * 100.0).round() / 100.0
}

/// Integral scores keep one decimal place (`8.0`); the rest print in shortest form.
pub fn format_score(score: Score) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}
