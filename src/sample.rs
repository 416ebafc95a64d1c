use crate::types::department::SampledDepartment;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEPARTMENTS: [&str; 7] = [
    "HR",
    "Finance",
    "IT",
    "Marketing",
    "Operations",
    "Logistics",
    "Procurement",
];

pub const CURRENT_TOOLS: [&str; 7] = [
    "Excel",
    "SAP",
    "Legacy System",
    "Mailchimp",
    "Manual Process",
    "Zoho",
    "No Tool",
];

pub const PAIN_POINTS: [&str; 7] = [
    "Manual data entry",
    "High cost and licensing issues",
    "Security vulnerabilities",
    "Low customer engagement",
    "No process standardization",
    "Inefficient vendor communication",
    "Lack of analytics & reporting",
];

/// Seeded when a seed is given, otherwise drawn from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// One record per department, current tool and pain point each drawn
/// uniformly with replacement.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Vec<SampledDepartment> {
    DEPARTMENTS
        .iter()
        .map(|&department| SampledDepartment {
            department,
            current_tool: pick(rng, &CURRENT_TOOLS),
            pain_point: pick(rng, &PAIN_POINTS),
        })
        .collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&'static str; 7]) -> &'static str {
    options[rng.gen_range(0..options.len())]
}
