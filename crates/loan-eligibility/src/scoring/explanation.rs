//! Static feature-importance commentary.
//!
//! The catalog is hand-authored reference data published with the model. It
//! is not derived from the classifier and does not change per prediction, so
//! every result carries the same six entries.

use serde::Serialize;

use super::decision::ScoreResult;
use super::schema::FeatureName;

/// Qualitative, precomputed influence of a feature group on approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfluenceDescriptor {
    StronglyPositive,
    Positive,
    Negative,
    MinimallyNegative,
}

impl InfluenceDescriptor {
    pub const fn tag(self) -> &'static str {
        match self {
            InfluenceDescriptor::StronglyPositive => "strongly_positive",
            InfluenceDescriptor::Positive => "positive",
            InfluenceDescriptor::Negative => "negative",
            InfluenceDescriptor::MinimallyNegative => "minimally_negative",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            InfluenceDescriptor::StronglyPositive => "Strongly Positive (Dominant)",
            InfluenceDescriptor::Positive => "Positive",
            InfluenceDescriptor::Negative => "Negative",
            InfluenceDescriptor::MinimallyNegative => "Negative (Minimal)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub factor: &'static str,
    pub features: &'static [FeatureName],
    pub influence: InfluenceDescriptor,
    pub rationale: &'static str,
}

/// Ordered from most to least influential.
pub const EXPLANATION_CATALOG: [Explanation; 6] = [
    Explanation {
        factor: "Credit history / repayment compliance",
        features: &[FeatureName::CreditHistory],
        influence: InfluenceDescriptor::StronglyPositive,
        rationale: "Most important factor. A clean repayment history strongly increases eligibility.",
    },
    Explanation {
        factor: "Property area (semiurban)",
        features: &[FeatureName::PropertyAreaSemiurban],
        influence: InfluenceDescriptor::Positive,
        rationale: "A semiurban location raises the chance of approval.",
    },
    Explanation {
        factor: "Marital status",
        features: &[FeatureName::MarriedYes],
        influence: InfluenceDescriptor::Positive,
        rationale: "Married applicants have a slightly higher chance of approval.",
    },
    Explanation {
        factor: "Education",
        features: &[FeatureName::EducationNotGraduate],
        influence: InfluenceDescriptor::Negative,
        rationale: "Education below graduate level slightly lowers the chance of approval.",
    },
    Explanation {
        factor: "Total income",
        features: &[FeatureName::TotalIncome],
        influence: InfluenceDescriptor::MinimallyNegative,
        rationale: "Higher income has no significant effect once credit history is accounted for.",
    },
    Explanation {
        factor: "Dependents",
        features: &[FeatureName::Dependents],
        influence: InfluenceDescriptor::Positive,
        rationale: "More dependents slightly raises the chance of approval.",
    },
];

/// Catalog entries to display next to a result. Identical for every result.
pub fn explanations_for(_result: &ScoreResult) -> &'static [Explanation] {
    &EXPLANATION_CATALOG
}
