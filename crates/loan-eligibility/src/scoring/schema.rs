use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const FEATURE_COUNT: usize = 11;

/// Named inputs the classifier was trained against. The discriminant is the
/// column position in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureName {
    Dependents = 0,
    LoanAmount = 1,
    LoanAmountTerm = 2,
    CreditHistory = 3,
    TotalIncome = 4,
    GenderMale = 5,
    MarriedYes = 6,
    EducationNotGraduate = 7,
    SelfEmployedYes = 8,
    PropertyAreaSemiurban = 9,
    PropertyAreaUrban = 10,
}

/// Column order shared with the classifier artifact.
pub const FEATURE_SCHEMA: [FeatureName; FEATURE_COUNT] = [
    FeatureName::Dependents,
    FeatureName::LoanAmount,
    FeatureName::LoanAmountTerm,
    FeatureName::CreditHistory,
    FeatureName::TotalIncome,
    FeatureName::GenderMale,
    FeatureName::MarriedYes,
    FeatureName::EducationNotGraduate,
    FeatureName::SelfEmployedYes,
    FeatureName::PropertyAreaSemiurban,
    FeatureName::PropertyAreaUrban,
];

impl FeatureName {
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Column name on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            FeatureName::Dependents => "Dependents",
            FeatureName::LoanAmount => "LoanAmount",
            FeatureName::LoanAmountTerm => "Loan_Amount_Term",
            FeatureName::CreditHistory => "Credit_History",
            FeatureName::TotalIncome => "TotalIncome",
            FeatureName::GenderMale => "Gender_Male",
            FeatureName::MarriedYes => "Married_Yes",
            FeatureName::EducationNotGraduate => "Education_Not_Graduate",
            FeatureName::SelfEmployedYes => "Self_Employed_Yes",
            FeatureName::PropertyAreaSemiurban => "Property_Area_Semiurban",
            FeatureName::PropertyAreaUrban => "Property_Area_Urban",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        FEATURE_SCHEMA
            .iter()
            .copied()
            .find(|feature| feature.as_str() == raw)
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FeatureName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Feature values laid out in [`FEATURE_SCHEMA`] order.
///
/// Only the encoder builds these, so a vector always carries exactly the
/// schema's columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub(crate) fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, feature: FeatureName) -> f64 {
        self.values[feature.position()]
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub fn schema(&self) -> &'static [FeatureName; FEATURE_COUNT] {
        &FEATURE_SCHEMA
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, f64)> + '_ {
        FEATURE_SCHEMA
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.as_str(), &value)?;
        }
        map.end()
    }
}
