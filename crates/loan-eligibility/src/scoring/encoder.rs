use super::domain::{ApplicantInput, Education, Gender, MaritalStatus, PropertyArea};
use super::schema::{FeatureName, FeatureVector, FEATURE_COUNT};

const URBAN: [f64; 2] = [0.0, 1.0];
const SEMIURBAN: [f64; 2] = [1.0, 0.0];
const RURAL: [f64; 2] = [0.0, 0.0];

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// `[Property_Area_Semiurban, Property_Area_Urban]` per area. Rural is the
/// baseline and encodes as all zeros.
pub(crate) const fn property_area_indicators(area: PropertyArea) -> [f64; 2] {
    match area {
        PropertyArea::Urban => URBAN,
        PropertyArea::Semiurban => SEMIURBAN,
        PropertyArea::Rural => RURAL,
    }
}

/// Build the classifier feature vector for an applicant.
pub fn encode(input: &ApplicantInput) -> FeatureVector {
    let mut values = [0.0; FEATURE_COUNT];
    let [semiurban, urban] = property_area_indicators(input.property_area);

    let columns = [
        (FeatureName::Dependents, f64::from(input.dependents)),
        (FeatureName::LoanAmount, input.loan_amount),
        (FeatureName::LoanAmountTerm, f64::from(input.loan_term_months)),
        (FeatureName::CreditHistory, indicator(input.credit_history_ok)),
        (
            FeatureName::TotalIncome,
            input.applicant_income + input.coapplicant_income,
        ),
        (FeatureName::GenderMale, indicator(input.gender == Gender::Male)),
        (
            FeatureName::MarriedYes,
            indicator(input.married == MaritalStatus::Married),
        ),
        (
            FeatureName::EducationNotGraduate,
            indicator(input.education == Education::NotGraduate),
        ),
        (FeatureName::SelfEmployedYes, indicator(input.self_employed)),
        (FeatureName::PropertyAreaSemiurban, semiurban),
        (FeatureName::PropertyAreaUrban, urban),
    ];

    for (feature, value) in columns {
        values[feature.position()] = value;
    }

    FeatureVector::from_values(values)
}
