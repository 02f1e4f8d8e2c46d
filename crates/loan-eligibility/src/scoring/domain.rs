use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ScoringError;

/// Attributes collected from a financing applicant.
///
/// Range checks belong to the caller (see [`super::validation::validate`]); the
/// encoder consumes whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInput {
    pub gender: Gender,
    pub married: MaritalStatus,
    pub dependents: u32,
    pub education: Education,
    pub self_employed: bool,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_term_months: u32,
    pub credit_history_ok: bool,
    pub property_area: PropertyArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    Graduate,
    NotGraduate,
}

/// Location of the financed property or business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyArea {
    Urban,
    Semiurban,
    Rural,
}

impl Gender {
    pub const fn tag(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl MaritalStatus {
    pub const fn tag(self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
        }
    }
}

impl Education {
    pub const fn tag(self) -> &'static str {
        match self {
            Education::Graduate => "graduate",
            Education::NotGraduate => "not_graduate",
        }
    }
}

impl PropertyArea {
    pub const ALL: [PropertyArea; 3] = [
        PropertyArea::Urban,
        PropertyArea::Semiurban,
        PropertyArea::Rural,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            PropertyArea::Urban => "urban",
            PropertyArea::Semiurban => "semiurban",
            PropertyArea::Rural => "rural",
        }
    }
}

fn unrecognized(field: &'static str, raw: &str, expected: &[&str]) -> ScoringError {
    ScoringError::InvalidInput {
        field,
        reason: format!(
            "unrecognized value '{}' (expected one of: {})",
            raw,
            expected.join(", ")
        ),
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

impl FromStr for Gender {
    type Err = ScoringError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(unrecognized("gender", raw, &["male", "female"])),
        }
    }
}

impl FromStr for MaritalStatus {
    type Err = ScoringError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "single" => Ok(MaritalStatus::Single),
            "married" => Ok(MaritalStatus::Married),
            _ => Err(unrecognized("married", raw, &["single", "married"])),
        }
    }
}

impl FromStr for Education {
    type Err = ScoringError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "graduate" => Ok(Education::Graduate),
            "not_graduate" => Ok(Education::NotGraduate),
            _ => Err(unrecognized(
                "education",
                raw,
                &["graduate", "not_graduate"],
            )),
        }
    }
}

impl FromStr for PropertyArea {
    type Err = ScoringError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "urban" => Ok(PropertyArea::Urban),
            "semiurban" => Ok(PropertyArea::Semiurban),
            "rural" => Ok(PropertyArea::Rural),
            _ => Err(unrecognized(
                "property_area",
                raw,
                &["urban", "semiurban", "rural"],
            )),
        }
    }
}

impl fmt::Display for PropertyArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
