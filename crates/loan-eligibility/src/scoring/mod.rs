//! Eligibility scoring: applicant attributes in, financing recommendation out.
//!
//! The pipeline is encode → classify → map. The classifier is injected so the
//! process loads its artifact once and shares it read-only across requests.
//! Explanations come from a static catalog rather than per-prediction
//! attribution.

pub mod classifier;
pub mod decision;
pub mod domain;
pub mod encoder;
mod engine;
mod error;
pub mod explanation;
pub mod guidance;
pub mod router;
pub mod schema;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use classifier::{
    ClassLabel, ClassProbabilities, Classifier, LogisticRegressionModel, ModelArtifact, ModelCard,
};
pub use decision::{format_percentage, DecisionMapper, DecisionThreshold, ScoreResult};
pub use domain::{ApplicantInput, Education, Gender, MaritalStatus, PropertyArea};
pub use encoder::encode;
pub use engine::{EligibilityEngine, ScoredApplicant};
pub use error::{ScoringError, ScoringErrorKind};
pub use explanation::{explanations_for, Explanation, InfluenceDescriptor, EXPLANATION_CATALOG};
pub use guidance::FollowUp;
pub use router::{scoring_router, ScoreResponse};
pub use schema::{FeatureName, FeatureVector, FEATURE_COUNT, FEATURE_SCHEMA};
pub use service::{ModelDescriptor, ModelState, ModelStatus, ScoringService};
pub use validation::validate;
