use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info};

use super::schema::{FeatureName, FeatureVector, FEATURE_SCHEMA};
use super::ScoringError;

const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Discrete class emitted by a classifier. `Approved` is the positive class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLabel {
    Rejected,
    Approved,
}

impl ClassLabel {
    pub fn from_index(index: u8) -> Result<Self, ScoringError> {
        match index {
            0 => Ok(ClassLabel::Rejected),
            1 => Ok(ClassLabel::Approved),
            other => Err(ScoringError::InferenceError(format!(
                "classifier emitted label {other}, expected 0 or 1"
            ))),
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            ClassLabel::Rejected => 0,
            ClassLabel::Approved => 1,
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, ClassLabel::Approved)
    }
}

impl Serialize for ClassLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

/// `(p_reject, p_approve)` pair, checked to be a valid distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassProbabilities {
    rejected: f64,
    approved: f64,
}

impl ClassProbabilities {
    pub fn new(rejected: f64, approved: f64) -> Result<Self, ScoringError> {
        let in_range = |p: f64| p.is_finite() && (0.0..=1.0).contains(&p);
        if !in_range(rejected) || !in_range(approved) {
            return Err(ScoringError::InferenceError(format!(
                "probabilities out of range (reject {rejected}, approve {approved})"
            )));
        }
        if ((rejected + approved) - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(ScoringError::InferenceError(format!(
                "probabilities do not sum to 1 (reject {rejected}, approve {approved})"
            )));
        }
        Ok(Self { rejected, approved })
    }

    /// Complement pair from the positive-class probability.
    pub fn from_approved(approved: f64) -> Result<Self, ScoringError> {
        Self::new(1.0 - approved, approved)
    }

    pub fn rejected(&self) -> f64 {
        self.rejected
    }

    pub fn approved(&self) -> f64 {
        self.approved
    }
}

/// Port over a pre-trained binary classifier.
///
/// Implementations are shared across concurrent requests and must not mutate
/// themselves while scoring.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ScoringError>;
    fn predict_proba(&self, features: &FeatureVector) -> Result<ClassProbabilities, ScoringError>;

    /// Identifier surfaced in status views and logs.
    fn name(&self) -> &str {
        "classifier"
    }
}

/// Descriptive metadata published with a model export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCard {
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision_rejected: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recall_approved: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_samples: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_samples: Option<u32>,
}

fn default_threshold() -> f64 {
    0.5
}

/// On-disk form of an exported logistic regression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub version: String,
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<ModelCard>,
}

/// Logistic regression bound from a [`ModelArtifact`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegressionModel {
    artifact: ModelArtifact,
}

impl LogisticRegressionModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, String> {
        if artifact.features.is_empty() {
            return Err("artifact lists no features".to_string());
        }
        if artifact.features.len() != artifact.coefficients.len() {
            return Err(format!(
                "artifact lists {} features but {} coefficients",
                artifact.features.len(),
                artifact.coefficients.len()
            ));
        }
        if !artifact.intercept.is_finite()
            || artifact.coefficients.iter().any(|value| !value.is_finite())
        {
            return Err("artifact contains non-finite weights".to_string());
        }
        if !(0.0..=1.0).contains(&artifact.threshold) {
            return Err(format!(
                "artifact threshold {} outside [0, 1]",
                artifact.threshold
            ));
        }
        Ok(Self { artifact })
    }

    /// Read, parse, and validate the artifact at `path`. Nothing is bound
    /// unless every step succeeds.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScoringError> {
        let path = path.as_ref();
        let unavailable = |reason: String| ScoringError::ModelUnavailable {
            path: PathBuf::from(path),
            reason,
        };

        let raw = fs::read_to_string(path).map_err(|err| unavailable(err.to_string()))?;
        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|err| unavailable(err.to_string()))?;
        let model = Self::from_artifact(artifact).map_err(unavailable)?;

        info!(
            model = %model.artifact.name,
            version = %model.artifact.version,
            path = %path.display(),
            "classifier artifact loaded"
        );
        Ok(model)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.artifact.version
    }

    pub fn card(&self) -> Option<&ModelCard> {
        self.artifact.card.as_ref()
    }

    fn check_shape(&self, features: &FeatureVector) -> Result<(), ScoringError> {
        let expected = &self.artifact.features;
        if expected.len() != features.len() {
            return Err(ScoringError::InferenceError(format!(
                "model expects {} features, received {}",
                expected.len(),
                features.len()
            )));
        }

        let mismatch = expected
            .iter()
            .zip(features.schema().iter())
            .find(|(trained, schema)| FeatureName::from_wire(trained) != Some(**schema));
        if let Some((trained, schema)) = mismatch {
            return Err(ScoringError::InferenceError(format!(
                "model column '{}' does not match schema column '{}'",
                trained, schema
            )));
        }
        Ok(())
    }

    fn positive_probability(&self, features: &FeatureVector) -> Result<f64, ScoringError> {
        self.check_shape(features)?;

        let logit = self.artifact.intercept
            + self
                .artifact
                .coefficients
                .iter()
                .zip(features.values().iter())
                .map(|(weight, value)| weight * value)
                .sum::<f64>();
        let probability = sigmoid(logit);

        if !probability.is_finite() {
            return Err(ScoringError::InferenceError(format!(
                "logit {logit} produced a non-finite probability"
            )));
        }
        debug!(logit, probability, "logistic regression evaluated");
        Ok(probability)
    }
}

fn sigmoid(logit: f64) -> f64 {
    if logit >= 0.0 {
        1.0 / (1.0 + (-logit).exp())
    } else {
        let exp = logit.exp();
        exp / (1.0 + exp)
    }
}

impl Classifier for LogisticRegressionModel {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ScoringError> {
        let probability = self.positive_probability(features)?;
        if probability >= self.artifact.threshold {
            Ok(ClassLabel::Approved)
        } else {
            Ok(ClassLabel::Rejected)
        }
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<ClassProbabilities, ScoringError> {
        let probability = self.positive_probability(features)?;
        ClassProbabilities::from_approved(probability)
    }

    fn name(&self) -> &str {
        &self.artifact.name
    }
}

/// Columns in schema order, for building artifacts in tooling and tests.
pub fn schema_columns() -> Vec<String> {
    FEATURE_SCHEMA
        .iter()
        .map(|feature| feature.as_str().to_string())
        .collect()
}
