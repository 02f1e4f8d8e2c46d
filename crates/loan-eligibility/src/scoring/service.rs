use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::config::ModelConfig;

use super::classifier::{Classifier, LogisticRegressionModel, ModelCard};
use super::decision::{DecisionThreshold, ScoreResult};
use super::domain::ApplicantInput;
use super::engine::{EligibilityEngine, ScoredApplicant};
use super::ScoringError;

/// Identity of the bound model, reported by status endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub name: String,
    pub version: String,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<ModelCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelState {
    Ready,
    Unavailable,
}

/// Snapshot of the scoring capability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelStatus {
    pub state: ModelState,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
    /// `None` when the classifier's own cutoff decides.
    pub decision_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

struct BoundModel<C> {
    engine: EligibilityEngine<C>,
    descriptor: ModelDescriptor,
    loaded_at: DateTime<Utc>,
}

struct UnboundModel {
    path: PathBuf,
    reason: String,
}

/// Owns the outcome of the one-time model load.
///
/// A failed load leaves the service in the unavailable state: every score
/// request reports `ModelUnavailable` while the host keeps running.
pub struct ScoringService<C> {
    backend: Result<BoundModel<C>, UnboundModel>,
    threshold: DecisionThreshold,
}

impl ScoringService<LogisticRegressionModel> {
    pub fn load(config: &ModelConfig) -> Self {
        let threshold = config.threshold();
        match LogisticRegressionModel::load(&config.artifact_path) {
            Ok(model) => {
                let descriptor = ModelDescriptor {
                    name: model.name().to_string(),
                    version: model.version().to_string(),
                    path: config.artifact_path.clone(),
                    card: model.card().cloned(),
                };
                Self::with_classifier(Arc::new(model), descriptor, threshold)
            }
            Err(err) => {
                let reason = match err {
                    ScoringError::ModelUnavailable { reason, .. } => reason,
                    other => other.to_string(),
                };
                Self::unavailable(config.artifact_path.clone(), reason, threshold)
            }
        }
    }
}

impl<C: Classifier> ScoringService<C> {
    pub fn with_classifier(
        classifier: Arc<C>,
        descriptor: ModelDescriptor,
        threshold: DecisionThreshold,
    ) -> Self {
        info!(
            model = %descriptor.name,
            version = %descriptor.version,
            ?threshold,
            "eligibility scoring ready"
        );
        Self {
            backend: Ok(BoundModel {
                engine: EligibilityEngine::with_threshold(classifier, threshold),
                descriptor,
                loaded_at: Utc::now(),
            }),
            threshold,
        }
    }

    pub fn unavailable(path: PathBuf, reason: String, threshold: DecisionThreshold) -> Self {
        error!(
            path = %path.display(),
            %reason,
            "classifier artifact could not be loaded; scoring disabled"
        );
        Self {
            backend: Err(UnboundModel { path, reason }),
            threshold,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.backend.is_ok()
    }

    pub fn score(&self, input: &ApplicantInput) -> Result<ScoreResult, ScoringError> {
        self.assess(input).map(|scored| scored.result)
    }

    pub fn assess(&self, input: &ApplicantInput) -> Result<ScoredApplicant, ScoringError> {
        match &self.backend {
            Ok(bound) => bound.engine.assess(input),
            Err(unbound) => Err(ScoringError::ModelUnavailable {
                path: unbound.path.clone(),
                reason: unbound.reason.clone(),
            }),
        }
    }

    pub fn status(&self) -> ModelStatus {
        let decision_threshold = match self.threshold {
            DecisionThreshold::Native => None,
            DecisionThreshold::Probability(cutoff) => Some(cutoff),
        };

        match &self.backend {
            Ok(bound) => ModelStatus {
                state: ModelState::Ready,
                path: bound.descriptor.path.clone(),
                model: Some(bound.descriptor.clone()),
                loaded_at: Some(bound.loaded_at),
                decision_threshold,
                error: None,
            },
            Err(unbound) => ModelStatus {
                state: ModelState::Unavailable,
                path: unbound.path.clone(),
                model: None,
                loaded_at: None,
                decision_threshold,
                error: Some(unbound.reason.clone()),
            },
        }
    }
}
