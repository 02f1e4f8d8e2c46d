use std::sync::Arc;

use tracing::debug;

use super::classifier::Classifier;
use super::decision::{DecisionMapper, DecisionThreshold, ScoreResult};
use super::domain::ApplicantInput;
use super::encoder::encode;
use super::schema::FeatureVector;
use super::ScoringError;

/// A score together with the feature vector the classifier saw.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredApplicant {
    pub features: FeatureVector,
    pub result: ScoreResult,
}

/// Stateless encode → classify → map pipeline over an injected classifier.
pub struct EligibilityEngine<C> {
    classifier: Arc<C>,
    mapper: DecisionMapper,
}

impl<C> Clone for EligibilityEngine<C> {
    fn clone(&self) -> Self {
        Self {
            classifier: Arc::clone(&self.classifier),
            mapper: self.mapper,
        }
    }
}

impl<C: Classifier> EligibilityEngine<C> {
    pub fn new(classifier: Arc<C>) -> Self {
        Self::with_threshold(classifier, DecisionThreshold::Native)
    }

    pub fn with_threshold(classifier: Arc<C>, threshold: DecisionThreshold) -> Self {
        Self {
            classifier,
            mapper: DecisionMapper::new(threshold),
        }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn threshold(&self) -> DecisionThreshold {
        self.mapper.threshold()
    }

    pub fn score(&self, input: &ApplicantInput) -> Result<ScoreResult, ScoringError> {
        self.assess(input).map(|scored| scored.result)
    }

    pub fn assess(&self, input: &ApplicantInput) -> Result<ScoredApplicant, ScoringError> {
        let features = encode(input);
        let label = self.classifier.predict(&features)?;
        let probabilities = self.classifier.predict_proba(&features)?;

        debug!(
            classifier = self.classifier.name(),
            label = label.index(),
            probability_approved = probabilities.approved(),
            "applicant scored"
        );

        Ok(ScoredApplicant {
            features,
            result: self.mapper.map(label, probabilities),
        })
    }
}
