use serde::Serialize;

use super::classifier::{ClassLabel, ClassProbabilities};
use super::explanation::{Explanation, EXPLANATION_CATALOG};
use super::guidance::{follow_up_for, FollowUp};
use super::ScoringError;

/// Policy turning a classifier output into the discrete decision.
///
/// `Native` trusts the classifier's own label (0.5 for the exported logistic
/// regression). `Probability(t)` re-labels the request as approved iff
/// `p_approve >= t`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DecisionThreshold {
    #[default]
    Native,
    Probability(f64),
}

impl DecisionThreshold {
    /// Probability cutoff checked against the closed unit interval.
    pub fn probability(cutoff: f64) -> Result<Self, ScoringError> {
        if (0.0..=1.0).contains(&cutoff) {
            Ok(DecisionThreshold::Probability(cutoff))
        } else {
            Err(ScoringError::InvalidInput {
                field: "decision_threshold",
                reason: format!("{cutoff} is outside [0, 1]"),
            })
        }
    }

    pub fn resolve(self, label: ClassLabel, probabilities: &ClassProbabilities) -> ClassLabel {
        match self {
            DecisionThreshold::Native => label,
            DecisionThreshold::Probability(cutoff) if probabilities.approved() >= cutoff => {
                ClassLabel::Approved
            }
            DecisionThreshold::Probability(_) => ClassLabel::Rejected,
        }
    }
}

/// Scoring result handed back to the caller.
///
/// `eligible` mirrors `label`; it is not an independent cutoff on
/// `probability_approved`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub eligible: bool,
    pub label: ClassLabel,
    pub probability_approved: f64,
    pub probability_rejected: f64,
    pub explanations: Vec<Explanation>,
    pub follow_up: FollowUp,
}

impl ScoreResult {
    pub fn approved_percentage(&self) -> String {
        format_percentage(self.probability_approved)
    }

    pub fn rejected_percentage(&self) -> String {
        format_percentage(self.probability_rejected)
    }

    pub fn summary(&self) -> String {
        let verdict = if self.eligible {
            "financing recommended for approval"
        } else {
            "financing not recommended"
        };
        format!(
            "{} (approval probability {}, rejection probability {})",
            verdict,
            self.approved_percentage(),
            self.rejected_percentage()
        )
    }
}

/// Fraction to a one-decimal percentage string, e.g. `0.8537 -> "85.4%"`.
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionMapper {
    threshold: DecisionThreshold,
}

impl DecisionMapper {
    pub fn new(threshold: DecisionThreshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> DecisionThreshold {
        self.threshold
    }

    pub fn map(&self, label: ClassLabel, probabilities: ClassProbabilities) -> ScoreResult {
        let label = self.threshold.resolve(label, &probabilities);
        let eligible = label.is_positive();

        ScoreResult {
            eligible,
            label,
            probability_approved: probabilities.approved(),
            probability_rejected: probabilities.rejected(),
            explanations: EXPLANATION_CATALOG.to_vec(),
            follow_up: follow_up_for(eligible),
        }
    }
}
