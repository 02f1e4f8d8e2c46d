use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::scoring::classifier::schema_columns;
use crate::scoring::domain::{ApplicantInput, Education, Gender, MaritalStatus, PropertyArea};
use crate::scoring::{
    ClassLabel, ClassProbabilities, Classifier, DecisionThreshold, FeatureVector, ModelArtifact,
    ModelCard, ModelDescriptor, ScoringError, ScoringService,
};

/// Graduate, married, urban applicant with clean credit.
pub(super) fn reference_input() -> ApplicantInput {
    ApplicantInput {
        gender: Gender::Male,
        married: MaritalStatus::Married,
        dependents: 0,
        education: Education::Graduate,
        self_employed: false,
        applicant_income: 3000.0,
        coapplicant_income: 0.0,
        loan_amount: 120.0,
        loan_term_months: 360,
        credit_history_ok: true,
        property_area: PropertyArea::Urban,
    }
}

pub(super) fn rural_input() -> ApplicantInput {
    ApplicantInput {
        gender: Gender::Female,
        married: MaritalStatus::Single,
        dependents: 3,
        education: Education::NotGraduate,
        self_employed: true,
        applicant_income: 1800.0,
        coapplicant_income: 950.5,
        loan_amount: 75.0,
        loan_term_months: 180,
        credit_history_ok: false,
        property_area: PropertyArea::Rural,
    }
}

/// Classifier double returning a fixed label and positive-class probability.
pub(super) struct StubClassifier {
    label: ClassLabel,
    approved: f64,
    pub(super) predict_calls: AtomicUsize,
    pub(super) proba_calls: AtomicUsize,
}

impl StubClassifier {
    pub(super) fn new(label: ClassLabel, approved: f64) -> Self {
        Self {
            label,
            approved,
            predict_calls: AtomicUsize::new(0),
            proba_calls: AtomicUsize::new(0),
        }
    }
}

impl Classifier for StubClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, ScoringError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.label)
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<ClassProbabilities, ScoringError> {
        self.proba_calls.fetch_add(1, Ordering::SeqCst);
        ClassProbabilities::from_approved(self.approved)
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Classifier double that fails every call, e.g. a shape mismatch.
pub(super) struct BrokenClassifier;

impl Classifier for BrokenClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, ScoringError> {
        Err(ScoringError::InferenceError(
            "shape mismatch: expected 12 columns".to_string(),
        ))
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<ClassProbabilities, ScoringError> {
        Err(ScoringError::InferenceError(
            "shape mismatch: expected 12 columns".to_string(),
        ))
    }
}

pub(super) fn descriptor() -> ModelDescriptor {
    ModelDescriptor {
        name: "stub".to_string(),
        version: "test".to_string(),
        path: PathBuf::from("memory://stub"),
        card: None,
    }
}

pub(super) fn stub_service(label: ClassLabel, approved: f64) -> Arc<ScoringService<StubClassifier>> {
    Arc::new(ScoringService::with_classifier(
        Arc::new(StubClassifier::new(label, approved)),
        descriptor(),
        DecisionThreshold::Native,
    ))
}

pub(super) fn unavailable_service() -> Arc<ScoringService<StubClassifier>> {
    Arc::new(ScoringService::unavailable(
        PathBuf::from("models/missing.json"),
        "No such file or directory (os error 2)".to_string(),
        DecisionThreshold::Native,
    ))
}

pub(super) fn artifact() -> ModelArtifact {
    ModelArtifact {
        name: "credit-scoring-logreg".to_string(),
        version: "test".to_string(),
        features: schema_columns(),
        coefficients: vec![
            0.05, -0.002, -0.001, 3.2, -0.000005, 0.1, 0.45, -0.35, -0.05, 0.85, 0.15,
        ],
        intercept: -1.75,
        threshold: 0.5,
        card: Some(ModelCard {
            algorithm: "Logistic Regression".to_string(),
            accuracy: Some(0.8537),
            precision_rejected: Some(0.95),
            recall_approved: Some(0.99),
            training_samples: Some(491),
            test_samples: Some(123),
        }),
    }
}

pub(super) fn write_artifact(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("model.json");
    std::fs::write(&path, contents).expect("write artifact");
    path
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
