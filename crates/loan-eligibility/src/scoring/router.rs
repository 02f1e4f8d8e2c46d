use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::classifier::{ClassLabel, Classifier};
use super::domain::ApplicantInput;
use super::engine::ScoredApplicant;
use super::explanation::{explanations_for, Explanation, EXPLANATION_CATALOG};
use super::guidance::FollowUp;
use super::schema::{FeatureName, FeatureVector};
use super::service::ScoringService;
use super::validation::validate;
use super::{ScoringError, ScoringErrorKind};

/// Router builder exposing the scoring endpoints.
pub fn scoring_router<C>(service: Arc<ScoringService<C>>) -> Router
where
    C: Classifier + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/score", post(score_handler::<C>))
        .route(
            "/api/v1/eligibility/explanations",
            get(explanations_handler),
        )
        .route("/api/v1/eligibility/model", get(model_handler::<C>))
        .with_state(service)
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplanationView {
    pub factor: &'static str,
    pub features: &'static [FeatureName],
    pub influence: &'static str,
    pub influence_label: &'static str,
    pub rationale: &'static str,
}

impl From<&Explanation> for ExplanationView {
    fn from(entry: &Explanation) -> Self {
        Self {
            factor: entry.factor,
            features: entry.features,
            influence: entry.influence.tag(),
            influence_label: entry.influence.label(),
            rationale: entry.rationale,
        }
    }
}

/// Percentages rounded for display; the fractions stay at full precision.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayPercentages {
    pub approved: String,
    pub rejected: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub eligible: bool,
    pub label: ClassLabel,
    pub probability_approved: f64,
    pub probability_rejected: f64,
    pub display: DisplayPercentages,
    pub summary: String,
    pub features: FeatureVector,
    pub explanations: Vec<ExplanationView>,
    pub follow_up: FollowUp,
}

impl From<ScoredApplicant> for ScoreResponse {
    fn from(scored: ScoredApplicant) -> Self {
        let ScoredApplicant { features, result } = scored;
        let explanations = explanations_for(&result)
            .iter()
            .map(ExplanationView::from)
            .collect();
        Self {
            eligible: result.eligible,
            label: result.label,
            probability_approved: result.probability_approved,
            probability_rejected: result.probability_rejected,
            display: DisplayPercentages {
                approved: result.approved_percentage(),
                rejected: result.rejected_percentage(),
            },
            summary: result.summary(),
            features,
            explanations,
            follow_up: result.follow_up,
        }
    }
}

fn status_for(kind: ScoringErrorKind) -> StatusCode {
    match kind {
        ScoringErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
        ScoringErrorKind::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ScoringErrorKind::InferenceError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn error_response(error: &ScoringError) -> Response {
    let kind = error.kind();
    let payload = json!({
        "error": error.to_string(),
        "kind": kind.label(),
    });
    (status_for(kind), axum::Json(payload)).into_response()
}

pub(crate) async fn score_handler<C>(
    State(service): State<Arc<ScoringService<C>>>,
    axum::Json(input): axum::Json<ApplicantInput>,
) -> Response
where
    C: Classifier + 'static,
{
    let scored = validate(&input).and_then(|()| service.assess(&input));
    match scored {
        Ok(scored) => {
            let body = ScoreResponse::from(scored);
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => {
            if !error.is_client_error() {
                warn!(%error, "scoring request failed");
            }
            error_response(&error)
        }
    }
}

pub(crate) async fn explanations_handler() -> Response {
    let entries: Vec<ExplanationView> = EXPLANATION_CATALOG
        .iter()
        .map(ExplanationView::from)
        .collect();
    let payload = json!({
        "source": "static",
        "explanations": entries,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn model_handler<C>(State(service): State<Arc<ScoringService<C>>>) -> Response
where
    C: Classifier + 'static,
{
    let status = service.status();
    let code = if service.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, axum::Json(status)).into_response()
}
