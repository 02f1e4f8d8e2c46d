use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::scoring::router::{explanations_handler, model_handler, score_handler};
use crate::scoring::{
    scoring_router, ClassLabel, DecisionThreshold, ScoringService, FEATURE_COUNT, FEATURE_SCHEMA,
};

fn score_request(body: serde_json::Value) -> Request<Body> {
    Request::post("/api/v1/eligibility/score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn reference_payload() -> serde_json::Value {
    serde_json::to_value(reference_input()).expect("serialize input")
}

#[tokio::test]
async fn score_route_returns_decision_and_explanations() {
    let router = scoring_router(stub_service(ClassLabel::Approved, 0.8537));

    let response = router
        .oneshot(score_request(reference_payload()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["eligible"], true);
    assert_eq!(payload["label"], 1);
    assert_eq!(payload["display"]["approved"], "85.4%");
    assert_eq!(payload["display"]["rejected"], "14.6%");
    assert_eq!(payload["explanations"].as_array().expect("array").len(), 6);
    assert_eq!(payload["explanations"][0]["features"][0], "Credit_History");
    assert_eq!(payload["explanations"][0]["influence"], "strongly_positive");
    assert_eq!(
        payload["follow_up"]["next_steps"]
            .as_array()
            .expect("steps")
            .len(),
        5
    );
}

#[tokio::test]
async fn score_route_returns_encoded_features_in_schema_order() {
    let router = scoring_router(stub_service(ClassLabel::Approved, 0.8537));

    let response = router
        .oneshot(score_request(reference_payload()))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let text = std::str::from_utf8(&body).expect("utf-8 body");
    let start = text.find("\"features\":{").expect("feature map present");
    let end = start + text[start..].find('}').expect("feature map closes");
    let features = &text[start..end];

    let positions: Vec<usize> = FEATURE_SCHEMA
        .iter()
        .map(|feature| {
            features
                .find(&format!("\"{}\":", feature.as_str()))
                .unwrap_or_else(|| panic!("{feature} missing from {features}"))
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
    let map = payload["features"].as_object().expect("feature object");
    assert_eq!(map.len(), FEATURE_COUNT);
    assert_eq!(payload["features"]["Credit_History"], 1.0);
    assert_eq!(payload["features"]["TotalIncome"], 3000.0);
    assert_eq!(payload["features"]["Loan_Amount_Term"], 360.0);
    assert_eq!(payload["features"]["Property_Area_Urban"], 1.0);
    assert_eq!(payload["features"]["Property_Area_Semiurban"], 0.0);
}

#[tokio::test]
async fn score_handler_rejects_out_of_range_input() {
    let mut input = reference_input();
    input.loan_term_months = 0;

    let response = score_handler(
        State(stub_service(ClassLabel::Approved, 0.9)),
        axum::Json(input),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "invalid_input");
    assert!(payload["error"]
        .as_str()
        .expect("message")
        .contains("loan_term_months"));
}

#[tokio::test]
async fn score_route_rejects_unknown_enum_tags() {
    let router = scoring_router(stub_service(ClassLabel::Approved, 0.9));
    let mut body = reference_payload();
    body["property_area"] = json!("suburban");

    let response = router
        .oneshot(score_request(body))
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn score_handler_reports_unavailable_model() {
    let response = score_handler(State(unavailable_service()), axum::Json(reference_input())).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "model_unavailable");
}

#[tokio::test]
async fn score_handler_reports_inference_failures() {
    let service = Arc::new(ScoringService::with_classifier(
        Arc::new(BrokenClassifier),
        descriptor(),
        DecisionThreshold::Native,
    ));

    let response = score_handler(State(service), axum::Json(reference_input())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "inference_error");
}

#[tokio::test]
async fn explanations_handler_returns_static_catalog() {
    let response = explanations_handler().await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["source"], "static");
    assert_eq!(payload["explanations"].as_array().expect("array").len(), 6);
    assert_eq!(
        payload["explanations"][4]["influence_label"],
        "Negative (Minimal)"
    );
}

#[tokio::test]
async fn model_route_reflects_load_state() {
    let ready = model_handler(State(stub_service(ClassLabel::Rejected, 0.2))).await;
    assert_eq!(ready.status(), StatusCode::OK);
    let payload = read_json_body(ready).await;
    assert_eq!(payload["state"], "ready");
    assert_eq!(payload["model"]["name"], "stub");

    let router = scoring_router(unavailable_service());
    let response = router
        .oneshot(
            Request::get("/api/v1/eligibility/model")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let payload = read_json_body(response).await;
    assert_eq!(payload["state"], "unavailable");
    assert!(payload["error"].is_string());
}
