use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_scoring_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_eligibility::config::AppConfig;
use loan_eligibility::error::AppError;
use loan_eligibility::scoring::ScoringService;
use loan_eligibility::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(model) = args.model.take() {
        config.model.artifact_path = model;
    }

    telemetry::init(&config.telemetry)?;

    let scoring = Arc::new(ScoringService::load(&config.model));
    if !scoring.is_ready() {
        warn!(
            path = %config.model.artifact_path.display(),
            "serving without a classifier; scoring requests will return 503"
        );
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        scoring_ready: scoring.is_ready(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_scoring_routes(scoring)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "eligibility scoring service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
