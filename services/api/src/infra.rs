use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    /// False when the classifier artifact failed to load.
    pub(crate) scoring_ready: bool,
    pub(crate) metrics: Arc<PrometheusHandle>,
}
