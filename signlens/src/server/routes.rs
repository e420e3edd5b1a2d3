use crate::config::ServerConfig;
use crate::model::Classifier;
use crate::server::{handlers, types::AppState};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub fn create_router(
    classifier: Arc<dyn Classifier>,
    metrics: PrometheusHandle,
    server: &ServerConfig,
) -> Router {
    let state = Arc::new(AppState {
        classifier,
        metrics,
    });

    Router::new()
        .route("/", get(handlers::index))
        .route("/camera", get(handlers::camera))
        .route("/video", get(handlers::video))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .route("/predict", post(handlers::predict))
        .nest_service("/static", ServeDir::new(&server.static_dir))
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
