use crate::model::Classifier;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::Arc;

/// Shared Application State
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub metrics: PrometheusHandle,
}

/// Body of a successful `/predict` response.
#[derive(Serialize, Debug)]
pub struct PredictResponse {
    pub prediction: String,
    pub confidence: f64,
    pub preprocessed_image: String,
}

/// The `file` part of a multipart upload.
#[derive(Debug)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
