use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Html,
    Json,
};
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::error::InferenceError;
use crate::model::Classifier;
use crate::pipeline;
use crate::preprocessing::image::decode;
use crate::server::types::*;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const CAMERA_HTML: &str = include_str!("../../static/camera.html");
const VIDEO_HTML: &str = include_str!("../../static/video.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn camera() -> Html<&'static str> {
    Html(CAMERA_HTML)
}

pub async fn video() -> Html<&'static str> {
    Html(VIDEO_HTML)
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> String {
    state.metrics.render()
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictResponse>, InferenceError> {
    let result = run_predict(state, multipart).await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) if e.status().is_client_error() => "rejected",
        Err(_) => "failed",
    };
    counter!("signlens_predictions_total", 1, "outcome" => outcome);

    result
}

async fn run_predict(
    state: Arc<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictResponse>, InferenceError> {
    // A body that is not multipart carries no file.
    let mut multipart = multipart.map_err(|_| InferenceError::NoFile)?;

    // 1. Validate upload
    let upload = read_upload(&mut multipart).await?;
    debug!(file = %upload.file_name, bytes = upload.bytes.len(), "received upload");

    // 2. Decode + 3. Preprocess + predict, off the async workers
    let start = Instant::now();
    let classifier = state.classifier.clone();
    let outcome = tokio::task::spawn_blocking(move || decode_and_classify(classifier, upload))
        .await
        .map_err(|e| InferenceError::Server(e.to_string()))??;
    histogram!("signlens_inference_seconds", start.elapsed().as_secs_f64());

    debug!(
        label = outcome.classification.label,
        confidence = outcome.classification.confidence,
        "prediction complete"
    );

    // 4. Respond
    Ok(Json(PredictResponse {
        prediction: outcome.classification.label.to_string(),
        confidence: outcome.classification.confidence,
        preprocessed_image: outcome.preview,
    }))
}

/// Decode failures stay client errors; everything after decoding is a
/// prediction error.
pub(super) fn decode_and_classify(
    classifier: Arc<dyn Classifier>,
    upload: Upload,
) -> Result<pipeline::Outcome, InferenceError> {
    let image = decode(&upload.bytes)?;
    Ok(pipeline::classify(classifier.as_ref(), &image)?)
}

/// Pulls the `file` part out of the form. Parts without a filename are plain
/// form fields and are skipped.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, InferenceError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| InferenceError::ImageRead(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        if file_name.is_empty() {
            return Err(InferenceError::EmptyFile);
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| InferenceError::ImageRead(e.to_string()))?;
        return Ok(Upload {
            file_name,
            bytes: bytes.to_vec(),
        });
    }

    Err(InferenceError::NoFile)
}
