use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the `/predict` endpoint. Every variant maps to exactly
/// one status code and message in `into_response`.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("No file provided")]
    NoFile,

    #[error("Empty file provided")]
    EmptyFile,

    #[error("Invalid image format")]
    InvalidImage,

    #[error("Error processing image: {0}")]
    ImageRead(String),

    #[error("Error making prediction: {0}")]
    Prediction(#[from] PredictionError),

    #[error("Server error: {0}")]
    Server(String),
}

/// Failures while turning a decoded image into a label.
#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Invalid prediction shape")]
    InvalidShape,

    #[error("Prediction index out of range")]
    IndexOutOfRange,

    #[error("Prediction contains non-finite values")]
    NonFinite,

    #[error(transparent)]
    Preprocess(#[from] PreprocessError),

    #[error("ONNX Runtime error: {0}")]
    Runtime(String),

    #[error("Failed to encode preview: {0}")]
    Encode(#[from] image::ImageError),
}

impl From<ort::Error> for PredictionError {
    fn from(err: ort::Error) -> Self {
        PredictionError::Runtime(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("Empty image data")]
    Empty,

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Invalid image shape {got:?}, expected {expected:?}")]
    Shape { expected: [usize; 3], got: [usize; 3] },
}

/// Startup-time failures while loading or validating the classifier.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model not found at path: {0}")]
    NotFound(String),

    #[error("ONNX Runtime error: {0}")]
    Runtime(String),

    #[error("Model graph declares no {0}")]
    MissingTensor(&'static str),

    #[error("Model produces {got} classes but the label set has {expected}")]
    LabelCountMismatch { expected: usize, got: usize },

    #[error("Startup validation failed: {0}")]
    Validation(#[from] PredictionError),
}

impl ModelError {
    pub(crate) fn runtime(err: impl std::fmt::Display) -> Self {
        ModelError::Runtime(err.to_string())
    }
}

impl From<PreprocessError> for InferenceError {
    fn from(err: PreprocessError) -> Self {
        match err {
            PreprocessError::Decode(image::ImageError::Decoding(_))
            | PreprocessError::Decode(image::ImageError::Unsupported(_)) => {
                InferenceError::InvalidImage
            }
            other => InferenceError::ImageRead(other.to_string()),
        }
    }
}

impl InferenceError {
    pub fn status(&self) -> StatusCode {
        match self {
            InferenceError::NoFile
            | InferenceError::EmptyFile
            | InferenceError::InvalidImage
            | InferenceError::ImageRead(_) => StatusCode::BAD_REQUEST,
            InferenceError::Prediction(_) | InferenceError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for InferenceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "prediction request failed");
        } else {
            tracing::warn!(error = %self, "rejected prediction request");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
