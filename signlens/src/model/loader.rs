use crate::config::ModelConfig;
use crate::error::ModelError;
use crate::model::classifier::OnnxClassifier;
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;
use tracing::{debug, info};

// Initialize the global environment for ORT (only needed once)
pub fn init_ort() -> Result<(), ModelError> {
    let committed = ort::init()
        .with_name("signlens")
        .commit()
        .map_err(ModelError::runtime)?;
    debug!(committed, "ONNX Runtime environment ready");
    Ok(())
}

/// Loads an ONNX model from disk and wraps its session in a classifier.
pub fn load_model(config: &ModelConfig) -> Result<OnnxClassifier, ModelError> {
    let session = load_session(&config.path, config.intra_threads)?;
    let classifier = OnnxClassifier::new(session)?;
    info!(
        model = %config.name,
        input = classifier.input_name(),
        "classifier ready"
    );
    Ok(classifier)
}

/// Creates an inference session for the `.onnx` file at `model_path`.
pub fn load_session(
    model_path: impl AsRef<Path>,
    intra_threads: usize,
) -> Result<Session, ModelError> {
    let path = model_path.as_ref();
    if !path.exists() {
        return Err(ModelError::NotFound(path.display().to_string()));
    }

    let session = Session::builder()
        .map_err(ModelError::runtime)?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(ModelError::runtime)?
        .with_intra_threads(intra_threads)
        .map_err(ModelError::runtime)?
        .commit_from_file(path)
        .map_err(ModelError::runtime)?;

    info!(path = %path.display(), "loaded model");
    for (i, input) in session.inputs.iter().enumerate() {
        info!("  input {}: {} ({:?})", i, input.name, input.input_type);
    }

    Ok(session)
}
