//! The prediction stage shared by the HTTP handler and the tests: prepare a
//! decoded image, run the classifier once, pick the label, and encode the
//! preview.

use crate::error::PredictionError;
use crate::model::Classifier;
use crate::postprocessing::{encode_preview, interpret, Classification};
use crate::preprocessing::image::prepare;
use image::DynamicImage;

#[derive(Debug, Clone)]
pub struct Outcome {
    pub classification: Classification,
    /// `data:image/jpeg;base64,...` of the 64x64 resized input.
    pub preview: String,
}

/// Runs the prediction on an already decoded image. Either every step
/// succeeds or nothing is returned.
pub fn classify(
    classifier: &dyn Classifier,
    image: &DynamicImage,
) -> Result<Outcome, PredictionError> {
    let prepared = prepare(image)?;
    let output = classifier.predict(prepared.tensor.view())?;
    let classification = interpret(output.view())?;
    let preview = encode_preview(&prepared.preview)?;

    Ok(Outcome {
        classification,
        preview,
    })
}
