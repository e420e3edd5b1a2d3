pub mod classifier;
pub mod loader;

pub use classifier::{Classifier, OnnxClassifier};

use crate::error::ModelError;
use crate::preprocessing::image::{CHANNELS, INPUT_SIZE};
use ndarray::Array4;

/// Runs one forward pass on a blank image and checks that the classifier
/// emits one score per label.
///
/// This only catches a class-count mismatch. A model trained with the same
/// number of classes in a different order passes.
pub fn check_label_count(classifier: &dyn Classifier, expected: usize) -> Result<(), ModelError> {
    let size = INPUT_SIZE as usize;
    let blank = Array4::<f32>::zeros((1, size, size, CHANNELS));
    let output = classifier.predict(blank.view())?;

    let got = output.ncols();
    if got != expected {
        return Err(ModelError::LabelCountMismatch { expected, got });
    }
    Ok(())
}
