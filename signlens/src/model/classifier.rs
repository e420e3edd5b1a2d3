use crate::error::{ModelError, PredictionError};
use ndarray::{Array2, ArrayView4, ArrayViewD, Ix2};
use ort::session::Session;
use ort::value::Tensor;
use std::sync::Mutex;

/// A pre-trained image classifier.
///
/// Takes a batch of normalized images and returns one probability vector per
/// image. Implementations are shared across requests and must be safe to call
/// concurrently.
pub trait Classifier: Send + Sync {
    fn predict(&self, batch: ArrayView4<'_, f32>) -> Result<Array2<f32>, PredictionError>;
}

/// Classifier backed by an ONNX Runtime session.
pub struct OnnxClassifier {
    // `Session::run` needs `&mut`, so requests take turns.
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
}

impl OnnxClassifier {
    pub fn new(session: Session) -> Result<Self, ModelError> {
        let (input_name, output_name) = io_names(
            session.inputs.iter().map(|input| input.name.as_str()),
            session.outputs.iter().map(|output| output.name.as_str()),
        )?;
        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }

    pub fn input_name(&self) -> &str {
        &self.input_name
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, batch: ArrayView4<'_, f32>) -> Result<Array2<f32>, PredictionError> {
        let shape = batch.shape().to_vec();
        let data = batch.iter().copied().collect::<Vec<f32>>().into_boxed_slice();
        let input_value = Tensor::from_array((shape, data))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| PredictionError::Runtime("classifier session lock poisoned".into()))?;
        let outputs = session.run(ort::inputs![self.input_name.as_str() => input_value])?;

        let output = outputs
            .get(self.output_name.as_str())
            .ok_or(PredictionError::InvalidShape)?;
        let (shape, data) = output.try_extract_tensor::<f32>()?;
        let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();
        let output = ArrayViewD::from_shape(dims.as_slice(), data)
            .map_err(|_| PredictionError::InvalidShape)?;
        let probabilities = output
            .into_dimensionality::<Ix2>()
            .map_err(|_| PredictionError::InvalidShape)?;

        Ok(probabilities.to_owned())
    }
}

/// The first input and first output name of a graph. A graph without either
/// cannot classify anything.
fn io_names<'a>(
    mut inputs: impl Iterator<Item = &'a str>,
    mut outputs: impl Iterator<Item = &'a str>,
) -> Result<(String, String), ModelError> {
    let input = inputs.next().ok_or(ModelError::MissingTensor("inputs"))?;
    let output = outputs.next().ok_or(ModelError::MissingTensor("outputs"))?;
    Ok((input.to_string(), output.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_names_take_first_of_each() {
        let (input, output) =
            io_names(["pixels", "mask"].into_iter(), ["probs"].into_iter()).unwrap();
        assert_eq!(input, "pixels");
        assert_eq!(output, "probs");
    }

    #[test]
    fn test_graph_without_inputs_is_rejected() {
        let err = io_names(std::iter::empty(), ["probs"].into_iter()).unwrap_err();
        assert!(matches!(err, ModelError::MissingTensor("inputs")));
    }

    #[test]
    fn test_graph_without_outputs_is_rejected() {
        let err = io_names(["pixels"].into_iter(), std::iter::empty()).unwrap_err();
        assert!(matches!(err, ModelError::MissingTensor("outputs")));
    }
}
