use crate::error::PredictionError;
use crate::labels::{label_for, LABELS};
use ndarray::{ArrayView2, Axis};

/// The top-1 class picked from a prediction vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub index: usize,
    pub label: &'static str,
    /// Probability of `label`, scaled to a percentage.
    pub confidence: f64,
}

/// Interprets the first row of a classifier output batch.
///
/// The row must have exactly one entry per label. Ties resolve to the lowest
/// index.
pub fn interpret(batch: ArrayView2<'_, f32>) -> Result<Classification, PredictionError> {
    if batch.nrows() == 0 || batch.ncols() != LABELS.len() {
        return Err(PredictionError::InvalidShape);
    }
    let probabilities = batch.index_axis(Axis(0), 0);
    if probabilities.iter().any(|p| !p.is_finite()) {
        return Err(PredictionError::NonFinite);
    }

    let (index, probability) = probabilities.iter().copied().enumerate().fold(
        (0, f32::NEG_INFINITY),
        |best, (i, p)| if p > best.1 { (i, p) } else { best },
    );

    let label = label_for(index).ok_or(PredictionError::IndexOutOfRange)?;

    let percentage = probability * 100.0;
    if !percentage.is_finite() {
        return Err(PredictionError::NonFinite);
    }

    Ok(Classification {
        index,
        label,
        confidence: f64::from(percentage),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn one_hot(index: usize, value: f32) -> Array2<f32> {
        let mut batch = Array2::<f32>::zeros((1, LABELS.len()));
        batch[[0, index]] = value;
        batch
    }

    #[test]
    fn test_picks_argmax_label() {
        let batch = one_hot(12, 0.9);
        let result = interpret(batch.view()).unwrap();

        assert_eq!(result.index, 12);
        assert_eq!(result.label, "C");
        assert_eq!(result.confidence, f64::from(0.9f32 * 100.0));
    }

    #[test]
    fn test_confidence_is_exact_percentage() {
        let mut batch = Array2::<f32>::from_elem((1, 36), 0.01);
        batch[[0, 3]] = 0.6543;
        let result = interpret(batch.view()).unwrap();

        assert_eq!(result.label, "3");
        assert_eq!(result.confidence, f64::from(0.6543f32 * 100.0));
        assert!((0.0..=100.0).contains(&result.confidence));
    }

    #[test]
    fn test_ties_pick_first_index() {
        let mut batch = Array2::<f32>::zeros((1, 36));
        batch[[0, 7]] = 0.5;
        batch[[0, 20]] = 0.5;

        let result = interpret(batch.view()).unwrap();
        assert_eq!(result.index, 7);
        assert_eq!(result.label, "7");
    }

    #[test]
    fn test_uniform_vector_picks_zero() {
        let batch = Array2::<f32>::from_elem((1, 36), 1.0 / 36.0);
        let result = interpret(batch.view()).unwrap();
        assert_eq!(result.label, "0");
    }

    #[test]
    fn test_last_label() {
        let result = interpret(one_hot(35, 1.0).view()).unwrap();
        assert_eq!(result.label, "Z");
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_only_first_row_is_used() {
        let mut batch = Array2::<f32>::zeros((2, 36));
        batch[[0, 1]] = 0.8;
        batch[[1, 30]] = 0.99;

        assert_eq!(interpret(batch.view()).unwrap().label, "1");
    }

    #[test]
    fn test_wrong_length_rejected() {
        let batch = Array2::<f32>::zeros((1, 26));
        let err = interpret(batch.view()).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidShape));
        assert_eq!(err.to_string(), "Invalid prediction shape");
    }

    #[test]
    fn test_empty_batch_rejected() {
        let batch = Array2::<f32>::zeros((0, 36));
        assert!(matches!(
            interpret(batch.view()).unwrap_err(),
            PredictionError::InvalidShape
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let mut batch = one_hot(4, 0.7);
        batch[[0, 9]] = f32::NAN;
        assert!(matches!(
            interpret(batch.view()).unwrap_err(),
            PredictionError::NonFinite
        ));
    }

    #[test]
    fn test_infinity_rejected() {
        let batch = one_hot(3, f32::INFINITY);
        assert!(matches!(
            interpret(batch.view()).unwrap_err(),
            PredictionError::NonFinite
        ));

        let mut batch = one_hot(3, 0.5);
        batch[[0, 8]] = f32::NEG_INFINITY;
        assert!(matches!(
            interpret(batch.view()).unwrap_err(),
            PredictionError::NonFinite
        ));
    }

    #[test]
    fn test_overflowing_percentage_rejected() {
        let batch = one_hot(5, f32::MAX / 10.0);
        assert!(matches!(
            interpret(batch.view()).unwrap_err(),
            PredictionError::NonFinite
        ));
    }

    #[test]
    fn test_negative_scores_still_pick_max() {
        let mut batch = Array2::<f32>::from_elem((1, 36), -5.0);
        batch[[0, 22]] = -1.0;
        assert_eq!(interpret(batch.view()).unwrap().label, "M");
    }
}
