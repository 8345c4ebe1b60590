use crate::config::validate_threshold;
use crate::error::ClassifierError;
use crate::image_classifier::prediction::{rank_probabilities, PredictionResult};
use crate::image_classifier::tensor::ImageTensor;
use crate::model::interface::Model;
use crate::model_loader::label_set::LabelSet;

/// Runs the model on one image and ranks every class. The threshold only
/// decides the headline; `ranked` always lists all labels.
pub fn classify(
    model: &dyn Model,
    tensor: &ImageTensor,
    labels: &LabelSet,
    threshold: f32,
) -> Result<PredictionResult, ClassifierError> {
    validate_threshold(threshold)?;

    let probabilities = model
        .predict(tensor)
        .map_err(|e| ClassifierError::InferenceError(e.to_string()))?;

    rank_probabilities(&probabilities, labels, threshold)
}
