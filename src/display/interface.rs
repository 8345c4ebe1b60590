use crate::error::ClassifierError;
use crate::image_classifier::prediction::PredictionResult;
use std::error::Error;

/// Where finished predictions are presented to the user.
pub trait PredictionDisplay {
    fn show(
        &mut self,
        source_name: &str,
        result: &PredictionResult,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show_error(
        &mut self,
        source_name: &str,
        error: &ClassifierError,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
