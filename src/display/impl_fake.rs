use crate::display::interface::PredictionDisplay;
use crate::error::ClassifierError;
use crate::image_classifier::prediction::PredictionResult;
use std::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Result { source_name: String, headline: String },
    Error { source_name: String, message: String },
}

/// Keeps what would have been shown.
#[derive(Debug, Default)]
pub struct PredictionDisplayFake {
    pub shown: Vec<Shown>,
}

impl PredictionDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PredictionDisplay for PredictionDisplayFake {
    fn show(
        &mut self,
        source_name: &str,
        result: &PredictionResult,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shown.push(Shown::Result {
            source_name: source_name.to_string(),
            headline: result.headline.clone(),
        });
        Ok(())
    }

    fn show_error(
        &mut self,
        source_name: &str,
        error: &ClassifierError,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shown.push(Shown::Error {
            source_name: source_name.to_string(),
            message: error.to_string(),
        });
        Ok(())
    }
}
