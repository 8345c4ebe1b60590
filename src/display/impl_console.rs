use crate::display::interface::PredictionDisplay;
use crate::display::render::{render_error, render_result};
use crate::error::ClassifierError;
use crate::image_classifier::prediction::PredictionResult;
use std::error::Error;

pub struct PredictionDisplayConsole {
    top_k: usize,
}

impl PredictionDisplayConsole {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }
}

impl PredictionDisplay for PredictionDisplayConsole {
    fn show(
        &mut self,
        source_name: &str,
        result: &PredictionResult,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("{}\n", render_result(source_name, result, self.top_k));
        Ok(())
    }

    fn show_error(
        &mut self,
        source_name: &str,
        error: &ClassifierError,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        eprintln!("{}\n", render_error(source_name, error));
        Ok(())
    }
}
