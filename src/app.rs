use crate::display::interface::PredictionDisplay;
use crate::session::Session;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Classifies images one after another and hands each outcome to the display.
pub struct App {
    session: Session,
    display: Box<dyn PredictionDisplay>,
}

impl App {
    pub fn new(session: Session, display: Box<dyn PredictionDisplay>) -> Self {
        Self { session, display }
    }

    pub fn run(
        &mut self,
        images: &[PathBuf],
    ) -> Result<RunSummary, Box<dyn std::error::Error + Send + Sync>> {
        let mut summary = RunSummary::default();

        for path in images {
            let source_name = path.display().to_string();

            match self.session.predict(path) {
                Ok(result) => {
                    summary.succeeded += 1;
                    self.display.show(&source_name, &result)?;
                }
                Err(error) => {
                    summary.failed += 1;
                    self.display.show_error(&source_name, &error)?;
                }
            }
        }

        Ok(summary)
    }
}
