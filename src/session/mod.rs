use crate::config::{validate_image_size, validate_threshold, Config};
use crate::error::ClassifierError;
use crate::image_classifier::classify::classify;
use crate::image_classifier::prediction::PredictionResult;
use crate::image_classifier::tensor::{preprocess, ImageSource};
use crate::library::logger::interface::Logger;
use crate::model::interface::Model;
use crate::model_loader::label_set::LabelSet;
use crate::model_loader::load::{check_output_width, load};
use crate::model_loader::normalization::NormalizationSpec;
use std::path::Path;
use std::sync::Arc;


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub image_size: u32,
    pub threshold: f32,
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            image_size: config.image_size,
            threshold: config.threshold,
        }
    }
}

/// A loaded model with its labels. Nothing in a session changes after
/// construction, so predictions may run from several threads.
pub struct Session {
    model: Box<dyn Model>,
    labels: LabelSet,
    normalization: Option<NormalizationSpec>,
    settings: SessionSettings,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Session {
    pub fn load(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        config.validate()?;
        let loader_logger = logger.with_namespace("loader");

        let artifacts = load(
            &config.model_path,
            &config.labels_path,
            config.stats_path.as_deref(),
            config.image_size,
            loader_logger.as_ref(),
        )?;

        Ok(Self {
            model: Box::new(artifacts.model),
            labels: artifacts.labels,
            normalization: artifacts.normalization,
            settings: SessionSettings::from(config),
            logger: logger.with_namespace("session"),
        })
    }

    /// Builds a session around a model the caller already has, such as a fake.
    pub fn new(
        model: Box<dyn Model>,
        labels: LabelSet,
        normalization: Option<NormalizationSpec>,
        settings: SessionSettings,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        validate_image_size(settings.image_size)?;
        validate_threshold(settings.threshold)?;
        check_output_width(model.as_ref(), &labels, Path::new("<in-memory model>"))?;

        Ok(Self {
            model,
            labels,
            normalization,
            settings,
            logger: logger.with_namespace("session"),
        })
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn normalization(&self) -> Option<&NormalizationSpec> {
        self.normalization.as_ref()
    }

    pub fn predict<'a>(
        &self,
        source: impl Into<ImageSource<'a>>,
    ) -> Result<PredictionResult, ClassifierError> {
        let source = source.into();
        let tensor = preprocess(source, self.settings.image_size)?;
        let result = classify(
            self.model.as_ref(),
            &tensor,
            &self.labels,
            self.settings.threshold,
        )?;

        let _ = self.logger.info(&format!(
            "{} -> {} ({:.1}%)",
            source.describe(),
            result.headline,
            result.confidence()
        ));

        Ok(result)
    }
}
