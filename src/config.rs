use crate::error::ClassifierError;
use std::path::PathBuf;

pub const DEFAULT_IMAGE_SIZE: u32 = 64;
pub const DEFAULT_THRESHOLD: f32 = 40.0;
pub const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub stats_path: Option<PathBuf>,
    pub image_size: u32,
    /// Minimum confidence, in percent, for a class to be named in the headline.
    pub threshold: f32,
    pub top_k: usize,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.onnx"),
            labels_path: PathBuf::from("class_names.json"),
            stats_path: Some(PathBuf::from("normalization_stats.json")),
            image_size: DEFAULT_IMAGE_SIZE,
            threshold: DEFAULT_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            logger_timezone: local_timezone(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        validate_image_size(self.image_size)?;
        validate_threshold(self.threshold)?;
        if self.top_k == 0 {
            return Err(ClassifierError::InvalidConfig(
                "top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn validate_image_size(image_size: u32) -> Result<(), ClassifierError> {
    if image_size == 0 {
        return Err(ClassifierError::InvalidConfig(
            "image size must be non-zero".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_threshold(threshold: f32) -> Result<(), ClassifierError> {
    if !(0.0..=100.0).contains(&threshold) {
        return Err(ClassifierError::InvalidConfig(format!(
            "threshold {} is outside 0..=100",
            threshold
        )));
    }
    Ok(())
}

fn local_timezone() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
