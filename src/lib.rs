//! Image classification with a pre-trained model: load the model and its
//! labels once, then pre-process, predict and rank one image per call.

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod image_classifier;
pub mod library;
pub mod model;
pub mod model_loader;
pub mod session;

pub use config::Config;
pub use error::ClassifierError;
pub use image_classifier::classify::classify;
pub use image_classifier::prediction::{rank_probabilities, PredictionResult, RankedLabel};
pub use image_classifier::tensor::{preprocess, ImageSource, ImageTensor};
pub use model_loader::label_set::LabelSet;
pub use model_loader::load::load;
pub use model_loader::normalization::NormalizationSpec;
pub use session::Session;
