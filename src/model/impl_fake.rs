use crate::image_classifier::tensor::ImageTensor;
use crate::model::interface::{Model, ModelError};
use rand::distr::{Distribution, Uniform};

#[derive(Debug, Clone)]
enum FakeOutput {
    Fixed(Vec<f32>),
    Random { num_classes: usize },
    Fail(String),
}

/// Stand-in model for tests and dry runs.
#[derive(Debug, Clone)]
pub struct ModelFake {
    output: FakeOutput,
    input_size: Option<usize>,
}

impl ModelFake {
    pub fn fixed(probabilities: Vec<f32>) -> Self {
        Self {
            output: FakeOutput::Fixed(probabilities),
            input_size: None,
        }
    }

    /// Returns a fresh random probability vector on every call.
    pub fn random(num_classes: usize) -> Self {
        Self {
            output: FakeOutput::Random { num_classes },
            input_size: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            output: FakeOutput::Fail(message.to_string()),
            input_size: None,
        }
    }

    /// Rejects tensors whose edge length differs from `size`.
    pub fn with_input_size(mut self, size: usize) -> Self {
        self.input_size = Some(size);
        self
    }
}

/// Random non-negative values normalized to sum to one.
pub fn random_probabilities(num_classes: usize) -> Result<Vec<f32>, ModelError> {
    let mut rng = rand::rng();
    let weight_dist = Uniform::new(f32::EPSILON, 1.0)?;

    let weights: Vec<f32> = (0..num_classes)
        .map(|_| weight_dist.sample(&mut rng))
        .collect();
    let total: f32 = weights.iter().sum();

    Ok(weights.into_iter().map(|w| w / total).collect())
}

impl Model for ModelFake {
    fn predict(&self, tensor: &ImageTensor) -> Result<Vec<f32>, ModelError> {
        if let Some(size) = self.input_size {
            if tensor.size() != size {
                return Err(format!("expected {0}x{0} input, got {1}x{1}", size, tensor.size()).into());
            }
        }

        match &self.output {
            FakeOutput::Fixed(probabilities) => Ok(probabilities.clone()),
            FakeOutput::Random { num_classes } => random_probabilities(*num_classes),
            FakeOutput::Fail(message) => Err(message.clone().into()),
        }
    }

    fn num_classes(&self) -> Option<usize> {
        match &self.output {
            FakeOutput::Fixed(probabilities) => Some(probabilities.len()),
            FakeOutput::Random { num_classes } => Some(*num_classes),
            FakeOutput::Fail(_) => None,
        }
    }
}
