use crate::image_classifier::tensor::ImageTensor;

pub type ModelError = Box<dyn std::error::Error + Send + Sync>;

/// A trained classifier treated as a black box: one image in, one
/// probability per class out.
pub trait Model: Send + Sync {
    fn predict(&self, tensor: &ImageTensor) -> Result<Vec<f32>, ModelError>;

    /// Number of classes, when the model declares it up front.
    fn num_classes(&self) -> Option<usize> {
        None
    }
}
