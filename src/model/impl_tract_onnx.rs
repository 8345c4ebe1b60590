use crate::image_classifier::tensor::{ImageTensor, CHANNELS};
use crate::model::interface::{Model, ModelError};
use std::path::Path;
use tract_onnx::prelude::*;

pub struct ModelTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    input_size: usize,
    num_classes: Option<usize>,
}

impl ModelTractOnnx {
    /// Loads an ONNX graph whose single input is `f32 [1, size, size, 3]`.
    pub fn new(model_path: &Path, input_size: u32) -> TractResult<Self> {
        let side = input_size as usize;
        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(0, f32::fact([1, side, side, CHANNELS]).into())?
            .into_optimized()?
            .into_runnable()?;

        let num_classes = model
            .model()
            .output_fact(0)?
            .shape
            .as_concrete()
            .and_then(|shape| shape.last().copied());

        Ok(Self {
            model,
            input_size: side,
            num_classes,
        })
    }
}

impl Model for ModelTractOnnx {
    fn predict(&self, tensor: &ImageTensor) -> Result<Vec<f32>, ModelError> {
        if tensor.size() != self.input_size {
            return Err(format!(
                "model expects {0}x{0} images, got {1}x{1}",
                self.input_size,
                tensor.size()
            )
            .into());
        }

        let outputs = self.model.run(tvec!(tensor.to_tract().into_tvalue()))?;
        let output = outputs
            .first()
            .ok_or("model produced no outputs")?
            .to_array_view::<f32>()?;

        if output.shape().first() != Some(&1) {
            return Err(format!("expected a batch of one, got shape {:?}", output.shape()).into());
        }

        Ok(output.iter().copied().collect())
    }

    fn num_classes(&self) -> Option<usize> {
        self.num_classes
    }
}
