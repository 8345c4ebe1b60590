use crate::image_classifier::tensor::{image_to_tensor, ImageTensor};
use crate::model_loader::label_set::LabelSet;
use image::{DynamicImage, ImageBuffer, Rgb};

pub struct Fixture {
    pub labels: LabelSet,
    pub tensor: ImageTensor,
}

impl Fixture {
    pub fn new(labels: &[&str]) -> Self {
        let image = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(80, 60, Rgb([90, 140, 30])));

        Self {
            labels: LabelSet::new(labels.iter().copied()).unwrap(),
            tensor: image_to_tensor(&image, 64),
        }
    }

    pub fn animals() -> Self {
        Self::new(&["cat", "dog", "bird"])
    }
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.001,
        "expected {}, got {}",
        expected,
        actual
    );
}
