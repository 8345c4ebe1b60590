use crate::config::validate_image_size;
use crate::error::ClassifierError;
use image::{imageops, DynamicImage};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tract_onnx::prelude::*;

pub const CHANNELS: usize = 3;

/// RGB component read for each tensor channel. Training read images
/// through OpenCV, so the model expects BGR.
pub const CHANNEL_ORDER: [usize; CHANNELS] = [2, 1, 0];

/// A single pre-processed image, shaped `[1, size, size, 3]` (NHWC) with
/// values in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct ImageTensor {
    data: tract_ndarray::Array4<f32>,
}

impl ImageTensor {
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Edge length of the square image this tensor holds.
    pub fn size(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn get(&self, y: usize, x: usize, channel: usize) -> Option<f32> {
        self.data.get((0, y, x, channel)).copied()
    }

    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied()
    }

    pub fn to_tract(&self) -> Tensor {
        self.data.clone().into_tensor()
    }
}

/// Where the raw image comes from.
#[derive(Debug, Clone, Copy)]
pub enum ImageSource<'a> {
    Bytes(&'a [u8]),
    Path(&'a Path),
}

impl<'a> From<&'a [u8]> for ImageSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ImageSource::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ImageSource<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        ImageSource::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a Path> for ImageSource<'a> {
    fn from(path: &'a Path) -> Self {
        ImageSource::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for ImageSource<'a> {
    fn from(path: &'a PathBuf) -> Self {
        ImageSource::Path(path.as_path())
    }
}

impl ImageSource<'_> {
    /// Short name for messages: the path, or the byte count.
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
            ImageSource::Path(path) => path.display().to_string(),
        }
    }
}

pub fn decode_image(source: ImageSource<'_>) -> Result<DynamicImage, ClassifierError> {
    let bytes: Cow<'_, [u8]> = match source {
        ImageSource::Bytes(bytes) => Cow::Borrowed(bytes),
        ImageSource::Path(path) => Cow::Owned(std::fs::read(path).map_err(|e| {
            ClassifierError::UnreadableImage(format!("{}: {}", path.display(), e))
        })?),
    };

    if bytes.is_empty() {
        return Err(ClassifierError::UnreadableImage(format!(
            "{} is empty",
            source.describe()
        )));
    }

    image::load_from_memory(&bytes)
        .map_err(|e| ClassifierError::UnreadableImage(format!("{}: {}", source.describe(), e)))
}

/// Stretches the image to `size x size` and scales each channel to `[0, 1]`.
pub fn image_to_tensor(image: &DynamicImage, size: u32) -> ImageTensor {
    let resized = image
        .resize_exact(size, size, imageops::FilterType::Triangle)
        .to_rgb8();
    let side = size as usize;

    let data = tract_ndarray::Array4::from_shape_fn((1, side, side, CHANNELS), |(_, y, x, c)| {
        let pixel = resized.get_pixel(x as u32, y as u32);
        pixel[CHANNEL_ORDER[c]] as f32 / 255.0
    });

    ImageTensor { data }
}

pub fn preprocess<'a>(
    source: impl Into<ImageSource<'a>>,
    target_size: u32,
) -> Result<ImageTensor, ClassifierError> {
    validate_image_size(target_size)?;
    let image = decode_image(source.into())?;
    Ok(image_to_tensor(&image, target_size))
}
