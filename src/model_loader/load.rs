use crate::config::validate_image_size;
use crate::error::ClassifierError;
use crate::library::logger::interface::Logger;
use crate::model::impl_tract_onnx::ModelTractOnnx;
use crate::model::interface::Model;
use crate::model_loader::label_set::LabelSet;
use crate::model_loader::normalization::NormalizationSpec;
use std::path::Path;

/// Everything read from disk at startup. Owned by one session.
pub struct LoadedArtifacts<M: Model = ModelTractOnnx> {
    pub model: M,
    pub labels: LabelSet,
    pub normalization: Option<NormalizationSpec>,
}

pub fn load(
    model_path: &Path,
    labels_path: &Path,
    stats_path: Option<&Path>,
    image_size: u32,
    logger: &dyn Logger,
) -> Result<LoadedArtifacts, ClassifierError> {
    validate_image_size(image_size)?;
    require_exists(model_path)?;
    require_exists(labels_path)?;

    let labels = load_label_set(labels_path)?;
    let _ = logger.info(&format!(
        "loaded {} classes: {}",
        labels.len(),
        labels.iter().collect::<Vec<_>>().join(", ")
    ));

    let model = load_model(model_path, image_size)?;
    check_output_width(&model, &labels, model_path)?;
    let _ = logger.info(&format!("loaded model {}", model_path.display()));

    let normalization = match stats_path {
        Some(path) => load_normalization_spec(path)?,
        None => None,
    };
    report_normalization(normalization.as_ref(), logger);

    Ok(LoadedArtifacts {
        model,
        labels,
        normalization,
    })
}

fn require_exists(path: &Path) -> Result<(), ClassifierError> {
    if !path.is_file() {
        return Err(ClassifierError::MissingArtifact {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

pub fn load_model(path: &Path, image_size: u32) -> Result<ModelTractOnnx, ClassifierError> {
    require_exists(path)?;
    ModelTractOnnx::new(path, image_size).map_err(|e| ClassifierError::corrupt(path, e))
}

/// `.json` files hold a string array; anything else is one label per line.
pub fn load_label_set(path: &Path) -> Result<LabelSet, ClassifierError> {
    require_exists(path)?;
    let bytes = std::fs::read(path).map_err(|e| ClassifierError::corrupt(path, e))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let labels = if is_json {
        let names: Vec<String> =
            serde_json::from_slice(&bytes).map_err(|e| ClassifierError::corrupt(path, e))?;
        LabelSet::new(names)
    } else {
        let text = String::from_utf8(bytes).map_err(|e| ClassifierError::corrupt(path, e))?;
        LabelSet::from_lines(&text)
    };

    labels.map_err(|e| ClassifierError::corrupt(path, e))
}

/// A missing stats file is not an error.
pub fn load_normalization_spec(path: &Path) -> Result<Option<NormalizationSpec>, ClassifierError> {
    if !path.is_file() {
        return Ok(None);
    }
    let bytes = std::fs::read(path).map_err(|e| ClassifierError::corrupt(path, e))?;
    let spec = serde_json::from_slice(&bytes).map_err(|e| ClassifierError::corrupt(path, e))?;
    Ok(Some(spec))
}

pub fn check_output_width(
    model: &dyn Model,
    labels: &LabelSet,
    model_path: &Path,
) -> Result<(), ClassifierError> {
    match model.num_classes() {
        Some(width) if width != labels.len() => Err(ClassifierError::corrupt(
            model_path,
            format!(
                "model outputs {} classes but {} labels were loaded",
                width,
                labels.len()
            ),
        )),
        _ => Ok(()),
    }
}

fn report_normalization(spec: Option<&NormalizationSpec>, logger: &dyn Logger) {
    match spec {
        None => {
            let _ = logger.info("no normalization stats found, using divide-by-255");
        }
        Some(spec) if spec.matches_preprocessing() => {
            let _ = logger.info(&format!("normalization method: {}", spec.method));
        }
        Some(spec) => {
            let _ = logger.warn(&format!(
                "normalization method '{}' differs from the divide-by-255 pre-processing; stats are not applied",
                spec.method
            ));
        }
    }
}
