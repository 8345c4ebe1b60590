use crate::config::validate_threshold;
use crate::error::ClassifierError;
use crate::model_loader::label_set::LabelSet;

/// Headline shown when no class reaches the threshold.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// How far outside `[0, 1]` a model output may drift before it is rejected.
pub const PROBABILITY_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedLabel {
    /// Position in the model output.
    pub index: usize,
    pub label: String,
    /// Percentage in `[0, 100]`.
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub headline: String,
    pub top: RankedLabel,
    pub below_threshold: bool,
    pub threshold: f32,
    /// Every class, highest confidence first.
    pub ranked: Vec<RankedLabel>,
}

impl PredictionResult {
    pub fn confidence(&self) -> f32 {
        self.top.confidence
    }

    pub fn top(&self, n: usize) -> &[RankedLabel] {
        &self.ranked[..n.min(self.ranked.len())]
    }
}

pub fn rank_probabilities(
    probabilities: &[f32],
    labels: &LabelSet,
    threshold: f32,
) -> Result<PredictionResult, ClassifierError> {
    validate_threshold(threshold)?;

    if probabilities.len() != labels.len() {
        return Err(ClassifierError::InferenceError(format!(
            "model returned {} scores for {} labels",
            probabilities.len(),
            labels.len()
        )));
    }

    let mut ranked = probabilities
        .iter()
        .zip(labels.iter())
        .enumerate()
        .map(|(index, (&probability, label))| {
            Ok(RankedLabel {
                index,
                label: label.to_string(),
                confidence: to_percentage(probability, index)?,
            })
        })
        .collect::<Result<Vec<_>, ClassifierError>>()?;

    // Stable, so equal scores keep output order and the first maximum wins.
    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let top = ranked
        .first()
        .cloned()
        .ok_or_else(|| ClassifierError::InferenceError("model returned no scores".to_string()))?;

    let below_threshold = top.confidence < threshold;
    let headline = if below_threshold {
        UNKNOWN_LABEL.to_string()
    } else {
        top.label.to_uppercase()
    };

    Ok(PredictionResult {
        headline,
        top,
        below_threshold,
        threshold,
        ranked,
    })
}

fn to_percentage(probability: f32, index: usize) -> Result<f32, ClassifierError> {
    let in_range = (-PROBABILITY_TOLERANCE..=1.0 + PROBABILITY_TOLERANCE).contains(&probability);
    if !in_range {
        return Err(ClassifierError::InferenceError(format!(
            "score {} at index {} is not a probability",
            probability, index
        )));
    }
    Ok(probability.clamp(0.0, 1.0) * 100.0)
}
