use crate::error::ClassifierError;
use crate::image_classifier::prediction::PredictionResult;

const RULE_WIDTH: usize = 45;
const BAR_CELLS: usize = 20;

pub fn confidence_bar(confidence: f32) -> String {
    let filled = ((confidence.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f32).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
}

/// Headline, confidence bar, and the `top_k` best classes with up to three stars.
pub fn render_result(source_name: &str, result: &PredictionResult, top_k: usize) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let headline = if result.below_threshold {
        format!(
            "Result: {} (below the {:.1}% threshold)",
            result.headline, result.threshold
        )
    } else {
        format!("Result: {}", result.headline)
    };
    let mut lines = vec![
        format!("Image: {}", source_name),
        headline,
        format!(
            "Confidence: {:.1}% {}",
            result.confidence(),
            confidence_bar(result.confidence())
        ),
        rule.clone(),
        format!("{:<3}{:<18}{:<10}", "#", "Class", "Conf"),
        rule.clone(),
    ];

    for (i, entry) in result.top(top_k).iter().enumerate() {
        let rank = i + 1;
        let stars = " ★".repeat(rank.min(3));
        lines.push(format!(
            "{:<3}{:<18}{:>6.1}%{}",
            rank, entry.label, entry.confidence, stars
        ));
    }

    lines.push(rule);
    lines.push(format!(
        "Done: {} ({:.1}%)",
        result.headline,
        result.confidence()
    ));
    lines.join("\n")
}

pub fn render_error(source_name: &str, error: &ClassifierError) -> String {
    format!("Error: {}: {}", source_name, error)
}
