use serde::Deserialize;
use std::collections::BTreeMap;

/// The only scaling the pre-processor applies.
pub const DIVIDE_BY_255: &str = "divide_by_255";

/// Reported when the stats file does not name its method.
pub const UNKNOWN_METHOD: &str = "unknown";

/// How pixel values were scaled during training. Loaded for reporting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NormalizationSpec {
    #[serde(default = "unknown_method")]
    pub method: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn unknown_method() -> String {
    UNKNOWN_METHOD.to_string()
}

impl NormalizationSpec {
    pub fn matches_preprocessing(&self) -> bool {
        let method = self.method.to_ascii_lowercase().replace(['-', ' ', '/'], "_");
        matches!(method.as_str(), DIVIDE_BY_255 | "divide_255" | "rescale" | "scale_0_1")
    }
}
