use serde::{Deserialize, Serialize};

/// Outcome of analyzing one piece of text.
///
/// Field order is the serialized key order: `word_count`, `keywords`,
/// `sentiment_score`. Downstream consumers rely on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Tokens whose normalized form is non-empty.
    pub word_count: u64,
    /// Up to three most frequent normalized tokens, most frequent first.
    pub keywords: Vec<String>,
    /// Positive-list hits minus negative-list hits.
    pub sentiment_score: i64,
}

impl AnalysisResult {
    /// Serialize as one compact JSON line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
