//! Fixed sentiment word lists.

/// Words that add one point to the sentiment score.
///
/// Entries are lowercase single words and never overlap [`NEGATIVE_WORDS`].
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "happy",
    "love",
    "excellent",
    "awesome",
    "fantastic",
    "positive",
    "nice",
    "wonderful",
];

/// Words that subtract one point from the sentiment score.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "sad",
    "hate",
    "terrible",
    "awful",
    "horrible",
    "negative",
    "poor",
    "worst",
    "angry",
];

/// Sentiment contribution of a single normalized token.
///
/// Returns `1` for a positive word, `-1` for a negative word and `0` for
/// anything else. Matching is exact, so callers must pass the normalized
/// (lowercased, letters-only) form.
#[must_use]
pub fn sentiment_weight(token: &str) -> i64 {
    if POSITIVE_WORDS.contains(&token) {
        1
    } else if NEGATIVE_WORDS.contains(&token) {
        -1
    } else {
        0
    }
}
