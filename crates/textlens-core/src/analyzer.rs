//! Tokenize, normalize, count, rank and score a line of text.

use crate::frequency::FrequencyTable;
use crate::lexicon::sentiment_weight;
use crate::types::AnalysisResult;

/// Maximum number of keywords reported per analysis.
pub const MAX_KEYWORDS: usize = 3;

/// Whitespace class used for splitting: space, tab, newline, vertical tab,
/// form feed and carriage return.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Split `text` into raw tokens.
///
/// Runs of separators collapse; leading and trailing separators yield no
/// empty tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|t| !t.is_empty())
}

/// Delete every non-letter from `raw` and lowercase what remains.
///
/// Only ASCII letters survive; `"don't"` becomes `"dont"`, `"123"` becomes
/// the empty string.
#[must_use]
pub fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Analyze `text`.
///
/// Total over every input: the empty string yields a zero count, no keywords
/// and a neutral score. Keywords are ranked by count descending, ties broken
/// by first occurrence.
#[must_use]
pub fn analyze(text: &str) -> AnalysisResult {
    let mut freq = FrequencyTable::new();
    let mut word_count: u64 = 0;
    let mut sentiment_score: i64 = 0;

    for raw in tokens(text) {
        let word = normalize_token(raw);
        if word.is_empty() {
            continue;
        }
        word_count += 1;
        sentiment_score += sentiment_weight(&word);
        freq.record(&word);
    }

    AnalysisResult {
        word_count,
        keywords: freq.top(MAX_KEYWORDS),
        sentiment_score,
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
