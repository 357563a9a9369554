use std::collections::HashMap;

/// Occurrence counts for normalized tokens.
///
/// Besides the count, each entry remembers the order in which its token was
/// first recorded. [`FrequencyTable::top`] uses that position to break ties,
/// which keeps the ranking identical across runs regardless of hash order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `token`, inserting it at 1 if absent.
    pub fn record(&mut self, token: &str) {
        if let Some(&slot) = self.index.get(token) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(token.to_owned(), self.entries.len());
            self.entries.push((token.to_owned(), 1));
        }
    }

    /// Number of times `token` has been recorded.
    #[must_use]
    pub fn count(&self, token: &str) -> u64 {
        self.index.get(token).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent tokens, count descending.
    ///
    /// Equal counts keep first-seen order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        // Stable sort: entries are already in first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(token, _)| token.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(tokens: &[&str]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for token in tokens {
            table.record(token);
        }
        table
    }

    #[test]
    fn new_table_is_empty() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.top(3).is_empty());
    }

    #[test]
    fn record_creates_then_increments() {
        let table = table_of(&["alpha", "alpha", "beta"]);
        assert_eq!(table.count("alpha"), 2);
        assert_eq!(table.count("beta"), 1);
        assert_eq!(table.count("gamma"), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn top_orders_by_count_descending() {
        let table = table_of(&["a", "b", "b", "c", "c", "c"]);
        assert_eq!(table.top(3), vec!["c", "b", "a"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let table = table_of(&["zebra", "apple", "mango"]);
        assert_eq!(table.top(3), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn tie_break_uses_first_occurrence_not_last() {
        // "y" reaches two first, but "x" was seen first.
        let table = table_of(&["x", "y", "y", "x"]);
        assert_eq!(table.top(2), vec!["x", "y"]);
    }

    #[test]
    fn top_truncates_to_requested_length() {
        let table = table_of(&["a", "b", "c", "d", "e"]);
        assert_eq!(table.top(3), vec!["a", "b", "c"]);
        assert_eq!(table.top(0), Vec::<String>::new());
    }

    #[test]
    fn top_returns_fewer_when_table_is_small() {
        let table = table_of(&["only"]);
        assert_eq!(table.top(3), vec!["only"]);
    }
}
