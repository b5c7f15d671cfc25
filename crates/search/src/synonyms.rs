//! Synonym expansion for help search.
//!
//! An entry `word -> [a, b, c]` links all four words: querying any of them
//! pulls in the others. Expansion is a single hop; expanded words are not
//! expanded again.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Word association table, keyed by canonical word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct SynonymTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl From<BTreeMap<String, Vec<String>>> for SynonymTable {
    fn from(entries: BTreeMap<String, Vec<String>>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<SynonymTable> for BTreeMap<String, Vec<String>> {
    fn from(table: SynonymTable) -> Self {
        table.entries
    }
}

impl<K, V, W> FromIterator<(K, V)> for SynonymTable
where
    K: AsRef<str>,
    V: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, words) in iter {
            let slot = entries.entry(key.as_ref().trim().to_lowercase()).or_default();
            for word in words {
                let word = word.as_ref().trim().to_lowercase();
                if !slot.contains(&word) {
                    slot.push(word);
                }
            }
        }
        Self { entries }
    }
}

impl SynonymTable {
    /// Empty table; expansion becomes the identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Related words declared for `word` as a key.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grows `tokens` with related vocabulary.
    ///
    /// For each token: its own value list if it is a key, plus the key and
    /// whole value list of every entry that lists it. The result holds the
    /// original tokens first and contains no duplicates.
    pub fn expand(&self, tokens: &[String]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut expanded: Vec<String> = Vec::with_capacity(tokens.len());

        for token in tokens {
            push_unique(token, &mut seen, &mut expanded);
        }

        for token in tokens {
            if let Some(related) = self.entries.get(token.as_str()) {
                for word in related {
                    push_unique(word, &mut seen, &mut expanded);
                }
            }

            for (key, related) in &self.entries {
                if related.iter().any(|w| w == token) {
                    push_unique(key, &mut seen, &mut expanded);
                    for word in related {
                        push_unique(word, &mut seen, &mut expanded);
                    }
                }
            }
        }

        expanded
    }
}

fn push_unique<'a>(word: &'a str, seen: &mut HashSet<&'a str>, out: &mut Vec<String>) {
    if seen.insert(word) {
        out.push(word.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn table() -> SynonymTable {
        SynonymTable::from_iter([
            ("pay", vec!["wallet", "cash"]),
            ("trip", vec!["ride", "journey"]),
        ])
    }

    #[test]
    fn test_forward_lookup() {
        let expanded = table().expand(&words(&["pay"]));
        assert_eq!(expanded, words(&["pay", "wallet", "cash"]));
    }

    #[test]
    fn test_reverse_lookup() {
        let expanded = table().expand(&words(&["cash"]));
        assert!(expanded.contains(&"pay".to_string()));
        assert!(expanded.contains(&"wallet".to_string()));
        assert_eq!(expanded.len(), 3);
    }

    #[test]
    fn test_not_transitive() {
        let table = SynonymTable::from_iter([("money", vec!["cash"]), ("cash", vec!["fare"])]);
        let expanded = table.expand(&words(&["money"]));
        assert_eq!(expanded, words(&["money", "cash"]));
    }

    #[test]
    fn test_unrelated_token_untouched() {
        let expanded = table().expand(&words(&["rating", "rating"]));
        assert_eq!(expanded, words(&["rating"]));
    }

    #[test]
    fn test_lowercases_on_load() {
        let table = SynonymTable::from_iter([("GPS", vec![" Maps "])]);
        assert_eq!(table.get("gps"), Some(&["maps".to_string()][..]));
    }
}
