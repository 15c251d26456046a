//! Trie configuration.

/// Options fixed when a [`Trie`](crate::Trie) is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrieConfig {
    /// Lower-case every key before it is inserted, looked up, removed,
    /// searched for or used as a neighbor query.
    pub case_fold: bool,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self { case_fold: true }
    }
}

impl TrieConfig {
    pub fn case_fold(mut self, case_fold: bool) -> Self {
        self.case_fold = case_fold;
        self
    }

    /// Applies the configured folding to a caller-supplied key.
    pub(crate) fn fold(&self, key: &str) -> String {
        // Per-char folding: `str::to_lowercase` picks final sigma by context,
        // which would fold a prefix differently from the same chars in a key.
        if self.case_fold {
            key.chars().flat_map(char::to_lowercase).collect()
        } else {
            key.to_owned()
        }
    }
}
