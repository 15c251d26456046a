//! # preorder-trie
//!
//! A character-keyed ordered trie mapping each key to a list of values.
//!
//! Beyond insert/find/remove it offers paginated prefix and substring search
//! in either lexicographic direction, and finds the preorder predecessor and
//! successor of any key (stored or not) without sorting the stored keys. Both
//! are driven by the trie's alphabet: every distinct character seen so far,
//! kept sorted in both directions.
//!
//! ## Example
//!
//! ```rust
//! use preorder_trie::{SearchOptions, Trie};
//!
//! let mut trie: Trie<u32> = Trie::new();
//! trie.insert("cat", 1);
//! trie.insert("car", 2);
//! trie.insert("dog", 3);
//!
//! assert_eq!(trie.find("cat"), Some(&[1][..]));
//!
//! let hits = trie.search(&SearchOptions::new().prefix("ca"));
//! let keys: Vec<&str> = hits.iter().map(|h| h.key.as_str()).collect();
//! assert_eq!(keys, ["car", "cat"]);
//!
//! let n = trie.neighbors_for_new_key("cas");
//! assert_eq!(n.predecessor_values(), Some(&[2][..]));
//! assert_eq!(n.successor_values(), Some(&[1][..]));
//! ```

#![forbid(unsafe_code)]

mod alphabet;
mod config;
mod neighbors;
mod node;
mod search;
mod traversal;

pub use alphabet::Alphabet;
pub use config::TrieConfig;
pub use neighbors::{Neighbor, Neighbors};
pub use search::{SearchHit, SearchOptions};
pub use traversal::{Direction, Iter};

use node::{NodeArena, NodeId};
use traversal::{Trail, Walk};

/// Ordered multimap from `char` strings to values.
///
/// - Keys are folded to lower case unless [`TrieConfig::case_fold`] is off.
/// - Inserting a key again appends another value instead of replacing.
/// - Removal only clears values; nodes are never pruned.
#[derive(Clone)]
pub struct Trie<V> {
    nodes: NodeArena<V>,
    alphabet: Alphabet,
    /// Inserts minus successful removes; counts operations, not keys.
    total_insertions: usize,
    config: TrieConfig,
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            nodes: NodeArena::new(),
            alphabet: Alphabet::new(),
            total_insertions: 0,
            config,
        }
    }

    /// Builds a trie by inserting every `(key, value)` pair in order.
    pub fn from_entries<K, I>(entries: I, config: TrieConfig) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut trie = Self::with_config(config);
        trie.extend(entries);
        trie
    }

    #[inline]
    pub fn config(&self) -> TrieConfig {
        self.config
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of `insert` calls minus successful `remove` calls.
    ///
    /// This is not the number of keys or values: a `remove` that drops
    /// several values, or none, still counts once.
    #[inline]
    pub fn total_insertions(&self) -> usize {
        self.total_insertions
    }

    /// Number of trie nodes, including the root and dead branches.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.walk(Direction::Ascending, NodeId::ROOT, String::new()))
    }

    pub fn iter_rev(&self) -> Iter<'_, V> {
        Iter::new(self.walk(Direction::Descending, NodeId::ROOT, String::new()))
    }

    pub(crate) fn walk<T: Trail>(&self, direction: Direction, seed: NodeId, trail: T) -> Walk<'_, V, T> {
        Walk::new(&self.nodes, &self.alphabet, direction, seed, trail)
    }
}

// =============================================================================
// Insert / find / remove
// =============================================================================

impl<V> Trie<V> {
    pub fn insert(&mut self, key: &str, value: V) {
        let key = self.config.fold(key);
        let mut current = NodeId::ROOT;
        for ch in key.chars() {
            if self.alphabet.insert(ch) {
                tracing::trace!(ch = %ch, alphabet_len = self.alphabet.len(), "alphabet grew");
            }
            current = self.nodes.child_or_insert(current, ch);
        }
        self.nodes.get_mut(current).push_value(value);
        self.total_insertions += 1;
    }

    pub fn find(&self, key: &str) -> Option<&[V]> {
        self.find_folded(&self.config.fold(key))
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub(crate) fn find_folded(&self, key: &str) -> Option<&[V]> {
        let node = self.nodes.get(self.nodes.descend(NodeId::ROOT, key.chars())?);
        if !node.is_terminal() {
            return None;
        }
        debug_assert!(!node.values().is_empty(), "terminal node without values");
        Some(node.values())
    }

    /// Drops the values of `key` for which `should_delete` returns true.
    ///
    /// Returns `false`, changing nothing, when `key` is not stored. Otherwise
    /// returns `true` and decrements [`total_insertions`](Self::total_insertions)
    /// once, however many values were dropped. A key left without values is
    /// no longer stored, but its node stays in the trie.
    pub fn remove<F>(&mut self, key: &str, should_delete: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        let key = self.config.fold(key);
        let id = match self.nodes.descend(NodeId::ROOT, key.chars()) {
            Some(id) if self.nodes.get(id).is_terminal() => id,
            _ => {
                tracing::debug!(key = %key, "remove: key not stored");
                return false;
            }
        };
        let node = self.nodes.get_mut(id);
        let removed = node.retain_values(should_delete);
        let remaining = node.values().len();
        self.total_insertions = self.total_insertions.saturating_sub(1);
        tracing::debug!(key = %key, removed, remaining, "remove");
        true
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for Trie<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter, TrieConfig::default())
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}


#[cfg(test)]
mod proptests;
