//! Paginated prefix/substring search.

use crate::node::NodeId;
use crate::traversal::{Direction, Walk};
use crate::Trie;

/// Parameters of [`Trie::search`].
///
/// `limit: None` collects every match. Non-matching keys are not counted
/// against `skip`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    pub skip: usize,
    pub limit: Option<usize>,
    pub prefix: Option<String>,
    pub contains: Option<String>,
    pub reverse: bool,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn contains(mut self, needle: impl Into<String>) -> Self {
        self.contains = Some(needle.into());
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// One key returned by [`Trie::search`] with every value attached to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit<'a, V> {
    pub key: String,
    pub values: &'a [V],
}

impl<V> Trie<V> {
    pub fn search(&self, options: &SearchOptions) -> Vec<SearchHit<'_, V>> {
        let direction = Direction::from_reverse(options.reverse);
        let walk = match options.prefix.as_deref() {
            Some(prefix) => {
                let prefix = self.config.fold(prefix);
                match self.nodes.descend(NodeId::ROOT, prefix.chars()) {
                    Some(seed) => self.walk(direction, seed, prefix),
                    None => Walk::empty(&self.nodes, &self.alphabet, direction),
                }
            }
            None => self.walk(direction, NodeId::ROOT, String::new()),
        };
        let needle = options.contains.as_deref().map(|s| self.config.fold(s));
        let limit = options.limit.unwrap_or(usize::MAX);

        let hits: Vec<SearchHit<'_, V>> = walk
            .filter(|(_, key)| needle.as_deref().map_or(true, |n| key.contains(n)))
            .skip(options.skip)
            .take(limit)
            .map(|(id, key)| SearchHit {
                key,
                values: self.nodes.get(id).values(),
            })
            .collect();

        tracing::trace!(
            skip = options.skip,
            limit = ?options.limit,
            prefix = ?options.prefix,
            contains = ?options.contains,
            reverse = options.reverse,
            hits = hits.len(),
            "trie search"
        );
        hits
    }
}
