//! Preorder predecessor/successor lookup.
//!
//! Neither direction sorts the stored keys. The query key is followed down
//! from the root while recording, per level, the node the edge leaves from
//! and the character taken (or found missing). Candidates are then searched
//! from the deepest level upwards: the alphabet is binary-searched for the
//! characters strictly before or after the recorded one, and the first
//! sibling edge present leads to a subtree whose extremum is the answer.

use crate::node::{NodeArena, NodeId};
use crate::traversal::{subtree_max, subtree_min};
use crate::Trie;

/// A stored key adjacent to a query key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighbor<'a, V> {
    pub key: String,
    pub values: &'a [V],
}

/// Closest stored keys on either side of a query key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighbors<'a, V> {
    pub predecessor: Option<Neighbor<'a, V>>,
    pub successor: Option<Neighbor<'a, V>>,
}

impl<'a, V> Neighbors<'a, V> {
    pub fn predecessor_values(&self) -> Option<&'a [V]> {
        self.predecessor.as_ref().map(|n| n.values)
    }

    pub fn successor_values(&self) -> Option<&'a [V]> {
        self.successor.as_ref().map(|n| n.values)
    }
}

#[derive(Clone, Copy, Debug)]
struct DescentFrame {
    /// Node the edge leaves from.
    node: NodeId,
    /// Character of the query key at this depth.
    ch: char,
}

struct Descent {
    frames: Vec<DescentFrame>,
    /// Node of the whole query key, if every edge exists.
    reached: Option<NodeId>,
}

fn descend<V>(nodes: &NodeArena<V>, key: &str) -> Descent {
    let mut frames = Vec::new();
    let mut current = NodeId::ROOT;
    for ch in key.chars() {
        frames.push(DescentFrame { node: current, ch });
        match nodes.get(current).child(ch) {
            Some(next) => current = next,
            None => {
                return Descent {
                    frames,
                    reached: None,
                }
            }
        }
    }
    Descent {
        frames,
        reached: Some(current),
    }
}

impl<V> Trie<V> {
    /// Neighbors of a key that is about to be inserted: the stored keys it
    /// would sit between.
    pub fn neighbors_for_new_key(&self, key: &str) -> Neighbors<'_, V> {
        let key = self.config.fold(key);
        self.neighbors(&key)
    }

    /// Neighbors of a stored key. The key itself is never returned.
    pub fn neighbors_for_existing_key(&self, key: &str) -> Neighbors<'_, V> {
        let key = self.config.fold(key);
        if self.find_folded(&key).is_none() {
            tracing::debug!(key = %key, "neighbor query for a key that is not stored");
        }
        self.neighbors(&key)
    }

    fn neighbors(&self, key: &str) -> Neighbors<'_, V> {
        let descent = descend(&self.nodes, key);
        Neighbors {
            predecessor: self.predecessor(&descent).map(|id| self.neighbor(id)),
            successor: self.successor(&descent).map(|id| self.neighbor(id)),
        }
    }

    fn neighbor(&self, id: NodeId) -> Neighbor<'_, V> {
        Neighbor {
            key: self.nodes.key_of(id),
            values: self.nodes.get(id).values(),
        }
    }

    fn predecessor(&self, descent: &Descent) -> Option<NodeId> {
        for frame in descent.frames.iter().rev() {
            let node = self.nodes.get(frame.node);
            let sibling = self
                .alphabet
                .less_than(frame.ch)
                .iter()
                .filter_map(|&ch| node.child(ch))
                .find_map(|child| subtree_max(&self.nodes, &self.alphabet, child));
            if sibling.is_some() {
                return sibling;
            }
            // An ancestor key sorts right before every key below it.
            if node.is_terminal() {
                return Some(frame.node);
            }
        }
        None
    }

    fn successor(&self, descent: &Descent) -> Option<NodeId> {
        if let Some(reached) = descent.reached {
            // Skip the key's own node: only strictly greater keys qualify.
            let node = self.nodes.get(reached);
            let below = self
                .alphabet
                .ascending()
                .iter()
                .filter_map(|&ch| node.child(ch))
                .find_map(|child| subtree_min(&self.nodes, &self.alphabet, child));
            if below.is_some() {
                return below;
            }
        }
        descent.frames.iter().rev().find_map(|frame| {
            let node = self.nodes.get(frame.node);
            self.alphabet
                .greater_than(frame.ch)
                .iter()
                .filter_map(|&ch| node.child(ch))
                .find_map(|child| subtree_min(&self.nodes, &self.alphabet, child))
        })
    }
}
