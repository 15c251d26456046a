//! Explicit-stack depth-first walks over the node arena.
//!
//! The stack is LIFO, so the order children are pushed in is the reverse of
//! the order they are visited in: pushing the descending alphabet view visits
//! children smallest first, pushing the ascending view visits them largest
//! first. A key sorts before all of its extensions, so an ascending walk
//! yields a terminal node as soon as its frame is popped while a descending
//! walk parks an emit frame underneath the node's children and yields it
//! after the whole subtree.

use crate::alphabet::Alphabet;
use crate::node::{NodeArena, NodeId};

/// Lexicographic direction of a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    #[inline]
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// State carried from a node to its children during a walk.
///
/// `String` accumulates the key of every frame; `()` is used by walks that
/// only need node handles.
pub(crate) trait Trail: Clone {
    fn extend(&self, ch: char) -> Self;
}

impl Trail for String {
    #[inline]
    fn extend(&self, ch: char) -> Self {
        let mut key = String::with_capacity(self.len() + ch.len_utf8());
        key.push_str(self);
        key.push(ch);
        key
    }
}

impl Trail for () {
    #[inline]
    fn extend(&self, _ch: char) -> Self {}
}

enum Frame<T> {
    /// Node not yet expanded.
    Visit(NodeId, T),
    /// Terminal node whose subtree was already pushed (descending walks).
    Emit(NodeId, T),
}

/// Lazy walk yielding terminal nodes of one subtree in key order.
pub(crate) struct Walk<'a, V, T> {
    nodes: &'a NodeArena<V>,
    alphabet: &'a Alphabet,
    direction: Direction,
    stack: Vec<Frame<T>>,
}

impl<'a, V, T: Trail> Walk<'a, V, T> {
    pub(crate) fn new(
        nodes: &'a NodeArena<V>,
        alphabet: &'a Alphabet,
        direction: Direction,
        seed: NodeId,
        trail: T,
    ) -> Self {
        Self {
            nodes,
            alphabet,
            direction,
            stack: vec![Frame::Visit(seed, trail)],
        }
    }

    /// A walk that yields nothing.
    pub(crate) fn empty(nodes: &'a NodeArena<V>, alphabet: &'a Alphabet, direction: Direction) -> Self {
        Self {
            nodes,
            alphabet,
            direction,
            stack: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn nodes(&self) -> &'a NodeArena<V> {
        self.nodes
    }

    fn push_children(&mut self, id: NodeId, trail: &T) {
        let node = self.nodes.get(id);
        if !node.has_children() {
            return;
        }
        let order = match self.direction {
            Direction::Ascending => self.alphabet.descending(),
            Direction::Descending => self.alphabet.ascending(),
        };
        for &ch in order {
            if let Some(child) = node.child(ch) {
                self.stack.push(Frame::Visit(child, trail.extend(ch)));
            }
        }
    }
}

impl<V, T: Trail> Iterator for Walk<'_, V, T> {
    type Item = (NodeId, T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            let (id, trail) = match frame {
                Frame::Emit(id, trail) => return Some((id, trail)),
                Frame::Visit(id, trail) => (id, trail),
            };
            let terminal = self.nodes.get(id).is_terminal();
            match self.direction {
                Direction::Ascending => {
                    self.push_children(id, &trail);
                    if terminal {
                        return Some((id, trail));
                    }
                }
                Direction::Descending => {
                    if terminal {
                        self.stack.push(Frame::Emit(id, trail.clone()));
                    }
                    self.push_children(id, &trail);
                }
            }
        }
        None
    }
}

/// Least terminal node in the subtree of `id`, `id` itself included.
pub(crate) fn subtree_min<V>(nodes: &NodeArena<V>, alphabet: &Alphabet, id: NodeId) -> Option<NodeId> {
    Walk::new(nodes, alphabet, Direction::Ascending, id, ())
        .next()
        .map(|(id, ())| id)
}

/// Greatest terminal node in the subtree of `id`, `id` itself included.
pub(crate) fn subtree_max<V>(nodes: &NodeArena<V>, alphabet: &Alphabet, id: NodeId) -> Option<NodeId> {
    Walk::new(nodes, alphabet, Direction::Descending, id, ())
        .next()
        .map(|(id, ())| id)
}

/// Ordered iterator over every stored key, see [`Trie::iter`](crate::Trie::iter).
pub struct Iter<'a, V> {
    walk: Walk<'a, V, String>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(walk: Walk<'a, V, String>) -> Self {
        Self { walk }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a [V]);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, key) = self.walk.next()?;
        Some((key, self.walk.nodes().get(id).values()))
    }
}
