use std::collections::HashMap;

// =============================================================================
// Node handle
// =============================================================================

/// Handle of a node inside a [`NodeArena`].
///
/// Nodes are never freed on their own, so a handle stays valid for the
/// lifetime of the arena that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// Node
// =============================================================================

#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    children: HashMap<char, NodeId>,
    /// Non-owning link one edge closer to the root. `None` for the root.
    parent: Option<NodeId>,
    /// Label of the edge from `parent`. `None` for the root.
    edge: Option<char>,
    terminal: bool,
    values: Vec<V>,
}

impl<V> Node<V> {
    fn new(parent: Option<NodeId>, edge: Option<char>) -> Self {
        Self {
            children: HashMap::new(),
            parent,
            edge,
            terminal: false,
            values: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn child(&self, ch: char) -> Option<NodeId> {
        self.children.get(&ch).copied()
    }

    #[inline]
    pub(crate) fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[inline]
    pub(crate) fn values(&self) -> &[V] {
        &self.values
    }

    pub(crate) fn push_value(&mut self, value: V) {
        self.values.push(value);
        self.terminal = true;
    }

    /// Drops every value matching `should_delete` in one pass and returns how
    /// many were dropped. A node left without values stops being terminal.
    pub(crate) fn retain_values<F>(&mut self, mut should_delete: F) -> usize
    where
        F: FnMut(&V) -> bool,
    {
        let before = self.values.len();
        self.values.retain(|v| !should_delete(v));
        if self.values.is_empty() {
            self.terminal = false;
        }
        before - self.values.len()
    }
}

// =============================================================================
// Arena
// =============================================================================

/// Owns every node of a trie. Slot 0 is the root and always exists.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<V> {
    nodes: Vec<Node<V>>,
}

impl<V> NodeArena<V> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::new(None, None)],
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<V> {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the child of `parent` along `ch`, creating it if missing.
    pub(crate) fn child_or_insert(&mut self, parent: NodeId, ch: char) -> NodeId {
        if let Some(id) = self.get(parent).child(ch) {
            return id;
        }
        let id = NodeId(u32::try_from(self.nodes.len()).expect("trie node count exceeds u32"));
        self.nodes.push(Node::new(Some(parent), Some(ch)));
        self.get_mut(parent).children.insert(ch, id);
        id
    }

    /// Follows `key` along existing edges only.
    pub(crate) fn descend<I>(&self, from: NodeId, key: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = from;
        for ch in key {
            current = self.get(current).child(ch)?;
        }
        Some(current)
    }

    /// Rebuilds the key of `id` by walking parent links up to the root.
    pub(crate) fn key_of(&self, id: NodeId) -> String {
        let mut edges = Vec::new();
        let mut current = self.get(id);
        while let (Some(parent), Some(edge)) = (current.parent, current.edge) {
            edges.push(edge);
            current = self.get(parent);
        }
        edges.iter().rev().collect()
    }
}
