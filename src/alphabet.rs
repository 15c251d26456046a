/// Every distinct character seen across inserted keys.
///
/// Kept as two sorted views so traversals can push children in either order
/// and the neighbor finder can binary-search for "everything after `ch`" in
/// either direction. `descending` is always the exact reverse of `ascending`.
/// The alphabet only grows: removing keys never drops a character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    ascending: Vec<char>,
    descending: Vec<char>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ascending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ascending.is_empty()
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.ascending.binary_search(&ch).is_ok()
    }

    /// Adds `ch` at its sorted position in both views. Returns `false` if it
    /// was already present.
    pub fn insert(&mut self, ch: char) -> bool {
        let at = match self.ascending.binary_search(&ch) {
            Ok(_) => return false,
            Err(at) => at,
        };
        // Mirror position in the descending view, computed before growing.
        let mirrored = self.ascending.len() - at;
        self.ascending.insert(at, ch);
        self.descending.insert(mirrored, ch);
        debug_assert!(self.ascending.iter().eq(self.descending.iter().rev()));
        true
    }

    #[inline]
    pub fn ascending(&self) -> &[char] {
        &self.ascending
    }

    #[inline]
    pub fn descending(&self) -> &[char] {
        &self.descending
    }

    /// Characters strictly greater than `ch`, smallest first.
    ///
    /// `ch` does not have to be part of the alphabet.
    pub fn greater_than(&self, ch: char) -> &[char] {
        let start = self.ascending.partition_point(|&c| c <= ch);
        &self.ascending[start..]
    }

    /// Characters strictly less than `ch`, greatest first.
    pub fn less_than(&self, ch: char) -> &[char] {
        let start = self.descending.partition_point(|&c| c >= ch);
        &self.descending[start..]
    }
}
