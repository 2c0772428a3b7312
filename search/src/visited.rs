//! Monotone visited set keyed by caller-supplied unique ids.

use std::collections::HashSet;
use std::hash::Hash;

/// Unique ids of every state that has been popped and expanded.
///
/// Only grows. Membership is all the engine ever asks of it, so iteration
/// order is irrelevant and a `HashSet` suffices.
#[derive(Debug)]
pub struct VisitedSet<K> {
    ids: HashSet<K>,
}

impl<K: Eq + Hash> VisitedSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }

    /// Mark an id as visited.
    ///
    /// Returns `false` if the id was already present.
    pub fn mark(&mut self, id: K) -> bool {
        self.ids.insert(id)
    }

    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<K: Eq + Hash> Default for VisitedSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
