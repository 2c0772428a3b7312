//! Min-cost frontier with deterministic tie-breaking.
//!
//! States are carried alongside their key but never inspected: only the
//! `FrontierKey` participates in heap ordering, so states need no `Ord`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::cost::Cost;
use crate::node::FrontierKey;

/// A frontier entry wrapping a state with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest cost first).
#[derive(Debug)]
struct FrontierEntry<S, C> {
    key: Reverse<FrontierKey<C>>,
    state: S,
}

impl<S, C: Cost> PartialEq for FrontierEntry<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, C: Cost> Eq for FrontierEntry<S, C> {}

impl<S, C: Cost> PartialOrd for FrontierEntry<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, C: Cost> Ord for FrontierEntry<S, C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// A state popped from the frontier together with the key it was stored under.
#[derive(Debug)]
pub struct Popped<S, C> {
    pub key: FrontierKey<C>,
    pub state: S,
}

/// Uniform-cost frontier.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the cheapest state
/// - A monotonic creation counter handed out on every push
/// - The high-water mark of the heap size
pub struct CostFrontier<S, C> {
    heap: BinaryHeap<FrontierEntry<S, C>>,
    next_creation_order: u64,
    high_water: u64,
}

impl<S, C: Cost> CostFrontier<S, C> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// Push a state at the given accumulated cost.
    ///
    /// Returns the creation order assigned to the entry.
    pub fn push(&mut self, cost: C, state: S) -> u64 {
        let creation_order = self.next_creation_order;
        self.next_creation_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey {
                cost,
                creation_order,
            }),
            state,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        creation_order
    }

    /// Pop the cheapest (then oldest) entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<Popped<S, C>> {
        self.heap.pop().map(|e| Popped {
            key: e.key.0,
            state: e.state,
        })
    }

    /// Key of the entry that would be popped next.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey<C>> {
        self.heap.peek().map(|e| e.key.0)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes so far.
    #[must_use]
    pub fn pushes(&self) -> u64 {
        self.next_creation_order
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<S, C: Cost> Default for CostFrontier<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
