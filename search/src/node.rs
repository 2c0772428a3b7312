//! Frontier ordering key.

use std::cmp::Ordering;

use crate::cost::Cost;

/// The frontier ordering key: `(cost, creation_order)`.
///
/// Lower accumulated cost first; ties broken by older `creation_order`
/// (insertion sequence), so equal-cost entries pop FIFO and the states
/// themselves are never compared.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey<C> {
    pub cost: C,
    pub creation_order: u64,
}

impl<C: Cost> PartialEq for FrontierKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Cost> Eq for FrontierKey<C> {}

impl<C: Cost> PartialOrd for FrontierKey<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Cost> Ord for FrontierKey<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp_cost(&other.cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
