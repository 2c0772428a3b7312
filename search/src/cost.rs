//! Path cost arithmetic.
//!
//! The engine never assumes a concrete numeric type for edge costs. Integer
//! costs accumulate with saturating addition so a long path cannot wrap
//! around to a cheap one; floating costs order by `total_cmp` so a stray NaN
//! cannot poison the heap.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A non-negative, totally ordered, additive edge/path cost.
pub trait Cost: Copy + Debug {
    /// The cost of the empty path (the start state).
    fn zero() -> Self;

    /// Accumulate an edge cost onto a path cost.
    #[must_use]
    fn accumulate(self, edge: Self) -> Self;

    /// Total order used by the frontier.
    fn cmp_cost(&self, other: &Self) -> Ordering;

    /// Whether this value is acceptable as an edge cost (non-negative, not NaN).
    fn is_valid_edge(&self) -> bool;
}

macro_rules! unsigned_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            fn zero() -> Self {
                0
            }

            fn accumulate(self, edge: Self) -> Self {
                self.saturating_add(edge)
            }

            fn cmp_cost(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn is_valid_edge(&self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! signed_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            fn zero() -> Self {
                0
            }

            fn accumulate(self, edge: Self) -> Self {
                self.saturating_add(edge)
            }

            fn cmp_cost(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn is_valid_edge(&self) -> bool {
                *self >= 0
            }
        }
    )*};
}

macro_rules! float_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            fn zero() -> Self {
                0.0
            }

            fn accumulate(self, edge: Self) -> Self {
                self + edge
            }

            fn cmp_cost(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }

            // NaN compares false, so it is rejected here too. -0.0 is accepted.
            fn is_valid_edge(&self) -> bool {
                *self >= 0.0
            }
        }
    )*};
}

unsigned_cost!(u32, u64, usize);
signed_cost!(i32, i64);
float_cost!(f32, f64);
