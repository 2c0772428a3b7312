//! UCS Search: lazy uniform-cost search over implicit graphs.
//!
//! The caller supplies a start state, a goal test, an expansion function
//! yielding `(successor, edge_cost)` pairs, and optionally an identity
//! function for duplicate suppression. States are expanded cheapest-first
//! and only when popped. By default a goal is returned the moment it is
//! generated; [`SearchPolicy::optimal`] defers the goal test to pop time so
//! the returned goal is at the end of a minimum-cost path whenever edge
//! costs are non-negative.
//!
//! # Key types
//!
//! - [`SearchProblem`]: goal test, expansion and identity contract
//! - [`FnProblem`]: closure-backed `SearchProblem`
//! - [`SearchPolicy`]: dedup, goal-test timing, cost validation and visited-log configuration
//! - [`CostFrontier`]: min-cost frontier with FIFO tie-breaking
//! - [`SearchResult`]: outcome, goal cost and [`SearchStats`]
//!
//! # Example
//!
//! ```
//! use ucs_search::ucs;
//!
//! let edges = |n: &u32| vec![(n + 1, 1u64), (n * 2, 1u64)];
//! assert_eq!(ucs(1, |n| *n == 10, edges), Some(10));
//! ```

#![forbid(unsafe_code)]

pub mod contract;
pub mod cost;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
pub mod visited;

pub use contract::{FnProblem, SearchProblem};
pub use cost::Cost;
pub use error::SearchError;
pub use frontier::CostFrontier;
pub use policy::{CostCheck, DedupMode, GoalTest, SearchPolicy, VisitedLogPolicy};
pub use report::{SearchStats, TerminationReason};
pub use search::{search, ucs, ucs_by_key, Outcome, SearchResult};
