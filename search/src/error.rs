//! Typed search errors.
//!
//! Exhaustion is not an error: it is reported through
//! [`crate::search::Outcome::Exhausted`]. `SearchError` covers only
//! failures that abort a search midway.

/// Failure that aborted a search.
///
/// `E` is the problem's own error type. It is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError<E> {
    /// `is_goal`, `expand` or `unique_id` returned an error.
    Collaborator(E),
    /// An edge cost was negative or NaN under `CostCheck::Reject`.
    InvalidCost {
        /// `Debug` rendering of the offending edge cost.
        cost: String,
        /// 0-based index of the expansion that produced it.
        expansion: u64,
    },
}

impl<E> SearchError<E> {
    /// The collaborator's error, if that is what aborted the search.
    pub fn into_collaborator(self) -> Option<E> {
        match self {
            Self::Collaborator(e) => Some(e),
            Self::InvalidCost { .. } => None,
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for SearchError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collaborator(e) => write!(f, "search collaborator failed: {e}"),
            Self::InvalidCost { cost, expansion } => {
                write!(f, "invalid edge cost {cost} in expansion {expansion}")
            }
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for SearchError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Collaborator(e) => Some(e),
            Self::InvalidCost { .. } => None,
        }
    }
}
