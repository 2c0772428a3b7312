//! Search policy types.

/// Engine configuration.
///
/// The default policy is the unified engine: dedup by unique id, goal test
/// on generation, edge costs trusted, the visited log kept for the
/// exhaustion handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Duplicate-state suppression.
    pub dedup: DedupMode,
    /// When successors are tested against the goal.
    pub goal_test: GoalTest,
    /// Edge cost validation.
    pub cost_check: CostCheck,
    /// Whether popped states are retained for the exhaustion handler.
    pub visited_log: VisitedLogPolicy,
}

impl SearchPolicy {
    /// The historical non-deduplicating variant: every successor is novel.
    ///
    /// Only terminates on acyclic graphs or when `expand` bounds the search
    /// itself.
    #[must_use]
    pub fn without_dedup() -> Self {
        Self {
            dedup: DedupMode::Off,
            ..Self::default()
        }
    }

    /// Default policy with the goal test deferred to pop time, which makes
    /// the returned goal cost minimal on every non-negative graph.
    #[must_use]
    pub fn optimal() -> Self {
        Self {
            goal_test: GoalTest::OnExpansion,
            ..Self::default()
        }
    }

    /// Default policy with negative or NaN edge costs rejected.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            cost_check: CostCheck::Reject,
            ..Self::default()
        }
    }
}

/// How successors are checked against previously expanded states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupMode {
    /// Skip any successor whose unique id has already been expanded.
    #[default]
    ByUniqueId,
    /// No visited set; `unique_id` is never called.
    Off,
}

/// When the goal predicate is applied to a successor.
///
/// The start state is always tested before anything is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalTest {
    /// Test each fresh successor as it is generated and return it at once.
    /// Never re-tested once enqueued. A goal generated through an expensive
    /// edge can win over a cheaper path still in the frontier.
    #[default]
    OnGeneration,
    /// Test each state once, when it is popped. Returns a minimum-cost goal.
    OnExpansion,
}

/// What to do with an edge cost that is negative or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostCheck {
    /// Push it anyway. Optimality is no longer guaranteed.
    #[default]
    Unchecked,
    /// Abort with [`crate::error::SearchError::InvalidCost`].
    Reject,
}

/// Retention of expanded states for the exhaustion handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitedLogPolicy {
    /// Every expanded state is moved into the log in pop order.
    #[default]
    Keep,
    /// Expanded states are dropped; the handler receives an empty log.
    Discard,
}
