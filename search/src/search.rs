//! Search entry point and expansion loop.

use std::hash::Hash;

use crate::contract::{FnProblem, SearchProblem};
use crate::cost::Cost;
use crate::error::SearchError;
use crate::frontier::{CostFrontier, Popped};
use crate::policy::{CostCheck, DedupMode, GoalTest, SearchPolicy, VisitedLogPolicy};
use crate::report::{SearchStats, TerminationReason};
use crate::visited::VisitedSet;

/// How a search that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<S, R> {
    /// A goal state was reached.
    Found(S),
    /// The frontier emptied; carries the exhaustion handler's result.
    Exhausted(R),
}

impl<S, R> Outcome<S, R> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub fn found(&self) -> Option<&S> {
        match self {
            Self::Found(s) => Some(s),
            Self::Exhausted(_) => None,
        }
    }

    pub fn into_found(self) -> Option<S> {
        match self {
            Self::Found(s) => Some(s),
            Self::Exhausted(_) => None,
        }
    }
}

/// Result of a search execution.
#[derive(Debug)]
pub struct SearchResult<S, C, R> {
    pub outcome: Outcome<S, R>,
    /// Accumulated path cost at which the goal was discovered (zero when the
    /// start is the goal). `None` on exhaustion.
    pub goal_cost: Option<C>,
    pub stats: SearchStats,
}

impl<S, C, R> SearchResult<S, C, R> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.outcome.is_found()
    }

    /// The goal state, discarding stats and any exhaustion result.
    pub fn into_goal(self) -> Option<S> {
        self.outcome.into_found()
    }
}

/// Run lazy uniform-cost search from `start`.
///
/// The start is goal-tested before anything is pushed. Under
/// [`GoalTest::OnGeneration`] each fresh successor is tested as it is
/// created and returned immediately if it satisfies the goal; under
/// [`GoalTest::OnExpansion`] each state is tested once, when popped. With
/// dedup on, a successor whose unique id has already been expanded is
/// skipped before its goal test.
///
/// `on_exhausted` is called exactly once, and only if the frontier empties,
/// with every expanded state in pop order (empty under
/// [`VisitedLogPolicy::Discard`]).
///
/// # Errors
///
/// Returns [`SearchError::Collaborator`] with the problem's error untouched
/// if `is_goal`, `expand` or `unique_id` fail, and
/// [`SearchError::InvalidCost`] for a negative or NaN edge cost under
/// [`CostCheck::Reject`].
pub fn search<P, R, H>(
    start: P::State,
    problem: &P,
    policy: &SearchPolicy,
    on_exhausted: H,
) -> Result<SearchResult<P::State, P::Cost, R>, SearchError<P::Error>>
where
    P: SearchProblem,
    H: FnOnce(Vec<P::State>) -> R,
{
    let mut stats = SearchStats::new();
    tracing::debug!(?policy, "search started");

    if problem.is_goal(&start).map_err(SearchError::Collaborator)? {
        stats.termination = TerminationReason::StartIsGoal;
        tracing::debug!("start state satisfies the goal; nothing expanded");
        return Ok(SearchResult {
            outcome: Outcome::Found(start),
            goal_cost: Some(P::Cost::zero()),
            stats,
        });
    }

    let dedup = policy.dedup == DedupMode::ByUniqueId;
    let test_on_pop = policy.goal_test == GoalTest::OnExpansion;
    let mut frontier = CostFrontier::new();
    let mut visited = VisitedSet::new();
    let mut log = Vec::new();
    frontier.push(P::Cost::zero(), start);

    while let Some(Popped { key, state: node }) = frontier.pop() {
        if dedup {
            let id = problem.unique_id(&node).map_err(SearchError::Collaborator)?;
            if !visited.mark(id) {
                // Pushed twice before its first pop; the cheaper copy was
                // already expanded.
                stats.duplicates_suppressed += 1;
                tracing::trace!(creation_order = key.creation_order, "stale entry dropped");
                continue;
            }
        }

        // The start was already tested above.
        if test_on_pop
            && key.creation_order > 0
            && problem.is_goal(&node).map_err(SearchError::Collaborator)?
        {
            let order = key.creation_order;
            return Ok(goal_reached(node, key.cost, order, stats, &frontier));
        }

        let expansion = stats.expansions;
        stats.expansions += 1;
        tracing::trace!(
            expansion,
            creation_order = key.creation_order,
            cost = ?key.cost,
            "expanding"
        );

        let mut dead_end = true;
        for (child, edge) in problem.expand(&node).map_err(SearchError::Collaborator)? {
            dead_end = false;
            stats.successors_generated += 1;

            if policy.cost_check == CostCheck::Reject && !edge.is_valid_edge() {
                tracing::debug!(expansion, edge = ?edge, "rejecting invalid edge cost");
                return Err(SearchError::InvalidCost {
                    cost: format!("{edge:?}"),
                    expansion,
                });
            }

            if dedup {
                let child_id = problem
                    .unique_id(&child)
                    .map_err(SearchError::Collaborator)?;
                if visited.contains(&child_id) {
                    stats.duplicates_suppressed += 1;
                    tracing::trace!(expansion, "visited successor skipped");
                    continue;
                }
            }

            let child_cost = key.cost.accumulate(edge);
            if !test_on_pop && problem.is_goal(&child).map_err(SearchError::Collaborator)? {
                let order = frontier.pushes();
                return Ok(goal_reached(child, child_cost, order, stats, &frontier));
            }

            frontier.push(child_cost, child);
        }

        if dead_end {
            stats.dead_ends += 1;
        }
        if policy.visited_log == VisitedLogPolicy::Keep {
            log.push(node);
        }
    }

    stats.termination = TerminationReason::FrontierExhausted;
    finish(&mut stats, &frontier);
    tracing::debug!(
        expansions = stats.expansions,
        visited = visited.len(),
        "frontier exhausted without reaching a goal"
    );

    Ok(SearchResult {
        outcome: Outcome::Exhausted(on_exhausted(log)),
        goal_cost: None,
        stats,
    })
}

fn finish<S, C: Cost>(stats: &mut SearchStats, frontier: &CostFrontier<S, C>) {
    stats.frontier_pushes = frontier.pushes();
    stats.frontier_high_water = frontier.high_water();
}

fn goal_reached<S, C: Cost, R>(
    goal: S,
    cost: C,
    creation_order: u64,
    mut stats: SearchStats,
    frontier: &CostFrontier<S, C>,
) -> SearchResult<S, C, R> {
    stats.termination = TerminationReason::GoalReached { creation_order };
    finish(&mut stats, frontier);
    tracing::debug!(expansions = stats.expansions, cost = ?cost, "goal reached");
    SearchResult {
        outcome: Outcome::Found(goal),
        goal_cost: Some(cost),
        stats,
    }
}

/// Uniform-cost search over plain closures, states as their own identity.
///
/// Returns the first goal state found, or `None` if none is reachable.
pub fn ucs<S, C, I, G, X>(start: S, is_goal: G, expand: X) -> Option<S>
where
    S: Clone + Eq + Hash,
    C: Cost,
    G: Fn(&S) -> bool,
    X: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    let problem = FnProblem::new(is_goal, expand);
    search(start, &problem, &discarding_policy(), |_| ())
        .ok()
        .and_then(SearchResult::into_goal)
}

/// Uniform-cost search over plain closures with a custom identity.
///
/// States that map to the same key are treated as the same state.
pub fn ucs_by_key<S, C, I, K, G, X, U>(
    start: S,
    is_goal: G,
    expand: X,
    unique_id: U,
) -> Option<S>
where
    C: Cost,
    K: Eq + Hash,
    G: Fn(&S) -> bool,
    X: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    U: Fn(&S) -> K,
{
    let problem = FnProblem::keyed(is_goal, expand, unique_id);
    search(start, &problem, &discarding_policy(), |_| ())
        .ok()
        .and_then(SearchResult::into_goal)
}

fn discarding_policy() -> SearchPolicy {
    SearchPolicy {
        visited_log: VisitedLogPolicy::Discard,
        ..SearchPolicy::default()
    }
}
