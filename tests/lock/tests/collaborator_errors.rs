//! Failure propagation: collaborator errors come back untouched, invalid
//! costs are rejected only when asked, and nothing of the caller's is
//! mutated.

use std::cell::Cell;
use std::fmt;

use ucs_search::{search, SearchError, SearchPolicy, SearchProblem};

#[derive(Debug, Clone, PartialEq, Eq)]
enum GridError {
    OutOfBounds(i32),
    Unhashable(i32),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(x) => write!(f, "cell {x} is out of bounds"),
            Self::Unhashable(x) => write!(f, "cell {x} has no identity"),
        }
    }
}

impl std::error::Error for GridError {}

/// A line of cells `0..=limit` where each step right costs 1. Expanding the
/// last cell fails, as does identifying `poisoned_id`.
struct Line {
    limit: i32,
    poisoned_id: Option<i32>,
    goal: i32,
    goal_calls: Cell<u32>,
}

impl Line {
    fn new(limit: i32, goal: i32) -> Self {
        Self {
            limit,
            poisoned_id: None,
            goal,
            goal_calls: Cell::new(0),
        }
    }
}

impl SearchProblem for Line {
    type State = i32;
    type Id = i32;
    type Cost = i64;
    type Error = GridError;
    type Successors = Vec<(i32, i64)>;

    fn is_goal(&self, state: &i32) -> Result<bool, GridError> {
        self.goal_calls.set(self.goal_calls.get() + 1);
        Ok(*state == self.goal)
    }

    fn expand(&self, state: &i32) -> Result<Vec<(i32, i64)>, GridError> {
        if *state >= self.limit {
            return Err(GridError::OutOfBounds(*state));
        }
        Ok(vec![(state + 1, 1)])
    }

    fn unique_id(&self, state: &i32) -> Result<i32, GridError> {
        if Some(*state) == self.poisoned_id {
            return Err(GridError::Unhashable(*state));
        }
        Ok(*state)
    }
}

#[test]
fn expand_error_propagates_unchanged() {
    let line = Line::new(3, 99);

    let err = search(0, &line, &SearchPolicy::default(), |_| ()).unwrap_err();

    assert_eq!(err, SearchError::Collaborator(GridError::OutOfBounds(3)));
    assert_eq!(err.to_string(), "search collaborator failed: cell 3 is out of bounds");
}

#[test]
fn unique_id_error_propagates_unchanged() {
    let mut line = Line::new(10, 99);
    line.poisoned_id = Some(2);

    let err = search(0, &line, &SearchPolicy::default(), |_| ()).unwrap_err();

    assert_eq!(err.into_collaborator(), Some(GridError::Unhashable(2)));
}

#[test]
fn unique_id_is_never_called_without_dedup() {
    let mut line = Line::new(10, 5);
    line.poisoned_id = Some(2);

    let result = search(0, &line, &SearchPolicy::without_dedup(), |_| ()).unwrap();

    assert_eq!(result.into_goal(), Some(5));
}

#[test]
fn goal_found_before_failing_expansion() {
    let line = Line::new(3, 3);

    let result = search(0, &line, &SearchPolicy::default(), |_| ()).unwrap();

    assert_eq!(result.goal_cost, Some(3));
    assert_eq!(result.into_goal(), Some(3));
    assert_eq!(line.goal_calls.get(), 4, "start plus three successors");
}

struct NegativeEdges;

impl SearchProblem for NegativeEdges {
    type State = u8;
    type Id = u8;
    type Cost = f64;
    type Error = GridError;
    type Successors = Vec<(u8, f64)>;

    fn is_goal(&self, state: &u8) -> Result<bool, GridError> {
        Ok(*state == 2)
    }

    fn expand(&self, state: &u8) -> Result<Vec<(u8, f64)>, GridError> {
        Ok(match state {
            0 => vec![(1, 0.5)],
            1 => vec![(2, -0.25)],
            _ => vec![],
        })
    }

    fn unique_id(&self, state: &u8) -> Result<u8, GridError> {
        Ok(*state)
    }
}

#[test]
fn negative_cost_rejected_under_strict_policy() {
    let err = search(0, &NegativeEdges, &SearchPolicy::strict(), |_| ()).unwrap_err();

    assert_eq!(
        err,
        SearchError::InvalidCost {
            cost: "-0.25".into(),
            expansion: 1,
        }
    );
}

#[test]
fn negative_cost_accepted_when_unchecked() {
    let result = search(0, &NegativeEdges, &SearchPolicy::default(), |_| ()).unwrap();

    assert_eq!(result.into_goal(), Some(2));
}
