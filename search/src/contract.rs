//! Search problem contract trait and the closure adapter.

use std::convert::Infallible;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::cost::Cost;

/// Trait for problems that support uniform-cost search.
///
/// # Contract
///
/// - `is_goal` must be consistent for the duration of one search call.
/// - `expand` is called lazily, once per popped state, and must return an
///   equivalent successor set for equivalent states. Edge costs must be
///   non-negative.
/// - `unique_id` must map logically equivalent states to the same id. The
///   engine does not verify this; a non-injective id suppresses distinct
///   states, a non-deterministic id causes redundant expansions.
///
/// Any `Err` returned by these methods aborts the search and is handed back
/// to the caller unchanged inside [`crate::error::SearchError::Collaborator`].
pub trait SearchProblem {
    type State;
    /// Dedup identity of a state. Never used for ordering.
    type Id: Eq + Hash;
    type Cost: Cost;
    type Error;
    type Successors: IntoIterator<Item = (Self::State, Self::Cost)>;

    /// Test whether the given state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> Result<bool, Self::Error>;

    /// Produce the successors of a state with their edge costs.
    fn expand(&self, state: &Self::State) -> Result<Self::Successors, Self::Error>;

    /// Identity used for visited-set membership.
    fn unique_id(&self, state: &Self::State) -> Result<Self::Id, Self::Error>;
}

/// A [`SearchProblem`] assembled from plain closures.
///
/// Built with [`FnProblem::new`], which uses the state itself as its unique
/// id, and optionally [`FnProblem::with_unique_id`] for a custom identity.
/// Closures cannot fail, so `Error` is [`Infallible`].
pub struct FnProblem<S, C, I, K, G, X, U> {
    is_goal: G,
    expand: X,
    unique_id: U,
    _marker: PhantomData<fn(&S) -> (C, I, K)>,
}

impl<S, C, I, G, X> FnProblem<S, C, I, S, G, X, fn(&S) -> S>
where
    S: Clone + Eq + Hash,
    C: Cost,
    G: Fn(&S) -> bool,
    X: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    /// A problem whose states are their own identity.
    pub fn new(is_goal: G, expand: X) -> Self {
        Self {
            is_goal,
            expand,
            unique_id: S::clone,
            _marker: PhantomData,
        }
    }
}

impl<S, C, I, K, G, X, U> FnProblem<S, C, I, K, G, X, U>
where
    C: Cost,
    K: Eq + Hash,
    G: Fn(&S) -> bool,
    X: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    U: Fn(&S) -> K,
{
    /// A problem with a caller-supplied identity. States need no `Clone`.
    pub fn keyed(is_goal: G, expand: X, unique_id: U) -> Self {
        Self {
            is_goal,
            expand,
            unique_id,
            _marker: PhantomData,
        }
    }
}

impl<S, C, I, K, G, X, U> FnProblem<S, C, I, K, G, X, U> {
    /// Replace the identity function.
    pub fn with_unique_id<K2, U2>(self, unique_id: U2) -> FnProblem<S, C, I, K2, G, X, U2>
    where
        U2: Fn(&S) -> K2,
        K2: Eq + Hash,
    {
        FnProblem {
            is_goal: self.is_goal,
            expand: self.expand,
            unique_id,
            _marker: PhantomData,
        }
    }
}

impl<S, C, I, K, G, X, U> SearchProblem for FnProblem<S, C, I, K, G, X, U>
where
    C: Cost,
    K: Eq + Hash,
    G: Fn(&S) -> bool,
    X: Fn(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    U: Fn(&S) -> K,
{
    type State = S;
    type Id = K;
    type Cost = C;
    type Error = Infallible;
    type Successors = I;

    fn is_goal(&self, state: &S) -> Result<bool, Infallible> {
        Ok((self.is_goal)(state))
    }

    fn expand(&self, state: &S) -> Result<I, Infallible> {
        Ok((self.expand)(state))
    }

    fn unique_id(&self, state: &S) -> Result<K, Infallible> {
        Ok((self.unique_id)(state))
    }
}
