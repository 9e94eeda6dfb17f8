use crate::space::Action;
use crate::space::Cost;
use crate::space::State;

/// A state-space model the search algorithms can drive.
///
/// Implementations own their expansion counter. It's bumped once per
/// [`Problem::expand`] and by nothing else, so it can be read after a search
/// for reporting.
pub trait Problem<St, A, C>: std::fmt::Debug
where
    St: State,
    A: Action,
    C: Cost,
{
    fn start_state(&self) -> St;
    fn is_goal(&self, s: &St) -> bool;

    /// The state reached by taking `a` from `s`, and what it costs.
    ///
    /// Pure: does not count as an expansion.
    fn apply(&self, s: &St, a: &A) -> Option<(St, C)>;

    /// All valid successors of `s` as `(state, action, cost)`.
    ///
    /// The order is fixed per problem so searches are reproducible.
    fn expand(&mut self, s: &St) -> Vec<(St, A, C)>;

    fn path_cost(&self, actions: &[A]) -> C;

    fn expansions(&self) -> usize;
    fn reset_expansions(&mut self);

    /// Follows `actions` from the start state.
    ///
    /// Returns `None` if any action is invalid where it's taken.
    fn replay(&self, actions: &[A]) -> Option<St> {
        let mut state = self.start_state();
        for a in actions {
            let (next, _c) = self.apply(&state, a)?;
            state = next;
        }
        Some(state)
    }

    /// Checks that `actions` are valid from the start and end on a goal.
    fn solves(&self, actions: &[A]) -> bool {
        self.replay(actions).is_some_and(|s| self.is_goal(&s))
    }
}
