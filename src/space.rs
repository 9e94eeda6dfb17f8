use std::fmt::Debug;
use std::hash::Hash;

pub trait Action: Copy + Clone + Debug + PartialEq + Eq {}

/// A search state.
///
/// States are closed-set keys, so equality and hashing must agree on every
/// field that matters to the search.
pub trait State: Clone + Debug + PartialEq + Eq + Hash {}

pub trait Cost:
    Copy
    + Debug
    + std::fmt::Display
    + PartialEq
    + core::cmp::Eq
    + PartialOrd
    + Ord
    + num_traits::SaturatingAdd
    + num_traits::bounds::UpperBounded
    + num_traits::Zero
    + num_traits::One
    + std::ops::Add<Self, Output = Self>
    + std::ops::Sub<Self, Output = Self>
    + std::ops::AddAssign
{
    #[inline(always)]
    fn valid(&self) -> bool {
        *self != num_traits::bounds::UpperBounded::max_value()
    }
}

/// A sequence of actions taking `start` to `end`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub start: St,
    pub end: St,
    pub cost: C,
    pub actions: Vec<A>,
}

impl<St, A, C> Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    pub fn new_from_start(start: St) -> Self {
        Self {
            end: start.clone(),
            start,
            cost: C::zero(),
            actions: vec![],
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Runs sanity checks
    #[inline(always)]
    pub fn seems_valid(&self) -> bool {
        self.cost.valid() && (!self.is_empty() || self.start == self.end)
    }

    #[inline(always)]
    pub fn append(&mut self, step: (St, A), c: C) {
        let (s, a) = step;
        self.actions.push(a);
        self.end = s;
        self.cost = self.cost.saturating_add(&c);
    }
}

impl<St, A, C> std::fmt::Display for Path<St, A, C>
where
    St: State,
    A: Action + std::fmt::Display,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Path({}, {:?}:", self.cost, self.start)?;
        for a in self.actions.iter().take(MAX_ACTIONS_DISPLAYED) {
            write!(f, "{a}")?;
        }
        if self.actions.len() > MAX_ACTIONS_DISPLAYED {
            write!(f, "…")?;
        }
        write!(f, ":{:?})", self.end)
    }
}

const MAX_ACTIONS_DISPLAYED: usize = 40;

/// The geometry a problem moves around in.
///
/// Space states are usually smaller than problem states, as a problem may
/// carry extra bookkeeping (like what's left to collect) on top of a location.
pub trait Space<St, A, C>: Clone + std::fmt::Debug
where
    St: State,
    A: Action,
    C: Cost,
{
    /// Applies an action, returning `None` when it leads somewhere invalid.
    fn apply(&self, s: &St, a: &A) -> Option<St>;

    fn cost(&self, _s: &St, _a: &A) -> C {
        C::one()
    }
    /// Expands a State in a fixed action order.
    fn neighbours(&self, s: &St) -> Vec<(St, A)>;
    /// Verify is a State is valid.
    fn valid(&self, s: &St) -> bool;
}
