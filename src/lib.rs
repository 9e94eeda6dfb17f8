//! Uninformed graph search over a grid quest.
//!
//! An agent walks a walled grid collecting medals. The quest is modelled as a
//! [`problem::Problem`] and solved by one of the [`algorithms`], which share a
//! single graph-search skeleton parameterised by a
//! [`data_structures::Frontier`].

use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod heap_primitives;

// Search space and problems
// -------------------------
pub mod data_structures;
pub mod problem;
pub mod search;
pub mod space;

// Problems
// --------
pub mod problems;

// Algorithms
// ----------
pub mod algorithms;

// Presentation
// ------------
pub mod replay;
