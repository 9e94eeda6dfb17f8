//! Implementation of search problems.
//!
//! Problems expose a generic state-space so the algorithms can search them
//! through the [`crate::problem::Problem`] API.

pub mod quest;
