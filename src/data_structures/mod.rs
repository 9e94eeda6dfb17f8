//! Frontier containers.
//!
//! The search skeleton only needs to push, pop and check emptiness, so it's
//! written against [`Frontier`] and the exploration order comes from which
//! container is plugged in.

use std::fmt::Debug;

pub mod priority_queue;
pub mod queue;
pub mod stack;

pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;

/// An open list of pending items.
///
/// `priority` is only meaningful to ranked containers. Unranked ones drop it.
pub trait Frontier<T, P>: Debug {
    fn push(&mut self, item: T, priority: P);
    /// Takes the next item out.
    ///
    /// Popping an empty frontier is a caller bug; it returns `None` rather
    /// than panicking.
    fn pop(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
}
