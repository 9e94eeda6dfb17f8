use std::collections::VecDeque;
use std::fmt::Debug;

use crate::data_structures::Frontier;

/// FIFO frontier. Drives breadth-first search.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    #[inline(always)]
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }
    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, P> Frontier<T, P> for Queue<T> {
    #[inline(always)]
    fn push(&mut self, item: T, _priority: P) {
        Queue::push(self, item);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        Queue::pop(self)
    }
    #[inline(always)]
    fn is_empty(&self) -> bool {
        Queue::is_empty(self)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        Queue::len(self)
    }
}
