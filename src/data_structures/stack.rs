use std::fmt::Debug;

use crate::data_structures::Frontier;

/// LIFO frontier. Drives depth-first search.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    #[inline(always)]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
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

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, P> Frontier<T, P> for Stack<T> {
    #[inline(always)]
    fn push(&mut self, item: T, _priority: P) {
        Stack::push(self, item);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }
    #[inline(always)]
    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        Stack::len(self)
    }
}
