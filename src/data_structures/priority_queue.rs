use std::fmt::Debug;

use crate::data_structures::Frontier;

const HEAP_ARITY: usize = 2usize;
#[inline(always)]
#[must_use]
fn up(i: usize) -> usize {
    crate::heap_primitives::index_parent::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn children(i: usize, len: usize) -> std::ops::Range<usize> {
    crate::heap_primitives::index_children::<HEAP_ARITY>(i, len)
}

/// Ranking of a heap entry.
///
/// Lower priorities go first. Ties go to whoever was pushed first, so equal
/// priorities behave like a FIFO and runs are reproducible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriorityRank<P: Ord> {
    priority: P,
    sequence: u64,
}

impl<P: Ord> PriorityRank<P> {
    pub fn new(priority: P, sequence: u64) -> Self {
        Self { priority, sequence }
    }
    pub fn priority(&self) -> &P {
        &self.priority
    }
}

/// A heap entry, ranked only by its `rank`.
#[derive(Debug)]
struct HeapNode<T, P: Ord> {
    rank: PriorityRank<P>,
    item: T,
}

/// Min-priority frontier. Drives uniform-cost search.
///
/// A binary heap over `(priority, insertion sequence)`. The sequence counter
/// is private to the queue and only ever grows.
#[derive(Debug)]
pub struct PriorityQueue<T, P: Ord> {
    heap: Vec<HeapNode<T, P>>,
    next_sequence: u64,
}

impl<T, P> PriorityQueue<T, P>
where
    T: Debug,
    P: Ord + Debug,
{
    pub fn new() -> Self {
        Self {
            heap: vec![],
            next_sequence: 0,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// The best priority, if any.
    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.first().map(|n| n.rank.priority())
    }

    pub fn push(&mut self, item: T, priority: P) {
        self.verify_heap();
        let rank = PriorityRank::new(priority, self.next_sequence);
        self.next_sequence += 1;

        let heap_index = self.heap.len(); // Future heap_index
        self.heap.push(HeapNode { rank, item });
        self.sift_up(heap_index);
        self.verify_heap();
    }

    pub fn pop(&mut self) -> Option<T> {
        self.verify_heap();
        if self.heap.len() <= 1 {
            return self.heap.pop().map(|n| n.item);
        }

        // Move the last element to the root and let it sink.
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let node = self.heap.pop()?;
        self.sift_down(0);

        self.verify_heap();
        Some(node.item)
    }

    /// Raises a node
    /// Returns it's new index
    fn sift_up(&mut self, index: usize) -> usize {
        debug_assert!(index < self.heap.len(), "Index out of bounds");

        let mut pos = index;
        while pos != 0 {
            let parent = up(pos);
            if self.heap[parent].rank <= self.heap[pos].rank {
                break;
            }
            self.heap.swap(parent, pos);
            pos = parent;
        }
        pos
    }

    /// Lowers a node
    /// Returns it's new index
    fn sift_down(&mut self, index: usize) -> usize {
        let len = self.heap.len();
        debug_assert!(index < len, "Index out of bounds");

        let mut pos = index;
        loop {
            // Find the best child
            let Some(child) =
                children(pos, len).min_by(|&l, &r| self.heap[l].rank.cmp(&self.heap[r].rank))
            else {
                break;
            };
            if self.heap[pos].rank <= self.heap[child].rank {
                break;
            }
            self.heap.swap(pos, child);
            pos = child;
        }
        pos
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_heap(&self) {
        // All good... (hopefully)
    }
    #[cfg(feature = "verify")]
    fn verify_heap(&self) {
        // Every node goes after its parent node, if any.
        for i in 1..self.heap.len() {
            let p = up(i);
            assert!(
                self.heap[p].rank <= self.heap[i].rank,
                "Node[{p}]={:?} !<= child [{i}]={:?}. Out of heap of len={}",
                self.heap[p],
                self.heap[i],
                self.heap.len(),
            );
        }
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    T: Debug,
    P: Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Frontier<T, P> for PriorityQueue<T, P>
where
    T: Debug,
    P: Ord + Debug,
{
    #[inline(always)]
    fn push(&mut self, item: T, priority: P) {
        PriorityQueue::push(self, item, priority);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        PriorityQueue::pop(self)
    }
    #[inline(always)]
    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }
}
