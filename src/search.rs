use nonmax::NonMaxUsize;

use crate::space::Action;
use crate::space::Cost;
use crate::space::Path;
use crate::space::State;

/// A reference to a `SearchTreeNode<St, A, C>` within its `SearchTree`.
///
/// Plain arena indices. Nodes are only ever appended, so an index handed out
/// stays valid for the lifetime of the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchTreeIndex {
    index: NonMaxUsize,
}

impl SearchTreeIndex {
    #[inline(always)]
    fn new(index: usize) -> Self {
        Self {
            index: NonMaxUsize::new(index)
                .expect("A Vec of non-zero-sized nodes can't hold usize::MAX elements"),
        }
    }

    #[inline(always)]
    pub fn as_usize(&self) -> usize {
        self.index.get()
    }
}

/// A node in the search tree.
///
/// Immutable once pushed. The parent link carries the action that led here,
/// so the root is the only node without one.
#[derive(Clone, Debug)]
pub struct SearchTreeNode<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub(crate) parent: Option<(SearchTreeIndex, A)>,
    pub(crate) state: St,
    pub(crate) g: C,
}

impl<St, A, C> SearchTreeNode<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub fn new_root(s: St) -> Self {
        Self {
            parent: None,
            state: s,
            g: C::zero(),
        }
    }
    pub fn new(s: St, parent: (SearchTreeIndex, A), g: C) -> Self {
        Self {
            parent: Some(parent),
            state: s,
            g,
        }
    }

    #[inline(always)]
    pub fn state(&self) -> &St {
        &self.state
    }
    /// Cost accumulated from the root.
    #[inline(always)]
    pub fn g(&self) -> C {
        self.g
    }
}

/// Arena holding every node created by one search.
///
/// Nodes point back to their parents by index, so the tree never needs
/// forward links and can't form cycles: a parent is always pushed before its
/// children.
pub struct SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    nodes: Vec<SearchTreeNode<St, A, C>>,
}

impl<St, A, C> SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    #[inline(always)]
    pub fn push(&mut self, node: SearchTreeNode<St, A, C>) -> SearchTreeIndex {
        debug_assert!(
            node.parent.is_none_or(|(p, _)| p.as_usize() < self.nodes.len()),
            "Parents must be pushed before their children"
        );
        let index = SearchTreeIndex::new(self.nodes.len());
        self.nodes.push(node);
        index
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Actions leading from the root to `node_index`, in root-to-node order.
    #[must_use]
    pub fn solution(&self, mut node_index: SearchTreeIndex) -> Vec<A> {
        let mut actions = vec![];
        while let Some((parent_index, a)) = self[node_index].parent {
            debug_assert!(parent_index.as_usize() < node_index.as_usize());
            actions.push(a);
            node_index = parent_index;
        }
        actions.reverse();
        actions
    }

    /// The full path from the root to `node_index`.
    #[must_use]
    pub fn path(&self, node_index: SearchTreeIndex) -> Path<St, A, C> {
        let mut node_index = node_index;
        let end = &self[node_index];
        let cost = end.g;

        // Walk back to find the root state
        let mut steps = vec![];
        while let Some((parent_index, a)) = self[node_index].parent {
            let node = &self[node_index];
            let c = node.g - self[parent_index].g;
            steps.push((node.state.clone(), a, c));
            node_index = parent_index;
        }

        let mut path = Path::<St, A, C>::new_from_start(self[node_index].state.clone());
        for (s, a, c) in steps.into_iter().rev() {
            path.append((s, a), c);
        }
        debug_assert_eq!(path.cost, cost);
        path
    }
}

impl<St, A, C> Default for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<St, A, C> std::ops::Index<SearchTreeIndex> for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    type Output = SearchTreeNode<St, A, C>;

    #[inline(always)]
    fn index(&self, index: SearchTreeIndex) -> &Self::Output {
        &self.nodes[index.as_usize()]
    }
}

impl<St, A, C> std::fmt::Debug for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}
