//! The graph-search skeleton shared by every uninformed algorithm.

use std::marker::PhantomData;

use log::debug;
use rustc_hash::FxHashSet;

use crate::data_structures::Frontier;
use crate::problem::Problem;
use crate::search::SearchTree;
use crate::search::SearchTreeIndex;
use crate::search::SearchTreeNode;
use crate::space::Action;
use crate::space::Cost;
use crate::space::Path;
use crate::space::State;

/// Counters gathered while searching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes pushed into the frontier, root included.
    pub generated: usize,
    /// Nodes taken out of the frontier.
    pub popped: usize,
    /// Popped nodes dropped because their state was already closed.
    pub duplicates: usize,
    /// Largest frontier seen.
    pub max_open: usize,
}

/// Graph search with a closed set.
///
/// Which algorithm this is depends only on the frontier `F`. Nodes are pushed
/// with their accumulated cost as priority; unranked frontiers ignore it.
///
/// Duplicates are filtered when popped, not when pushed, so the frontier may
/// hold several nodes for one state. The first one popped wins. For ranked
/// frontiers that's the cheapest one as long as costs are non-negative, which
/// `Cost` guarantees by being unsigned.
#[derive(Debug)]
pub struct GraphSearch<'p, P, F, St, A, C>
where
    P: Problem<St, A, C>,
    F: Frontier<SearchTreeIndex, C>,
    St: State,
    A: Action,
    C: Cost,
{
    problem: &'p mut P,
    open: F,
    search_tree: SearchTree<St, A, C>,
    /// States already expanded.
    closed: FxHashSet<St>,
    stats: SearchStats,

    _phantom_action: PhantomData<A>,
}

impl<'p, P, F, St, A, C> GraphSearch<'p, P, F, St, A, C>
where
    P: Problem<St, A, C>,
    F: Frontier<SearchTreeIndex, C>,
    St: State,
    A: Action,
    C: Cost,
{
    /// Initialises the Search
    ///
    /// The problem's expansion counter is reset so it only counts this run.
    #[must_use]
    pub fn new(problem: &'p mut P, open: F) -> Self {
        problem.reset_expansions();

        let mut search = Self {
            problem,
            open,
            search_tree: SearchTree::new(),
            closed: FxHashSet::default(),
            stats: SearchStats::default(),
            _phantom_action: PhantomData,
        };

        let root = SearchTreeNode::new_root(search.problem.start_state());
        let root = search.search_tree.push(root);
        search.push(root, C::zero());
        search
    }

    /// Runs the search until a goal is popped or the frontier runs dry.
    ///
    /// `None` means every reachable state was expanded without finding a goal.
    #[must_use]
    pub fn find_first(&mut self) -> Option<Path<St, A, C>> {
        while let Some(node_index) = self.open.pop() {
            self.stats.popped += 1;
            let node = &self.search_tree[node_index];

            if self.problem.is_goal(node.state()) {
                let path = self.search_tree.path(node_index);
                debug!(
                    "Found a goal with {} actions (cost {}) after {} expansions",
                    path.len(),
                    path.cost,
                    self.problem.expansions()
                );
                return Some(path);
            }

            if self.closed.contains(node.state()) {
                self.stats.duplicates += 1;
                continue;
            }

            let state = node.state().clone();
            let g = node.g();
            self.closed.insert(state.clone());

            for (s, a, c) in self.problem.expand(&state) {
                let child_g = g.saturating_add(&c);
                let child = self
                    .search_tree
                    .push(SearchTreeNode::new(s, (node_index, a), child_g));
                self.push(child, child_g);
            }
        }

        debug!(
            "Frontier exhausted after {} expansions. No solution",
            self.problem.expansions()
        );
        None
    }

    #[inline(always)]
    fn push(&mut self, node_index: SearchTreeIndex, priority: C) {
        self.open.push(node_index, priority);
        self.stats.generated += 1;
        self.stats.max_open = self.stats.max_open.max(self.open.len());
    }

    pub fn problem(&self) -> &P {
        &*self.problem
    }
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
    /// Number of states expanded so far.
    pub fn closed(&self) -> usize {
        self.closed.len()
    }

    pub fn write_stats<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        use size::Size;
        use std::mem::size_of;
        use thousands::Separable;

        writeln!(out, "GraphSearch Stats:")?;
        let s = size_of::<SearchTreeNode<St, A, C>>();
        let l = self.search_tree.len();
        writeln!(
            out,
            "  - |Nodes|:   {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;

        let s = size_of::<SearchTreeIndex>();
        let l = self.open.len();
        writeln!(
            out,
            "  - |Open|:    {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;
        writeln!(
            out,
            "  - |Open|^:   {}",
            self.stats.max_open.separate_with_commas()
        )?;

        let s = size_of::<St>();
        let l = self.closed.len();
        writeln!(
            out,
            "  - |Closed|:  {} ({}+)",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;
        writeln!(
            out,
            "  - Popped:    {} ({} duplicates)",
            self.stats.popped.separate_with_commas(),
            self.stats.duplicates.separate_with_commas()
        )?;
        writeln!(
            out,
            "  - Expanded:  {}",
            self.problem.expansions().separate_with_commas()
        )?;

        Ok(())
    }
}
