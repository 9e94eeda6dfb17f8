//! Implementation of search algorithms.
//!
//! Depth-first, breadth-first and uniform-cost search are the same
//! [`GraphSearch`] run over a different [`Frontier`](crate::data_structures::Frontier):
//!
//! | Algorithm | Frontier          | Priority   |
//! |-----------|-------------------|------------|
//! | `dfs`     | [`Stack`]         | ignored    |
//! | `bfs`     | [`Queue`]         | ignored    |
//! | `ucs`     | [`PriorityQueue`] | path cost  |

use derive_more::Display;
use log::debug;

use crate::data_structures::PriorityQueue;
use crate::data_structures::Queue;
use crate::data_structures::Stack;
use crate::problem::Problem;
use crate::space::Action;
use crate::space::Cost;
use crate::space::Path;
use crate::space::State;

mod graph_search;

pub use graph_search::GraphSearch;
pub use graph_search::SearchStats;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Depth-first search
    #[display("dfs")]
    #[value(name = "dfs")]
    DepthFirst,
    /// Breadth-first search
    #[display("bfs")]
    #[value(name = "bfs")]
    BreadthFirst,
    /// Uniform-cost search
    #[display("ucs")]
    #[value(name = "ucs")]
    UniformCost,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::UniformCost,
    ];

    /// Solves `problem`, leaving its expansion counter at this run's count.
    pub fn search<P, St, A, C>(&self, problem: &mut P) -> Option<Path<St, A, C>>
    where
        P: Problem<St, A, C>,
        St: State,
        A: Action,
        C: Cost,
    {
        debug!("Running {self}");
        match self {
            Algorithm::DepthFirst => depth_first_search(problem),
            Algorithm::BreadthFirst => breadth_first_search(problem),
            Algorithm::UniformCost => uniform_cost_search(problem),
        }
    }
}

/// Depth-first graph search.
///
/// Finds some solution if one exists. Neither shortest nor cheapest.
pub fn depth_first_search<P, St, A, C>(problem: &mut P) -> Option<Path<St, A, C>>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    GraphSearch::new(problem, Stack::new()).find_first()
}

/// Breadth-first graph search.
///
/// Finds a solution with the fewest actions.
pub fn breadth_first_search<P, St, A, C>(problem: &mut P) -> Option<Path<St, A, C>>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    GraphSearch::new(problem, Queue::new()).find_first()
}

/// Uniform-cost graph search.
///
/// Finds a cheapest solution. Ties are broken first-come first-served, so on
/// uniform costs it returns the same solution as [`breadth_first_search`].
pub fn uniform_cost_search<P, St, A, C>(problem: &mut P) -> Option<Path<St, A, C>>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    GraphSearch::new(problem, PriorityQueue::new()).find_first()
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;
    use indoc::indoc;
    use rand::Rng;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::problems::quest::ActionCost;
    use crate::problems::quest::ActionCosts;
    use crate::problems::quest::QuestAction;
    use crate::problems::quest::QuestCost;
    use crate::problems::quest::QuestProblem;
    use crate::problems::quest::QuestState;

    const OPEN_3X3: &str = indoc! {"
        S..
        ...
        ..M
    "};

    const ENCLOSED: &str = indoc! {"
        S..WWW
        ...WMW
        ...WWW
    "};

    /// Cheapest goal cost by relaxing every edge until nothing improves.
    fn cheapest_cost(problem: &QuestProblem) -> Option<QuestCost> {
        let mut best: FxHashMap<QuestState, QuestCost> = FxHashMap::default();
        best.insert(problem.start_state(), 0);
        loop {
            let mut changed = false;
            let known: Vec<(QuestState, QuestCost)> =
                best.iter().map(|(s, c)| (s.clone(), *c)).collect();
            for (s, c) in known {
                if problem.is_goal(&s) {
                    continue;
                }
                for a in QuestAction::ALL {
                    let Some((next, step)) = problem.apply(&s, &a) else {
                        continue;
                    };
                    let entry = best.entry(next).or_insert(QuestCost::MAX);
                    if c + step < *entry {
                        *entry = c + step;
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        best.iter()
            .filter(|(s, _)| problem.is_goal(s))
            .map(|(_, c)| *c)
            .min()
    }

    fn random_costs<R: Rng>(r: &mut R) -> ActionCosts {
        ActionCosts {
            east: r.random_range(1..10),
            west: r.random_range(1..10),
            south: r.random_range(1..10),
            north: r.random_range(1..10),
        }
    }

    #[test]
    fn open_grid() {
        for algorithm in Algorithm::ALL {
            let mut problem = QuestProblem::try_from(OPEN_3X3).unwrap();
            let path = algorithm.search(&mut problem).unwrap();
            assert!(problem.solves(&path.actions), "{algorithm}: {path}");
            assert_eq!(path.cost, problem.path_cost(&path.actions));
            assert!(path.end.medals.is_empty());
            assert!(problem.expansions() > 0);
        }

        use QuestAction::*;
        for algorithm in [Algorithm::BreadthFirst, Algorithm::UniformCost] {
            let mut problem = QuestProblem::try_from(OPEN_3X3).unwrap();
            let path = algorithm.search(&mut problem).unwrap();
            assert_eq!(path.actions, vec![East, East, South, South]);
            assert_eq!(path.cost, 4);
        }
    }

    #[test]
    fn enclosed_medal_has_no_solution() {
        for algorithm in Algorithm::ALL {
            let mut problem = QuestProblem::try_from(ENCLOSED).unwrap();
            assert_eq!(algorithm.search(&mut problem), None, "{algorithm}");
            // Every reachable cell got expanded before giving up.
            assert_eq!(problem.expansions(), 9, "{algorithm}");
        }
    }

    #[test]
    fn nothing_to_collect() {
        for algorithm in Algorithm::ALL {
            let mut problem = QuestProblem::try_from("W.S.W").unwrap();
            let path = algorithm.search(&mut problem).unwrap();
            assert!(path.is_empty());
            assert_eq!(path.cost, 0);
            assert_eq!(path.start, path.end);
            assert_eq!(problem.expansions(), 0);
        }
    }

    #[test]
    fn counter_is_reset_between_runs() {
        let mut problem = QuestProblem::try_from(OPEN_3X3).unwrap();
        let _ = breadth_first_search(&mut problem);
        let first = problem.expansions();
        let _ = breadth_first_search(&mut problem);
        assert_eq!(problem.expansions(), first);
    }

    #[test]
    fn collects_every_medal() {
        let mut problem = QuestProblem::try_from(indoc! {"
            WWWWWWW
            WM...MW
            W.WWW.W
            W..S..W
            W.WWW.W
            WM...MW
            WWWWWWW
        "})
        .unwrap();
        for algorithm in Algorithm::ALL {
            let path = algorithm.search(&mut problem).unwrap();
            assert!(problem.solves(&path.actions), "{algorithm}: {path}");
        }
        let path = breadth_first_search(&mut problem).unwrap();
        // Four moves to the nearest corner, then three sides of the ring.
        assert_eq!(path.len(), 16);
    }

    #[test]
    fn breadth_first_is_shortest() {
        let mut r = ChaCha8Rng::seed_from_u64(1);
        let mut solved = 0;
        for _ in 0..40 {
            let Some(mut problem) = QuestProblem::random(&mut r, 7, 5, 0.2, 2) else {
                continue;
            };
            assert_eq!(*problem.space().costs(), ActionCosts::uniform(1));
            let fewest_moves = cheapest_cost(&problem);
            let bfs = breadth_first_search(&mut problem);
            assert_eq!(
                bfs.as_ref().map(|p| p.len() as QuestCost),
                fewest_moves,
                "{problem}"
            );
            let ucs = uniform_cost_search(&mut problem);
            let dfs = depth_first_search(&mut problem);
            assert_eq!(bfs.is_some(), ucs.is_some());
            assert_eq!(bfs.is_some(), dfs.is_some());

            if let (Some(bfs), Some(ucs), Some(dfs)) = (bfs, ucs, dfs) {
                assert_eq!(bfs.len(), ucs.len(), "{problem}");
                assert!(bfs.len() <= dfs.len(), "{problem}");
                assert!(problem.solves(&dfs.actions));
                solved += 1;
            }
        }
        assert!(solved > 0);
    }

    #[test]
    fn uniform_cost_is_cheapest() {
        let mut r = ChaCha8Rng::seed_from_u64(2);
        let mut solved = 0;
        for _ in 0..40 {
            let costs = random_costs(&mut r);
            let Some(problem) = QuestProblem::random(&mut r, 6, 5, 0.2, 2) else {
                continue;
            };
            let mut problem = problem.with_costs(costs);

            let expected = cheapest_cost(&problem);
            let ucs = uniform_cost_search(&mut problem);
            assert_eq!(ucs.as_ref().map(|p| p.cost), expected, "{problem}");

            if let Some(ucs) = ucs {
                assert!(problem.solves(&ucs.actions));
                assert_eq!(ucs.cost, problem.path_cost(&ucs.actions));
                for other in [Algorithm::DepthFirst, Algorithm::BreadthFirst] {
                    let path = other.search(&mut problem).unwrap();
                    assert!(ucs.cost <= path.cost, "{other}: {path} vs {ucs}");
                }
                solved += 1;
            }
        }
        assert!(solved > 0);
    }

    #[test]
    fn large_costs_add_up_exactly() {
        let costs = ActionCosts::uniform(3_000_000_000);
        for algorithm in Algorithm::ALL {
            let mut problem = QuestProblem::try_from("S.M").unwrap().with_costs(costs);
            let path = algorithm.search(&mut problem).unwrap();
            assert_eq!(path.cost, 6_000_000_000, "{algorithm}");
            assert_eq!(problem.path_cost(&path.actions), 6_000_000_000);
            assert!(path.seems_valid());
        }

        // Still ranked by the true cost past u32::MAX
        let costs = ActionCosts {
            east: ActionCost::MAX,
            west: ActionCost::MAX,
            south: 1,
            north: 1,
        };
        let mut problem = QuestProblem::try_from(indoc! {"
            S.W.M
            .....
            .....
        "})
        .unwrap()
        .with_costs(costs);
        let path = uniform_cost_search(&mut problem).unwrap();
        assert_eq!(path.cost, 4 * QuestCost::from(ActionCost::MAX) + 2);
        assert!(path.seems_valid());
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(
            Algorithm::from_str("bfs", false),
            Ok(Algorithm::BreadthFirst)
        );
        assert_eq!(
            Algorithm::from_str("UCS", true),
            Ok(Algorithm::UniformCost)
        );
        assert!(Algorithm::from_str("astar", false).is_err());
        let names: Vec<String> = Algorithm::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, ["dfs", "bfs", "ucs"]);
    }
}
