//! Step-by-step playback of a solution.
//!
//! A [`Replay`] walks the agent through a quest one action at a time and
//! renders each step as text. It keeps its own copy of the agent's position
//! and the medals left, so it can replay any action list, including broken
//! ones, without a search behind it.
//!
//! Cells are drawn as,
//!
//! | Char            | Cell                          |
//! |-----------------|-------------------------------|
//! | `W`             | Wall                          |
//! | `M`             | Medal not collected yet       |
//! | `@`             | The agent                     |
//! | `>` `<` `v` `^` | Trail, the way the agent left |
//! | `.`             | Floor                         |

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::problems::quest::MedalSet;
use crate::problems::quest::Position;
use crate::problems::quest::QuestAction;
use crate::problems::quest::QuestProblem;
use crate::space::Space;

pub const AGENT: char = '@';
pub const WALL: char = 'W';
pub const MEDAL: char = 'M';
pub const FLOOR: char = '.';

/// How a cell is drawn once the agent walked out of it.
pub fn trail(a: &QuestAction) -> char {
    match a {
        QuestAction::East => '>',
        QuestAction::West => '<',
        QuestAction::South => 'v',
        QuestAction::North => '^',
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Falling off the maze at step {step}: {action} from {from}")]
    FellOffMaze {
        step: usize,
        from: Position,
        action: QuestAction,
    },
    #[error("Crash! Wall encountered at step {step}: {action} into {at}")]
    HitWall {
        step: usize,
        at: Position,
        action: QuestAction,
    },
}

/// A snapshot of the replay after `step` actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub step: usize,
    /// The action just taken. `None` for the starting frame.
    pub action: Option<QuestAction>,
    pub position: Position,
    pub medals_left: usize,
    /// The grid, one line per row.
    pub grid: String,
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.action {
            None => writeln!(
                f,
                "Start at {} ({} medals left)",
                self.position, self.medals_left
            )?,
            Some(a) => writeln!(
                f,
                "Step {}: {a} to {} ({} medals left)",
                self.step, self.position, self.medals_left
            )?,
        }
        write!(f, "{}", self.grid)
    }
}

/// Replays `actions` on a quest, yielding a [`Frame`] per step.
///
/// The first frame shows the start. The iterator stops right after yielding
/// an error.
#[derive(Debug)]
pub struct Replay<'q> {
    problem: &'q QuestProblem,
    actions: std::slice::Iter<'q, QuestAction>,
    step: usize,
    position: Position,
    medals: MedalSet,
    trail: FxHashMap<Position, QuestAction>,
    started: bool,
    done: bool,
}

impl<'q> Replay<'q> {
    pub fn new(problem: &'q QuestProblem, actions: &'q [QuestAction]) -> Self {
        Self {
            problem,
            actions: actions.iter(),
            step: 0,
            position: problem.start(),
            medals: problem.medals().clone(),
            trail: FxHashMap::default(),
            started: false,
            done: false,
        }
    }

    /// Plays the remaining actions, returning how things ended.
    pub fn final_frame(mut self) -> Result<Frame, ReplayError> {
        let mut last = self.frame(None);
        self.started = true;
        for frame in self {
            last = frame?;
        }
        Ok(last)
    }

    fn advance(&mut self, action: QuestAction) -> Result<Frame, ReplayError> {
        self.step += 1;
        let space = self.problem.space();
        let Some(next) = action.step(&self.position).filter(|p| space.valid(p)) else {
            return Err(ReplayError::FellOffMaze {
                step: self.step,
                from: self.position,
                action,
            });
        };
        if space.is_wall(&next) {
            return Err(ReplayError::HitWall {
                step: self.step,
                at: next,
                action,
            });
        }

        self.trail.insert(self.position, action);
        self.position = next;
        self.medals.remove(&next);
        Ok(self.frame(Some(action)))
    }

    fn frame(&self, action: Option<QuestAction>) -> Frame {
        Frame {
            step: self.step,
            action,
            position: self.position,
            medals_left: self.medals.len(),
            grid: self.render(),
        }
    }

    fn render(&self) -> String {
        let space = self.problem.space();
        let (width, height) = space.dimensions();
        let mut grid = String::with_capacity((width + 1) * height);
        for y in 0..height {
            for x in 0..width {
                let Some(p) = Position::new_from_usize(x, y) else {
                    continue;
                };
                let ch = if p == self.position {
                    AGENT
                } else if space.is_wall(&p) {
                    WALL
                } else if self.medals.contains(&p) {
                    MEDAL
                } else if let Some(a) = self.trail.get(&p) {
                    trail(a)
                } else {
                    FLOOR
                };
                grid.push(ch);
            }
            grid.push('\n');
        }
        grid
    }
}

impl Iterator for Replay<'_> {
    type Item = Result<Frame, ReplayError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Ok(self.frame(None)));
        }

        let Some(&action) = self.actions.next() else {
            self.done = true;
            return None;
        };
        let frame = self.advance(action);
        self.done = frame.is_err();
        Some(frame)
    }
}

impl std::iter::FusedIterator for Replay<'_> {}
