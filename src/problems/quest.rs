//! Grid quests: walk a walled maze and collect every medal.
//!
//! Quests are written as text, one row per line,
//!
//! ```text
//! WWWWW
//! WS..W
//! W.W.W
//! W..MW
//! WWWWW
//! ```
//!
//! where `W` is a wall, `M` a medal and `S` the start (either case). Anything
//! else is floor.

use derive_more::Display;
use log::trace;
use log::warn;
use nonmax::NonMaxU32;
use smallvec::SmallVec;
use thiserror::Error;

use crate::problem::Problem;
use crate::space::Action;
use crate::space::Cost;
use crate::space::Space;
use crate::space::State;

const MAX_ELEMENTS_DISPLAYED: usize = 80;

pub(crate) type CoordIntrinsic = u32;
pub type Coord = NonMaxU32;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("({x},{y})")]
pub struct Position {
    pub(crate) x: Coord,
    pub(crate) y: Coord,
}

impl Position {
    pub fn new(x: CoordIntrinsic, y: CoordIntrinsic) -> Option<Position> {
        Some(Position {
            x: Coord::new(x)?,
            y: Coord::new(y)?,
        })
    }
    pub fn new_from_usize(x: usize, y: usize) -> Option<Position> {
        let x = CoordIntrinsic::try_from(x).ok()?;
        let y = CoordIntrinsic::try_from(y).ok()?;
        Self::new(x, y)
    }

    #[inline(always)]
    pub fn x(&self) -> CoordIntrinsic {
        self.x.get()
    }
    #[inline(always)]
    pub fn y(&self) -> CoordIntrinsic {
        self.y.get()
    }

    pub(crate) fn safe_dimensions(max_x: usize, max_y: usize) -> bool {
        (max_x < CoordIntrinsic::MAX as usize) && (max_y < CoordIntrinsic::MAX as usize)
    }
}
impl State for Position {}

/// A move. `y` grows southwards, as rows are read top to bottom.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum QuestAction {
    #[display("E")]
    East,
    #[display("W")]
    West,
    #[display("S")]
    South,
    #[display("N")]
    North,
}
impl Action for QuestAction {}

impl QuestAction {
    /// Every action, in the order states are expanded.
    pub const ALL: [QuestAction; 4] = [
        QuestAction::East,
        QuestAction::West,
        QuestAction::South,
        QuestAction::North,
    ];

    /// Displacement as wrapping offsets.
    #[inline(always)]
    fn delta(&self) -> (CoordIntrinsic, CoordIntrinsic) {
        let prev = CoordIntrinsic::MAX;
        let same = 0 as CoordIntrinsic;
        let next = 1 as CoordIntrinsic;

        #[rustfmt::skip]
        let delta = match self {
            QuestAction::East  => (next, same),
            QuestAction::West  => (prev, same),
            QuestAction::South => (same, next),
            QuestAction::North => (same, prev),
        };
        delta
    }

    /// The neighbouring position in this direction, wherever it lands.
    ///
    /// Only `None` when stepping west of `x=0` or north of `y=0`. The grid's
    /// own bounds are up to the caller.
    #[inline(always)]
    pub fn step(&self, p: &Position) -> Option<Position> {
        let (dx, dy) = self.delta();
        Position::new(p.x().wrapping_add(dx), p.y().wrapping_add(dy))
    }
}

impl TryFrom<char> for QuestAction {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'E' | 'e' => Ok(QuestAction::East),
            'W' | 'w' => Ok(QuestAction::West),
            'S' | 's' => Ok(QuestAction::South),
            'N' | 'n' => Ok(QuestAction::North),
            ch => Err(ch),
        }
    }
}

/// What a single move costs.
pub type ActionCost = u32;
/// Accumulated path costs.
///
/// Twice as wide as [`ActionCost`], so a sum can't overflow before the
/// search tree runs out of memory.
pub type QuestCost = u64;
impl Cost for QuestCost {}

/// Per-action costs. Unsigned, so never negative.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActionCosts {
    pub east: ActionCost,
    pub west: ActionCost,
    pub south: ActionCost,
    pub north: ActionCost,
}

impl ActionCosts {
    pub fn uniform(c: ActionCost) -> Self {
        Self {
            east: c,
            west: c,
            south: c,
            north: c,
        }
    }

    #[inline(always)]
    pub fn cost(&self, a: &QuestAction) -> QuestCost {
        let c = match a {
            QuestAction::East => self.east,
            QuestAction::West => self.west,
            QuestAction::South => self.south,
            QuestAction::North => self.north,
        };
        QuestCost::from(c)
    }
}

impl Default for ActionCosts {
    fn default() -> Self {
        Self::uniform(1)
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum QuestCell {
    #[display(".")]
    Floor,
    #[display("W")]
    Wall,
}

/// The maze itself: dimensions, walls and what moving around costs.
#[derive(Clone)]
pub struct QuestSpace {
    pub(crate) map: Vec<Vec<QuestCell>>,
    pub(crate) costs: ActionCosts,
}

impl QuestSpace {
    pub fn new_from_map(map: Vec<Vec<QuestCell>>) -> Self {
        debug_assert!(map.iter().all(|row| row.len() == map[0].len()));
        Self {
            map,
            costs: ActionCosts::default(),
        }
    }
    pub(crate) fn new_empty_with_dimensions(x: usize, y: usize) -> Self {
        Self::new_from_map(vec![vec![QuestCell::Floor; x]; y])
    }

    pub fn dimensions(&self) -> (usize, usize) {
        if self.map.is_empty() {
            return (0, 0);
        }
        (self.map[0].len(), self.map.len())
    }

    pub fn costs(&self) -> &ActionCosts {
        &self.costs
    }

    #[inline(always)]
    fn at(&self, p: &Position) -> QuestCell {
        debug_assert!(self.valid(p));
        self.map[p.y() as usize][p.x() as usize]
    }

    #[inline(always)]
    pub fn is_wall(&self, p: &Position) -> bool {
        self.valid(p) && self.at(p) == QuestCell::Wall
    }

    /// Whether the agent may stand on `p`.
    #[inline(always)]
    pub fn open(&self, p: &Position) -> bool {
        self.valid(p) && self.at(p) == QuestCell::Floor
    }

    /// Number of open cells.
    pub fn open_cells(&self) -> usize {
        self.map
            .iter()
            .map(|row| row.iter().filter(|c| **c == QuestCell::Floor).count())
            .sum()
    }
}

impl Space<Position, QuestAction, QuestCost> for QuestSpace {
    /// Moves one cell. Leaving the grid or walking into a wall is invalid.
    #[inline(always)]
    fn apply(&self, p: &Position, a: &QuestAction) -> Option<Position> {
        let next = a.step(p)?;
        self.open(&next).then_some(next)
    }

    #[inline(always)]
    fn valid(&self, p: &Position) -> bool {
        let (max_x, max_y) = self.dimensions();
        (p.x() as usize) < max_x && (p.y() as usize) < max_y
    }

    #[inline(always)]
    fn cost(&self, _p: &Position, a: &QuestAction) -> QuestCost {
        self.costs.cost(a)
    }

    /// Gets the open neighbours of a given position, in [`QuestAction::ALL`]
    /// order.
    fn neighbours(&self, p: &Position) -> Vec<(Position, QuestAction)> {
        QuestAction::ALL
            .iter()
            .filter_map(|a| self.apply(p, a).map(|n| (n, *a)))
            .collect()
    }
}

impl std::fmt::Display for QuestSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.dimensions();
        writeln!(f, "Quest({}x{}):", d.0, d.1)?;
        for line in self.map.iter().take(MAX_ELEMENTS_DISPLAYED) {
            for cell in line.iter().take(MAX_ELEMENTS_DISPLAYED) {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for QuestSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Quest{:?}", self.dimensions())
    }
}

/// Medals still to be collected.
///
/// Kept sorted and free of duplicates, so two sets holding the same medals
/// compare and hash the same no matter how they were built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MedalSet {
    medals: SmallVec<[Position; 8]>,
}

impl MedalSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.medals.len()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.medals.is_empty()
    }
    #[inline(always)]
    pub fn contains(&self, p: &Position) -> bool {
        self.medals.binary_search(p).is_ok()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.medals.iter()
    }

    /// Adds a medal. Returns whether it was new.
    pub fn insert(&mut self, p: Position) -> bool {
        match self.medals.binary_search(&p) {
            Ok(_) => false,
            Err(i) => {
                self.medals.insert(i, p);
                true
            }
        }
    }
    /// Removes a medal. Returns whether it was there.
    pub fn remove(&mut self, p: &Position) -> bool {
        match self.medals.binary_search(p) {
            Ok(i) => {
                self.medals.remove(i);
                true
            }
            Err(_) => false,
        }
    }

    /// This set minus `p`. Same set if `p` held no medal.
    pub fn without(&self, p: &Position) -> MedalSet {
        let mut medals = self.clone();
        medals.remove(p);
        medals
    }

    pub fn is_subset(&self, other: &MedalSet) -> bool {
        self.medals.iter().all(|m| other.contains(m))
    }
}

impl FromIterator<Position> for MedalSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut medals: SmallVec<[Position; 8]> = iter.into_iter().collect();
        medals.sort_unstable();
        medals.dedup();
        Self { medals }
    }
}

/// Where the agent is and what's left to collect.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuestState {
    pub position: Position,
    pub medals: MedalSet,
}
impl State for QuestState {}

impl std::fmt::Display for QuestState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}+{}M", self.position, self.medals.len())
    }
}

#[derive(Debug, Error)]
pub enum QuestParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("No start position found")]
    MissingStart,
    #[error("Row {y} is {len} cells wide, but the quest is only {width} wide")]
    RowTooLong { y: usize, len: usize, width: usize },
    #[error("Quest is too large ({x}x{y})")]
    TooLarge { x: usize, y: usize },
    #[error("I/O error when loading '{}': {source}", .path.display())]
    IOError {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// A quest: a maze, a start and the medals to collect.
///
/// `medals` is the quest's own registry. Searches never touch it; they carry
/// what's left in each [`QuestState`].
#[derive(Clone, Debug)]
pub struct QuestProblem {
    space: QuestSpace,
    start: Position,
    medals: MedalSet,
    expanded: usize,
}

impl QuestProblem {
    pub fn new(space: QuestSpace, start: Position, medals: MedalSet) -> Self {
        debug_assert!(space.valid(&start));
        Self {
            space,
            start,
            medals,
            expanded: 0,
        }
    }

    /// Reconfigures what each action costs.
    pub fn with_costs(mut self, costs: ActionCosts) -> Self {
        self.space.costs = costs;
        self
    }

    pub fn space(&self) -> &QuestSpace {
        &self.space
    }
    pub fn start(&self) -> Position {
        self.start
    }
    pub fn medals(&self) -> &MedalSet {
        &self.medals
    }
    pub fn dimensions(&self) -> (usize, usize) {
        self.space.dimensions()
    }

    /// Generates a random quest.
    ///
    /// Walls are placed independently with `wall_probability`, then the start
    /// and `num_medals` medals go on distinct open cells. Returns `None` if
    /// there's not enough room.
    pub fn random<R: rand::Rng>(
        r: &mut R,
        width: usize,
        height: usize,
        wall_probability: f64,
        num_medals: usize,
    ) -> Option<QuestProblem> {
        use rand::seq::SliceRandom;

        if width == 0 || height == 0 || !Position::safe_dimensions(width, height) {
            return None;
        }
        let mut space = QuestSpace::new_empty_with_dimensions(width, height);
        let mut open = vec![];
        for (y, row) in space.map.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if r.random_bool(wall_probability) {
                    *cell = QuestCell::Wall;
                } else {
                    open.push(Position::new_from_usize(x, y)?);
                }
            }
        }
        if open.len() < num_medals + 1 {
            return None;
        }

        open.shuffle(r);
        let start = open[0];
        let medals = open[1..=num_medals].iter().copied().collect();
        Some(QuestProblem::new(space, start, medals))
    }
}

impl Problem<QuestState, QuestAction, QuestCost> for QuestProblem {
    fn start_state(&self) -> QuestState {
        QuestState {
            position: self.start,
            medals: self.medals.clone(),
        }
    }

    #[inline(always)]
    fn is_goal(&self, s: &QuestState) -> bool {
        s.medals.is_empty()
    }

    fn apply(&self, s: &QuestState, a: &QuestAction) -> Option<(QuestState, QuestCost)> {
        let position = self.space.apply(&s.position, a)?;
        let state = QuestState {
            position,
            medals: s.medals.without(&position),
        };
        Some((state, self.space.cost(&s.position, a)))
    }

    fn expand(&mut self, s: &QuestState) -> Vec<(QuestState, QuestAction, QuestCost)> {
        self.expanded += 1;
        trace!("Expanding {s}");

        self.space
            .neighbours(&s.position)
            .into_iter()
            .map(|(position, a)| {
                let state = QuestState {
                    position,
                    medals: s.medals.without(&position),
                };
                (state, a, self.space.cost(&s.position, &a))
            })
            .collect()
    }

    fn path_cost(&self, actions: &[QuestAction]) -> QuestCost {
        actions
            .iter()
            .fold(QuestCost::default(), |c, a| c.saturating_add(self.space.costs.cost(a)))
    }

    fn expansions(&self) -> usize {
        self.expanded
    }
    fn reset_expansions(&mut self) {
        self.expanded = 0;
    }
}

impl std::convert::TryFrom<&str> for QuestProblem {
    type Error = QuestParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        // Blank lines are rows of floor, trailing ones included.
        let lines: Vec<&str> = s.lines().map(str::trim_end).collect();

        let Some(first) = lines.first() else {
            return Err(QuestParseError::EmptyInput);
        };
        let max_x = first.chars().count();
        let max_y = lines.len();
        if max_x == 0 {
            return Err(QuestParseError::EmptyInput);
        }
        if !Position::safe_dimensions(max_x, max_y) {
            return Err(QuestParseError::TooLarge { x: max_x, y: max_y });
        }

        let mut space = QuestSpace::new_empty_with_dimensions(max_x, max_y);
        let mut start = None;
        let mut medals = MedalSet::new();

        for (y, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len > max_x {
                return Err(QuestParseError::RowTooLong {
                    y,
                    len,
                    width: max_x,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let p = Position::new_from_usize(x, y)
                    .ok_or(QuestParseError::TooLarge { x: max_x, y: max_y })?;
                match ch {
                    'W' | 'w' => space.map[y][x] = QuestCell::Wall,
                    'M' | 'm' => {
                        medals.insert(p);
                    }
                    'S' | 's' => {
                        if let Some(previous) = start.replace(p) {
                            warn!("Start {previous} is overridden by a later start {p}");
                        }
                    }
                    _ => {}
                }
            }
        }

        let start = start.ok_or(QuestParseError::MissingStart)?;
        Ok(QuestProblem::new(space, start, medals))
    }
}

impl std::convert::TryFrom<&std::path::Path> for QuestProblem {
    type Error = QuestParseError;

    fn try_from(p: &std::path::Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(p).map_err(|source| QuestParseError::IOError {
            path: p.to_path_buf(),
            source,
        })?;
        QuestProblem::try_from(text.as_str())
    }
}

impl std::fmt::Display for QuestProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let map = &self.space.map;
        for (y, line) in map.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
            for (x, cell) in line.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
                let p = Position::new_from_usize(x, y).ok_or(std::fmt::Error)?;
                if p == self.start {
                    write!(f, "S")?;
                } else if self.medals.contains(&p) {
                    write!(f, "M")?;
                } else {
                    write!(f, "{cell}")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    fn p(x: CoordIntrinsic, y: CoordIntrinsic) -> Position {
        Position::new(x, y).unwrap()
    }

    const QUEST_A: &str = indoc! {"
        WWWWWW
        WS..MW
        W.WW.W
        Wm...W
        WWWWWW
    "};

    #[test]
    fn parses_quest() {
        let problem = QuestProblem::try_from(QUEST_A).unwrap();

        assert_eq!(problem.dimensions(), (6, 5));
        assert_eq!(problem.start(), p(1, 1));
        assert_eq!(problem.medals().len(), 2);
        assert!(problem.medals().contains(&p(4, 1)));
        assert!(problem.medals().contains(&p(1, 3)));
        assert!(problem.space().is_wall(&p(0, 0)));
        assert!(problem.space().is_wall(&p(2, 2)));
        assert!(!problem.space().is_wall(&p(1, 1)));
        assert_eq!(problem.space().open_cells(), 10);
    }

    #[test]
    fn displays_like_its_input() {
        let problem = QuestProblem::try_from(QUEST_A).unwrap();
        let expected = QUEST_A.replace('m', "M");
        assert_eq!(format!("{problem}"), expected);
    }

    #[test]
    fn short_rows_are_padded_with_floor() {
        let problem = QuestProblem::try_from("WWWW\nS\nWWWM\n").unwrap();
        assert_eq!(problem.dimensions(), (4, 3));
        assert!(problem.space().open(&p(3, 1)));
        assert_eq!(problem.medals().iter().collect::<Vec<_>>(), vec![&p(3, 2)]);
    }

    #[test]
    fn ignores_trailing_whitespace() {
        let problem = QuestProblem::try_from("S.M  \r\n...\r\n").unwrap();
        assert_eq!(problem.dimensions(), (3, 2));
    }

    #[test]
    fn blank_rows_are_floor() {
        let problem = QuestProblem::try_from("S.\n.M\n\n").unwrap();
        assert_eq!(problem.dimensions(), (2, 3));
        assert!(problem.space().open(&p(0, 2)));
        assert!(problem.space().open(&p(1, 2)));

        // Same as a blank row in the middle
        let problem = QuestProblem::try_from("S.\n  \n.M").unwrap();
        assert_eq!(problem.dimensions(), (2, 3));
        assert!(problem.space().open(&p(1, 1)));
        assert_eq!(format!("{problem}"), "S.\n..\n.M\n");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            QuestProblem::try_from(""),
            Err(QuestParseError::EmptyInput)
        ));
        assert!(matches!(
            QuestProblem::try_from("\n\n"),
            Err(QuestParseError::EmptyInput)
        ));
        assert!(matches!(
            QuestProblem::try_from("...\n.M.\n"),
            Err(QuestParseError::MissingStart)
        ));
        assert!(matches!(
            QuestProblem::try_from("S..\n....\n"),
            Err(QuestParseError::RowTooLong {
                y: 1,
                len: 4,
                width: 3
            })
        ));
        assert!(matches!(
            QuestProblem::try_from(std::path::Path::new("/nonexistent/quest.txt")),
            Err(QuestParseError::IOError { .. })
        ));
    }

    #[test]
    fn last_start_wins() {
        let problem = QuestProblem::try_from("S.s").unwrap();
        assert_eq!(problem.start(), p(2, 0));
    }

    #[test]
    fn medal_sets_are_order_independent() {
        let a: MedalSet = [p(3, 1), p(0, 2), p(1, 1)].into_iter().collect();
        let b: MedalSet = [p(1, 1), p(3, 1), p(0, 2), p(1, 1)].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);

        let mut hashes = std::collections::HashSet::new();
        hashes.insert(a.clone());
        assert!(hashes.contains(&b));

        assert_eq!(a.without(&p(9, 9)), a);
        assert_eq!(a.without(&p(0, 2)).len(), 2);
        assert!(a.without(&p(0, 2)).is_subset(&a));
        assert!(!a.is_subset(&a.without(&p(0, 2))));
    }

    #[test]
    fn expansion_order_and_bounds() {
        let mut problem = QuestProblem::try_from(indoc! {"
            ...
            .S.
            ...
        "})
        .unwrap();
        let start = problem.start_state();
        let actions: Vec<QuestAction> = problem
            .expand(&start)
            .into_iter()
            .map(|(_, a, _)| a)
            .collect();
        assert_eq!(actions, QuestAction::ALL.to_vec());

        // A corner only gets two moves.
        let corner = QuestState {
            position: p(0, 0),
            medals: MedalSet::new(),
        };
        let successors = problem.expand(&corner);
        assert_eq!(
            successors.iter().map(|(s, a, _)| (s.position, *a)).collect::<Vec<_>>(),
            vec![(p(1, 0), QuestAction::East), (p(0, 1), QuestAction::South)]
        );
    }

    #[test]
    fn expansion_skips_walls_and_collects_medals() {
        let mut problem = QuestProblem::try_from(indoc! {"
            WMW
            MSW
            WWW
        "})
        .unwrap();
        let start = problem.start_state();
        assert_eq!(start.medals.len(), 2);

        let successors = problem.expand(&start);
        assert_eq!(successors.len(), 2);
        for (s, _a, c) in &successors {
            assert_eq!(*c, 1);
            assert_eq!(s.medals.len(), 1);
            assert!(!s.medals.contains(&s.position));
            assert!(s.medals.is_subset(&start.medals));
        }
        // The registry is untouched
        assert_eq!(problem.medals().len(), 2);
    }

    #[test]
    fn counts_expansions_only() {
        let mut problem = QuestProblem::try_from(QUEST_A).unwrap();
        assert_eq!(problem.expansions(), 0);

        let start = problem.start_state();
        let _ = problem.is_goal(&start);
        let _ = problem.apply(&start, &QuestAction::East);
        let _ = problem.path_cost(&[QuestAction::East]);
        assert_eq!(problem.expansions(), 0);

        let _ = problem.expand(&start);
        assert_eq!(problem.expansions(), 1);
        let _ = problem.expand(&start);
        assert_eq!(problem.expansions(), 2);

        problem.reset_expansions();
        assert_eq!(problem.expansions(), 0);
    }

    #[test]
    fn costs_are_configurable() {
        let costs = ActionCosts {
            east: 2,
            west: 3,
            south: 5,
            north: 7,
        };
        let problem = QuestProblem::try_from(QUEST_A).unwrap().with_costs(costs);
        use QuestAction::*;
        assert_eq!(problem.path_cost(&[]), 0);
        assert_eq!(problem.path_cost(&[East, West, South, North, East]), 19);

        let start = problem.start_state();
        assert_eq!(problem.apply(&start, &East).map(|(_, c)| c), Some(2));
        assert_eq!(problem.apply(&start, &North), None);
    }

    #[test]
    fn replays_actions() {
        use QuestAction::*;
        let problem = QuestProblem::try_from(QUEST_A).unwrap();

        assert!(problem.solves(&[East, East, East, South, South, West, West, West]));
        assert!(!problem.solves(&[East, East, East]));
        // Into a wall
        assert_eq!(problem.replay(&[North]), None);
    }

    #[test]
    fn random_quests_are_reproducible() {
        let a = QuestProblem::random(&mut ChaCha8Rng::seed_from_u64(7), 12, 9, 0.25, 3).unwrap();
        let b = QuestProblem::random(&mut ChaCha8Rng::seed_from_u64(7), 12, 9, 0.25, 3).unwrap();
        assert_eq!(format!("{a}"), format!("{b}"));
        assert_eq!(a.dimensions(), (12, 9));
        assert_eq!(a.medals().len(), 3);
        assert!(a.space().open(&a.start()));
        assert!(!a.medals().contains(&a.start()));
        assert!(a.medals().iter().all(|m| a.space().open(m)));

        // Not enough room
        assert!(QuestProblem::random(&mut ChaCha8Rng::seed_from_u64(0), 2, 1, 0.0, 2).is_none());
    }

    #[test]
    fn parses_actions() {
        assert_eq!(QuestAction::try_from('e'), Ok(QuestAction::East));
        assert_eq!(QuestAction::try_from('N'), Ok(QuestAction::North));
        assert_eq!(QuestAction::try_from('x'), Err('x'));
        assert_eq!(format!("{}", QuestAction::South), "S");
    }
}
