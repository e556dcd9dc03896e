//! Level parsing and the entity model of a loaded level.
//!
//! A level is written as an ASCII grid, top row first:
//!
//! | Char | Tile | Entity |
//! |------|------|--------|
//! | `#`  | Wall | - |
//! | `G`  | Goal | - |
//! | `P`  | Floor | player |
//! | `B`  | Floor | box |
//! | `*`  | Goal | box |
//! | anything else | Floor | - |
//!
//! Blank lines are ignored and trailing whitespace is trimmed from every line. The last line of
//! the text becomes row 0 of the model.

use std::str::FromStr;

use crate::{
    Board, CellState, ConsistencyError, MalformedReason, Occupancy, ParseError, Position, TileKind,
};

/// Stable identifier of a box within a level.
///
/// Ids are assigned in scan order (bottom row first, left to right) and never change while the
/// level is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct BoxId(usize);

impl BoxId {
    /// Creates a box id from its index in [`Level::boxes`].
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index of this box in [`Level::boxes`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A parsed level: terrain, occupancy, and entity positions.
///
/// Besides being the parser's output, `Level` carries the bookkeeping primitives
/// ([`move_player_to`](Self::move_player_to), [`move_box`](Self::move_box)) that keep the
/// occupancy grid and the goal coverage counter in step with entity positions. Deciding which
/// moves are legal is left to the caller.
///
/// # Examples
///
/// ```
/// use pushblock_core::{Level, Position};
///
/// let level: Level = "#####\n#.BG#\n#P..#\n#####".parse()?;
///
/// assert_eq!(level.player(), Position::new(1, 1));
/// assert_eq!(level.boxes(), &[Position::new(2, 2)]);
/// assert_eq!(level.board().total_goals(), 1);
/// assert_eq!(level.boxes_on_goals(), 0);
/// # Ok::<(), pushblock_core::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    board: Board,
    occupancy: Occupancy,
    player: Position,
    boxes: Vec<Position>,
    boxes_on_goals: usize,
}

impl Level {
    /// Parses level text.
    ///
    /// The whole text is validated before anything is returned, so a failed parse never yields
    /// a partially built level.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyLevel`] if the text has no non-blank line.
    /// Returns [`ParseError::MalformedLevel`] if the rows differ in width.
    /// Returns [`ParseError::InvalidPlayerCount`] if the text does not contain exactly one `P`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text
            .split(['\n', '\r'])
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(ParseError::EmptyLevel);
        };

        let width = first.chars().count();
        let height = lines.len();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::MalformedLevel(
                    MalformedReason::InconsistentRowWidth {
                        row,
                        expected: width,
                        found,
                    },
                ));
            }
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut occupancy = Occupancy::new(width, height);
        let mut players = Vec::new();
        let mut boxes = Vec::new();
        let mut boxes_on_goals = 0;

        for y in 0..height {
            for (x, ch) in lines[height - 1 - y].chars().enumerate() {
                let pos = Position::new(x, y);
                let tile = match ch {
                    '#' => TileKind::Wall,
                    'G' => TileKind::Goal,
                    'P' => {
                        players.push(pos);
                        occupancy.set(pos, CellState::Player);
                        TileKind::Floor
                    }
                    'B' => {
                        boxes.push(pos);
                        occupancy.set(pos, CellState::Box);
                        TileKind::Floor
                    }
                    '*' => {
                        boxes.push(pos);
                        boxes_on_goals += 1;
                        occupancy.set(pos, CellState::Box);
                        TileKind::Goal
                    }
                    _ => TileKind::Floor,
                };
                tiles.push(tile);
            }
        }

        let &[player] = players.as_slice() else {
            return Err(ParseError::InvalidPlayerCount {
                found: players.len(),
            });
        };

        Ok(Self {
            board: Board::from_tiles(width, height, tiles),
            occupancy,
            player,
            boxes,
            boxes_on_goals,
        })
    }

    /// Returns the terrain.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the occupancy grid.
    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Returns the player's position.
    #[must_use]
    pub fn player(&self) -> Position {
        self.player
    }

    /// Returns the box positions, indexed by [`BoxId::index`].
    #[must_use]
    pub fn boxes(&self) -> &[Position] {
        &self.boxes
    }

    /// Returns the number of boxes currently resting on goal tiles.
    #[must_use]
    pub fn boxes_on_goals(&self) -> usize {
        self.boxes_on_goals
    }

    /// Finds the box standing at `pos` by scanning the box list.
    #[must_use]
    pub fn box_at(&self, pos: Position) -> Option<BoxId> {
        self.boxes.iter().position(|&b| b == pos).map(BoxId::new)
    }

    /// Moves the player to `to`, updating the occupancy grid.
    ///
    /// # Panics
    ///
    /// Panics if `to` is off the board, a wall, or occupied.
    pub fn move_player_to(&mut self, to: Position) {
        self.assert_free(to);
        self.occupancy.set(self.player, CellState::Empty);
        self.player = to;
        self.occupancy.set(to, CellState::Player);
    }

    /// Moves box `id` to `to`, updating the occupancy grid and the goal coverage counter.
    ///
    /// # Panics
    ///
    /// Panics if `id` is unknown, or if `to` is off the board, a wall, or occupied.
    pub fn move_box(&mut self, id: BoxId, to: Position) {
        self.assert_free(to);
        let from = self.boxes[id.index()];
        if self.board[from].is_goal() {
            self.boxes_on_goals -= 1;
        }
        self.occupancy.set(from, CellState::Empty);
        self.boxes[id.index()] = to;
        self.occupancy.set(to, CellState::Box);
        if self.board[to].is_goal() {
            self.boxes_on_goals += 1;
        }
    }

    fn assert_free(&self, pos: Position) {
        assert!(
            self.board.tile(pos).is_some_and(|tile| !tile.is_wall()),
            "{pos} is not walkable"
        );
        assert!(self.occupancy[pos].is_empty(), "{pos} is occupied");
    }

    /// Recomputes every level invariant from scratch.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ConsistencyError`].
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        let walkable = |pos: Position| self.board.tile(pos).is_some_and(|tile| !tile.is_wall());

        if !walkable(self.player) {
            return Err(ConsistencyError::EntityOnWall {
                position: self.player,
            });
        }
        let players: Vec<Position> = self.occupancy.positions_of(CellState::Player).collect();
        if players.len() != 1 {
            return Err(ConsistencyError::PlayerCount {
                found: players.len(),
            });
        }
        if players[0] != self.player {
            return Err(ConsistencyError::PlayerCellMismatch {
                position: self.player,
            });
        }

        let box_cells = self.occupancy.count(CellState::Box);
        if box_cells != self.boxes.len() {
            return Err(ConsistencyError::BoxCount {
                expected: self.boxes.len(),
                found: box_cells,
            });
        }
        for (i, &position) in self.boxes.iter().enumerate() {
            if !walkable(position) {
                return Err(ConsistencyError::EntityOnWall { position });
            }
            if !self.occupancy[position].is_box() {
                return Err(ConsistencyError::BoxCellMismatch {
                    id: BoxId::new(i),
                    position,
                });
            }
        }

        let actual = self
            .board
            .goal_positions()
            .filter(|&pos| self.occupancy[pos].is_box())
            .count();
        if actual != self.boxes_on_goals {
            return Err(ConsistencyError::GoalCoverageMismatch {
                tracked: self.boxes_on_goals,
                actual,
            });
        }
        Ok(())
    }
}

impl FromStr for Level {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
