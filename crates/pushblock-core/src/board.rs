//! Static terrain of a level.

use std::ops::Index;

use crate::Position;

/// Terrain classification of a single cell.
///
/// Tiles never change while a level is played; entities (player, boxes) live in
/// [`Occupancy`](crate::Occupancy) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum TileKind {
    /// Walkable ground.
    #[default]
    Floor,
    /// Impassable for the player and for boxes.
    Wall,
    /// Walkable ground that must be covered by a box to win.
    Goal,
}

/// The tile grid of a level, stored row-major with row 0 at the bottom.
///
/// A `Board` is only constructed by the level parser and is immutable afterwards.
///
/// # Examples
///
/// ```
/// use pushblock_core::{Level, Position, TileKind};
///
/// let level = Level::parse("####\n#PG#\n####").unwrap();
/// let board = level.board();
/// assert_eq!((board.width(), board.height()), (4, 3));
/// assert_eq!(board[Position::new(2, 1)], TileKind::Goal);
/// assert_eq!(board.total_goals(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
    total_goals: usize,
}

impl Board {
    pub(crate) fn from_tiles(width: usize, height: usize, tiles: Vec<TileKind>) -> Self {
        assert_eq!(tiles.len(), width * height);
        let total_goals = tiles.iter().filter(|tile| tile.is_goal()).count();
        Self {
            width,
            height,
            tiles,
            total_goals,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Returns the tile at `pos`, or `None` if `pos` is off the board.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<TileKind> {
        self.contains(pos).then(|| self.tiles[self.index_of(pos)])
    }

    /// Returns the number of goal tiles. Fixed for the lifetime of the board.
    #[must_use]
    pub fn total_goals(&self) -> usize {
        self.total_goals
    }

    /// Returns all positions in storage order (bottom row first, left to right).
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.tiles.len()).map(move |i| Position::new(i % width, i / width))
    }

    /// Returns the positions of all goal tiles in storage order.
    pub fn goal_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&pos| self[pos].is_goal())
    }

    pub(crate) fn index_of(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "{pos} is outside the board");
        pos.y() * self.width + pos.x()
    }
}

impl Index<Position> for Board {
    type Output = TileKind;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "{pos} is outside the board");
        &self.tiles[self.index_of(pos)]
    }
}
