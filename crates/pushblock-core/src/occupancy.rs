//! Dynamic per-cell entity lookup.

use std::ops::Index;

use crate::Position;

/// What currently stands on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum CellState {
    /// Nothing stands on the cell.
    #[default]
    Empty,
    /// The player stands on the cell.
    Player,
    /// A box stands on the cell.
    Box,
}

/// Fast collision lookup mirroring the player and box positions.
///
/// Uses the same row-major, bottom-row-first layout as [`Board`](crate::Board). The engine keeps
/// it in sync with entity positions: exactly one cell holds [`CellState::Player`] and one cell
/// per box holds [`CellState::Box`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Occupancy {
    /// Creates an all-empty occupancy grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width * height],
        }
    }

    /// Returns the state of the cell at `pos`, or `None` if `pos` is off the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.contains(pos).then(|| self.cells[self.index_of(pos)])
    }

    /// Overwrites the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the grid.
    pub fn set(&mut self, pos: Position, state: CellState) {
        assert!(self.contains(pos), "{pos} is outside the occupancy grid");
        let index = self.index_of(pos);
        self.cells[index] = state;
    }

    /// Counts the cells holding `state`.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Returns the positions holding `state` in storage order.
    pub fn positions_of(&self, state: CellState) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == state)
            .map(move |(i, _)| Position::new(i % width, i / width))
    }

    fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    fn index_of(&self, pos: Position) -> usize {
        pos.y() * self.width + pos.x()
    }
}

impl Index<Position> for Occupancy {
    type Output = CellState;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "{pos} is outside the occupancy grid");
        &self.cells[self.index_of(pos)]
    }
}
