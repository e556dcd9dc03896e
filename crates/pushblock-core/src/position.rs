//! Board coordinates and movement directions.

use std::fmt::{self, Display};

/// A cell coordinate on the board.
///
/// `x` grows to the right and `y` grows upwards: row 0 is the bottom row of the level as it is
/// drawn, which is the last line of the level text.
///
/// # Examples
///
/// ```
/// use pushblock_core::{Direction, Position};
///
/// let pos = Position::new(1, 1);
/// assert_eq!(pos.step(Direction::Up, 3, 3), Some(Position::new(1, 2)));
/// assert_eq!(pos.step(Direction::Left, 3, 3), Some(Position::new(0, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate (column).
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the y coordinate (row, counted from the bottom).
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the neighbouring position in `dir`, or `None` if it leaves a
    /// `width`×`height` board.
    ///
    /// # Examples
    ///
    /// ```
    /// use pushblock_core::{Direction, Position};
    ///
    /// let corner = Position::new(0, 0);
    /// assert_eq!(corner.step(Direction::Down, 4, 4), None);
    /// assert_eq!(corner.step(Direction::Left, 4, 4), None);
    /// assert_eq!(corner.step(Direction::Right, 4, 4), Some(Position::new(1, 0)));
    /// ```
    #[must_use]
    pub fn step(self, dir: Direction, width: usize, height: usize) -> Option<Self> {
        let (dx, dy) = dir.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < width && y < height).then_some(Self { x, y })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// Towards the top of the drawn level (`+y`).
    #[display("up")]
    Up,
    /// Towards the bottom of the drawn level (`-y`).
    #[display("down")]
    Down,
    /// Towards the left edge (`-x`).
    #[display("left")]
    Left,
    /// Towards the right edge (`+x`).
    #[display("right")]
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the unit vector `(dx, dy)` of this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}
