//! Error types shared by the level model.

use crate::{BoxId, Position};

/// Errors raised while parsing level text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The level text is empty or contains only whitespace.
    #[display("level text is empty")]
    EmptyLevel,
    /// The level text does not describe a rectangular grid.
    #[display("malformed level: {_0}")]
    MalformedLevel(MalformedReason),
    /// The level does not contain exactly one `P`.
    #[display("level must contain exactly one player, found {found}")]
    InvalidPlayerCount {
        /// Number of `P` characters found.
        found: usize,
    },
}

/// Why a level was rejected as [`ParseError::MalformedLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MalformedReason {
    /// A row differs in length from the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    InconsistentRowWidth {
        /// Index of the offending row among the non-blank lines, top line first.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// A broken level invariant.
///
/// Reported by [`Level::check_consistency`](crate::Level::check_consistency). Observing one of
/// these after a move means the engine itself is faulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// The occupancy grid does not hold exactly one player cell.
    #[display("occupancy holds {found} player cells")]
    PlayerCount {
        /// Number of player cells.
        found: usize,
    },
    /// The player's position is not marked as a player cell.
    #[display("player at {position} is not marked in occupancy")]
    PlayerCellMismatch {
        /// The player's position.
        position: Position,
    },
    /// The occupancy grid holds a different number of box cells than there are boxes.
    #[display("occupancy holds {found} box cells, expected {expected}")]
    BoxCount {
        /// Number of boxes.
        expected: usize,
        /// Number of box cells.
        found: usize,
    },
    /// A box's position is not marked as a box cell.
    #[display("box {id} at {position} is not marked in occupancy")]
    BoxCellMismatch {
        /// The box.
        id: BoxId,
        /// The box's position.
        position: Position,
    },
    /// An entity stands on a wall or off the board.
    #[display("entity at {position} is not on walkable ground")]
    EntityOnWall {
        /// The offending position.
        position: Position,
    },
    /// The incremental goal coverage counter disagrees with a recount.
    #[display("goal coverage counter is {tracked}, but {actual} boxes are on goals")]
    GoalCoverageMismatch {
        /// Value of the incremental counter.
        tracked: usize,
        /// Recounted value.
        actual: usize,
    },
}
