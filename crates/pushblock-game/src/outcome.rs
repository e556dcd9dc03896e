use pushblock_core::BoxId;

/// The result of a single directional command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The player stepped into an empty cell.
    Moved,
    /// The player pushed a box one cell and stepped into the cell it left.
    Pushed {
        /// The box that was pushed.
        box_id: BoxId,
    },
    /// The move was illegal; nothing changed.
    Blocked,
}

impl MoveOutcome {
    /// Returns `true` if the command changed the game state.
    #[must_use]
    pub fn is_applied(self) -> bool {
        !self.is_blocked()
    }
}
