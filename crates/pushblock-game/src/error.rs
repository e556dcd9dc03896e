use pushblock_core::ParseError;

/// Errors returned by [`Session`](crate::Session) load commands.
///
/// A failed load leaves the previously loaded level, its index, and the win flag untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum SessionError {
    /// The level set is empty.
    #[display("no levels configured")]
    NoLevelsConfigured,
    /// The selected level text could not be parsed.
    #[display("level {index} is invalid: {source}")]
    Parse {
        /// Index of the level in the level set.
        index: usize,
        /// The parse failure.
        source: ParseError,
    },
}

/// Why a directional command was ignored by the [`Session`](crate::Session).
///
/// Rejections are ordinary outcomes, not faults: the session state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum MoveRejection {
    /// No level is loaded (never started, or stopped).
    #[display("no level is loaded")]
    NoLevelLoaded,
    /// The level is won and [`WonInputPolicy::Lock`](crate::WonInputPolicy::Lock) is active.
    #[display("level is already won")]
    LevelWon,
}
