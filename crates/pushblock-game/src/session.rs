use std::mem;

use pushblock_core::{Direction, Level};

use crate::{Game, LevelSet, MoveOutcome, MoveRejection, SessionError};

/// What happens to directional commands once the current level is won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum WonInputPolicy {
    /// Reject movement with [`MoveRejection::LevelWon`] until the next load.
    #[default]
    Lock,
    /// Keep applying moves. The win flag stays latched and the victory event is not repeated.
    Allow,
}

/// Options controlling session behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Handling of movement after the level is won.
    pub won_input_policy: WonInputPolicy,
}

/// Snapshot of the session's progress, published to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    /// Index of the current level in the level set.
    pub level_index: usize,
    /// Number of levels in the level set.
    pub level_count: usize,
    /// Whether the current level has been won since it was loaded.
    pub won: bool,
}

/// Coarse lifecycle state of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionPhase {
    /// No level is loaded.
    NoLevel,
    /// A level is loaded and not yet won.
    Loaded,
    /// The loaded level has been won. Only a reload leaves this phase.
    Won,
}

/// A state transition reported to observers of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionEvent {
    /// A level was (re)loaded.
    LevelLoaded(SessionStatus),
    /// A directional command moved the player.
    Moved {
        /// What the move did.
        outcome: MoveOutcome,
        /// Status after the move.
        status: SessionStatus,
    },
    /// The current level was won by the preceding move.
    Victory(SessionStatus),
    /// The session was stopped and all level state discarded.
    Stopped,
}

/// Orchestrates level selection and play for an ordered [`LevelSet`].
///
/// The session exclusively owns the loaded [`Game`]. Presentation code reads it through
/// [`game`](Self::game) after each command and learns about transitions by draining
/// [`take_events`](Self::take_events).
///
/// # Example
///
/// ```
/// use pushblock_core::Direction;
/// use pushblock_game::{LevelSet, Session, SessionEvent, SessionOptions};
///
/// let levels: LevelSet = ["#PBG#", "#P.BG#"].into_iter().collect();
/// let mut session = Session::new(levels, SessionOptions::default());
///
/// session.start_from_level(0)?;
/// session.move_player(Direction::Right).unwrap();
/// assert!(session.is_won());
///
/// session.load_next_level()?;
/// assert_eq!(session.current_level_index(), 1);
/// assert!(!session.is_won());
///
/// let events = session.take_events();
/// assert!(events.iter().any(SessionEvent::is_victory));
/// # Ok::<(), pushblock_game::SessionError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    levels: LevelSet,
    options: SessionOptions,
    current: usize,
    game: Option<Game>,
    won: bool,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Creates a session with no level loaded.
    #[must_use]
    pub fn new(levels: LevelSet, options: SessionOptions) -> Self {
        Self {
            levels,
            options,
            current: 0,
            game: None,
            won: false,
            events: Vec::new(),
        }
    }

    /// Loads level `index`, clamped to the last level.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoLevelsConfigured`] if the level set is empty.
    /// Returns [`SessionError::Parse`] if the level text is invalid; the session is unchanged.
    pub fn start_from_level(&mut self, index: usize) -> Result<(), SessionError> {
        let last = self
            .levels
            .last_index()
            .ok_or(SessionError::NoLevelsConfigured)?;
        self.load(index.min(last))
    }

    /// Reloads the current level, discarding all progress on it.
    ///
    /// # Errors
    ///
    /// Same as [`start_from_level`](Self::start_from_level).
    pub fn restart_level(&mut self) -> Result<(), SessionError> {
        self.start_from_level(self.current)
    }

    /// Loads the level after the current one.
    ///
    /// On the last level this reloads the last level.
    ///
    /// # Errors
    ///
    /// Same as [`start_from_level`](Self::start_from_level).
    pub fn load_next_level(&mut self) -> Result<(), SessionError> {
        self.start_from_level(self.current.saturating_add(1))
    }

    /// Discards the loaded level. Later movement commands are rejected until a level is loaded.
    pub fn stop(&mut self) {
        self.game = None;
        self.won = false;
        log::info!("session stopped");
        self.events.push(SessionEvent::Stopped);
    }

    /// Applies a directional command to the loaded level.
    ///
    /// Victory is evaluated after every move that changed the state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejection::NoLevelLoaded`] if no level is loaded.
    /// Returns [`MoveRejection::LevelWon`] if the level is won and movement is locked by
    /// [`WonInputPolicy::Lock`].
    pub fn move_player(&mut self, dir: Direction) -> Result<MoveOutcome, MoveRejection> {
        let Some(game) = self.game.as_mut() else {
            return Err(MoveRejection::NoLevelLoaded);
        };
        if self.won && self.options.won_input_policy.is_lock() {
            return Err(MoveRejection::LevelWon);
        }

        let outcome = game.apply_move(dir);
        log::debug!("move {dir}: {outcome:?}");
        if !outcome.is_applied() {
            return Ok(outcome);
        }

        let newly_won = !self.won && game.is_victory();
        if newly_won {
            self.won = true;
            log::info!(
                "level {} solved in {} moves ({} pushes)",
                self.current,
                game.moves(),
                game.pushes()
            );
        }

        let status = self.status();
        self.events.push(SessionEvent::Moved { outcome, status });
        if newly_won {
            self.events.push(SessionEvent::Victory(status));
        }
        Ok(outcome)
    }

    /// Returns the loaded level, if any.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Returns `true` if a level follows the current one in the level set.
    #[must_use]
    pub fn has_next_level(&self) -> bool {
        self.current.saturating_add(1) < self.level_count()
    }

    /// Returns the index of the current (or most recently loaded) level.
    #[must_use]
    pub fn current_level_index(&self) -> usize {
        self.current
    }

    /// Returns the number of configured levels.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` once the current level has been won. Cleared by any load or [`stop`](Self::stop).
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Returns a snapshot of the session's progress.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            level_index: self.current,
            level_count: self.level_count(),
            won: self.won,
        }
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.game, self.won) {
            (None, _) => SessionPhase::NoLevel,
            (Some(_), false) => SessionPhase::Loaded,
            (Some(_), true) => SessionPhase::Won,
        }
    }

    /// Drains the events queued since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        mem::take(&mut self.events)
    }

    fn load(&mut self, index: usize) -> Result<(), SessionError> {
        let text = self.levels.get(index).ok_or(SessionError::NoLevelsConfigured)?;
        let level = Level::parse(text).map_err(|source| {
            log::warn!("failed to load level {index}: {source}");
            SessionError::Parse { index, source }
        })?;

        let (width, height) = (level.board().width(), level.board().height());
        log::info!(
            "loaded level {index} ({width}x{height}, {} boxes, {} goals)",
            level.boxes().len(),
            level.board().total_goals()
        );

        self.current = index;
        self.game = Some(Game::new(level));
        self.won = false;
        let status = self.status();
        self.events.push(SessionEvent::LevelLoaded(status));
        Ok(())
    }
}
