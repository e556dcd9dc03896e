//! Rules and session handling for box-pushing puzzles.
//!
//! This crate turns the data model of `pushblock-core` into a playable game:
//!
//! - [`Game`]: the movement and push engine for one loaded level, plus victory evaluation
//! - [`Session`]: level selection, (re)loading, and command dispatch over a [`LevelSet`]
//!
//! Presentation layers drive a [`Session`] with commands and observe it through read-only
//! queries and [`SessionEvent`]s. They never mutate game state directly.
//!
//! # Example
//!
//! ```
//! use pushblock_core::Direction;
//! use pushblock_game::{LevelSet, MoveRejection, Session, SessionOptions};
//!
//! let levels = LevelSet::new(vec!["#####\n#.BG#\n#P..#\n#####".to_owned()]);
//! let mut session = Session::new(levels, SessionOptions::default());
//! assert_eq!(
//!     session.move_player(Direction::Up),
//!     Err(MoveRejection::NoLevelLoaded)
//! );
//!
//! session.start_from_level(0).unwrap();
//! session.move_player(Direction::Up).unwrap();
//! session.move_player(Direction::Right).unwrap();
//! assert!(session.is_won());
//! ```

pub use self::{error::*, game::*, level_set::*, outcome::*, session::*};

mod error;
mod game;
mod level_set;
mod outcome;
mod session;
