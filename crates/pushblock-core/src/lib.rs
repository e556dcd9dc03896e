//! Core data structures for box-pushing puzzles.
//!
//! This crate provides the pure data model of a level: the static terrain, the dynamic
//! occupancy lookup, entity positions, and the parser that builds all of them from ASCII text.
//! Movement rules and session handling live in `pushblock-game`.
//!
//! # Overview
//!
//! - [`position`]: [`Position`] coordinates and the four [`Direction`]s
//! - [`board`]: [`Board`], the immutable grid of [`TileKind`]s
//! - [`occupancy`]: [`Occupancy`], the per-cell [`CellState`] lookup
//! - [`level`]: [`Level`], the parser and entity bookkeeping
//! - [`error`]: [`ParseError`] and [`ConsistencyError`]
//!
//! # Coordinates
//!
//! Row 0 is the *bottom* row as the level is drawn: the last line of the level text maps to
//! `y == 0`, and [`Direction::Up`] increases `y`.
//!
//! # Examples
//!
//! ```
//! use pushblock_core::{CellState, Direction, Level, Position, TileKind};
//!
//! let level = Level::parse("#####\n#P.G#\n#####").unwrap();
//!
//! let next = level.player().step(Direction::Right, 5, 3).unwrap();
//! assert_eq!(next, Position::new(2, 1));
//! assert_eq!(level.board()[next], TileKind::Floor);
//! assert_eq!(level.occupancy()[next], CellState::Empty);
//! ```

pub mod board;
pub mod error;
pub mod level;
pub mod occupancy;
pub mod position;

pub use self::{
    board::{Board, TileKind},
    error::{ConsistencyError, MalformedReason, ParseError},
    level::{BoxId, Level},
    occupancy::{CellState, Occupancy},
    position::{Direction, Position},
};
