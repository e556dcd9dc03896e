use pushblock_core::{Board, BoxId, CellState, Direction, Level, Occupancy, Position, TileKind};

use crate::MoveOutcome;

/// A level being played.
///
/// Owns the parsed [`Level`] and applies the move and push rules to it one direction at a time.
/// Every call either fully applies a move or leaves the state untouched.
///
/// # Example
///
/// ```
/// use pushblock_core::{Direction, Level};
/// use pushblock_game::{Game, MoveOutcome};
///
/// let level = Level::parse("#####\n#.BG#\n#P..#\n#####").unwrap();
/// let mut game = Game::new(level);
///
/// assert_eq!(game.apply_move(Direction::Up), MoveOutcome::Moved);
/// assert!(game.apply_move(Direction::Right).is_pushed());
/// assert!(game.is_victory());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    level: Level,
    moves: usize,
    pushes: usize,
}

enum Resolution {
    Blocked,
    Step {
        target: Position,
    },
    Push {
        target: Position,
        dest: Position,
        id: BoxId,
    },
}

impl Game {
    /// Starts playing `level` from its initial state.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            moves: 0,
            pushes: 0,
        }
    }

    /// Returns the underlying level state.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Returns the terrain.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.level.board()
    }

    /// Returns the occupancy grid.
    #[must_use]
    pub fn occupancy(&self) -> &Occupancy {
        self.level.occupancy()
    }

    /// Returns `(width, height)` of the board.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.board().width(), self.board().height())
    }

    /// Returns the tile at `pos`, or `None` if `pos` is off the board.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<TileKind> {
        self.board().tile(pos)
    }

    /// Returns what stands at `pos`, or `None` if `pos` is off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<CellState> {
        self.occupancy().get(pos)
    }

    /// Returns the player's position.
    #[must_use]
    pub fn player(&self) -> Position {
        self.level.player()
    }

    /// Returns the box positions, indexed by stable box id.
    #[must_use]
    pub fn boxes(&self) -> &[Position] {
        self.level.boxes()
    }

    /// Returns the id of the box at `pos`, if any.
    #[must_use]
    pub fn box_at(&self, pos: Position) -> Option<BoxId> {
        self.level.box_at(pos)
    }

    /// Returns the number of goal tiles.
    #[must_use]
    pub fn total_goals(&self) -> usize {
        self.board().total_goals()
    }

    /// Returns the number of boxes resting on goal tiles.
    #[must_use]
    pub fn boxes_on_goals(&self) -> usize {
        self.level.boxes_on_goals()
    }

    /// Returns the number of successful moves (including pushes) since the level was loaded.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Returns the number of pushes since the level was loaded.
    #[must_use]
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Checks whether every goal is covered by a box.
    ///
    /// Evaluated from the running goal coverage counter. A level without goals is never won.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        let total = self.total_goals();
        total > 0 && self.boxes_on_goals() == total
    }

    /// Returns what [`apply_move`](Self::apply_move) would do, without mutating anything.
    #[must_use]
    pub fn move_capability(&self, dir: Direction) -> MoveOutcome {
        match self.resolve(dir) {
            Resolution::Blocked => MoveOutcome::Blocked,
            Resolution::Step { .. } => MoveOutcome::Moved,
            Resolution::Push { id, .. } => MoveOutcome::Pushed { box_id: id },
        }
    }

    /// Moves the player one cell in `dir`, pushing a box if one is in the way.
    ///
    /// The move is blocked when the target cell is off the board or a wall, or when the box in
    /// the way cannot move because the cell behind it is off the board, a wall, or occupied.
    /// A blocked move leaves the game unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the occupancy grid marks a box at a cell where no box is recorded. This can
    /// only happen if the level invariants were already broken.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        let outcome = match self.resolve(dir) {
            Resolution::Blocked => return MoveOutcome::Blocked,
            Resolution::Step { target } => {
                self.level.move_player_to(target);
                MoveOutcome::Moved
            }
            Resolution::Push { target, dest, id } => {
                self.level.move_box(id, dest);
                self.level.move_player_to(target);
                self.pushes += 1;
                MoveOutcome::Pushed { box_id: id }
            }
        };
        self.moves += 1;
        debug_assert_eq!(self.level.check_consistency(), Ok(()));
        outcome
    }

    fn resolve(&self, dir: Direction) -> Resolution {
        let (width, height) = self.dimensions();
        let Some(target) = self.player().step(dir, width, height) else {
            return Resolution::Blocked;
        };
        if self.board()[target].is_wall() {
            return Resolution::Blocked;
        }

        match self.occupancy()[target] {
            CellState::Empty => Resolution::Step { target },
            CellState::Box => {
                let Some(dest) = target.step(dir, width, height) else {
                    return Resolution::Blocked;
                };
                if self.board()[dest].is_wall() || !self.occupancy()[dest].is_empty() {
                    return Resolution::Blocked;
                }
                let Some(id) = self.level.box_at(target) else {
                    unreachable!("occupancy marks a box at {target} but no box is recorded there");
                };
                Resolution::Push { target, dest, id }
            }
            CellState::Player => {
                unreachable!("player at {} found again at {target}", self.player())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn game(text: &str) -> Game {
        Game::new(Level::parse(text).expect("valid level"))
    }

    fn recount_boxes_on_goals(game: &Game) -> usize {
        game.boxes()
            .iter()
            .filter(|&&pos| game.board()[pos].is_goal())
            .count()
    }

    #[test]
    fn test_move_into_empty_cell() {
        let mut game = game("#####\n#P.G#\n#####");
        assert_eq!(game.apply_move(Direction::Right), MoveOutcome::Moved);
        assert_eq!(game.player(), Position::new(2, 1));
        assert_eq!(game.cell(Position::new(1, 1)), Some(CellState::Empty));
        assert_eq!(game.cell(Position::new(2, 1)), Some(CellState::Player));
        assert_eq!(game.moves(), 1);
        assert_eq!(game.pushes(), 0);
    }

    #[test]
    fn test_walking_onto_goal_without_box_is_not_victory() {
        let mut game = game("#####\n#P.G#\n#####");
        assert_eq!(game.apply_move(Direction::Right), MoveOutcome::Moved);
        assert_eq!(game.apply_move(Direction::Right), MoveOutcome::Moved);
        assert_eq!(game.player(), Position::new(3, 1));
        assert_eq!(game.boxes_on_goals(), 0);
        assert_eq!(game.total_goals(), 1);
        assert!(!game.is_victory());
    }

    #[test]
    fn test_push_box_onto_goal_wins() {
        let mut game = game("#####\n#.BG#\n#P..#\n#####");
        assert_eq!(game.apply_move(Direction::Up), MoveOutcome::Moved);
        assert_eq!(
            game.apply_move(Direction::Right),
            MoveOutcome::Pushed {
                box_id: BoxId::new(0)
            }
        );
        assert_eq!(game.boxes(), &[Position::new(3, 2)]);
        assert_eq!(game.player(), Position::new(2, 2));
        assert_eq!(game.boxes_on_goals(), 1);
        assert!(game.is_victory());
        assert_eq!((game.moves(), game.pushes()), (2, 1));
    }

    #[test]
    fn test_push_box_off_goal_clears_victory() {
        let mut game = game("######\n#P*..#\n######");
        assert_eq!(game.boxes_on_goals(), 1);
        assert!(game.is_victory());

        assert!(game.apply_move(Direction::Right).is_pushed());
        assert_eq!(game.boxes_on_goals(), 0);
        assert!(!game.is_victory());
        assert_eq!(game.tile(Position::new(2, 1)), Some(TileKind::Goal));
        assert_eq!(game.cell(Position::new(2, 1)), Some(CellState::Player));
    }

    #[test]
    fn test_level_without_goals_is_never_won() {
        let mut game = game("P.B..");
        assert!(!game.is_victory());
        game.apply_move(Direction::Right);
        game.apply_move(Direction::Right);
        assert_eq!(game.total_goals(), 0);
        assert!(!game.is_victory());
    }

    #[test]
    fn test_blocked_moves() {
        let cases = [
            // wall
            ("#P.", Direction::Left),
            // off-grid
            ("P..", Direction::Left),
            ("P..", Direction::Up),
            // box backed by wall
            ("PB#", Direction::Right),
            // box backed by box
            ("PBB.", Direction::Right),
            // box at the edge
            ("PB", Direction::Right),
        ];
        for (text, dir) in cases {
            let mut game = game(text);
            let before = game.clone();
            assert_eq!(game.move_capability(dir), MoveOutcome::Blocked, "{text} {dir}");
            assert_eq!(game.apply_move(dir), MoveOutcome::Blocked, "{text} {dir}");
            assert_eq!(game, before, "{text} {dir}");
        }
    }

    #[test]
    fn test_vertical_push_uses_bottom_up_rows() {
        // box sits above the player in the drawn level
        let mut game = game(".\nG\nB\nP");
        assert_eq!(game.player(), Position::new(0, 0));
        assert!(game.apply_move(Direction::Up).is_pushed());
        assert_eq!(game.boxes(), &[Position::new(0, 2)]);
        assert!(game.is_victory());
        assert!(game.apply_move(Direction::Up).is_pushed());
        assert_eq!(game.boxes(), &[Position::new(0, 3)]);
        assert!(!game.is_victory());
        assert!(game.apply_move(Direction::Up).is_blocked());
    }

    #[test]
    fn test_box_ids_are_stable() {
        let mut game = game(".B..P.B.");
        assert!(game.apply_move(Direction::Right).is_moved());
        assert_eq!(
            game.apply_move(Direction::Right),
            MoveOutcome::Pushed {
                box_id: BoxId::new(1)
            }
        );
        for _ in 0..4 {
            game.apply_move(Direction::Left);
        }
        assert_eq!(
            game.apply_move(Direction::Left),
            MoveOutcome::Pushed {
                box_id: BoxId::new(0)
            }
        );
        assert_eq!(game.box_at(Position::new(1, 0)), None);
        assert_eq!(game.boxes(), &[Position::new(0, 0), Position::new(7, 0)]);
    }

    #[test]
    fn test_move_capability_matches_apply() {
        let game = game("#####\n#.BG#\n#P..#\n#####");
        for dir in Direction::ALL {
            let mut copy = game.clone();
            assert_eq!(game.move_capability(dir), copy.apply_move(dir));
        }
    }

    const ARENA: &str = "
        #########
        #..G....#
        #.B.B*..#
        #..#..G.#
        #.B.P.B.#
        #G...#..#
        #...*.G.#
        #########
    ";

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_random_moves(dirs in proptest::collection::vec(direction(), 0..200)) {
            let mut game = game(ARENA);
            let box_count = game.boxes().len();
            for dir in dirs {
                let before = game.clone();
                let outcome = game.apply_move(dir);
                if outcome.is_blocked() {
                    prop_assert_eq!(&game, &before);
                } else {
                    prop_assert_ne!(game.player(), before.player());
                }
                prop_assert_eq!(game.occupancy().count(CellState::Player), 1);
                prop_assert_eq!(game.occupancy().count(CellState::Box), box_count);
                prop_assert_eq!(game.boxes_on_goals(), recount_boxes_on_goals(&game));
                prop_assert!(game.level().check_consistency().is_ok());
            }
        }
    }
}
