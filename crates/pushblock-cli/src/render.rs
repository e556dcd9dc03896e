//! Text rendering of the session state.

use pushblock_core::{CellState, Direction, Position, TileKind};
use pushblock_game::{Game, MoveOutcome, Session, SessionPhase};

/// Draws the board top row first, using the level-text alphabet plus `+` for the player on a goal.
pub(crate) fn board(game: &Game) -> String {
    let (width, height) = game.dimensions();
    let mut out = String::with_capacity((width + 1) * height);
    for y in (0..height).rev() {
        for x in 0..width {
            let pos = Position::new(x, y);
            let goal = game.board()[pos] == TileKind::Goal;
            let ch = match (game.board()[pos], game.occupancy()[pos]) {
                (TileKind::Wall, _) => '#',
                (_, CellState::Player) if goal => '+',
                (_, CellState::Player) => 'P',
                (_, CellState::Box) if goal => '*',
                (_, CellState::Box) => 'B',
                (TileKind::Goal, CellState::Empty) => 'G',
                (TileKind::Floor, CellState::Empty) => '.',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Lists what a move in each direction would do.
pub(crate) fn hints(game: &Game) -> String {
    Direction::ALL
        .into_iter()
        .map(|dir| match game.move_capability(dir) {
            MoveOutcome::Moved => format!("{dir}: move"),
            MoveOutcome::Pushed { box_id } => format!("{dir}: push box {box_id}"),
            MoveOutcome::Blocked => format!("{dir}: blocked"),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// One-line summary of the session progress.
pub(crate) fn status_line(session: &Session) -> String {
    let status = session.status();
    let level = format!("Level {}/{}", status.level_index + 1, status.level_count);
    let Some(game) = session.game() else {
        return format!("{level}  not playing (start: play from level 1, q: quit)");
    };
    let progress = format!(
        "{level}  moves: {}  pushes: {}  goals: {}/{}",
        game.moves(),
        game.pushes(),
        game.boxes_on_goals(),
        game.total_goals()
    );
    match session.phase() {
        SessionPhase::Won if session.has_next_level() => {
            format!("{progress}  SOLVED! (n: next level, r: restart, m: menu)")
        }
        SessionPhase::Won => format!("{progress}  ALL LEVELS SOLVED! (r: restart, m: menu)"),
        SessionPhase::Loaded | SessionPhase::NoLevel => progress,
    }
}

#[cfg(test)]
mod tests {
    use pushblock_core::{Direction, Level};

    use super::*;

    #[test]
    fn test_board_round_trips_initial_level() {
        let text = "#####\n#.BG#\n#P.*#\n#####\n";
        let game = Game::new(Level::parse(text).unwrap());
        assert_eq!(board(&game), text);
    }

    #[test]
    fn test_board_marks_player_on_goal() {
        let mut game = Game::new(Level::parse("#P.G#").unwrap());
        game.apply_move(Direction::Right);
        game.apply_move(Direction::Right);
        assert_eq!(board(&game), "#..+#\n");
    }

    #[test]
    fn test_status_line_reports_progress() {
        let mut session = Session::new(
            ["#PBG#", "#P.BG#"].into_iter().collect(),
            pushblock_game::SessionOptions::default(),
        );
        assert_eq!(
            status_line(&session),
            "Level 1/2  not playing (start: play from level 1, q: quit)"
        );
        session.start_from_level(0).unwrap();
        assert_eq!(status_line(&session), "Level 1/2  moves: 0  pushes: 0  goals: 0/1");
        session.move_player(Direction::Right).unwrap();
        assert_eq!(
            status_line(&session),
            "Level 1/2  moves: 1  pushes: 1  goals: 1/1  SOLVED! (n: next level, r: restart, m: menu)"
        );
    }

    #[test]
    fn test_status_line_hides_next_on_last_level() {
        let mut session = Session::new(
            ["#PBG#"].into_iter().collect(),
            pushblock_game::SessionOptions::default(),
        );
        session.start_from_level(0).unwrap();
        session.move_player(Direction::Right).unwrap();
        let line = status_line(&session);
        assert!(line.ends_with("ALL LEVELS SOLVED! (r: restart, m: menu)"));
        assert!(!line.contains("next level"));
    }

    #[test]
    fn test_hints_report_each_direction() {
        let game = Game::new(Level::parse("#####\n#.BG#\n#P..#\n#####").unwrap());
        assert_eq!(
            hints(&game),
            "up: move  down: blocked  left: blocked  right: move"
        );
        let game = Game::new(Level::parse("#PBG#").unwrap());
        assert_eq!(
            hints(&game),
            "up: blocked  down: blocked  left: blocked  right: push box #0"
        );
        assert_eq!(game.moves(), 0);
    }
}
