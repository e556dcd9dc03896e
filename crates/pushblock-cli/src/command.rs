//! Parsing of interactive input lines.

use pushblock_core::Direction;

/// A single user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Move(Direction),
    Restart,
    Next,
    Start(usize),
    Menu,
    Hint,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown command `{input}` (type `?` for help)")]
pub(crate) struct UnknownCommand {
    input: String,
}

pub(crate) const HELP: &str = "\
commands:
  w / up        move up
  s / down      move down
  a / left      move left
  d / right     move right
  r / restart   restart the level
  n / next      load the next level
  start [N]     start playing from level N (default 1)
  m / menu      leave the current level
  h / hint      show what each direction would do
  ? / help      show this help
  q / quit      exit
several single-letter commands can be typed on one line, e.g. `ddwa`";

/// Parses one input line into commands.
///
/// A line is either a single command word or a run of single-letter commands.
pub(crate) fn parse_line(line: &str) -> Result<Vec<Command>, UnknownCommand> {
    let line = line.trim().to_ascii_lowercase();
    let mut words = line.split_whitespace();
    let word = match (words.next(), words.next(), words.next()) {
        (Some("up"), None, _) => Some(Command::Move(Direction::Up)),
        (Some("down"), None, _) => Some(Command::Move(Direction::Down)),
        (Some("left"), None, _) => Some(Command::Move(Direction::Left)),
        (Some("right"), None, _) => Some(Command::Move(Direction::Right)),
        (Some("restart"), None, _) => Some(Command::Restart),
        (Some("next"), None, _) => Some(Command::Next),
        (Some("start"), None, _) => Some(Command::Start(0)),
        (Some("start"), Some(number), None) => match number.parse::<usize>() {
            Ok(number) => Some(Command::Start(number.saturating_sub(1))),
            Err(_) => return Err(UnknownCommand { input: line }),
        },
        (Some("menu"), None, _) => Some(Command::Menu),
        (Some("hint"), None, _) => Some(Command::Hint),
        (Some("help"), None, _) => Some(Command::Help),
        (Some("quit" | "exit"), None, _) => Some(Command::Quit),
        _ => None,
    };
    if let Some(command) = word {
        return Ok(vec![command]);
    }

    line.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch {
            'w' => Ok(Command::Move(Direction::Up)),
            's' => Ok(Command::Move(Direction::Down)),
            'a' => Ok(Command::Move(Direction::Left)),
            'd' => Ok(Command::Move(Direction::Right)),
            'r' => Ok(Command::Restart),
            'n' => Ok(Command::Next),
            'm' => Ok(Command::Menu),
            'h' => Ok(Command::Hint),
            '?' => Ok(Command::Help),
            'q' => Ok(Command::Quit),
            input => Err(UnknownCommand {
                input: input.to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words_and_letters() {
        assert_eq!(
            parse_line("  Right \n"),
            Ok(vec![Command::Move(Direction::Right)])
        );
        assert_eq!(
            parse_line("ddW a"),
            Ok(vec![
                Command::Move(Direction::Right),
                Command::Move(Direction::Right),
                Command::Move(Direction::Up),
                Command::Move(Direction::Left),
            ])
        );
        assert_eq!(parse_line("rnq"), Ok(vec![Command::Restart, Command::Next, Command::Quit]));
        assert_eq!(parse_line(""), Ok(vec![]));
    }

    #[test]
    fn test_parse_unknown_letter() {
        let err = parse_line("dx").unwrap_err();
        assert_eq!(err.input, "x");
        assert_eq!(err.to_string(), "unknown command `x` (type `?` for help)");
    }

    #[test]
    fn test_parse_menu_and_start() {
        assert_eq!(parse_line("menu"), Ok(vec![Command::Menu]));
        assert_eq!(parse_line("m"), Ok(vec![Command::Menu]));
        assert_eq!(parse_line("start"), Ok(vec![Command::Start(0)]));
        assert_eq!(parse_line("Start 3"), Ok(vec![Command::Start(2)]));
        assert_eq!(parse_line("start 0"), Ok(vec![Command::Start(0)]));
        assert_eq!(parse_line("hint"), Ok(vec![Command::Hint]));
        assert_eq!(parse_line("hd"), Ok(vec![Command::Hint, Command::Move(Direction::Right)]));
    }

    #[test]
    fn test_parse_start_rejects_bad_level_number() {
        let err = parse_line("start two").unwrap_err();
        assert_eq!(err.to_string(), "unknown command `start two` (type `?` for help)");
        assert!(parse_line("start 1 2").is_err());
    }
}
