//! Pushblock terminal front end.
//!
//! Plays a level set in the terminal. Levels come from the files given with `--level`, one level
//! per file, or from the bundled set when none are given.
//!
//! # Usage
//!
//! ```sh
//! pushblock
//! pushblock --level first.txt --level second.txt --start 1
//! pushblock --script "wddsa"
//! RUST_LOG=debug pushblock
//! ```

use std::{
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
    process,
};

use clap::Parser;
use pushblock_game::{
    MoveRejection, Session, SessionError, SessionEvent, SessionOptions, WonInputPolicy,
};

use crate::command::{Command, UnknownCommand};

mod command;
mod levels;
mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Level file to play, one level per file. Repeatable; played in the given order.
    #[arg(short, long = "level", value_name = "FILE")]
    levels: Vec<PathBuf>,

    /// Index of the first level to load (clamped to the last level).
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    start: usize,

    /// Keep accepting moves after a level is won.
    #[arg(long)]
    allow_moves_after_win: bool,

    /// Apply these commands non-interactively, print the final state, and exit.
    #[arg(long, value_name = "COMMANDS")]
    script: Option<String>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    #[display("{_0}")]
    Session(#[from] SessionError),
    #[display("{_0}")]
    Command(#[from] UnknownCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let levels = if args.levels.is_empty() {
        levels::builtin()
    } else {
        levels::from_files(&args.levels)?
    };
    let options = SessionOptions {
        won_input_policy: if args.allow_moves_after_win {
            WonInputPolicy::Allow
        } else {
            WonInputPolicy::Lock
        },
    };

    let mut session = Session::new(levels, options);
    session.start_from_level(args.start)?;

    let mut stdout = io::stdout().lock();
    if let Some(script) = &args.script {
        let commands = command::parse_line(script)?;
        for command in commands {
            if execute(&mut session, command, &mut stdout)? == Flow::Quit {
                break;
            }
        }
        report(&mut session, &mut stdout)?;
        return Ok(());
    }

    report(&mut session, &mut stdout)?;
    writeln!(stdout, "{}", command::HELP)?;
    for line in io::stdin().lock().lines() {
        let commands = match command::parse_line(&line?) {
            Ok(commands) => commands,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };
        let mut flow = Flow::Continue;
        for command in commands {
            flow = execute(&mut session, command, &mut stdout)?;
            if flow == Flow::Quit {
                break;
            }
        }
        report(&mut session, &mut stdout)?;
        if flow == Flow::Quit {
            break;
        }
    }

    session.stop();
    Ok(())
}

fn execute(
    session: &mut Session,
    command: Command,
    out: &mut impl io::Write,
) -> Result<Flow, CliError> {
    let result = match command {
        Command::Move(dir) => {
            match session.move_player(dir) {
                Ok(_) => {}
                Err(MoveRejection::LevelWon) if session.has_next_level() => {
                    writeln!(out, "level solved: press `n` for the next level or `r` to restart")?;
                }
                Err(MoveRejection::LevelWon) => {
                    writeln!(out, "all levels solved: press `r` to restart or `m` for the menu")?;
                }
                Err(rejection @ MoveRejection::NoLevelLoaded) => writeln!(out, "{rejection}")?,
            }
            Ok(())
        }
        Command::Restart => session.restart_level(),
        Command::Next => session.load_next_level(),
        Command::Start(index) => session.start_from_level(index),
        Command::Menu => {
            session.stop();
            Ok(())
        }
        Command::Hint => {
            match session.game() {
                Some(game) => writeln!(out, "{}", render::hints(game))?,
                None => writeln!(out, "{}", MoveRejection::NoLevelLoaded)?,
            }
            Ok(())
        }
        Command::Help => {
            writeln!(out, "{}", command::HELP)?;
            Ok(())
        }
        Command::Quit => return Ok(Flow::Quit),
    };
    if let Err(err) = result {
        // failed loads leave the previous level in place
        writeln!(out, "{err}")?;
    }
    Ok(Flow::Continue)
}

fn report(session: &mut Session, out: &mut impl io::Write) -> Result<(), CliError> {
    for event in session.take_events() {
        match event {
            SessionEvent::LevelLoaded(status) => {
                writeln!(out, "== level {} of {} ==", status.level_index + 1, status.level_count)?;
            }
            SessionEvent::Victory(status) => {
                writeln!(out, "*** level {} solved! ***", status.level_index + 1)?;
            }
            SessionEvent::Stopped => writeln!(out, "== menu ==")?,
            SessionEvent::Moved { .. } => {}
        }
    }
    if let Some(game) = session.game() {
        write!(out, "{}", render::board(game))?;
    }
    writeln!(out, "{}", render::status_line(session))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pushblock_core::Direction;

    use super::*;

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        for command in command::parse_line(script).unwrap() {
            execute(session, command, &mut out).unwrap();
        }
        report(session, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_stops_and_start_resumes() {
        let mut session = Session::new(levels::builtin(), SessionOptions::default());
        session.start_from_level(0).unwrap();
        session.take_events();

        let out = run_script(&mut session, "menu");
        assert!(session.phase().is_no_level());
        assert!(out.contains("== menu =="));
        assert!(out.contains("not playing"));

        let out = run_script(&mut session, "d");
        assert!(out.starts_with("no level is loaded\n"));

        let out = run_script(&mut session, "start 2");
        assert_eq!(session.current_level_index(), 1);
        assert!(out.starts_with("== level 2 of 3 ==\n"));
    }

    #[test]
    fn test_hint_does_not_move() {
        let mut session = Session::new(levels::builtin(), SessionOptions::default());
        session.start_from_level(0).unwrap();
        session.take_events();

        let out = run_script(&mut session, "h");
        assert!(out.starts_with("up: blocked  down: blocked  left: blocked  right: move\n"));
        assert_eq!(session.game().unwrap().moves(), 0);
    }

    #[test]
    fn test_last_level_win_offers_no_next_level() {
        let mut session = Session::new(levels::builtin(), SessionOptions::default());
        session.start_from_level(0).unwrap();
        for _ in 0..3 {
            session.move_player(Direction::Right).unwrap();
        }
        assert!(session.is_won());
        assert!(run_script(&mut session, "d").starts_with("level solved: press `n`"));

        let mut session = Session::new(
            ["#PBG#"].into_iter().collect(),
            SessionOptions::default(),
        );
        session.start_from_level(0).unwrap();
        let out = run_script(&mut session, "dd");
        assert!(out.starts_with("all levels solved"));
        assert!(!out.contains("next level"));
    }
}
