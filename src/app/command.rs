// SPDX-License-Identifier: MPL-2.0
//! Parser for the console control protocol.
//!
//! One command per line; the first word is the verb and the rest are its
//! arguments. Paths keep their inner spaces because everything after the
//! verb is taken verbatim for `add`, `add-dir` and `export`.

use super::Command;
use crate::domain::media::Dimensions;
use std::path::PathBuf;
use thiserror::Error;

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// A command for the control session.
    Session(Command),
    /// Print the playlist.
    List,
    /// Print the selection, preview and display state.
    Status,
    /// Write the diagnostics report, to the config directory when no path
    /// is given.
    Export(Option<PathBuf>),
    Help,
    Quit,
}

/// Why a console line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty line")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

/// Usage text printed by `help`.
pub const USAGE: &str = "\
commands:
  add PATH            add a media file
  add-dir DIR         add every media file in a folder
  remove              remove the selected file
  clear               remove all files
  select N            select file N (0-based)
  up | down           move the selected file
  move FROM TO        move a file
  show                show the selected file on the display
  open | close        open or close the display
  pause | resume      control video playback
  stop                blank the display
  resize W H          report new display bounds
  list | status       print the playlist or the current state
  export [PATH]       write the diagnostics report
  quit";

/// Parses one console line.
///
/// # Errors
///
/// Returns a [`ParseError`] for blank lines, unknown verbs and malformed
/// arguments.
pub fn parse_line(line: &str) -> Result<ConsoleCommand, ParseError> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let command = match verb {
        "" => return Err(ParseError::Empty),
        "add" => Command::AddFiles(vec![required_path("add", rest)?]),
        "add-dir" => Command::AddDirectory(required_path("add-dir", rest)?),
        "remove" => Command::RemoveSelected,
        "clear" => Command::ClearAll,
        "select" => Command::Select(single_number("select", rest)?),
        "up" => Command::MoveUp,
        "down" => Command::MoveDown,
        "move" => {
            let (from, to) = two_numbers("move", rest)?;
            Command::Move { from, to }
        }
        "show" => Command::ShowOnDisplay,
        "open" => Command::OpenDisplay,
        "close" => Command::CloseDisplay,
        "pause" => Command::Pause,
        "resume" => Command::Resume,
        "stop" => Command::StopDisplay,
        "resize" => {
            let (width, height) = two_numbers::<u32>("resize", rest)?;
            Command::SurfaceResized(Dimensions::new(width, height))
        }
        "list" => return Ok(ConsoleCommand::List),
        "status" => return Ok(ConsoleCommand::Status),
        "export" => {
            let path = rest.trim_matches('"');
            return Ok(ConsoleCommand::Export(
                (!path.is_empty()).then(|| PathBuf::from(path)),
            ));
        }
        "help" | "?" => return Ok(ConsoleCommand::Help),
        "quit" | "exit" => return Ok(ConsoleCommand::Quit),
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(ConsoleCommand::Session(command))
}

fn required_path(command: &'static str, rest: &str) -> Result<PathBuf, ParseError> {
    let rest = rest.trim_matches('"');
    if rest.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            expected: "a path",
        });
    }
    Ok(PathBuf::from(rest))
}

fn single_number(command: &'static str, rest: &str) -> Result<usize, ParseError> {
    let mut words = rest.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => parse_number(word),
        _ => Err(ParseError::MissingArgument {
            command,
            expected: "one number",
        }),
    }
}

fn two_numbers<T: std::str::FromStr>(
    command: &'static str,
    rest: &str,
) -> Result<(T, T), ParseError> {
    let mut words = rest.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(first), Some(second), None) => Ok((parse_number(first)?, parse_number(second)?)),
        _ => Err(ParseError::MissingArgument {
            command,
            expected: "two numbers",
        }),
    }
}

fn parse_number<T: std::str::FromStr>(word: &str) -> Result<T, ParseError> {
    word.parse()
        .map_err(|_| ParseError::InvalidNumber(word.to_string()))
}
