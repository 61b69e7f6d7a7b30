//! Line protocol spoken with the game host
//!
//! One command per line on stdin, one reply per line on stdout:
//!
//! | Input | Reply |
//! |---|---|
//! | `START <id>` | `OK`; agent plays side `id` (1 or 2) on a freshly seeded board |
//! | `PLACE <row> <col>` | none; records an opponent stone |
//! | `TURN` | `<row> <col>` of the agent's move, which is also played; `-1 -1` if none |
//! | `END` | none; stops the loop |
//!
//! Blank lines are skipped. Malformed lines are logged and skipped.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::board::{Pos, Stone};
use crate::engine::AIEngine;
use crate::error::ProtocolError;

/// A parsed protocol line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start(Stone),
    Place(Pos),
    Turn,
    End,
}

impl Command {
    /// Parse one input line. `Ok(None)` for a blank line.
    ///
    /// Trailing tokens after the expected arguments are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ProtocolError`] describing why the line is unusable.
    pub fn parse(line: &str) -> Result<Option<Self>, ProtocolError> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };

        let command = match keyword {
            "START" => {
                let id = next_int(&mut tokens, "START")?;
                let side = u8::try_from(id)
                    .ok()
                    .and_then(Stone::from_id)
                    .ok_or(ProtocolError::InvalidSide(id))?;
                Command::Start(side)
            }
            "PLACE" => {
                let row = next_int(&mut tokens, "PLACE")?;
                let col = next_int(&mut tokens, "PLACE")?;
                Command::Place(to_pos(row, col)?)
            }
            "TURN" => Command::Turn,
            "END" => Command::End,
            other => return Err(ProtocolError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn next_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<i64, ProtocolError> {
    let token = tokens
        .next()
        .ok_or(ProtocolError::MissingArgument { command })?;
    token.parse().map_err(|_| ProtocolError::InvalidNumber {
        command,
        value: token.to_string(),
    })
}

fn to_pos(row: i64, col: i64) -> Result<Pos, ProtocolError> {
    let r = i32::try_from(row).ok();
    let c = i32::try_from(col).ok();
    r.zip(c)
        .and_then(|(r, c)| Pos::checked(r, c))
        .ok_or(ProtocolError::OffBoard { row, col })
}

/// A line written back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Ok,
    Move(Pos),
    /// No move could be found
    NoMove,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => write!(f, "OK"),
            Reply::Move(pos) => write!(f, "{pos}"),
            Reply::NoMove => write!(f, "-1 -1"),
        }
    }
}

/// Apply `command` to the session and return the reply, if any.
pub fn handle(engine: &mut AIEngine, command: Command) -> Option<Reply> {
    match command {
        Command::Start(side) => {
            engine.start_game(side);
            Some(Reply::Ok)
        }
        Command::Place(pos) => {
            engine.apply_move(pos, engine.agent().opponent());
            None
        }
        Command::Turn => match engine.compute_agent_move() {
            Some(pos) => {
                engine.apply_move(pos, engine.agent());
                Some(Reply::Move(pos))
            }
            None => Some(Reply::NoMove),
        },
        Command::End => None,
    }
}

/// Serve the protocol until `END` or end of input.
///
/// Each reply is flushed as soon as it is written.
///
/// # Errors
///
/// Only I/O errors on `input` or `output` end the loop early.
pub fn run<R: BufRead, W: Write>(
    engine: &mut AIEngine,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!("ignoring input {line:?}: {err}");
                continue;
            }
        };

        if command == Command::End {
            info!("game over");
            break;
        }

        if let Some(reply) = handle(engine, command) {
            writeln!(output, "{reply}")?;
            output.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("START 1"),
            Ok(Some(Command::Start(Stone::Black)))
        );
        assert_eq!(
            Command::parse("START 2\n"),
            Ok(Some(Command::Start(Stone::White)))
        );
        assert_eq!(
            Command::parse("PLACE 3 11"),
            Ok(Some(Command::Place(Pos::new(3, 11))))
        );
        assert_eq!(Command::parse("  TURN  "), Ok(Some(Command::Turn)));
        assert_eq!(Command::parse("END"), Ok(Some(Command::End)));
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("turn"),
            Err(ProtocolError::UnknownCommand("turn".to_string()))
        );
        assert_eq!(
            Command::parse("START"),
            Err(ProtocolError::MissingArgument { command: "START" })
        );
        assert_eq!(
            Command::parse("START 3"),
            Err(ProtocolError::InvalidSide(3))
        );
        assert_eq!(
            Command::parse("START -1"),
            Err(ProtocolError::InvalidSide(-1))
        );
        assert_eq!(
            Command::parse("PLACE 4"),
            Err(ProtocolError::MissingArgument { command: "PLACE" })
        );
        assert_eq!(
            Command::parse("PLACE 4 x"),
            Err(ProtocolError::InvalidNumber {
                command: "PLACE",
                value: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_off_board() {
        assert_eq!(
            Command::parse("PLACE 12 0"),
            Err(ProtocolError::OffBoard { row: 12, col: 0 })
        );
        assert_eq!(
            Command::parse("PLACE 0 -1"),
            Err(ProtocolError::OffBoard { row: 0, col: -1 })
        );
        assert_eq!(
            Command::parse("PLACE 99999999999 0"),
            Err(ProtocolError::OffBoard {
                row: 99_999_999_999,
                col: 0,
            })
        );
    }

    #[test]
    fn test_reply_format() {
        assert_eq!(Reply::Ok.to_string(), "OK");
        assert_eq!(Reply::Move(Pos::new(7, 10)).to_string(), "7 10");
        assert_eq!(Reply::NoMove.to_string(), "-1 -1");
    }
}
