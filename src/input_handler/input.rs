//! Move input parsing.

use std::io;
use std::str::FromStr;

use common::Position;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H][1-8])[ -]?([a-hA-H][1-8])$").expect("COORD_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MoveInput {
    Coordinate { from: Position, to: Position },
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || InputError::InvalidInput {
            input: trimmed.to_string(),
        };

        match trimmed.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Err(InputError::UserExit),
            "hint" | "engine" => return Ok(MoveInput::UseEngine),
            _ => (),
        }

        let caps = COORD_RE.captures(trimmed).ok_or_else(invalid)?;
        let from = Position::from_algebraic(&caps[1]).map_err(|_| invalid())?;
        let to = Position::from_algebraic(&caps[2]).map_err(|_| invalid())?;

        Ok(MoveInput::Coordinate { from, to })
    }
}

/// Reads one line from stdin and parses it as a move.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    // end of input
    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

/// Parses a whitespace separated list of coordinate moves, e.g. `e2e4 e7e5`.
pub fn parse_move_list(moves: &str) -> Result<Vec<(Position, Position)>, InputError> {
    moves
        .split_whitespace()
        .map(|token| match token.parse()? {
            MoveInput::Coordinate { from, to } => Ok((from, to)),
            MoveInput::UseEngine => Err(InputError::InvalidInput {
                input: token.to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::position::*;

    #[test]
    fn test_parse_coordinate_moves() {
        let expected = MoveInput::Coordinate { from: E2, to: E4 };
        assert_eq!(Ok(expected), "e2e4".parse());
        assert_eq!(Ok(expected), "e2 e4".parse());
        assert_eq!(Ok(expected), "E2-E4".parse());
        assert_eq!(Ok(expected), "  e2e4\n".parse());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Err(InputError::UserExit), "quit".parse::<MoveInput>());
        assert_eq!(Ok(MoveInput::UseEngine), "hint".parse::<MoveInput>());
    }

    #[test]
    fn test_parse_invalid_input() {
        assert_eq!(
            Err(InputError::InvalidInput {
                input: "e9e4".to_string()
            }),
            "e9e4".parse::<MoveInput>()
        );
        assert!("Nf3".parse::<MoveInput>().is_err());
    }

    #[test]
    fn test_parse_move_list() {
        assert_eq!(
            Ok(vec![(E2, E4), (E7, E5)]),
            parse_move_list("e2e4 e7e5")
        );
        assert!(parse_move_list("e2e4 hint").is_err());
        assert_eq!(Ok(vec![]), parse_move_list(""));
    }
}
