use thiserror::Error;

use crate::grid::{Coord, Digit};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Expected puzzle to be 81 characters long")]
    Length,
    #[error("Invalid characters in puzzle")]
    Characters,
    #[error("Invalid coordinate")]
    Coordinate,
    #[error("Invalid value")]
    Value,
}

pub fn length(s: &str) -> Result<(), ValidationError> {
    if s.len() == 81 {
        Ok(())
    } else {
        Err(ValidationError::Length)
    }
}

pub fn characters(s: &str) -> Result<(), ValidationError> {
    if s.chars().all(|ch| matches!(ch, '1'..='9' | '.')) {
        Ok(())
    } else {
        Err(ValidationError::Characters)
    }
}

/// Length first; a wrong-length string never reports a character error.
pub fn puzzle(s: &str) -> Result<(), ValidationError> {
    length(s)?;
    characters(s)
}

/// Two characters: a row letter A-I (either case) and a column digit 1-9.
pub fn coordinate(s: &str) -> Result<Coord, ValidationError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter @ ('a'..='i' | 'A'..='I')), Some(digit @ '1'..='9'), None) => Ok(Coord {
            row: (letter.to_ascii_uppercase() as u8 - b'A') as usize,
            col: (digit as u8 - b'1') as usize,
        }),
        _ => Err(ValidationError::Coordinate),
    }
}

/// Exactly one digit 1-9; zero and multi-digit values are rejected.
pub fn value(s: &str) -> Result<Digit, ValidationError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(digit @ '1'..='9'), None) => Ok(digit as u8 - b'0'),
        _ => Err(ValidationError::Value),
    }
}
