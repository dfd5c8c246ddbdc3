use serde::Serialize;

use crate::grid::Grid;
use crate::rules::{self, ConflictKind};
use crate::solver;
use crate::validate::{self, ValidationError};

/// Result of one core operation, as data; the transport layer maps each
/// variant to its wire shape verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved(String),
    Unsolvable,
    Valid,
    Invalid(Vec<ConflictKind>),
    BadInput(ValidationError),
}

pub fn solve(puzzle: &str) -> Outcome {
    if let Err(e) = validate::puzzle(puzzle) {
        return Outcome::BadInput(e);
    }
    let mut grid = Grid::decode(puzzle);
    if solver::solve(&mut grid) {
        Outcome::Solved(grid.encode())
    } else {
        Outcome::Unsolvable
    }
}

/// Validates puzzle, coordinate, and value in that order (first failure
/// wins), then reports every conflicting unit for the candidate placement.
pub fn check(puzzle: &str, coordinate: &str, value: &str) -> Outcome {
    if let Err(e) = validate::puzzle(puzzle) {
        return Outcome::BadInput(e);
    }
    let coord = match validate::coordinate(coordinate) {
        Ok(c) => c,
        Err(e) => return Outcome::BadInput(e),
    };
    let num = match validate::value(value) {
        Ok(v) => v,
        Err(e) => return Outcome::BadInput(e),
    };
    let grid = Grid::decode(puzzle);
    let conflict = rules::placement_conflicts(&grid, coord, num);
    if conflict.is_empty() {
        Outcome::Valid
    } else {
        Outcome::Invalid(conflict)
    }
}

/// Wire form of an outcome. Serializes to exactly one of `{"solution"}`,
/// `{"valid": true}`, `{"valid": false, "conflict": [...]}`, `{"error"}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Solution {
        solution: String,
    },
    Placement {
        valid: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        conflict: Option<Vec<ConflictKind>>,
    },
    Error {
        error: String,
    },
}

impl From<Outcome> for Reply {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Solved(solution) => Reply::Solution { solution },
            Outcome::Unsolvable => Reply::Error {
                error: "Puzzle cannot be solved".into(),
            },
            Outcome::Valid => Reply::Placement {
                valid: true,
                conflict: None,
            },
            Outcome::Invalid(conflict) => Reply::Placement {
                valid: false,
                conflict: Some(conflict),
            },
            Outcome::BadInput(e) => Reply::Error {
                error: e.to_string(),
            },
        }
    }
}

// Empty fields count as absent, like the original route layer's falsy check.
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

pub fn solve_request(puzzle: Option<&str>) -> Reply {
    match present(puzzle) {
        Some(p) => solve(p).into(),
        None => Reply::Error {
            error: "Required field missing".into(),
        },
    }
}

pub fn check_request(puzzle: Option<&str>, coordinate: Option<&str>, value: Option<&str>) -> Reply {
    match (present(puzzle), present(coordinate), present(value)) {
        (Some(p), Some(c), Some(v)) => check(p, c, v).into(),
        _ => Reply::Error {
            error: "Required field(s) missing".into(),
        },
    }
}
