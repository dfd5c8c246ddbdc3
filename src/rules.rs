use std::fmt;

use serde::Serialize;

use crate::grid::{Coord, Digit, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Row,
    Column,
    Region,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Row => "row",
            Self::Column => "column",
            Self::Region => "region",
        })
    }
}

// The predicates never exclude the queried cell itself: probing a coordinate
// that already holds the probed digit reports it as conflicting. The solver
// only calls them on empty cells, where the question does not arise.

pub fn row_has_conflict(grid: &Grid, row: usize, num: Digit) -> bool {
    (0..9).any(|col| grid.get(Coord { row, col }) == num)
}

pub fn col_has_conflict(grid: &Grid, col: usize, num: Digit) -> bool {
    (0..9).any(|row| grid.get(Coord { row, col }) == num)
}

pub fn region_has_conflict(grid: &Grid, row: usize, col: usize, num: Digit) -> bool {
    let br = (row / 3) * 3;
    let bc = (col / 3) * 3;
    (br..br + 3).any(|r| (bc..bc + 3).any(|c| grid.get(Coord { row: r, col: c }) == num))
}

/// Search pruning: a candidate is legal only if no unit conflicts.
pub fn placement_is_legal(grid: &Grid, row: usize, col: usize, num: Digit) -> bool {
    !row_has_conflict(grid, row, num)
        && !col_has_conflict(grid, col, num)
        && !region_has_conflict(grid, row, col, num)
}

/// Runs all three predicates independently (no short-circuit) and collects
/// every failing kind in row, column, region order.
pub fn placement_conflicts(grid: &Grid, coord: Coord, num: Digit) -> Vec<ConflictKind> {
    let mut conflict = Vec::new();
    if row_has_conflict(grid, coord.row, num) {
        conflict.push(ConflictKind::Row);
    }
    if col_has_conflict(grid, coord.col, num) {
        conflict.push(ConflictKind::Column);
    }
    if region_has_conflict(grid, coord.row, coord.col, num) {
        conflict.push(ConflictKind::Region);
    }
    conflict
}
