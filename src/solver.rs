use crate::grid::Grid;
use crate::rules;

/// Fills every empty cell in place, visiting cells row-major and trying
/// candidates 1-9 in ascending order, so the first completion found is the
/// lexicographically smallest one reachable. Returns `false` with the grid
/// restored to its input state when no completion exists.
pub fn solve(grid: &mut Grid) -> bool {
    fn search(grid: &mut Grid, from: usize) -> bool {
        let Some(idx) = (from..81).find(|&i| grid.cells[i] == 0) else {
            return true;
        };
        let (row, col) = (idx / 9, idx % 9);
        for num in 1..=9u8 {
            if rules::placement_is_legal(grid, row, col, num) {
                grid.cells[idx] = num;
                if search(grid, idx + 1) {
                    return true;
                }
                grid.cells[idx] = 0;
            }
        }
        false
    }

    let empty = grid.cells.iter().filter(|&&d| d == 0).count();
    log::debug!("search start: {empty} empty cells");
    let solved = search(grid, 0);
    log::debug!("search {}", if solved { "solved" } else { "exhausted" });
    solved
}
