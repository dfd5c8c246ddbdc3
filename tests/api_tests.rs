use pretty_assertions::assert_eq;
use serde_json::{json, to_value, Value};
use sudoq::api::{self, Outcome};

const PUZZLE: &str =
    "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
const SOLUTION: &str =
    "135762984946381257728459613694517832812936745357824196473298561581673429269145378";
const UNSOLVABLE: &str =
    "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.375";

fn solve_json(puzzle: Option<&str>) -> Value {
    to_value(api::solve_request(puzzle)).unwrap()
}

fn check_json(puzzle: Option<&str>, coordinate: Option<&str>, value: Option<&str>) -> Value {
    to_value(api::check_request(puzzle, coordinate, value)).unwrap()
}

#[test]
fn solve_returns_the_solution() {
    assert_eq!(solve_json(Some(PUZZLE)), json!({ "solution": SOLUTION }));
}

#[test]
fn solve_requires_the_puzzle_field() {
    assert_eq!(solve_json(None), json!({ "error": "Required field missing" }));
    // Empty string counts as absent, not as a length error.
    assert_eq!(solve_json(Some("")), json!({ "error": "Required field missing" }));
}

#[test]
fn solve_rejects_invalid_characters() {
    let bad = format!("{}b.", &PUZZLE[..79]);
    assert_eq!(
        solve_json(Some(&bad)),
        json!({ "error": "Invalid characters in puzzle" })
    );
}

#[test]
fn solve_rejects_wrong_length() {
    assert_eq!(
        solve_json(Some("1.5..2.84..63.12.7.2..5.....9..1.")),
        json!({ "error": "Expected puzzle to be 81 characters long" })
    );
}

#[test]
fn solve_reports_an_unsolvable_puzzle() {
    assert_eq!(
        solve_json(Some(UNSOLVABLE)),
        json!({ "error": "Puzzle cannot be solved" })
    );
}

#[test]
fn check_with_no_conflict() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A2"), Some("3")),
        json!({ "valid": true })
    );
}

#[test]
fn check_with_one_conflict() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A2"), Some("7")),
        json!({ "valid": false, "conflict": ["column"] })
    );
}

#[test]
fn check_with_two_conflicts() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A5"), Some("4")),
        json!({ "valid": false, "conflict": ["row", "column"] })
    );
}

#[test]
fn check_with_three_conflicts() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("F4"), Some("3")),
        json!({ "valid": false, "conflict": ["row", "column", "region"] })
    );
}

#[test]
fn check_against_the_cells_own_digit_conflicts_with_itself() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A1"), Some("1")),
        json!({ "valid": false, "conflict": ["row", "column", "region"] })
    );
}

#[test]
fn check_requires_all_fields() {
    let expected = json!({ "error": "Required field(s) missing" });
    assert_eq!(check_json(None, Some("A2"), Some("7")), expected);
    assert_eq!(check_json(Some(PUZZLE), None, Some("7")), expected);
    assert_eq!(check_json(Some(PUZZLE), Some("A2"), None), expected);
    assert_eq!(check_json(Some(PUZZLE), Some(""), Some("7")), expected);
}

#[test]
fn check_rejects_invalid_characters() {
    let bad = format!("{}b.", &PUZZLE[..79]);
    assert_eq!(
        check_json(Some(&bad), Some("A2"), Some("7")),
        json!({ "error": "Invalid characters in puzzle" })
    );
}

#[test]
fn check_rejects_wrong_length() {
    assert_eq!(
        check_json(Some("1.5..2.84..63.12.7.2..5.....9..1."), Some("A2"), Some("7")),
        json!({ "error": "Expected puzzle to be 81 characters long" })
    );
}

#[test]
fn check_rejects_a_bad_coordinate() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("R0"), Some("9")),
        json!({ "error": "Invalid coordinate" })
    );
}

#[test]
fn check_rejects_a_bad_value() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("A1"), Some("0")),
        json!({ "error": "Invalid value" })
    );
}

#[test]
fn check_validates_coordinate_before_value() {
    assert_eq!(
        check_json(Some(PUZZLE), Some("XX"), Some("0")),
        json!({ "error": "Invalid coordinate" })
    );
}

#[test]
fn outcome_variants_cross_the_boundary_as_data() {
    assert_eq!(api::check(PUZZLE, "A2", "3"), Outcome::Valid);
    assert_eq!(api::solve(PUZZLE), Outcome::Solved(SOLUTION.to_string()));
    assert_eq!(api::solve(UNSOLVABLE), Outcome::Unsolvable);
}
