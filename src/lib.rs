pub mod api;
pub mod grid;
pub mod rules;
pub mod solver;
pub mod validate;

pub use api::{check, solve, Outcome, Reply};
pub use grid::{Coord, Grid};
pub use rules::ConflictKind;
pub use validate::ValidationError;
