//! Core data structures for the Soluko sudoku editor and solver.
//!
//! This crate provides the grid-validity model shared by the solver and the
//! editor: type-safe digits and positions, houses (rows, columns, and 3×3
//! boxes), candidate sets, and the 9×9 grid itself with parsing, formatting,
//! and consistency checking.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`position`]: Cell coordinates with the row-major scan order used by
//!   the solver
//! - [`house`]: Rows, columns, and boxes as first-class units
//! - [`digit_set`]: Sets of digits, used for candidates and duplicate
//!   tracking
//! - [`grid`]: The 9×9 grid of optional digits, including the
//!   placement-validity predicate and givens-consistency check
//!
//! # Examples
//!
//! ```
//! use soluko_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//!
//! // 5 is no longer a candidate anywhere in row 0, column 0, or box 0
//! assert!(!grid.candidates_at(Position::new(4, 0)).contains(Digit::D5));
//! assert!(!grid.candidates_at(Position::new(0, 4)).contains(Digit::D5));
//! assert!(!grid.candidates_at(Position::new(1, 1)).contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Conflict, DigitGrid, ParseGridError},
    house::House,
    position::Position,
};
