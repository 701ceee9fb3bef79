//! Backtracking solver for 9×9 sudoku grids.
//!
//! The solver consumes a [`DigitGrid`](soluko_core::DigitGrid) and attempts
//! to complete it into a full valid assignment by exhaustive backtracking:
//! it scans for the first empty cell in row-major order, tries candidates in
//! ascending order, and undoes a placement as soon as the remaining grid
//! proves unsolvable. "No solution exists" is a normal outcome, reported as
//! a plain `None`/`false` rather than an error.
//!
//! # Examples
//!
//! ```
//! use soluko_core::DigitGrid;
//! use soluko_solver::solve;
//!
//! let puzzle: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let solution = solve(&puzzle).expect("puzzle is solvable");
//! assert!(solution.is_complete());
//! ```

pub use self::backtrack::{solve, solve_in_place};

mod backtrack;
