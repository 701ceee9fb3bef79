use soluko_core::{Digit, DigitGrid};

/// Attempts to complete `grid` into a full valid sudoku assignment.
///
/// On success, returns the completed grid; the caller's grid is never
/// modified. Returns `None` when no valid assignment of the empty cells
/// exists, including when the fixed cells already violate row/column/box
/// uniqueness.
///
/// The search is deterministic: empty cells are targeted in row-major order
/// and candidates are tried in ascending order, so identical inputs always
/// produce the identical first-found solution. That solution is an artifact
/// of this search order, not necessarily the lexicographically smallest
/// completion.
///
/// For sparsely-constrained inputs the exhaustive search can take a long
/// time; it runs to completion on the calling thread with no yielding or
/// cancellation.
///
/// # Examples
///
/// ```
/// use soluko_core::DigitGrid;
/// use soluko_solver::solve;
///
/// let empty = DigitGrid::new();
/// let solution = solve(&empty).expect("an empty grid is solvable");
/// assert!(solution.is_complete());
/// assert!(empty.first_empty().is_some()); // input untouched
/// ```
#[must_use]
pub fn solve(grid: &DigitGrid) -> Option<DigitGrid> {
    let mut work = grid.clone();
    solve_in_place(&mut work).then_some(work)
}

/// Attempts to complete `grid` in place, returning whether a full valid
/// assignment was found.
///
/// On success the grid holds that assignment. On failure the grid holds
/// whatever remained after backtracking exhausted its options, which is not
/// guaranteed to equal the original contents; callers that need the input
/// preserved should use [`solve`] or pass a copy.
#[must_use]
pub fn solve_in_place(grid: &mut DigitGrid) -> bool {
    // A grid with duplicated givens has no completion; report it without
    // entering the search.
    if grid.find_conflict().is_some() {
        return false;
    }
    search(grid)
}

fn search(grid: &mut DigitGrid) -> bool {
    let Some(pos) = grid.first_empty() else {
        // Fully assigned
        return true;
    };
    for digit in Digit::ALL {
        if grid.fits_at(pos, digit) {
            grid[pos] = Some(digit);
            if search(grid) {
                return true;
            }
            grid[pos] = None;
        }
    }
    false
}
