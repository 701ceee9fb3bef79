use derive_more::{Display, Error};
use soluko_core::{Digit, DigitGrid, Position};

/// The editor's grid state, with the three operations a frontend needs:
/// update-cell, request-solve, and request-reset.
///
/// The grid is owned by the editor; frontends read it through [`grid`] and
/// mutate it only through the operations here. A solve request runs the
/// solver on a copy and commits the result only on success, so a failed
/// request never disturbs the user's entries.
///
/// [`grid`]: Editor::grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    grid: DigitGrid,
}

impl Editor {
    /// Creates an editor with an all-empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor holding an existing grid.
    #[must_use]
    pub fn from_grid(grid: DigitGrid) -> Self {
        Self { grid }
    }

    /// Returns the current grid for display.
    #[must_use]
    pub fn grid(&self) -> &DigitGrid {
        &self.grid
    }

    /// Sets or clears a single cell.
    pub fn set_cell(&mut self, pos: Position, digit: Option<Digit>) {
        self.grid[pos] = digit;
    }

    /// Applies raw text entry to a cell.
    ///
    /// The text is parsed as an integer and clamped into the range 0-9;
    /// empty or non-numeric text counts as 0, and 0 clears the cell. This
    /// mirrors what a digit input field produces: `"5"` places a 5, `"12"`
    /// is clamped to 9, `"-3"` and `"x"` clear.
    pub fn enter(&mut self, pos: Position, raw: &str) {
        let value = raw.trim().parse::<i64>().unwrap_or(0).clamp(0, 9);
        let digit = match u8::try_from(value) {
            Ok(0) | Err(_) => None,
            Ok(value) => Some(Digit::from_value(value)),
        };
        self.set_cell(pos, digit);
    }

    /// Attempts to solve the current grid.
    ///
    /// On success the editor's grid becomes the completed solution. On
    /// failure the grid is left exactly as it was and the single failure
    /// kind, [`UnsolvableError`], is returned for the frontend to present.
    ///
    /// # Errors
    ///
    /// Returns [`UnsolvableError`] when no valid completion of the current
    /// grid exists.
    pub fn solve(&mut self) -> Result<(), UnsolvableError> {
        log::debug!("solve requested for grid:\n{}", self.grid);
        match soluko_solver::solve(&self.grid) {
            Some(solution) => {
                log::info!("solve succeeded");
                self.grid = solution;
                Ok(())
            }
            None => {
                log::info!("no solution exists for the current grid");
                Err(UnsolvableError)
            }
        }
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        log::debug!("reset requested");
        self.grid = DigitGrid::new();
    }
}

/// No assignment of the empty cells exists that is consistent with the
/// sudoku rules given the filled cells.
///
/// This is the solver's only failure kind; it also covers grids whose fixed
/// cells are already contradictory, since those admit no completion either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no solution exists for the given puzzle")]
pub struct UnsolvableError;

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC_PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const CLASSIC_SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    fn parse(text: &str) -> DigitGrid {
        text.parse().unwrap()
    }

    #[test]
    fn test_new_editor_is_empty() {
        let editor = Editor::new();
        assert_eq!(editor.grid(), &DigitGrid::new());
        assert_eq!(Editor::default(), editor);
    }

    #[test]
    fn test_set_cell_places_and_clears() {
        let mut editor = Editor::new();
        let pos = Position::new(4, 2);

        editor.set_cell(pos, Some(Digit::D7));
        assert_eq!(editor.grid()[pos], Some(Digit::D7));

        editor.set_cell(pos, Some(Digit::D2));
        assert_eq!(editor.grid()[pos], Some(Digit::D2));

        editor.set_cell(pos, None);
        assert_eq!(editor.grid()[pos], None);
    }

    #[test]
    fn test_enter_clamps_raw_text() {
        let mut editor = Editor::new();
        let pos = Position::new(0, 0);

        editor.enter(pos, "5");
        assert_eq!(editor.grid()[pos], Some(Digit::D5));

        // Over-range clamps to 9
        editor.enter(pos, "12");
        assert_eq!(editor.grid()[pos], Some(Digit::D9));

        // Whitespace is tolerated
        editor.enter(pos, " 7 ");
        assert_eq!(editor.grid()[pos], Some(Digit::D7));

        // Empty, zero, negative, and non-numeric text all clear
        for raw in ["", "0", "-3", "x", "3.5"] {
            editor.enter(pos, "1");
            editor.enter(pos, raw);
            assert_eq!(editor.grid()[pos], None, "raw entry {raw:?}");
        }
    }

    #[test]
    fn test_solve_commits_the_solution() {
        let mut editor = Editor::from_grid(parse(CLASSIC_PUZZLE));
        assert_eq!(editor.solve(), Ok(()));
        assert_eq!(editor.grid(), &parse(CLASSIC_SOLUTION));
    }

    #[test]
    fn test_failed_solve_preserves_entries() {
        // Duplicated givens: unsolvable
        let mut editor = Editor::new();
        editor.enter(Position::new(0, 0), "5");
        editor.enter(Position::new(1, 0), "5");

        let before = editor.grid().clone();
        assert_eq!(editor.solve(), Err(UnsolvableError));
        assert_eq!(editor.grid(), &before);
    }

    #[test]
    fn test_solve_on_solved_grid_is_a_no_op() {
        let mut editor = Editor::from_grid(parse(CLASSIC_SOLUTION));
        assert_eq!(editor.solve(), Ok(()));
        assert_eq!(editor.grid(), &parse(CLASSIC_SOLUTION));
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut editor = Editor::from_grid(parse(CLASSIC_PUZZLE));
        editor.enter(Position::new(2, 0), "4");
        editor.reset();
        assert_eq!(editor.grid(), &DigitGrid::new());
    }

    #[test]
    fn test_unsolvable_error_message() {
        assert_eq!(
            UnsolvableError.to_string(),
            "no solution exists for the given puzzle"
        );
    }
}
