//! The 9×9 grid of optional digits.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, House, Position};

/// A 9×9 sudoku grid.
///
/// Each cell holds `Option<Digit>`, where `None` is an empty cell. Cells are
/// addressed by [`Position`] through `Index`/`IndexMut`.
///
/// The grid is a plain value type: cloning it is cheap and there is no
/// shared state, so independent solves can each work on their own copy.
///
/// # Examples
///
/// ```
/// use soluko_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
///
/// grid[Position::new(0, 0)] = Some(Digit::D5);
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.first_empty(), Some(Position::new(1, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the first empty cell in row-major order (top-to-bottom rows,
    /// left-to-right within a row), or `None` if the grid is fully assigned.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the digits that do not appear in any *other* cell of the
    /// three houses containing `pos` (its row, column, and box).
    ///
    /// The cell's own value is ignored, so the result is the set of digits
    /// that could be placed at `pos` without violating uniqueness against
    /// the rest of the grid.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for house in House::houses_of(pos) {
            for p in house.positions() {
                if p == pos {
                    continue;
                }
                if let Some(digit) = self[p] {
                    candidates.remove(digit);
                }
            }
        }
        candidates
    }

    /// Returns `true` if `digit` does not already appear elsewhere in the
    /// row, column, or box containing `pos`.
    ///
    /// This is the placement-validity predicate used by the solver: it is a
    /// pure function of the current grid contents and has no side effects.
    #[must_use]
    pub fn fits_at(&self, pos: Position, digit: Digit) -> bool {
        self.candidates_at(pos).contains(digit)
    }

    /// Returns the first house containing a duplicated digit, in
    /// [`House::ALL`] order, or `None` if the grid is consistent.
    ///
    /// A grid with a conflict cannot be completed into a valid solution: any
    /// completion would give some house a digit more than once.
    #[must_use]
    pub fn find_conflict(&self) -> Option<Conflict> {
        for house in House::ALL {
            let mut seen = DigitSet::new();
            for pos in house.positions() {
                if let Some(digit) = self[pos] {
                    if seen.contains(digit) {
                        return Some(Conflict { house, digit });
                    }
                    seen.insert(digit);
                }
            }
        }
        None
    }

    /// Returns `true` if no house contains a duplicated digit.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.find_conflict().is_none()
    }

    fn cell_index(pos: Position) -> usize {
        usize::from(pos.y()) * 9 + usize::from(pos.x())
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[Self::cell_index(pos)]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[Self::cell_index(pos)]
    }
}

/// A duplicated digit within a single house.
///
/// Reported by [`DigitGrid::find_conflict`] when two cells of the same row,
/// column, or box hold the same digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    /// The house containing the duplicate.
    pub house: House,
    /// The digit appearing more than once in that house.
    pub digit: Digit,
}

/// An error parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The text contained a character that is not a digit, an empty-cell
    /// placeholder, or whitespace.
    #[display("unexpected character {character:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells in grid text, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses a grid from text.
    ///
    /// - Digits 1-9 represent filled cells
    /// - `.`, `_`, or `0` represent empty cells
    /// - Whitespace is ignored
    ///
    /// The text must contain exactly 81 cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use soluko_core::{Digit, DigitGrid, Position};
    ///
    /// let grid: DigitGrid = "
    ///     53_ _7_ ___
    ///     6__ 195 ___
    ///     _98 ___ _6_
    ///     8__ _6_ __3
    ///     4__ 8_3 __1
    ///     7__ _2_ __6
    ///     _6_ ___ 28_
    ///     ___ 419 __5
    ///     ___ _8_ _79
    /// "
    /// .parse()
    /// .unwrap();
    /// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(81);
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let cell = match character {
                '.' | '_' | '0' => None,
                _ => match Digit::from_char(character) {
                    Some(digit) => Some(digit),
                    None => return Err(ParseGridError::UnexpectedCharacter { character }),
                },
            };
            cells.push(cell);
        }
        let count = cells.len();
        let cells = <[Option<Digit>; 81]>::try_from(cells)
            .map_err(|_| ParseGridError::WrongCellCount { count })?;
        Ok(Self { cells })
    }
}

impl fmt::Display for DigitGrid {
    /// Formats the grid as nine rows of nine cells, `_` for empty cells,
    /// with a space between 3-column groups. The output round-trips through
    /// [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9u8 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9u8 {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}
