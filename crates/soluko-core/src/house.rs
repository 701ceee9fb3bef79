//! Rows, columns, and 3×3 boxes as first-class units.

use crate::Position;

/// A sudoku house (row, column, or 3×3 box).
///
/// Each of the 27 houses must contain every digit at most once; a complete
/// valid grid contains every digit exactly once per house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the three houses containing a position: its row, its column,
    /// and its box.
    ///
    /// # Examples
    ///
    /// ```
    /// use soluko_core::{House, Position};
    ///
    /// let houses = House::houses_of(Position::new(4, 7));
    /// assert_eq!(houses[0], House::Row { y: 7 });
    /// assert_eq!(houses[1], House::Column { x: 4 });
    /// assert_eq!(houses[2], House::Box { index: 7 });
    /// ```
    #[must_use]
    pub const fn houses_of(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns all nine positions contained in this house.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        for (i, slot) in (0..9u8).zip(&mut positions) {
            *slot = self.position_from_cell_index(i);
        }
        positions
    }
}
