//! Cell coordinates on the 9×9 grid.

/// A cell coordinate on the grid.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Both components are validated at construction time.
///
/// # Examples
///
/// ```
/// use soluko_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order: top-to-bottom
    /// rows, and left-to-right within each row.
    ///
    /// This is the order the solver scans for its next empty cell, so it is
    /// part of the solver's deterministic search order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a box index (0-8, left to right, top to
    /// bottom) and a cell index within that box (0-8, row-major within the
    /// box).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell_index` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use soluko_core::Position;
    ///
    /// // Top-left cell of the center box
    /// assert_eq!(Position::from_box(4, 0), Position::new(3, 3));
    /// ```
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9);
        Self {
            x: (box_index % 3) * 3 + cell_index % 3,
            y: (box_index / 3) * 3 + cell_index / 3,
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    ///
    /// Boxes are numbered left to right, top to bottom, so the top-left box
    /// is 0 and the bottom-right box is 8.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }
}
