//! Editor state container for the Soluko sudoku solver.
//!
//! This crate owns the interactive grid state on behalf of a presentation
//! layer. It exposes exactly three operations: update a cell, request a
//! solve, and request a reset. Rendering and input collection stay outside;
//! any frontend that can display a [`DigitGrid`](soluko_core::DigitGrid) and
//! forward cell edits can sit on top.
//!
//! # Examples
//!
//! ```
//! use soluko_core::{Digit, Position};
//! use soluko_editor::Editor;
//!
//! let mut editor = Editor::new();
//! editor.set_cell(Position::new(0, 0), Some(Digit::D5));
//!
//! // An editor holding a satisfiable grid solves in place
//! assert!(editor.solve().is_ok());
//! assert!(editor.grid().is_complete());
//!
//! editor.reset();
//! assert_eq!(editor.grid().first_empty(), Some(Position::new(0, 0)));
//! ```

pub use self::editor::{Editor, UnsolvableError};

mod editor;
