//! Error types for the `life-grid` crate.
//!
//! All fallible grid operations return [`GridError`].

/// Errors that can occur while building or writing a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The requested dimensions leave no room for an interior cell.
    #[error("grid of {rows}x{cols} is too small: both dimensions must be at least 3")]
    TooSmall {
        /// Requested total rows.
        rows: usize,
        /// Requested total columns.
        cols: usize,
    },

    /// The cell buffer could not be allocated.
    #[error("could not allocate a {rows}x{cols} grid")]
    Allocation {
        /// Requested total rows.
        rows: usize,
        /// Requested total columns.
        cols: usize,
    },

    /// A write targeted the permanently dead border.
    #[error("cell ({row}, {col}) is part of the border and cannot be written")]
    BorderCell {
        /// Row of the rejected write.
        row: usize,
        /// Column of the rejected write.
        col: usize,
    },

    /// A coordinate lies outside the grid buffer.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Total rows of the grid.
        rows: usize,
        /// Total columns of the grid.
        cols: usize,
    },
}
