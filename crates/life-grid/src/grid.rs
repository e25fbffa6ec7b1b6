//! The bordered grid container.
//!
//! A [`Grid`] of `rows x cols` total cells stores its states in one owned
//! row-major buffer. Row 0, row `rows - 1`, column 0 and column `cols - 1`
//! form the border. The border is never written after construction, so it
//! stays dead for the lifetime of the grid and neighbor reads at the interior
//! edge always land inside the buffer.
//!
//! Dimensions are fixed at construction; there is no resize operation.

use std::fmt;

use crate::cell::Cell;
use crate::error::GridError;

/// Depth of the dead ring on each side of the interior.
pub const BORDER: usize = 1;

/// Smallest total dimension that still leaves one interior cell.
const MIN_DIMENSION: usize = 3;

/// Allocate a buffer of `len` copies of `value` without aborting on failure.
///
/// Returns `None` when the allocator cannot provide `len` elements.
pub fn try_filled<T: Clone>(len: usize, value: T) -> Option<Vec<T>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).ok()?;
    buffer.resize(len, value);
    Some(buffer)
}

/// A fixed-size grid of cells with a permanently dead border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Total rows, border included.
    rows: usize,
    /// Total columns, border included.
    cols: usize,
    /// Row-major cell states, `rows * cols` long.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid of `rows x cols` total cells, border included.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if either dimension is below 3, or
    /// [`GridError::Allocation`] if the buffer size overflows or cannot be
    /// allocated.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(GridError::TooSmall { rows, cols });
        }
        let cells = rows
            .checked_mul(cols)
            .and_then(|len| try_filled(len, Cell::Dead))
            .ok_or(GridError::Allocation { rows, cols })?;
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid whose interior is `rows x cols`, adding the border ring.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::new`]; a zero interior dimension is reported as
    /// [`GridError::TooSmall`].
    pub fn with_interior(rows: usize, cols: usize) -> Result<Self, GridError> {
        let pad = BORDER.saturating_mul(2);
        let total_rows = rows
            .checked_add(pad)
            .ok_or(GridError::Allocation { rows, cols })?;
        let total_cols = cols
            .checked_add(pad)
            .ok_or(GridError::Allocation { rows, cols })?;
        Self::new(total_rows, total_cols)
    }

    /// Total rows, border included.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Total columns, border included.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of interior rows.
    pub const fn interior_rows(&self) -> usize {
        self.rows.saturating_sub(BORDER * 2)
    }

    /// Number of interior columns.
    pub const fn interior_cols(&self) -> usize {
        self.cols.saturating_sub(BORDER * 2)
    }

    /// Whether `(row, col)` is on the border ring.
    ///
    /// Coordinates outside the buffer are not border cells.
    pub const fn is_border(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        row < BORDER
            || col < BORDER
            || row >= self.rows.saturating_sub(BORDER)
            || col >= self.cols.saturating_sub(BORDER)
    }

    /// Read the cell at `(row, col)`, border included.
    ///
    /// Returns `None` outside the buffer.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col)
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    /// Write an interior cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] outside the buffer and
    /// [`GridError::BorderCell`] for a border coordinate.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(row, col).ok_or(GridError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })?;
        if self.is_border(row, col) {
            return Err(GridError::BorderCell { row, col });
        }
        if let Some(slot) = self.cells.get_mut(idx) {
            *slot = cell;
        }
        Ok(())
    }

    /// Iterate over every interior coordinate in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let last_row = self.interior_rows();
        let last_col = self.interior_cols();
        (BORDER..=last_row).flat_map(move |row| (BORDER..=last_col).map(move |col| (row, col)))
    }

    /// Number of live cells. Only interior cells can be alive.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Lazily render the interior, one string per row.
    ///
    /// Each cell's marker is followed by a single space, so a three-cell row
    /// with a live centre renders as `"- * - "`.
    pub const fn render(&self) -> Render<'_> {
        Render {
            grid: self,
            row: BORDER,
        }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        row.checked_mul(self.cols)?.checked_add(col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Iterator over the rendered interior rows of a [`Grid`].
///
/// Created by [`Grid::render`].
#[derive(Debug, Clone)]
pub struct Render<'a> {
    grid: &'a Grid,
    row: usize,
}

impl Iterator for Render<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.row > self.grid.interior_rows() {
            return None;
        }
        let width = self.grid.interior_cols();
        let mut line = String::with_capacity(width.saturating_mul(2));
        for col in BORDER..=width {
            let cell = self.grid.get(self.row, col).unwrap_or_default();
            line.push(cell.marker());
            line.push(' ');
        }
        self.row = self.row.saturating_add(1);
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .grid
            .interior_rows()
            .saturating_add(BORDER)
            .saturating_sub(self.row);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Render<'_> {}
