//! Moore-neighborhood counting.
//!
//! [`count_neighbors`] inspects the eight cells around a position. Because the
//! grid border is always dead, interior cells next to the edge need no special
//! handling; positions that would fall outside the buffer read as dead, so the
//! count never touches memory outside the grid.
//!
//! [`NeighborCounts`] holds one count per cell for a single evolution step. It
//! is allocated fallibly and dropped when the step ends.

use life_grid::grid::try_filled;
use life_grid::{Cell, Grid};

use crate::evolve::EvolveError;

/// Row/column offsets of the eight Moore neighbors.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Count the live cells among the eight neighbors of `(row, col)`.
///
/// Intended for interior coordinates. Border cells contribute nothing because
/// they are always dead; positions outside the grid are skipped.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            grid.get(r, c)
        })
        .filter(|&cell| cell == Cell::Alive)
        .fold(0u8, |count, _| count.saturating_add(1))
}

/// Per-step scratch buffer of neighbor counts, shaped like the grid.
///
/// Border entries stay zero; only interior entries are tallied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCounts {
    rows: usize,
    cols: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    /// Allocate a zeroed `rows x cols` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::Allocation`] if the buffer cannot be obtained.
    pub fn allocate(rows: usize, cols: usize) -> Result<Self, EvolveError> {
        let counts = rows
            .checked_mul(cols)
            .and_then(|len| try_filled(len, 0u8))
            .ok_or(EvolveError::Allocation { rows, cols })?;
        Ok(Self { rows, cols, counts })
    }

    /// Allocate a buffer matching `grid` and count every interior cell.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::Allocation`] if the buffer cannot be obtained.
    pub fn tally(grid: &Grid) -> Result<Self, EvolveError> {
        let mut counts = Self::allocate(grid.rows(), grid.cols())?;
        for (row, col) in grid.interior() {
            if let Some(slot) = counts.slot_mut(row, col) {
                *slot = count_neighbors(grid, row, col);
            }
        }
        Ok(counts)
    }

    /// The stored count for `(row, col)`, or `None` outside the buffer.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col)
            .and_then(|idx| self.counts.get(idx))
            .copied()
    }

    fn slot_mut(&mut self, row: usize, col: usize) -> Option<&mut u8> {
        let idx = self.index(row, col)?;
        self.counts.get_mut(idx)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        row.checked_mul(self.cols)?.checked_add(col)
    }
}
