//! Single-generation evolution under Conway's B3/S23 rule.
//!
//! [`evolve`] works in two passes. The first pass counts neighbors for every
//! interior cell into a [`NeighborCounts`] buffer while the grid is read-only.
//! The second pass writes the new states. No cell is written until every count
//! is known, so each transition depends only on the grid as it was before the
//! call.
//!
//! The scratch buffer is allocated before the grid is touched. If that
//! allocation fails the call returns [`EvolveError::Allocation`] and the grid
//! keeps its pre-call state.

use life_grid::{Cell, Grid, GridError};
use tracing::trace;

use crate::neighbors::NeighborCounts;

/// Errors that can occur while evolving a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvolveError {
    /// The neighbor-count scratch buffer could not be allocated.
    #[error("could not allocate neighbor counts for a {rows}x{cols} grid")]
    Allocation {
        /// Total rows of the grid being evolved.
        rows: usize,
        /// Total columns of the grid being evolved.
        cols: usize,
    },

    /// The grid rejected a state write.
    #[error("grid rejected evolved state: {source}")]
    Grid {
        /// The underlying grid error.
        #[from]
        source: GridError,
    },
}

/// The state of a cell in the next generation.
///
/// - fewer than 2 live neighbors: dies of underpopulation
/// - 2 or 3 live neighbors and alive: survives
/// - exactly 3 live neighbors and dead: is born
/// - anything else: dead
pub const fn next_state(current: Cell, live_neighbors: u8) -> Cell {
    match (current, live_neighbors) {
        (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Advance `grid` by exactly one generation, in place.
///
/// # Errors
///
/// Returns [`EvolveError::Allocation`] if the scratch buffer cannot be
/// allocated; the grid is unchanged in that case.
pub fn evolve(grid: &mut Grid) -> Result<(), EvolveError> {
    let counts = NeighborCounts::tally(grid)?;

    let mut births: usize = 0;
    let mut deaths: usize = 0;
    for (row, col) in grid.interior() {
        let current = grid.get(row, col).unwrap_or_default();
        let next = next_state(current, counts.get(row, col).unwrap_or(0));
        if next == current {
            continue;
        }
        grid.set(row, col, next)?;
        if next.is_alive() {
            births = births.saturating_add(1);
        } else {
            deaths = deaths.saturating_add(1);
        }
    }

    trace!(
        births,
        deaths,
        population = grid.population(),
        "Grid evolved"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::with_interior(rows, cols).unwrap();
        for &(r, c) in alive {
            grid.set(r, c, Cell::Alive).unwrap();
        }
        grid
    }

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.interior()
            .filter(|&(r, c)| grid.get(r, c) == Some(Cell::Alive))
            .collect()
    }

    #[test]
    fn transition_table() {
        for count in 0..=8u8 {
            let survives = matches!(count, 2 | 3);
            let born = count == 3;
            let survivor = next_state(Cell::Alive, count);
            let newborn = next_state(Cell::Dead, count);
            assert_eq!(survivor, Cell::from(survives), "alive, {count}");
            assert_eq!(newborn, Cell::from(born), "dead, {count}");
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut grid = Grid::with_interior(6, 9).unwrap();
        for _ in 0..5 {
            evolve(&mut grid).unwrap();
        }
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn isolated_cell_dies() {
        let mut grid = grid_with(5, 5, &[(3, 3)]);
        evolve(&mut grid).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn block_is_still_life() {
        let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
        let mut grid = grid_with(4, 4, &block);
        let before = grid.clone();
        evolve(&mut grid).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = vec![(3, 2), (3, 3), (3, 4)];
        let vertical = vec![(2, 3), (3, 3), (4, 3)];
        let mut grid = grid_with(5, 5, &horizontal);

        evolve(&mut grid).unwrap();
        assert_eq!(live_cells(&grid), vertical);

        evolve(&mut grid).unwrap();
        assert_eq!(live_cells(&grid), horizontal);
    }

    #[test]
    fn diagonal_triple_shrinks_to_centre_then_dies() {
        let mut grid = grid_with(5, 5, &[(2, 2), (3, 3), (4, 4)]);
        evolve(&mut grid).unwrap();
        assert_eq!(live_cells(&grid), vec![(3, 3)]);
        evolve(&mut grid).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn blinker_against_the_border_is_clipped() {
        // Row 1 is the top interior row; the vertical phase would need row 0.
        let mut grid = grid_with(3, 3, &[(1, 1), (1, 2), (1, 3)]);
        evolve(&mut grid).unwrap();
        assert_eq!(live_cells(&grid), vec![(1, 2), (2, 2)]);
        for col in 0..grid.cols() {
            assert_eq!(grid.get(0, col), Some(Cell::Dead));
        }
    }

    #[test]
    fn glider_translates_diagonally() {
        let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
        let mut grid = grid_with(8, 8, &glider);
        for _ in 0..4 {
            evolve(&mut grid).unwrap();
        }
        let moved: Vec<(usize, usize)> = glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(live_cells(&grid), moved);
    }

    #[test]
    fn counts_come_from_the_previous_generation() {
        // Writing while counting would make (2, 1) alive before (2, 2) is
        // counted, giving (2, 2) four neighbors and killing it.
        let mut grid = grid_with(3, 3, &[(1, 1), (1, 2), (1, 3), (2, 2)]);
        evolve(&mut grid).unwrap();
        assert_eq!(
            live_cells(&grid),
            vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]
        );
    }
}
