//! Initial-state parser.
//!
//! The seed format is plain text, one grid row per line. Within a line the
//! byte `*` marks a live cell and every other byte is dead. Parsing is
//! byte-level and best-effort:
//!
//! - a short line is padded with dead cells,
//! - bytes beyond the interior width are ignored,
//! - lines beyond the interior height are never read,
//! - a stream that ends early leaves the remaining rows dead,
//! - a trailing `\r` is dropped so CRLF files parse like LF files.

use std::io::{self, BufRead, Read};

use life_grid::{Cell, Grid, GridError};
use tracing::debug;

/// Errors that can occur while reading a seed.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed stream could not be read.
    #[error("failed to read seed: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The grid rejected a seeded cell.
    #[error("failed to place seed cell: {source}")]
    Grid {
        /// The underlying grid error.
        #[from]
        source: GridError,
    },
}

/// What a seed load placed into the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Lines consumed from the stream (at most the interior height).
    pub rows_read: usize,
    /// Live cells written into the interior.
    pub live_cells: usize,
}

/// Populate every interior cell of `grid` from `reader`.
///
/// At most the interior width is buffered per line; the rest of an overlong
/// line is skipped without being stored.
///
/// # Errors
///
/// Returns [`SeedError::Io`] if reading fails.
pub fn load_seed<R: BufRead>(mut reader: R, grid: &mut Grid) -> Result<SeedSummary, SeedError> {
    let width = grid.interior_cols();
    let mut summary = SeedSummary::default();
    let mut line = Vec::new();

    for row in 1..=grid.interior_rows() {
        if read_row(&mut reader, width, &mut line)? {
            summary.rows_read = summary.rows_read.saturating_add(1);
        }

        for col in 1..=width {
            let cell = line
                .get(col.saturating_sub(1))
                .map_or(Cell::Dead, |&byte| Cell::from_byte(byte));
            grid.set(row, col, cell)?;
            if cell.is_alive() {
                summary.live_cells = summary.live_cells.saturating_add(1);
            }
        }
    }

    debug!(
        rows_read = summary.rows_read,
        live_cells = summary.live_cells,
        "Seed loaded"
    );
    Ok(summary)
}

/// Read the next line into `line`, keeping at most `width` bytes and no line
/// ending. Returns `false` once the stream is exhausted.
fn read_row<R: BufRead>(reader: &mut R, width: usize, line: &mut Vec<u8>) -> io::Result<bool> {
    line.clear();
    let limit = u64::try_from(width).unwrap_or(u64::MAX);
    let kept = reader.by_ref().take(limit).read_until(b'\n', line)?;

    let skipped = if line.last() == Some(&b'\n') {
        line.pop();
        0
    } else {
        reader.skip_until(b'\n')?
    };
    if line.last() == Some(&b'\r') {
        line.pop();
    }

    Ok(kept > 0 || skipped > 0)
}
