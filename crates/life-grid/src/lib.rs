//! Bordered cell grid for the Life simulation.
//!
//! The grid is a fixed-size rectangle of [`Cell`] states surrounded by a
//! one-cell-deep border that is permanently dead. Neighbor counting for any
//! interior cell can therefore look at all eight surrounding positions
//! without edge checks.
//!
//! # Modules
//!
//! - [`cell`] -- The two-valued [`Cell`] state and its display markers.
//! - [`error`] -- Error types for grid construction and writes.
//! - [`grid`] -- The [`Grid`] container, accessors, and interior rendering.

pub mod cell;
pub mod error;
pub mod grid;

// Re-export primary types at crate root.
pub use cell::Cell;
pub use error::GridError;
pub use grid::{Grid, Render};
