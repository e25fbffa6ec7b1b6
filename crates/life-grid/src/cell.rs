//! Cell state and its single-character markers.

/// Marker printed for a live cell and recognised as live when seeding.
pub const ALIVE_MARKER: char = '*';

/// Marker printed for a dead cell.
pub const DEAD_MARKER: char = '-';

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// An empty cell. Border cells are always in this state.
    #[default]
    Dead,
    /// A live cell.
    Alive,
}

impl Cell {
    /// Map a seed byte to a cell state.
    ///
    /// Only the alive marker yields [`Cell::Alive`]; blanks, dead markers and
    /// any other garbage byte are read as dead.
    pub const fn from_byte(byte: u8) -> Self {
        if byte as char == ALIVE_MARKER {
            Self::Alive
        } else {
            Self::Dead
        }
    }

    /// The display marker for this state.
    pub const fn marker(self) -> char {
        match self {
            Self::Alive => ALIVE_MARKER,
            Self::Dead => DEAD_MARKER,
        }
    }

    /// Whether the cell is alive.
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}
