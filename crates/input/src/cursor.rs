//! Keyboard cursor over the N×N tile grid.
//!
//! The cursor clamps at the grid edges. When the grid grows between rounds the
//! cursor keeps its row/column; when it shrinks (a new session) the position is
//! clamped into the new grid.

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCursor {
    row: u8,
    column: u8,
    grid_size: u8,
}

impl TileCursor {
    pub fn new(grid_size: u8) -> Self {
        Self {
            row: 0,
            column: 0,
            grid_size: grid_size.max(1),
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Row-major tile index under the cursor.
    pub fn index(&self) -> usize {
        self.row as usize * self.grid_size as usize + self.column as usize
    }

    /// Follow a grid resize, keeping the position where it still fits.
    pub fn sync(&mut self, grid_size: u8) {
        let grid_size = grid_size.max(1);
        if grid_size == self.grid_size {
            return;
        }
        self.grid_size = grid_size;
        self.row = self.row.min(grid_size - 1);
        self.column = self.column.min(grid_size - 1);
    }

    /// Jump to a tile index; out-of-range indices are ignored.
    pub fn set_index(&mut self, index: usize) {
        let n = self.grid_size as usize;
        if index >= n * n {
            return;
        }
        self.row = (index / n) as u8;
        self.column = (index % n) as u8;
    }

    pub fn step(&mut self, direction: Direction) {
        let last = self.grid_size - 1;
        match direction {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => self.row = (self.row + 1).min(last),
            Direction::Left => self.column = self.column.saturating_sub(1),
            Direction::Right => self.column = (self.column + 1).min(last),
        }
    }
}

impl Default for TileCursor {
    fn default() -> Self {
        Self::new(2)
    }
}
