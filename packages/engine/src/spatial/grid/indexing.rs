use super::*;

impl CellGrid {
    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    #[inline]
    pub fn is_empty(&self) -> bool { self.size == 0 }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, col: u32, row: u32) -> usize {
        debug_assert!(
            col < self.cols && row < self.rows,
            "index: out of bounds ({}, {}) for {}x{} grid",
            col,
            row,
            self.cols,
            self.rows
        );
        (row as usize) * (self.cols as usize) + col as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((idx % cols) as u32, (idx / cols) as u32)
    }

    // === Bounds ===
    #[inline]
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as u32) < self.cols && (row as u32) < self.rows
    }

    // === Toroidal wrap ===
    // Only valid on non-empty grids.

    #[inline]
    pub fn wrap_col(&self, col: i32) -> u32 {
        col.rem_euclid(self.cols as i32) as u32
    }

    #[inline]
    pub fn wrap_row(&self, row: i32) -> u32 {
        row.rem_euclid(self.rows as i32) as u32
    }
}
