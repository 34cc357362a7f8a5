use super::*;

impl CellGrid {
    #[inline]
    pub fn is_alive(&self, col: u32, row: u32) -> bool {
        self.cells[self.index(col, row)] == ALIVE
    }

    /// Returns true if the cell was dead before
    #[inline]
    pub fn set_alive(&mut self, col: u32, row: u32) -> bool {
        let idx = self.index(col, row);
        let born = self.cells[idx] == DEAD;
        self.cells[idx] = ALIVE;
        born
    }

    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    pub fn live_count(&self) -> u32 {
        self.cells.iter().map(|&c| c as u32).sum()
    }

    /// Iterate (col, row) of every live cell in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == ALIVE)
            .map(move |(idx, _)| self.coords(idx))
    }
}
