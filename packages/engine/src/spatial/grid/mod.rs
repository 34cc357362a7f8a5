//! CellGrid - flat row-major buffer of automaton cells
//!
//! One byte per cell (0 = dead, 1 = alive) so the neighbour sum is a plain
//! add over the buffer. The engine owns two of these and swaps them.

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

mod indexing;
mod accessors;

pub struct CellGrid {
    cols: u32,
    rows: u32,
    size: usize,

    pub(crate) cells: Vec<u8>,
}

impl CellGrid {
    /// All-dead grid of `cols x rows` cells
    pub fn new(cols: u32, rows: u32) -> Self {
        let size = (cols as usize) * (rows as usize);
        Self {
            cols,
            rows,
            size,
            cells: vec![DEAD; size],
        }
    }

    /// True when the other grid has the same shape (swap partner check)
    #[inline]
    pub fn same_shape(&self, other: &CellGrid) -> bool {
        self.cols == other.cols && self.rows == other.rows
    }
}
