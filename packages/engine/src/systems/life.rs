//! Life rule - B3/S23 on a toroidal grid
//!
//! A generation reads only `current` and writes only `next`, so rows are
//! independent. With the `parallel` feature each row of `next` is filled on
//! the rayon pool.

use crate::spatial::grid::{CellGrid, ALIVE, DEAD};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Next state of one cell: survive on 2 or 3, born on exactly 3
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Live cells among the 8 wrapped neighbours of (col, row)
pub fn count_neighbors(grid: &CellGrid, col: u32, row: u32) -> u8 {
    let mut count = 0u8;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let c = grid.wrap_col(col as i32 + dx);
            let r = grid.wrap_row(row as i32 + dy);
            count += *fast!(grid.cells, [grid.index(c, r)]);
        }
    }
    count
}

/// Write the generation after `current` into `next`.
///
/// Both grids must have the same shape. Returns the live cell count of
/// `next`. Empty grids are left untouched.
pub fn advance_generation(current: &CellGrid, next: &mut CellGrid) -> u32 {
    debug_assert!(current.same_shape(next), "advance_generation: shape mismatch");
    if current.is_empty() {
        return 0;
    }
    let cols = current.cols() as usize;

    #[cfg(feature = "parallel")]
    {
        next.cells
            .par_chunks_mut(cols)
            .enumerate()
            .map(|(row, out)| compute_row(current, row as u32, out))
            .sum()
    }
    #[cfg(not(feature = "parallel"))]
    {
        next.cells
            .chunks_mut(cols)
            .enumerate()
            .map(|(row, out)| compute_row(current, row as u32, out))
            .sum()
    }
}

/// Fill one output row; neighbour rows and columns are resolved once per row
/// instead of per cell.
fn compute_row(current: &CellGrid, row: u32, out: &mut [u8]) -> u32 {
    let cols = current.cols();
    let stride = cols as usize;
    let above = current.wrap_row(row as i32 - 1) as usize * stride;
    let here = row as usize * stride;
    let below = current.wrap_row(row as i32 + 1) as usize * stride;
    let cells = &current.cells;

    let mut live = 0u32;
    for col in 0..cols {
        let left = current.wrap_col(col as i32 - 1) as usize;
        let mid = col as usize;
        let right = current.wrap_col(col as i32 + 1) as usize;

        let neighbors = *fast!(cells, [above + left])
            + *fast!(cells, [above + mid])
            + *fast!(cells, [above + right])
            + *fast!(cells, [here + left])
            + *fast!(cells, [here + right])
            + *fast!(cells, [below + left])
            + *fast!(cells, [below + mid])
            + *fast!(cells, [below + right]);

        let alive = *fast!(cells, [here + mid]) == ALIVE;
        let next = next_state(alive, neighbors);
        fast!(out, [mid] = if next { ALIVE } else { DEAD });
        live += next as u32;
    }
    live
}
