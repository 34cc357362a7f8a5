//! Pointer brush - sprinkles live cells around the cursor
//!
//! Square (Chebyshev) neighbourhood, clipped to the grid. Unlike the life
//! rule there is no wraparound here: a brush at the left edge does not
//! paint the right edge. The brush only ever sets cells alive.

use super::chance;
use crate::spatial::grid::CellGrid;

/// Set cells alive around (col, row) with independent `probability` each.
///
/// One random draw is consumed per in-bounds cell, in row-major order.
/// Returns the number of cells that were dead and are now alive.
pub fn seed_brush(
    grid: &mut CellGrid,
    col: i32,
    row: i32,
    radius: i32,
    probability: f64,
    rng: &mut u32,
) -> u32 {
    let mut born = 0u32;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let c = col + dx;
            let r = row + dy;
            if !grid.in_bounds(c, r) {
                continue;
            }
            if chance(rng, probability) && grid.set_alive(c as u32, r as u32) {
                born += 1;
            }
        }
    }
    born
}
