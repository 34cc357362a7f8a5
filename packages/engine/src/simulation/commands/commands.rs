use crate::spatial::grid::CellGrid;

use super::{EngineCore, PointerCell};

pub(super) fn resize(engine: &mut EngineCore, width: u32, height: u32) {
    let (cols, rows) = engine.config.grid_dims(width, height);
    engine.width = width;
    engine.height = height;
    // Fresh buffers even when the cell dimensions did not change: a resize
    // always restarts from an empty board.
    engine.current = CellGrid::new(cols, rows);
    engine.scratch = CellGrid::new(cols, rows);
}

pub(super) fn set_pointer(engine: &mut EngineCore, x: f64, y: f64) {
    if !x.is_finite() || !y.is_finite() {
        clear_pointer(engine);
        return;
    }
    let cell = engine.config.cell_size as f64;
    engine.pointer = Some(PointerCell {
        col: (x / cell).floor() as i32,
        row: (y / cell).floor() as i32,
    });
}

pub(super) fn clear_pointer(engine: &mut EngineCore) {
    engine.pointer = None;
}
