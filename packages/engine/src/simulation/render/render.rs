use crate::api::surface::Surface;

use super::{EngineCore, PerfTimer};

/// Full redraw: background every frame (also when the generation was
/// throttled), then one square per live cell with a 1px gutter.
pub(super) fn render<S: Surface + ?Sized>(engine: &mut EngineCore, surface: &mut S) -> u32 {
    let t0 = if engine.perf_enabled { Some(PerfTimer::start()) } else { None };

    surface.set_fill_color(&engine.config.background_fill);
    surface.fill_rect(0.0, 0.0, engine.width as f64, engine.height as f64);

    surface.set_fill_color(&engine.config.foreground_fill);
    let cell = engine.config.cell_size as f64;
    let side = cell - 1.0;
    let mut drawn = 0u32;
    for (col, row) in engine.current.live_cells() {
        surface.fill_rect(col as f64 * cell, row as f64 * cell, side, side);
        drawn += 1;
    }

    if let Some(t0) = t0 {
        engine.perf_stats.render_ms = t0.elapsed_ms();
        engine.perf_stats.cells_drawn = drawn;
    }
    drawn
}
