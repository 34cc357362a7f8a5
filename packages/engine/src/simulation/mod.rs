//! Engine - background Game of Life orchestration
//!
//! EngineCore owns both cell buffers and only orchestrates:
//! - systems/life.rs     computes a generation
//! - systems/seeding.rs  paints cells under the pointer
//! - api/surface.rs      is where frames are drawn
//!
//! Per frame the host calls `step(now)` then `render(surface)`. Seeding and
//! generations are throttled independently, rendering is not.

use crate::api::surface::Surface;
use crate::domain::config::EngineConfig;
use crate::spatial::grid::CellGrid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render.rs"]
mod render;
mod frame_loop;
pub mod facade;

pub use frame_loop::{FrameLoop, LoopState};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Pointer position in cell coordinates (may lie outside the grid)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerCell {
    pub col: i32,
    pub row: i32,
}

/// The automaton engine
pub struct EngineCore {
    config: EngineConfig,

    // Double buffer: `current` is what gets rendered, `scratch` receives
    // the next generation and is then swapped in.
    current: CellGrid,
    scratch: CellGrid,

    // Surface size in pixels
    width: u32,
    height: u32,

    pointer: Option<PointerCell>,

    // Throttle state; None = never fired
    last_seed_ms: Option<f64>,
    last_advance_ms: Option<f64>,

    generation: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl EngineCore {
    /// Create an engine for a surface of `width x height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        init::create_engine_core(width, height)
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn config_json(&self) -> String { self.config.manifest_json() }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn cols(&self) -> u32 { self.current.cols() }

    pub fn rows(&self) -> u32 { self.current.rows() }

    pub fn cell_size(&self) -> u32 { self.config.cell_size }

    /// Generations computed since construction
    pub fn generation(&self) -> u64 { self.generation }

    pub fn live_cells(&self) -> u32 { self.current.live_count() }

    pub fn pointer(&self) -> Option<PointerCell> { self.pointer }

    /// Read a cell of the rendered grid; out of range reads as dead
    pub fn is_alive(&self, col: u32, row: u32) -> bool {
        col < self.cols() && row < self.rows() && self.current.is_alive(col, row)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step/render perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Reseed the brush RNG (0 falls back to the default seed)
    pub fn set_rng_seed(&mut self, seed: u32) {
        settings::set_rng_seed(self, seed);
    }

    /// New surface size: recompute dimensions, both grids reset to all-dead
    pub fn resize(&mut self, width: u32, height: u32) {
        commands::resize(self, width, height);
    }

    /// Track the pointer at surface pixel (x, y)
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        commands::set_pointer(self, x, y);
    }

    /// Pointer left the surface
    pub fn clear_pointer(&mut self) {
        commands::clear_pointer(self);
    }

    /// Seeding pass if the pointer is present and the spawn interval elapsed.
    /// Returns true when the pass fired.
    pub fn seed(&mut self, now: f64) -> bool {
        step::seed(self, now)
    }

    /// One generation if the update interval elapsed. Returns true when it fired.
    pub fn advance(&mut self, now: f64) -> bool {
        step::advance(self, now)
    }

    /// Seed then advance; call once per animation frame before `render`
    pub fn step(&mut self, now: f64) {
        step::step(self, now);
    }

    /// Clear the surface and draw every live cell. Returns cells drawn.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> u32 {
        render::render(self, surface)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
