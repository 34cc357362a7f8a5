use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use super::perf_stats::PerfStats;
use super::EngineCore;

/// Host-driven engine for pages that run their own frame loop.
///
/// ```js
/// const life = new LifeBackground(innerWidth, innerHeight);
/// const tick = (now) => { life.frame(now, ctx); requestAnimationFrame(tick); };
/// ```
#[wasm_bindgen]
pub struct LifeBackground {
    core: EngineCore,
}

#[wasm_bindgen]
impl LifeBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: EngineCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.core.live_cells() }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.core.set_pointer(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.core.clear_pointer();
    }

    /// Seed + advance (each throttled); `now` in ms, e.g. the rAF timestamp
    pub fn step(&mut self, now: f64) {
        self.core.step(now);
    }

    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) -> u32 {
        let mut ctx = ctx.clone();
        self.core.render(&mut ctx)
    }

    /// `step(now)` followed by `render(ctx)`
    pub fn frame(&mut self, now: f64, ctx: &CanvasRenderingContext2d) -> u32 {
        self.core.step(now);
        self.render(ctx)
    }

    pub fn set_rng_seed(&mut self, seed: u32) {
        self.core.set_rng_seed(seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }
}

impl LifeBackground {
    /// Rust hosts and tests render into any `Surface`
    pub fn render_to<S: crate::api::surface::Surface + ?Sized>(&mut self, surface: &mut S) -> u32 {
        self.core.render(surface)
    }

    pub fn is_alive(&self, col: u32, row: u32) -> bool {
        self.core.is_alive(col, row)
    }
}
