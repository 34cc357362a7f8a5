use wasm_bindgen::prelude::*;

/// Snapshot of the last step + render
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) seed_ms: f64,
    pub(super) advance_ms: f64,
    pub(super) render_ms: f64,
    pub(super) generation: u64,
    pub(super) live_cells: u32,
    pub(super) seeded_cells: u32,
    pub(super) grid_cells: u32,
    pub(super) cells_drawn: u32,
    pub(super) seeded: bool,
    pub(super) advanced: bool,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn seed_ms(&self) -> f64 { self.seed_ms }
    #[wasm_bindgen(getter)]
    pub fn advance_ms(&self) -> f64 { self.advance_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }
    #[wasm_bindgen(getter)]
    pub fn seeded_cells(&self) -> u32 { self.seeded_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_cells(&self) -> u32 { self.grid_cells }
    #[wasm_bindgen(getter)]
    pub fn cells_drawn(&self) -> u32 { self.cells_drawn }
    #[wasm_bindgen(getter)]
    pub fn seeded(&self) -> bool { self.seeded }
    #[wasm_bindgen(getter)]
    pub fn advanced(&self) -> bool { self.advanced }
}
