//! Life Backdrop Engine - Game of Life page background in WASM
//!
//! A toroidal Game of Life that runs behind page content and grows new
//! cells under the cursor.
//!
//! Architecture:
//! - core/        - Macros (checked access, console logging)
//! - domain/      - Fixed constants
//! - spatial/     - Cell buffers
//! - systems/     - Life rule, pointer seeding
//! - simulation/  - Engine orchestration, frame loop
//! - api/         - Surface seam, JS exports, browser mount

// Macros first so every later module can use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Thread pool for the parallel generation pass
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("life-backdrop engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::surface::{RecordingSurface, Surface, SurfaceOp};
pub use api::wasm::{LifeBackground, PerfStats};
#[cfg(target_arch = "wasm32")]
pub use api::wasm::BackgroundMount;
pub use domain::config::EngineConfig;
pub use simulation::{EngineCore, FrameLoop, LoopState, PointerCell};
pub use spatial::grid::CellGrid;
