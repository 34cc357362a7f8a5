//! wasm-bindgen exports

pub use crate::simulation::facade::LifeBackground;
pub use crate::simulation::PerfStats;

#[cfg(target_arch = "wasm32")]
pub use super::mount::BackgroundMount;
