//! Public API - the surface seam, JS exports and the browser mount

pub mod surface;
pub mod wasm;

#[cfg(target_arch = "wasm32")]
pub mod mount;
