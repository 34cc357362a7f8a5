use crate::domain::config::DEFAULT_RNG_SEED;

/// Initial brush RNG state.
///
/// Browsers get a fresh seed per page load; native builds stay
/// deterministic.
pub(super) fn initial_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        non_zero((js_sys::Math::random() * u32::MAX as f64) as u32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_RNG_SEED
    }
}

/// xorshift32 is stuck at zero forever
#[inline]
pub(super) fn non_zero(seed: u32) -> u32 {
    if seed == 0 { DEFAULT_RNG_SEED } else { seed }
}
