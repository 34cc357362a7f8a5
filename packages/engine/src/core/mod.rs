//! Core utilities shared by every engine layer.
//!
//! Declared first in `lib.rs` so the macros below are in textual scope for
//! the rest of the crate.

#[macro_use]
pub mod utils;
