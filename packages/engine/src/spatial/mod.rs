//! Spatial storage for the automaton

pub mod grid;
