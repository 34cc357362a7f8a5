//! Domain constants for the background automaton

pub mod config;
