use crate::domain::config::EngineConfig;
use crate::spatial::grid::CellGrid;

use super::perf_stats::PerfStats;
use super::random;
use super::EngineCore;

pub(super) fn create_engine_core(width: u32, height: u32) -> EngineCore {
    let config = EngineConfig::default();
    let (cols, rows) = config.grid_dims(width, height);
    EngineCore {
        config,
        current: CellGrid::new(cols, rows),
        scratch: CellGrid::new(cols, rows),
        width,
        height,
        pointer: None,
        last_seed_ms: None,
        last_advance_ms: None,
        generation: 0,
        rng_state: random::initial_seed(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
