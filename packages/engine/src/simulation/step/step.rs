use crate::systems::{advance_generation, seed_brush};

use super::{EngineCore, PerfTimer};

/// Throttle gate. A clock that runs backwards never opens it.
#[inline]
fn interval_elapsed(last: Option<f64>, now: f64, interval: f64) -> bool {
    match last {
        None => true,
        Some(prev) => now - prev >= interval,
    }
}

pub(super) fn seed(engine: &mut EngineCore, now: f64) -> bool {
    let Some(pointer) = engine.pointer else {
        return false;
    };
    // Negative cells mean the pointer is left of / above the surface
    if pointer.col < 0 || pointer.row < 0 {
        return false;
    }
    if !interval_elapsed(engine.last_seed_ms, now, engine.config.spawn_interval_ms) {
        return false;
    }

    let born = seed_brush(
        &mut engine.current,
        pointer.col,
        pointer.row,
        engine.config.seed_radius,
        engine.config.seed_probability,
        &mut engine.rng_state,
    );
    engine.last_seed_ms = Some(now);

    if engine.perf_enabled {
        engine.perf_stats.seeded_cells = born;
    }
    true
}

pub(super) fn advance(engine: &mut EngineCore, now: f64) -> bool {
    if !interval_elapsed(engine.last_advance_ms, now, engine.config.update_interval_ms) {
        return false;
    }

    // Next generation goes into scratch, then the buffers trade places.
    // Render only ever sees `current`, which is complete at this point.
    advance_generation(&engine.current, &mut engine.scratch);
    std::mem::swap(&mut engine.current, &mut engine.scratch);

    engine.last_advance_ms = Some(now);
    engine.generation += 1;
    true
}

pub(super) fn step(engine: &mut EngineCore, now: f64) {
    let perf_on = engine.perf_enabled;
    if perf_on {
        engine.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Seeding first so fresh cells take part in this frame's generation
    if perf_on {
        let t0 = PerfTimer::start();
        let seeded = seed(engine, now);
        engine.perf_stats.seeded = seeded;
        engine.perf_stats.seed_ms = t0.elapsed_ms();
    } else {
        seed(engine, now);
    }

    if perf_on {
        let t0 = PerfTimer::start();
        let advanced = advance(engine, now);
        engine.perf_stats.advanced = advanced;
        engine.perf_stats.advance_ms = t0.elapsed_ms();
    } else {
        advance(engine, now);
    }

    if perf_on {
        engine.perf_stats.generation = engine.generation;
        engine.perf_stats.live_cells = engine.current.live_count();
        engine.perf_stats.grid_cells = engine.current.size() as u32;
        if let Some(start) = step_start {
            engine.perf_stats.step_ms = start.elapsed_ms();
        }
    }
}
