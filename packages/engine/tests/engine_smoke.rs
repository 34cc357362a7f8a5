use life_backdrop_engine::{EngineConfig, EngineCore, FrameLoop, LifeBackground, RecordingSurface};

const FRAME_MS: f64 = 1000.0 / 60.0;

#[test]
fn viewport_maps_to_cell_grid() {
    let life = LifeBackground::new(1920, 1080);
    assert_eq!(life.cols(), 240);
    assert_eq!(life.rows(), 135);
    assert_eq!(life.width(), 1920);
    assert_eq!(life.height(), 1080);
    assert_eq!(life.live_cells(), 0);
}

#[test]
fn pointer_trail_grows_cells_over_a_few_seconds() {
    let mut life = LifeBackground::new(800, 600);
    let mut surface = RecordingSurface::new();
    let config = EngineConfig::default();
    let mut peak_live = 0;

    for frame in 0..180 {
        let now = frame as f64 * FRAME_MS;
        // Sweep the cursor left to right
        life.set_pointer(100.0 + frame as f64 * 3.0, 300.0);
        life.step(now);
        surface.clear();
        let drawn = life.render_to(&mut surface);

        assert_eq!(drawn, life.live_cells());
        assert_eq!(surface.rects_in(&config.background_fill).len(), 1);
        peak_live = peak_live.max(drawn);
    }

    assert!(life.generation() >= 15, "generation = {}", life.generation());
    assert!(peak_live > 0);
}

#[test]
fn leaving_the_page_stops_seeding() {
    let mut engine = EngineCore::new(400, 400);
    engine.set_pointer(200.0, 200.0);
    engine.clear_pointer();
    for i in 0..20 {
        engine.step(i as f64 * 50.0);
    }
    assert_eq!(engine.live_cells(), 0);
}

#[test]
fn resize_mid_animation_starts_over() {
    let mut life = LifeBackground::new(320, 240);
    life.enable_perf_metrics(true);
    life.set_pointer(160.0, 120.0);
    life.step(0.0);
    assert!(life.get_perf_stats().seeded_cells() > 0);

    life.resize(1000, 10);
    assert_eq!((life.cols(), life.rows()), (125, 2));
    assert_eq!(life.live_cells(), 0);
    assert!(!life.is_alive(20, 1));

    let mut surface = RecordingSurface::new();
    assert_eq!(life.render_to(&mut surface), 0);
    assert_eq!(surface.fill_rect_count(), 1);
}

#[test]
fn frame_loop_drives_engine_until_stopped() {
    let mut engine = EngineCore::new(200, 200);
    let mut frames = FrameLoop::new();
    let mut surface = RecordingSurface::new();
    engine.set_pointer(100.0, 100.0);

    assert!(frames.start());
    let mut now = 0.0;
    while frames.on_frame(&mut engine, &mut surface, now) {
        now += FRAME_MS;
        if now > 1000.0 {
            frames.stop();
        }
    }
    assert!(!frames.is_running());
    assert!(engine.generation() > 0);
    let rendered = frames.frames();
    assert!(!frames.on_frame(&mut engine, &mut surface, now + 100.0));
    assert_eq!(frames.frames(), rendered);
}
