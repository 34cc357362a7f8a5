//! FrameLoop - cancellable per-frame driver
//!
//! The host's frame scheduler ticks `on_frame`; the return value says
//! whether to ask for another frame. Once stopped the loop never steps,
//! renders or reschedules again.

use crate::api::surface::Surface;

use super::EngineCore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState { self.state }

    pub fn is_running(&self) -> bool { self.state == LoopState::Running }

    /// Frames stepped and rendered so far
    pub fn frames(&self) -> u64 { self.frames }

    /// Idle -> Running. Returns true if the caller should request the first
    /// frame; a running or stopped loop is left alone.
    pub fn start(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    /// One animation frame: step, render, then report whether to reschedule
    pub fn on_frame<S: Surface + ?Sized>(
        &mut self,
        engine: &mut EngineCore,
        surface: &mut S,
        now: f64,
    ) -> bool {
        if !self.is_running() {
            return false;
        }
        engine.step(now);
        engine.render(surface);
        self.frames += 1;
        self.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::surface::RecordingSurface;

    #[test]
    fn idle_loop_does_nothing() {
        let mut frames = FrameLoop::new();
        let mut engine = EngineCore::new(40, 40);
        let mut surface = RecordingSurface::new();

        assert_eq!(frames.state(), LoopState::Idle);
        assert!(!frames.on_frame(&mut engine, &mut surface, 0.0));
        assert!(surface.ops.is_empty());
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn running_loop_steps_renders_and_reschedules() {
        let mut frames = FrameLoop::new();
        let mut engine = EngineCore::new(40, 40);
        let mut surface = RecordingSurface::new();

        assert!(frames.start());
        assert!(!frames.start());
        for i in 0..12 {
            assert!(frames.on_frame(&mut engine, &mut surface, i as f64 * 16.0));
        }
        assert_eq!(frames.frames(), 12);
        // One background clear per frame
        assert_eq!(surface.rects_in(crate::domain::config::BACKGROUND_FILL).len(), 12);
        // t = 0 and t = 160 pass the 150ms throttle
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn stopped_loop_never_reschedules_or_restarts() {
        let mut frames = FrameLoop::new();
        let mut engine = EngineCore::new(40, 40);
        let mut surface = RecordingSurface::new();

        frames.start();
        assert!(frames.on_frame(&mut engine, &mut surface, 0.0));
        frames.stop();
        surface.clear();

        assert!(!frames.on_frame(&mut engine, &mut surface, 500.0));
        assert!(surface.ops.is_empty());
        assert_eq!(engine.generation(), 1);
        assert!(!frames.start());
        assert_eq!(frames.state(), LoopState::Stopped);
    }
}
