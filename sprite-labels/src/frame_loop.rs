//! Redraw-every-frame loop
//!
//! Each host tick moves the loop Idle -> Rendering -> Idle: the scene is drawn
//! and then updated (controls, spin, fps). There is nothing to schedule; the
//! host decides when ticks happen.

use crate::scene::SceneContext;
use std::time::Instant;

/// Something that can draw a scene, normally the GPU renderer.
pub trait FrameTarget {
    type Error;

    fn draw(&mut self, scene: &SceneContext) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameState {
    #[default]
    Idle,
    Rendering,
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    state: FrameState,
    last_tick: Option<Instant>,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at `now`. The scene is updated even when drawing fails,
    /// so a dropped frame does not stall the controls; the draw error is
    /// returned afterwards.
    pub fn tick<T: FrameTarget>(
        &mut self,
        now: Instant,
        scene: &mut SceneContext,
        target: &mut T,
    ) -> Result<(), T::Error> {
        let dt = self
            .last_tick
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last_tick = Some(now);

        self.state = FrameState::Rendering;
        let drawn = target.draw(scene);
        scene.update(dt, now);
        self.state = FrameState::Idle;

        self.frames += 1;
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PointerInput;
    use crate::config::SceneConfig;
    use std::time::Duration;

    /// Records the camera zoom it saw on each draw.
    #[derive(Default)]
    struct Recorder {
        zooms: Vec<f32>,
        fail: bool,
    }

    impl FrameTarget for Recorder {
        type Error = &'static str;

        fn draw(&mut self, scene: &SceneContext) -> Result<(), Self::Error> {
            self.zooms.push(scene.camera.zoom);
            if self.fail { Err("surface lost") } else { Ok(()) }
        }
    }

    fn scene() -> SceneContext {
        SceneContext::new(&SceneConfig::default(), 800, 600)
    }

    #[test]
    fn test_draw_happens_before_update() {
        let mut scene = scene();
        let mut frame_loop = FrameLoop::new();
        let mut target = Recorder::default();
        let start = Instant::now();

        scene.handle_pointer(PointerInput::Scrolled { lines: 1.0 });
        frame_loop.tick(start, &mut scene, &mut target).unwrap();
        frame_loop.tick(start + Duration::from_millis(16), &mut scene, &mut target).unwrap();

        // First frame draws the old zoom; the update after it applies the scroll.
        assert_eq!(target.zooms[0], 1.0);
        assert!(target.zooms[1] > 1.0);
        assert_eq!(frame_loop.frames(), 2);
        assert_eq!(frame_loop.state(), FrameState::Idle);
    }

    #[test]
    fn test_failed_draw_still_updates() {
        let mut scene = scene();
        let mut frame_loop = FrameLoop::new();
        let mut target = Recorder { fail: true, ..Default::default() };

        scene.handle_pointer(PointerInput::Scrolled { lines: 1.0 });
        assert_eq!(frame_loop.tick(Instant::now(), &mut scene, &mut target), Err("surface lost"));
        assert!(scene.camera.zoom > 1.0);
        assert_eq!(frame_loop.state(), FrameState::Idle);
    }

    #[test]
    fn test_first_tick_has_zero_dt() {
        let mut config = SceneConfig::default();
        config.cube.spin_speed = 1.0;
        let mut scene = SceneContext::new(&config, 800, 600);
        let mut frame_loop = FrameLoop::new();

        frame_loop.tick(Instant::now(), &mut scene, &mut Recorder::default()).unwrap();
        assert_eq!(scene.cube.orientation(), glam::Quat::IDENTITY);
    }
}
