//! Frame-rate counter
//!
//! Counts frames and publishes an fps sample once a full second has elapsed,
//! keeping the lowest and highest samples seen.

use std::time::{Duration, Instant};

const SAMPLE_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    window_start: Option<Instant>,
    frames: u32,
    current: Option<f32>,
    min: Option<f32>,
    max: Option<f32>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now`. Returns a new fps sample when the sample
    /// window closes.
    pub fn update(&mut self, now: Instant) -> Option<f32> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed < SAMPLE_WINDOW {
            return None;
        }

        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.current = Some(fps);
        self.min = Some(self.min.map_or(fps, |min| min.min(fps)));
        self.max = Some(self.max.map_or(fps, |max| max.max(fps)));
        self.frames = 0;
        self.window_start = Some(now);
        Some(fps)
    }

    /// Most recent sample.
    pub fn fps(&self) -> Option<f32> {
        self.current
    }

    pub fn min(&self) -> Option<f32> {
        self.min
    }

    pub fn max(&self) -> Option<f32> {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(counter: &mut FpsCounter, start: Instant, frames: u32, frame_time: Duration) -> Vec<f32> {
        (1..=frames)
            .filter_map(|i| counter.update(start + frame_time * i))
            .collect()
    }

    #[test]
    fn test_no_sample_before_one_second() {
        let mut counter = FpsCounter::new();
        let start = Instant::now();
        assert!(run(&mut counter, start, 50, Duration::from_millis(10)).is_empty());
        assert_eq!(counter.fps(), None);
    }

    #[test]
    fn test_sample_after_one_second() {
        let mut counter = FpsCounter::new();
        let start = Instant::now();
        counter.update(start);

        // The frame at `start` opens the window and counts too.
        let samples = run(&mut counter, start, 50, Duration::from_millis(20));
        assert_eq!(samples.len(), 1);
        assert!((samples[0] - 51.0).abs() < 0.01, "got {}", samples[0]);
        assert_eq!(counter.fps(), Some(samples[0]));
    }

    #[test]
    fn test_tracks_min_and_max() {
        let mut counter = FpsCounter::new();
        let start = Instant::now();
        counter.update(start);

        // One second at 10ms per frame, then one second at 50ms per frame.
        run(&mut counter, start, 100, Duration::from_millis(10));
        let slow_start = start + Duration::from_secs(1);
        run(&mut counter, slow_start, 20, Duration::from_millis(50));

        let (min, max) = (counter.min().unwrap(), counter.max().unwrap());
        assert!(min < 25.0, "min {}", min);
        assert!(max > 95.0, "max {}", max);
        assert_eq!(counter.fps(), counter.min());
    }
}
