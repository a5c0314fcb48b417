//! Fixed-timestep frame loop.
//!
//! Wall-clock frame time accumulates and is spent in whole simulation ticks
//! at a fixed rate; each frame then draws exactly once, after all of its
//! ticks have run.

use std::time::Instant;

use tracing::warn;

/// Default simulation rate: 60 ticks per second.
pub const DEFAULT_TICK_RATE_HZ: u32 = 60;

/// Longest frame time accounted for. Longer frames are clamped so a stall
/// slows the animation down instead of bursting through many ticks.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Receives the two phases of every frame.
pub trait FrameHandler {
    /// Advance simulation state by `ticks` whole ticks (always at least one).
    fn advance(&mut self, ticks: u32);
    /// Draw the frame. `alpha` is the leftover fraction of a tick in `[0, 1)`.
    fn draw(&mut self, alpha: f64);
}

pub struct FrameLoop {
    tick_dt: f64,
    previous_time: Instant,
    accumulator: f64,
    frame_count: u64,
    tick_count: u64,
}

impl FrameLoop {
    /// A loop ticking `tick_rate_hz` times per second (0 is treated as 1).
    pub fn new(tick_rate_hz: u32) -> Self {
        Self {
            tick_dt: 1.0 / f64::from(tick_rate_hz.max(1)),
            previous_time: Instant::now(),
            accumulator: 0.0,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Seconds per tick.
    pub fn tick_dt(&self) -> f64 {
        self.tick_dt
    }

    /// Run one frame, measuring the time elapsed since the previous frame.
    pub fn tick(&mut self, handler: &mut impl FrameHandler) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.step(frame_time, handler)
    }

    /// Run one frame with an explicit frame time in seconds.
    ///
    /// Calls `advance` once with the number of whole ticks that fit the
    /// accumulated time (skipped when that is zero), then `draw` once.
    /// Returns the tick count.
    pub fn step(&mut self, frame_time: f64, handler: &mut impl FrameHandler) -> u32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }
        self.accumulator += frame_time;

        // Small tolerance so a frame of exactly one tick is not lost to rounding.
        let ticks = ((self.accumulator + 1e-9) / self.tick_dt).floor() as u32;
        if ticks > 0 {
            self.accumulator = (self.accumulator - f64::from(ticks) * self.tick_dt).max(0.0);
            self.tick_count += u64::from(ticks);
            handler.advance(ticks);
        }

        handler.draw(self.alpha());
        self.frame_count += 1;
        ticks
    }

    /// Leftover fraction of a tick, for interpolating between states.
    pub fn alpha(&self) -> f64 {
        (self.accumulator / self.tick_dt).clamp(0.0, 1.0 - f64::EPSILON)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Simulated seconds so far.
    pub fn total_sim_time(&self) -> f64 {
        self.tick_count as f64 * self.tick_dt
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE_HZ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    /// Records every call in order.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        last_alpha: f64,
    }

    impl FrameHandler for Recorder {
        fn advance(&mut self, ticks: u32) {
            self.events.push(format!("advance {ticks}"));
        }

        fn draw(&mut self, alpha: f64) {
            self.events.push("draw".to_string());
            self.last_alpha = alpha;
        }
    }

    #[test]
    fn test_single_tick_per_nominal_frame() {
        let mut frames = FrameLoop::default();
        let mut rec = Recorder::default();
        for _ in 0..120 {
            assert_eq!(frames.step(DT, &mut rec), 1);
        }
        assert_eq!(frames.tick_count(), 120);
        assert!((frames.total_sim_time() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_frame_draws_without_advancing() {
        let mut frames = FrameLoop::default();
        let mut rec = Recorder::default();
        assert_eq!(frames.step(0.25 * DT, &mut rec), 0);
        assert_eq!(rec.events, vec!["draw"]);
        assert!((rec.last_alpha - 0.25).abs() < 1e-6, "alpha {}", rec.last_alpha);
        assert_eq!(frames.frame_count(), 1);
    }

    #[test]
    fn test_slow_frame_advances_all_ticks_before_draw() {
        let mut frames = FrameLoop::default();
        let mut rec = Recorder::default();
        frames.step(3.0 * DT, &mut rec);
        assert_eq!(rec.events, vec!["advance 3", "draw"]);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut frames = FrameLoop::default();
        assert_eq!(frames.step(5.0, &mut Recorder::default()), 15);
    }

    #[test]
    fn test_uneven_frames_conserve_time() {
        let mut frames = FrameLoop::default();
        let mut rec = Recorder::default();
        let times = [0.017, 0.015, 0.020, 0.016, 0.033, 0.008, 0.018];
        for t in times {
            frames.step(t, &mut rec);
        }
        let total: f64 = times.iter().sum();
        let accounted = frames.total_sim_time() + frames.alpha() * DT;
        assert!((total - accounted).abs() < 1e-6, "{total} vs {accounted}");
        assert_eq!(frames.frame_count(), times.len() as u64);
    }

    #[test]
    fn test_wall_clock_tick_counts_frames() {
        let mut frames = FrameLoop::new(0);
        assert_eq!(frames.tick_dt(), 1.0);
        frames.tick(&mut Recorder::default());
        assert_eq!(frames.frame_count(), 1);
    }
}
