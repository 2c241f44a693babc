//! Frame timing.

use std::time::Instant;

/// Timing information handed to a chapter every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the clock started.
    pub elapsed: f32,
}

/// Measures frame deltas and the total running time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    frame_start: Instant,
}

impl FrameClock {
    /// Starts the clock now.
    pub fn new() -> FrameClock {
        FrameClock::starting_at(Instant::now())
    }

    /// Starts the clock at the given instant.
    pub fn starting_at(start: Instant) -> FrameClock {
        FrameClock { start, frame_start: start }
    }

    /// Marks the beginning of a new frame.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Marks the beginning of a new frame at `now`.
    ///
    /// Instants earlier than the previous frame produce a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let delta = now.saturating_duration_since(self.frame_start).as_secs_f32();
        if now > self.frame_start {
            self.frame_start = now;
        }

        FrameTime {
            delta,
            elapsed: self.frame_start.saturating_duration_since(self.start).as_secs_f32(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> FrameClock {
        FrameClock::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn delta_and_elapsed() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let first = clock.tick_at(start + Duration::from_millis(16));
        assert!((first.delta - 0.016).abs() < 1e-6);
        assert!((first.elapsed - 0.016).abs() < 1e-6);

        let second = clock.tick_at(start + Duration::from_millis(48));
        assert!((second.delta - 0.032).abs() < 1e-6);
        assert!((second.elapsed - 0.048).abs() < 1e-6);
    }

    #[test]
    fn time_never_runs_backwards() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start + Duration::from_secs(1));
        let frame = clock.tick_at(start);
        assert_eq!(frame.delta, 0.0);
        assert_eq!(frame.elapsed, 0.0);
    }
}
