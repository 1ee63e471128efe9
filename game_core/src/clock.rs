use crate::config::Config;

/// Fixed-timestep accumulator
///
/// Turns host frame timestamps (milliseconds) into a whole number of fixed
/// simulation steps, carrying the unconsumed remainder to the next frame.
#[derive(Debug, Clone)]
pub struct SimClock {
    step_ms: f64,
    accumulator: f64,
    last_ms: Option<f64>,
    max_steps_per_frame: Option<u32>,
}

impl SimClock {
    pub fn new(step_ms: f64, max_steps_per_frame: Option<u32>) -> Self {
        Self {
            step_ms,
            accumulator: 0.0,
            last_ms: None,
            max_steps_per_frame,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.step_ms, config.max_steps_per_frame)
    }

    /// Feed the current frame timestamp, returns how many fixed steps to run
    ///
    /// The first call only seeds the clock. When the catch-up cap is hit the
    /// excess whole steps are dropped and only the fractional part is kept.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last_ms) = self.last_ms.replace(now_ms) else {
            return 0;
        };

        self.accumulator += (now_ms - last_ms).max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step_ms {
            if self.max_steps_per_frame.is_some_and(|max| steps >= max) {
                let dropped = (self.accumulator / self.step_ms).floor();
                log::warn!(
                    "Simulation fell behind, dropping {} steps ({:.1} ms)",
                    dropped,
                    dropped * self.step_ms
                );
                self.accumulator %= self.step_ms;
                break;
            }
            self.accumulator -= self.step_ms;
            steps += 1;
        }

        steps
    }

    /// Forget the previous timestamp, the next frame seeds the clock again
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_ms = None;
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }
}
