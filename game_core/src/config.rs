use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Errors raised while loading or validating a [`Config`]
#[derive(Debug)]
pub enum ConfigError {
    /// The RON document could not be parsed
    Parse(ron::error::SpannedError),
    /// A field holds a value the simulation can't run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config field `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_serve_speed: f32,
    pub ball_serve_spread: f32,
    pub ball_speed_increase: f32,
    /// Horizontal speed cap, `None` lets rallies speed up without bound
    pub ball_speed_max: Option<f32>,
    pub win_score: u8,
    pub step_ms: f64,
    /// Catch-up cap, `None` runs every step that is due
    pub max_steps_per_frame: Option<u32>,
    pub pause_debounce_ms: f64,
    pub wall_burst: usize,
    pub paddle_burst: usize,
    /// Per-axis burst velocity drawn from `[-particle_speed, particle_speed)`
    pub particle_speed: f32,
    /// `(min, max)` particle radius, max exclusive
    pub particle_radius: (f32, f32),
    pub particle_decay: f32,
    pub star_count: usize,
    pub star_radius: (f32, f32),
    /// `(min, max)` leftward drift per step
    pub star_speed: (f32, f32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_serve_speed: Params::BALL_SERVE_SPEED,
            ball_serve_spread: Params::BALL_SERVE_SPREAD,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_speed_max: Some(Params::BALL_SPEED_MAX),
            win_score: Params::WIN_SCORE,
            step_ms: Params::FIXED_STEP_MS,
            max_steps_per_frame: Some(Params::MAX_STEPS_PER_FRAME),
            pause_debounce_ms: Params::PAUSE_DEBOUNCE_MS,
            wall_burst: Params::WALL_BURST,
            paddle_burst: Params::PADDLE_BURST,
            particle_speed: Params::PARTICLE_SPEED,
            particle_radius: (Params::PARTICLE_RADIUS_MIN, Params::PARTICLE_RADIUS_MAX),
            particle_decay: Params::PARTICLE_DECAY,
            star_count: Params::STAR_COUNT,
            star_radius: (Params::STAR_RADIUS_MIN, Params::STAR_RADIUS_MAX),
            star_speed: (Params::STAR_SPEED_MIN, Params::STAR_SPEED_MAX),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a RON document, filling missing fields from the defaults
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Config = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_serve_speed", self.ball_serve_speed),
            ("particle_speed", self.particle_speed),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }

        if !(self.paddle_inset >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "paddle_inset",
                reason: "must not be negative",
            });
        }
        if !(self.ball_serve_spread >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "ball_serve_spread",
                reason: "must not be negative",
            });
        }
        if !(self.ball_speed_increase > 1.0) {
            return Err(ConfigError::Invalid {
                field: "ball_speed_increase",
                reason: "must be greater than one",
            });
        }
        if let Some(max) = self.ball_speed_max {
            if !(max >= self.ball_serve_speed) {
                return Err(ConfigError::Invalid {
                    field: "ball_speed_max",
                    reason: "must not be below the serve speed",
                });
            }
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid {
                field: "win_score",
                reason: "must be at least one",
            });
        }
        if !(self.step_ms > 0.0) {
            return Err(ConfigError::Invalid {
                field: "step_ms",
                reason: "must be greater than zero",
            });
        }
        if self.max_steps_per_frame == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_steps_per_frame",
                reason: "must be at least one",
            });
        }
        if !(self.pause_debounce_ms >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "pause_debounce_ms",
                reason: "must not be negative",
            });
        }
        if !(self.particle_decay > 0.0 && self.particle_decay <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "particle_decay",
                reason: "must be in (0, 1]",
            });
        }

        let ranges = [
            ("particle_radius", self.particle_radius),
            ("star_radius", self.star_radius),
            ("star_speed", self.star_speed),
        ];
        for (field, (min, max)) in ranges {
            if !(min > 0.0 && max > min) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "needs 0 < min < max",
                });
            }
        }
        Ok(())
    }

    /// Apply one paddle hit to a horizontal speed: reverse it and speed it up
    pub fn paddle_return_speed(&self, vx: f32) -> f32 {
        let mut speed = vx.abs() * self.ball_speed_increase;
        if let Some(max) = self.ball_speed_max {
            speed = speed.min(max);
        }
        -vx.signum() * speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_from_ron_fills_missing_fields() {
        let config = Config::from_ron("(win_score: 3, ball_speed_max: None)").unwrap();
        assert_eq!(config.win_score, 3);
        assert_eq!(config.ball_speed_max, None);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
    }

    #[test]
    fn test_from_ron_rejects_bad_syntax() {
        let err = Config::from_ron("(win_score: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validate_rejects_zero_win_score() {
        let config = Config {
            win_score: 0,
            ..Config::new()
        };
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "win_score"),
            other => panic!("expected invalid win_score, got {:?}", other),
        }
    }

    #[test]
    fn test_from_ron_reads_effect_ranges() {
        let config = Config::from_ron("(particle_speed: 2.0, star_speed: (0.5, 1.5))").unwrap();
        assert_eq!(config.particle_speed, 2.0);
        assert_eq!(config.star_speed, (0.5, 1.5));
        assert_eq!(config.star_radius, (Params::STAR_RADIUS_MIN, Params::STAR_RADIUS_MAX));
    }

    #[test]
    fn test_validate_rejects_empty_ranges() {
        let config = Config {
            star_radius: (2.0, 2.0),
            ..Config::new()
        };
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "star_radius"),
            other => panic!("expected invalid star_radius, got {:?}", other),
        }

        let config = Config {
            particle_radius: (3.0, 1.0),
            ..Config::new()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_accelerating_hits() {
        let config = Config {
            ball_speed_increase: 1.0,
            ..Config::new()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_step() {
        let config = Config {
            step_ms: f64::NAN,
            ..Config::new()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_paddle_return_speed_reverses_and_scales() {
        let config = Config::new();
        let vx = config.paddle_return_speed(-5.0);
        assert!((vx - 5.5).abs() < 1e-5, "got {}", vx);
        let vx = config.paddle_return_speed(10.0);
        assert!((vx + 11.0).abs() < 1e-5, "got {}", vx);
    }

    #[test]
    fn test_paddle_return_speed_respects_cap() {
        let config = Config::new();
        let vx = config.paddle_return_speed(-24.0);
        assert_eq!(vx, Params::BALL_SPEED_MAX);

        let uncapped = Config {
            ball_speed_max: None,
            ..Config::new()
        };
        let vx = uncapped.paddle_return_speed(-24.0);
        assert!(vx > Params::BALL_SPEED_MAX);
    }
}
