/// Game tuning parameters for Pong
///
/// Distances are surface units (canvas pixels), speeds are units per fixed step.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_MAX_WIDTH: f32 = 800.0;
    pub const SURFACE_ASPECT: f32 = 0.6; // height = width * aspect
    pub const VIEWPORT_MARGIN: f32 = 20.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_INSET: f32 = 30.0; // Distance from the side edge to the paddle center

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SERVE_SPEED: f32 = 5.0;
    pub const BALL_SERVE_SPREAD: f32 = 3.0; // Vertical serve speed drawn from [-spread, spread)
    pub const BALL_SPEED_INCREASE: f32 = 1.1; // Multiply horizontal speed on paddle hit
    pub const BALL_SPEED_MAX: f32 = 25.0; // Below 2 * radius + paddle width, so the ball can't tunnel

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Clock
    pub const FIXED_STEP_MS: f64 = 1000.0 / 60.0; // ~60 Hz
    pub const MAX_STEPS_PER_FRAME: u32 = 5;
    pub const PAUSE_DEBOUNCE_MS: f64 = 200.0;

    // Particles
    pub const PARTICLE_SPEED: f32 = 5.0; // Per-axis velocity drawn from [-speed, speed)
    pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
    pub const PARTICLE_RADIUS_MAX: f32 = 4.0;
    pub const PARTICLE_DECAY: f32 = 0.02; // Life lost per step, ~50 steps per burst
    pub const WALL_BURST: usize = 10;
    pub const PADDLE_BURST: usize = 20;

    // Starfield
    pub const STAR_COUNT: usize = 200;
    pub const STAR_RADIUS_MIN: f32 = 1.0;
    pub const STAR_RADIUS_MAX: f32 = 3.0;
    pub const STAR_SPEED_MIN: f32 = 0.1;
    pub const STAR_SPEED_MAX: f32 = 0.6;

    // Audio
    pub const WALL_TONE_HZ: f32 = 261.63; // C4
    pub const PADDLE_TONE_HZ: f32 = 329.63; // E4
    pub const TONE_DURATION_SECS: f32 = 0.0625; // 32nd note at 120 bpm
}
