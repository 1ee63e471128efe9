use crate::params::Params;

/// A short synth note: pitch and how long to hold it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub pitch_hz: f32,
    pub duration_secs: f32,
}

impl Tone {
    pub const WALL_BOUNCE: Tone = Tone {
        pitch_hz: Params::WALL_TONE_HZ,
        duration_secs: Params::TONE_DURATION_SECS,
    };

    pub const PADDLE_HIT: Tone = Tone {
        pitch_hz: Params::PADDLE_TONE_HZ,
        duration_secs: Params::TONE_DURATION_SECS,
    };
}

/// Fire-and-forget tone output
pub trait AudioSink {
    fn play(&mut self, tone: Tone);
}

/// Sink that drops every tone
#[derive(Debug, Clone, Copy, Default)]
pub struct Silence;

impl AudioSink for Silence {
    fn play(&mut self, _tone: Tone) {}
}
