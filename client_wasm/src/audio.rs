//! Web Audio tone output

use game_core::{AudioSink, Tone};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

const VOLUME: f32 = 0.316; // -10 dB
const RELEASE_SECS: f64 = 0.1;

/// Plays each tone on a fresh triangle oscillator
///
/// The `AudioContext` is created on first use, browsers only allow it to
/// start once the page has seen a user gesture such as a key press.
#[derive(Default)]
pub struct WebAudioSink {
    ctx: Option<AudioContext>,
}

impl WebAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&AudioContext, JsValue> {
        if self.ctx.is_none() {
            self.ctx = Some(AudioContext::new()?);
        }
        self.ctx
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Audio context unavailable"))
    }

    fn try_play(&mut self, tone: Tone) -> Result<(), JsValue> {
        let ctx = self.context()?;
        let start = ctx.current_time();
        let end = start + tone.duration_secs as f64;

        let osc = ctx.create_oscillator()?;
        osc.set_type(OscillatorType::Triangle);
        osc.frequency().set_value(tone.pitch_hz);

        let gain = ctx.create_gain()?;
        gain.gain().set_value_at_time(VOLUME, start)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, end + RELEASE_SECS)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start_with_when(start)?;
        osc.stop_with_when(end + RELEASE_SECS)?;
        Ok(())
    }
}

impl AudioSink for WebAudioSink {
    fn play(&mut self, tone: Tone) {
        if let Err(e) = self.try_play(tone) {
            log::warn!("Failed to play tone {:?}: {:?}", tone, e);
        }
    }
}
