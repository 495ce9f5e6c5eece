//! Best-effort audio
//!
//! The game talks to an `AudioBackend`. When no audio device is available
//! the `NullAudio` backend (or an inert web backend) swallows every call.

use crate::sim::{GameEvent, GamePhase};

/// Playable clips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Looping background track
    Theme,
    /// Zombie stomped
    Stomp,
    /// Player bitten
    Hurt,
}

impl Clip {
    pub fn is_music(self) -> bool {
        matches!(self, Clip::Theme)
    }
}

/// Audio output used by the game
pub trait AudioBackend {
    /// Start a clip (music replaces the current track)
    fn play(&mut self, clip: Clip);
    /// Stop the music track
    fn stop(&mut self);
    fn is_playing(&self, clip: Clip) -> bool;
}

/// Backend that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn play(&mut self, _clip: Clip) {}

    fn stop(&mut self) {}

    fn is_playing(&self, _clip: Clip) -> bool {
        false
    }
}

/// Maps game state and events to audio calls
#[derive(Debug, Default)]
pub struct AudioDirector;

impl AudioDirector {
    pub fn new() -> Self {
        Self
    }

    /// Keep the theme playing while music is enabled and the run is not
    /// lost; stop it otherwise. Call once per frame.
    pub fn sync_music(&self, audio: &mut dyn AudioBackend, music_enabled: bool, phase: GamePhase) {
        let wanted = music_enabled && phase != GamePhase::GameOver;
        let playing = audio.is_playing(Clip::Theme);
        if wanted && !playing {
            audio.play(Clip::Theme);
        } else if !wanted && playing {
            audio.stop();
        }
    }

    /// Play sound effects for a frame's events
    pub fn handle_events(&self, audio: &mut dyn AudioBackend, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::EnemyStomped { .. } => audio.play(Clip::Stomp),
                GameEvent::PlayerHurt => {
                    audio.play(Clip::Hurt);
                    audio.stop();
                }
                GameEvent::AllEnemiesCleared | GameEvent::PhaseChanged { .. } => {}
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    //! Web Audio backend: procedural sound effects, `<audio>` element music

    use web_sys::{AudioContext, GainNode, HtmlAudioElement, OscillatorNode, OscillatorType};

    use super::{AudioBackend, Clip};
    use crate::Settings;

    /// Music track location, relative to the page
    const THEME_URL: &str = "music/theme.ogg";

    pub struct WebAudio {
        ctx: Option<AudioContext>,
        theme: Option<HtmlAudioElement>,
        sfx_volume: f32,
        music_volume: f32,
        muted: bool,
    }

    impl WebAudio {
        pub fn new(settings: &Settings) -> Self {
            // Either part may be unavailable (no secure context, no codec)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - sound effects disabled");
            }
            let theme = HtmlAudioElement::new_with_src(THEME_URL).ok();
            match &theme {
                Some(el) => {
                    el.set_loop(true);
                    el.set_volume(settings.effective_music_volume() as f64);
                }
                None => log::warn!("Failed to create audio element - music disabled"),
            }
            Self {
                ctx,
                theme,
                sfx_volume: settings.effective_sfx_volume(),
                music_volume: settings.effective_music_volume(),
                muted: false,
            }
        }

        /// Mute/unmute all audio
        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
            if let Some(el) = &self.theme {
                el.set_muted(muted);
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        fn effective_sfx_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.sfx_volume }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Stomp - quick rising squish
        fn play_stomp(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Square) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.25, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                .ok();
            osc.frequency().set_value_at_time(220.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(660.0, t + 0.1)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.2).ok();
        }

        /// Hurt - low falling buzz
        fn play_hurt(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 180.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.35, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.6)
                .ok();
            osc.frequency().set_value_at_time(180.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(50.0, t + 0.5)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.65).ok();
        }
    }

    impl AudioBackend for WebAudio {
        fn play(&mut self, clip: Clip) {
            if clip.is_music() {
                if let Some(el) = &self.theme {
                    el.set_volume(self.music_volume as f64);
                    // Autoplay may be refused until the first user gesture
                    let _ = el.play();
                }
                return;
            }

            let vol = self.effective_sfx_volume();
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match clip {
                Clip::Stomp => self.play_stomp(ctx, vol),
                Clip::Hurt => self.play_hurt(ctx, vol),
                Clip::Theme => {}
            }
        }

        fn stop(&mut self) {
            if let Some(el) = &self.theme {
                let _ = el.pause();
                el.set_current_time(0.0);
            }
        }

        fn is_playing(&self, clip: Clip) -> bool {
            match clip {
                Clip::Theme => self.theme.as_ref().is_some_and(|el| !el.paused()),
                // One-shot effects are not tracked
                Clip::Stomp | Clip::Hurt => false,
            }
        }
    }
}
