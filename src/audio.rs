//! Audio cues for simulation events
//!
//! The mapping from [`GameEvent`] to [`SoundEffect`] is plain data. Playback
//! uses the Web Audio API with procedurally generated tones, so there are no
//! sound files to ship or fail to load.

use crate::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Apple eaten
    Eat,
    /// Obstacle or body hit
    Collision,
    /// Run ended
    GameOver,
}

impl SoundEffect {
    /// The cue for a simulation event
    pub fn for_event(event: &GameEvent) -> SoundEffect {
        match event {
            GameEvent::AppleEaten => SoundEffect::Eat,
            GameEvent::ObstacleHit | GameEvent::SelfCollision => SoundEffect::Collision,
        }
    }

    /// Cues for one tick's events, plus the game-over sting if the run just ended
    pub fn for_tick(events: &[GameEvent], became_terminal: bool) -> Vec<SoundEffect> {
        let mut cues: Vec<SoundEffect> = events.iter().map(Self::for_event).collect();
        if became_terminal {
            cues.push(SoundEffect::GameOver);
        }
        cues
    }

    /// Cues worth playing under `settings`; none when effects are silent
    pub fn audible(
        events: &[GameEvent],
        became_terminal: bool,
        settings: &Settings,
    ) -> Vec<SoundEffect> {
        if settings.effective_sfx_volume() <= 0.0 {
            return Vec::new();
        }
        Self::for_tick(events, became_terminal)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;
    use crate::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        sfx_volume: f32,
        music_volume: f32,
        /// Running background loop (oscillators feeding one gain node)
        music: Option<(Vec<OscillatorNode>, GainNode)>,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                sfx_volume: settings.effective_sfx_volume(),
                music_volume: settings.effective_music_volume(),
                music: None,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Re-read volumes from settings
        pub fn apply_settings(&mut self, settings: &Settings) {
            self.sfx_volume = settings.effective_sfx_volume();
            self.music_volume = settings.effective_music_volume();
            if let (Some(ctx), Some((_, gain))) = (&self.ctx, &self.music) {
                gain.gain()
                    .set_value_at_time(self.music_volume * 0.15, ctx.current_time())
                    .ok();
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.sfx_volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Eat => self.play_eat(ctx, vol),
                SoundEffect::Collision => self.play_collision(ctx, vol),
                SoundEffect::GameOver => self.play_game_over(ctx, vol),
            }
        }

        /// Start the background loop if it is not already running
        pub fn start_music(&mut self) {
            if self.music.is_some() || self.music_volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };
            let Ok(gain) = ctx.create_gain() else { return };
            if gain.connect_with_audio_node(&ctx.destination()).is_err() {
                return;
            }
            gain.gain().set_value(self.music_volume * 0.15);

            // Soft open fifth drone
            let mut oscs = Vec::new();
            for (freq, osc_type) in [(110.0, OscillatorType::Triangle), (165.0, OscillatorType::Sine)] {
                let Ok(osc) = ctx.create_oscillator() else { continue };
                osc.set_type(osc_type);
                osc.frequency().set_value(freq);
                if osc.connect_with_audio_node(&gain).is_ok() {
                    osc.start().ok();
                    oscs.push(osc);
                }
            }
            self.music = Some((oscs, gain));
        }

        /// Stop the background loop
        pub fn stop_music(&mut self) {
            if let Some((oscs, _gain)) = self.music.take() {
                for osc in oscs {
                    osc.stop().ok();
                }
            }
        }

        // === Sound generators ===

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

        /// Eat - quick rising blip
        fn play_eat(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 500.0, OscillatorType::Square) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.25, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(500.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(1000.0, t + 0.08)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Collision - low thud with a buzz on top
        fn play_collision(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            if let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Sine) {
                gain.gain().set_value_at_time(vol * 0.6, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                    .ok();
                osc.frequency().set_value_at_time(150.0, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(50.0, t + 0.2)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.25).ok();
            }

            if let Some((osc, gain)) = self.create_osc(ctx, 90.0, OscillatorType::Sawtooth) {
                gain.gain().set_value_at_time(vol * 0.2, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.2).ok();
            }
        }

        /// Game over - sad descending
        fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
                let delay = i as f64 * 0.2;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.4).ok();
                }
            }
        }
    }
}
