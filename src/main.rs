//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use grid_snake::Settings;
    use grid_snake::audio::{AudioManager, SoundEffect};
    use grid_snake::consts::*;
    use grid_snake::renderer::{CanvasRenderer, Palette};
    use grid_snake::sim::{Direction, GameState};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        audio: AudioManager,
        settings: Settings,
        accumulator: f64,
        last_time: f64,
        /// Shell-level pause (tab hidden / window blurred)
        paused: bool,
    }

    impl Game {
        /// Run simulation ticks for the elapsed wall time
        fn update(&mut self, dt_ms: f64) {
            if self.paused || self.state.is_terminal() {
                self.accumulator = 0.0;
                return;
            }
            self.accumulator += dt_ms.min(TICK_MS * MAX_TICKS_PER_FRAME as f64);

            let mut ticks = 0;
            while self.accumulator >= TICK_MS && ticks < MAX_TICKS_PER_FRAME {
                let events = self.state.advance();
                for cue in SoundEffect::audible(&events, self.state.is_terminal(), &self.settings) {
                    self.audio.play(cue);
                }
                if self.state.is_terminal() {
                    self.audio.stop_music();
                    self.accumulator = 0.0;
                    break;
                }
                self.accumulator -= TICK_MS;
                ticks += 1;
            }
        }

        /// Reset game state for restart
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed);
            self.accumulator = 0.0;
            self.audio.start_music();
            log::info!("Game restarted with seed: {}", seed);
        }

        fn settings_changed(&mut self) {
            self.settings.save();
            self.audio.apply_settings(&self.settings);
            self.renderer.set_palette(Palette::for_settings(&self.settings));
            if self.settings.effective_music_volume() > 0.0 && !self.state.is_terminal() {
                self.audio.start_music();
            } else {
                self.audio.stop_music();
            }
        }

        fn set_paused(&mut self, paused: bool) {
            if self.paused == paused {
                return;
            }
            self.paused = paused;
            if paused && self.settings.mute_on_blur {
                self.audio.stop_music();
            } else if !paused && !self.state.is_terminal() {
                self.audio.start_music();
            }
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Grid Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let renderer = CanvasRenderer::new(&canvas, Palette::for_settings(&settings))
            .expect("canvas has no 2d context");
        let mut audio = AudioManager::new(&settings);
        audio.start_music();

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            renderer,
            audio,
            settings,
            accumulator: 0.0,
            last_time: 0.0,
            paused: false,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Grid Snake running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            g.audio.resume();
            let direction = match event.key().as_str() {
                "ArrowUp" | "w" | "W" => Some(Direction::Up),
                "ArrowDown" | "s" | "S" => Some(Direction::Down),
                "ArrowLeft" | "a" | "A" => Some(Direction::Left),
                "ArrowRight" | "d" | "D" => Some(Direction::Right),
                _ => None,
            };
            if let Some(direction) = direction {
                event.prevent_default();
                g.state.set_direction(direction);
                return;
            }
            match event.key().as_str() {
                "Enter" if g.state.is_terminal() => {
                    let seed = js_sys::Date::now() as u64;
                    g.restart(seed);
                }
                "m" | "M" => {
                    g.settings.muted = !g.settings.muted;
                    g.settings_changed();
                }
                "h" | "H" => {
                    g.settings.high_contrast = !g.settings.high_contrast;
                    g.settings_changed();
                }
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let hidden = document_clone.visibility_state() == web_sys::VisibilityState::Hidden;
                game.borrow_mut().set_paused(hidden);
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur / focus
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().set_paused(true);
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().set_paused(false);
            });
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt_ms);
            g.renderer.render(&g.state);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the playable web version");

    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                eprintln!("Invalid seed {:?}: {}", arg, e);
                std::process::exit(2);
            }
        },
        None => 2024,
    };

    let settings = grid_snake::Settings::load();
    log::debug!("Settings: {:?}", settings);

    headless::run(seed, &settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use grid_snake::Settings;
    use grid_snake::audio::SoundEffect;
    use grid_snake::sim::{Direction, GameEvent, GameState};

    /// Longest scripted session
    const MAX_TICKS: u64 = 2000;
    /// Ticks between scripted right turns
    const TURN_EVERY: u64 = 9;

    /// Drive a seeded game on a fixed turning schedule and report the outcome
    pub fn run(seed: u64, settings: &Settings) {
        let mut state = GameState::new(seed);
        log::info!(
            "Seed {}: apple at {}, obstacles {:?}",
            seed,
            state.apple(),
            state.obstacles()
        );

        let mut heading = Direction::Right;
        while !state.is_terminal() && state.ticks() < MAX_TICKS {
            // Every third lap stretch goes one cell longer so the path drifts
            let stretch = TURN_EVERY + (state.ticks() / (TURN_EVERY * 4)) % 3;
            if state.ticks() % stretch == stretch - 1 {
                heading = heading.turn_right();
                state.set_direction(heading);
            }

            let events = state.advance();
            for event in &events {
                match event {
                    GameEvent::AppleEaten => log::info!(
                        "tick {}: apple eaten, score {}",
                        state.ticks(),
                        state.score()
                    ),
                    GameEvent::ObstacleHit => log::info!(
                        "tick {}: obstacle hit, {} lives left",
                        state.ticks(),
                        state.lives()
                    ),
                    GameEvent::SelfCollision => {
                        log::info!("tick {}: self-collision", state.ticks())
                    }
                }
            }
            for cue in SoundEffect::audible(&events, state.is_terminal(), settings) {
                log::debug!("tick {}: cue {:?}", state.ticks(), cue);
            }
        }

        match state.end_reason() {
            Some(reason) => println!(
                "Game Over! {} after {} ticks. Points: {}",
                reason.describe(),
                state.ticks(),
                state.score()
            ),
            None => println!(
                "Stopped after {} ticks. Points: {}, Lives: {}",
                state.ticks(),
                state.score(),
                state.lives()
            ),
        }
    }
}
