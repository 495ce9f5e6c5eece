//! Zombie Stomp entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use zombie_stomp::audio::{AudioDirector, WebAudio};
    use zombie_stomp::consts::*;
    use zombie_stomp::renderer::CanvasSurface;
    use zombie_stomp::sim::{Command, Flow, GameSimulation, tick};
    use zombie_stomp::ui::{Key, KeyState, click_command, draw_scene, frame_input, key_command};
    use zombie_stomp::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        sim: GameSimulation,
        settings: Settings,
        keys: KeyState,
        audio: WebAudio,
        director: AudioDirector,
        surface: CanvasSurface,
        accumulator: f32,
        last_time: f64,
        /// Set by the menu's Exit button; stops the frame loop
        quit: bool,
    }

    impl Game {
        fn new(surface: CanvasSurface) -> Self {
            let settings = Settings::default();
            Self {
                sim: GameSimulation::new(Tuning::load()),
                audio: WebAudio::new(&settings),
                settings,
                keys: KeyState::default(),
                director: AudioDirector::new(),
                surface,
                accumulator: 0.0,
                last_time: 0.0,
                quit: false,
            }
        }

        /// Run simulation frames
        fn update(&mut self, dt: f32) {
            self.director
                .sync_music(&mut self.audio, self.sim.state.music_enabled, self.sim.state.phase);

            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = frame_input(&self.keys);
                tick(&mut self.sim, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            let events = self.sim.drain_events();
            self.director.handle_events(&mut self.audio, &events);
        }

        fn render(&mut self) {
            draw_scene(&mut self.surface, &self.sim, &self.settings);
        }

        fn command(&mut self, command: Command) {
            self.audio.resume();
            if self.sim.apply_command(command) == Flow::Exit {
                self.quit = true;
            }
            // Phase changes from commands carry no sounds
            self.sim.drain_events();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Zombie Stomp starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed logical resolution; CSS scales it
        canvas.set_width(SCREEN_WIDTH as u32);
        canvas.set_height(SCREEN_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context query failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(CanvasSurface::new(ctx))));

        setup_input_handlers(&canvas, game.clone());
        setup_focus_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Zombie Stomp running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down: held state + one-shot commands
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_dom_key(&event.key()) else {
                    return;
                };
                event.prevent_default();
                let mut g = game.borrow_mut();
                g.keys.press(key);
                if event.repeat() {
                    return;
                }
                if let Some(command) = key_command(g.sim.state.phase, key) {
                    g.command(command);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().keys.release(key);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click - menu buttons
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                // Map CSS pixels to the logical resolution
                let scale_x = SCREEN_WIDTH / canvas_clone.client_width().max(1) as f32;
                let scale_y = SCREEN_HEIGHT / canvas_clone.client_height().max(1) as f32;
                let pos = Vec2::new(
                    event.offset_x() as f32 * scale_x,
                    event.offset_y() as f32 * scale_y,
                );
                let mut g = game.borrow_mut();
                if let Some(command) = click_command(g.sim.state.phase, pos) {
                    g.command(command);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_focus_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Window blur - release keys so the player does not keep walking
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.keys.clear();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().audio.set_muted(false);
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            if g.quit {
                log::info!("Zombie Stomp stopped");
                return;
            }

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Zombie Stomp (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    run_demo(zombie_stomp::Tuning::load(), seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play one run and print the final state
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(tuning: zombie_stomp::Tuning, seed: u64) {
    use zombie_stomp::Settings;
    use zombie_stomp::audio::{AudioDirector, NullAudio};
    use zombie_stomp::renderer::DrawList;
    use zombie_stomp::sim::{Autopilot, Command, Flow, GameEvent, GameSimulation, tick};
    use zombie_stomp::ui::draw_scene;

    /// Two minutes of play
    const DEMO_FRAMES: u32 = 60 * 120;

    let settings = Settings::default();
    let director = AudioDirector::new();
    let mut audio = NullAudio;
    let mut frame = DrawList::new();
    let mut pilot = Autopilot::new(seed);
    let mut sim = GameSimulation::new(tuning);

    log::info!("Demo seed: {seed}");
    sim.apply_command(Command::Start);

    let mut frames = 0;
    while frames < DEMO_FRAMES && !sim.state.phase.is_finished() {
        director.sync_music(&mut audio, sim.state.music_enabled, sim.state.phase);
        let input = pilot.next_input(&sim);
        tick(&mut sim, &input);

        let events = sim.drain_events();
        for event in &events {
            if let GameEvent::EnemyStomped { id } = event {
                log::info!("Frame {frames}: stomped zombie {id}");
            }
        }
        director.handle_events(&mut audio, &events);

        frame.clear();
        draw_scene(&mut frame, &sim, &settings);
        frames += 1;
    }

    log::info!(
        "Demo finished after {frames} frames: {:?}, score {}, {} zombies left",
        sim.state.phase,
        sim.state.score,
        sim.enemies.len()
    );
    match serde_json::to_string_pretty(&sim.state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final state: {e}"),
    }

    if sim.apply_command(Command::Quit) == Flow::Exit {
        log::info!("Exiting");
    }
}
