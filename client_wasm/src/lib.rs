//! Browser client for Pong
//!
//! Owns the canvas, keyboard, audio and score DOM, and drives
//! `game_core::Game` from a `requestAnimationFrame` loop.

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod input;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{Config, Game, GameMap, InputState, RenderSurface};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

    use crate::audio::WebAudioSink;
    use crate::dom::DomPresenter;
    use crate::input::apply_key;
    use crate::surface::CanvasSurface;

    /// Everything one running page owns
    struct Client {
        game: Game,
        surface: CanvasSurface,
        audio: WebAudioSink,
        presenter: DomPresenter,
        input: InputState,
    }

    impl Client {
        fn frame(&mut self, now_ms: f64) {
            self.game.frame(
                now_ms,
                &self.input,
                &mut self.surface,
                &mut self.audio,
                &mut self.presenter,
            );
        }

        /// The canvas decides the final size, the game follows it as in `start`
        fn resize(&mut self, map: GameMap) {
            self.surface.resize(map.width, map.height);
            self.game
                .resize(self.surface.width(), self.surface.height());
        }

        fn restart(&mut self) {
            self.game.restart();
            self.presenter.reset();
            self.input = InputState::new();
        }
    }

    /// Handle returned to the page, the client lives as long as it does
    #[wasm_bindgen]
    pub struct GameHandle {
        client: Rc<RefCell<Client>>,
    }

    #[wasm_bindgen]
    impl GameHandle {
        /// Start over at 0-0 and hide the win banner
        pub fn restart(&self) {
            self.client.borrow_mut().restart();
        }

        pub fn paused(&self) -> bool {
            self.client.borrow().game.is_paused()
        }

        pub fn left_score(&self) -> u8 {
            self.client.borrow().game.score().left
        }

        pub fn right_score(&self) -> u8 {
            self.client.borrow().game.score().right
        }
    }

    fn window() -> Result<Window, JsValue> {
        web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))
    }

    fn viewport_map(window: &Window) -> Result<GameMap, JsValue> {
        let inner_width = window
            .inner_width()?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
        Ok(GameMap::fit_viewport(inner_width as f32))
    }

    fn random_seed() -> u64 {
        let mut bytes = [0u8; 8];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            Err(e) => {
                log::warn!("No entropy source, using a fixed seed: {}", e);
                0
            }
        }
    }

    fn load_config(config_ron: Option<String>) -> Result<Config, JsValue> {
        match config_ron {
            Some(source) => Config::from_ron(&source)
                .map_err(|e| JsValue::from_str(&format!("Invalid game config: {}", e))),
            None => Ok(Config::new()),
        }
    }

    /// Mount the game on `canvas_id` and start the frame loop
    ///
    /// `config_ron` overrides the default tuning, any field it leaves out
    /// keeps its default.
    #[wasm_bindgen]
    pub fn start(canvas_id: &str, config_ron: Option<String>) -> Result<GameHandle, JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            // Already installed by an earlier start()
            log::debug!("Logger init skipped: {}", e);
        }

        let config = load_config(config_ron)?;
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("Missing #{} canvas", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()?;

        let map = viewport_map(&window)?;
        let mut surface = CanvasSurface::new(canvas)?;
        surface.resize(map.width, map.height);

        let mut presenter = DomPresenter::new(&document)?;
        presenter.reset();

        let game = Game::new(config, surface.width(), surface.height(), random_seed());
        let client = Rc::new(RefCell::new(Client {
            game,
            surface,
            audio: WebAudioSink::new(),
            presenter,
            input: InputState::new(),
        }));

        listen_keys(&window, &client)?;
        listen_resize(&window, &client)?;
        run_frame_loop(&window, client.clone())?;

        log::info!("Pong started on #{}", canvas_id);
        Ok(GameHandle { client })
    }

    fn listen_keys(window: &Window, client: &Rc<RefCell<Client>>) -> Result<(), JsValue> {
        for (event, pressed) in [("keydown", true), ("keyup", false)] {
            let client = client.clone();
            let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                if apply_key(&mut client.borrow_mut().input, &e.key(), pressed) {
                    // Keep arrow keys from scrolling the page
                    e.prevent_default();
                }
            });
            window.add_event_listener_with_callback(event, on_key.as_ref().unchecked_ref())?;
            // Listeners stay registered for the page's lifetime
            on_key.forget();
        }
        Ok(())
    }

    fn listen_resize(window: &Window, client: &Rc<RefCell<Client>>) -> Result<(), JsValue> {
        let client = client.clone();
        let target = window.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || match viewport_map(&target) {
            Ok(map) => client.borrow_mut().resize(map),
            Err(e) => log::warn!("Resize ignored: {:?}", e),
        });
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
        Ok(())
    }

    fn run_frame_loop(window: &Window, client: Rc<RefCell<Client>>) -> Result<(), JsValue> {
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next = callback.clone();
        let target = window.clone();

        *callback.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
            client.borrow_mut().frame(now_ms);

            if let Some(cb) = next.borrow().as_ref() {
                if let Err(e) = target.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    log::error!("Frame loop stopped: {:?}", e);
                }
            }
        }));

        let first = callback.borrow();
        let cb = first
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Frame callback missing"))?;
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        Ok(())
    }
}
