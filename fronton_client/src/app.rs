//! Browser frame loop glue
//!
//! JS owns `requestAnimationFrame` and key listeners; it calls into the
//! exports below. One `App` per page, kept in a thread-local.

use std::cell::RefCell;

use fronton_core::{Config, DrawList, Flow, FrameClock, Fronton, Game, GameRng, Params};
use tracing::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::input::Keyboard;
use crate::logging::init_logging;
use crate::renderer::Renderer;

const GOODBYE: &str = "Bye! Reload the page to play again.";

struct App {
    game: Fronton,
    keyboard: Keyboard,
    clock: FrameClock,
    renderer: Renderer,
    canvas: HtmlCanvasElement,
    hud: HtmlElement,
    frame: DrawList,
    hud_text: String,
    last_timestamp: Option<f64>,
    running: bool,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

impl App {
    async fn new(canvas: HtmlCanvasElement, hud: HtmlElement) -> Result<Self, String> {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(Params::WINDOW_TITLE);
        }
        canvas.set_width(Params::SCREEN_WIDTH as u32);
        canvas.set_height(Params::SCREEN_HEIGHT as u32);

        let config = Config::new();
        let field = (config.field_width as f32, config.field_height as f32);
        let renderer = Renderer::new(canvas.clone(), field).await?;
        let game = Fronton::new(config, GameRng::from_entropy());

        Ok(Self {
            game,
            keyboard: Keyboard::new(),
            clock: FrameClock::default(),
            renderer,
            canvas,
            hud,
            frame: DrawList::new(),
            hud_text: String::new(),
            last_timestamp: None,
            running: true,
        })
    }

    /// Run due ticks, then draw. Returns false once the game has quit.
    fn frame(&mut self, timestamp_ms: f64) -> Result<bool, String> {
        if !self.running {
            return Ok(false);
        }

        let elapsed_secs = self
            .last_timestamp
            .map_or(0.0, |last| (timestamp_ms - last) / 1000.0);
        self.last_timestamp = Some(timestamp_ms);

        for _ in 0..self.clock.advance_secs(elapsed_secs) {
            if self.game.update(&self.keyboard) == Flow::Quit {
                self.shutdown();
                return Ok(false);
            }
        }

        self.layout();

        self.frame.clear();
        self.game.render(&mut self.frame);
        self.renderer.draw(&self.frame)?;
        self.set_hud_text(self.frame.debug_text());

        Ok(true)
    }

    fn layout(&mut self) {
        let outside_width = self.canvas.client_width().max(0) as u32;
        let outside_height = self.canvas.client_height().max(0) as u32;
        if outside_width == 0 || outside_height == 0 {
            return;
        }

        let (width, height) = self.game.layout(outside_width, outside_height);
        if (width, height) != (self.canvas.width(), self.canvas.height()) {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.renderer.resize(width, height);
        }
    }

    fn set_hud_text(&mut self, text: String) {
        if text != self.hud_text {
            self.hud.set_inner_text(&text);
            self.hud_text = text;
        }
    }

    fn shutdown(&mut self) {
        info!(ticks = self.clock.total_ticks(), "quit, stopping frame loop");
        self.running = false;
        self.keyboard.release_all();
        self.set_hud_text(GOODBYE.to_string());
    }
}

fn with_app<T>(f: impl FnOnce(&mut App) -> Result<T, String>) -> Result<T, JsValue> {
    APP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(app) => f(app).map_err(|e| {
            error!(error = %e, "frame failed");
            JsValue::from_str(&e)
        }),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

/// Build the renderer and the game; resolves once the first frame can run
#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement, hud: HtmlElement) -> js_sys::Promise {
    console_error_panic_hook::set_once();
    init_logging();

    wasm_bindgen_futures::future_to_promise(async move {
        match App::new(canvas, hud).await {
            Ok(app) => {
                info!("client initialized");
                APP.with(|cell| *cell.borrow_mut() = Some(app));
                Ok(JsValue::UNDEFINED)
            }
            Err(e) => {
                error!(error = %e, "failed to initialize client");
                Err(JsValue::from_str(&e))
            }
        }
    })
}

/// One animation frame; `false` means the game quit and the loop should stop
#[wasm_bindgen]
pub fn frame(timestamp_ms: f64) -> Result<bool, JsValue> {
    with_app(|app| app.frame(timestamp_ms))
}

/// Returns true when the key belongs to the game (caller should preventDefault)
#[wasm_bindgen]
pub fn key_down(key: &str) -> bool {
    with_app(|app| Ok(app.keyboard.handle_key_down(key))).unwrap_or(false)
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> bool {
    with_app(|app| Ok(app.keyboard.handle_key_up(key))).unwrap_or(false)
}

/// Drop held keys, e.g. when the window loses focus
#[wasm_bindgen]
pub fn release_keys() {
    let _ = with_app(|app| {
        app.keyboard.release_all();
        Ok(())
    });
}
