//! Neon Breakout entry point
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

    use neon_breakout::platform::web::{CanvasSurface, HtmlAudio, LocalStorageStore, style_from_css};
    use neon_breakout::renderer::Surface;
    use neon_breakout::sim::Key;
    use neon_breakout::{FrameOutcome, Game, Settings};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Game instance holding all state
    struct App {
        game: Game<HtmlAudio, LocalStorageStore>,
        surface: CanvasSurface,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Neon Breakout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas element #gameCanvas not found");
            return;
        };
        let Some(surface) = CanvasSurface::fill_window(&window, &canvas) else {
            log::error!("Failed to get a 2D context for #gameCanvas");
            return;
        };

        let settings = Settings::load();
        let style = style_from_css(&window, &settings.style);
        let seed = settings.seed_or(js_sys::Date::now() as u64);
        log::info!("Serve seed {seed}");
        let mut rng = Pcg32::seed_from_u64(seed);

        let (width, height) = surface.size();
        let game = Game::new(
            width,
            height,
            style,
            HtmlAudio::new(&settings.audio),
            LocalStorageStore::new(&window),
            &mut rng,
        );
        let app = Rc::new(RefCell::new(App { game, surface }));

        setup_input_handlers(app.clone());
        game_loop(app);
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = Key::from_dom(&event.key());
            if key != Key::Other {
                app.borrow_mut().game.on_key(key);
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let outcome = {
            let mut guard = app.borrow_mut();
            let App { game, surface } = &mut *guard;
            game.frame(surface)
        };

        if outcome == FrameOutcome::Continue {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use neon_breakout::platform::native::{FileStore, LogAudio};
    use neon_breakout::renderer::DrawList;
    use neon_breakout::{Game, Settings};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Neon Breakout (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_from(settings_path.as_deref());

    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let seed = settings.seed_or(clock_seed);
    log::info!("Serve seed {seed}");
    let mut rng = Pcg32::seed_from_u64(seed);

    let field = settings.playfield;
    let mut surface = DrawList::new(field.width, field.height);
    let mut game = Game::new(
        field.width,
        field.height,
        settings.style.clone(),
        LogAudio::new(&settings.audio),
        FileStore::open(&settings.high_score_path),
        &mut rng,
    );

    let frames = game.run_until_end(&mut surface, settings.max_frames);
    let session = &game.session;
    log::info!(
        "Finished after {} frames: {:?}, score {}, high score {}, {} bricks left",
        frames,
        session.phase,
        session.score,
        session.high_score,
        session.bricks_remaining()
    );
    for text in surface.texts() {
        println!("{text}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
