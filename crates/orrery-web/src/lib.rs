//! Browser bridge for the orrery.
//!
//! One [`OrreryRunner`] lives in a `thread_local!`. Host event handlers call
//! the `orrery_*` exports, which queue commands; the animation-frame loop
//! started by [`orrery_start`] applies them, draws onto the canvas, and
//! refreshes the display texts the page reads back.
//!
//! ```ignore
//! import init, * as orrery from "./pkg/orrery_web.js";
//! await init();
//! orrery.orrery_init(document.getElementById("orbitCanvas"));
//! orrery.orrery_start();
//! canvas.addEventListener("wheel", e => orrery.orrery_wheel(e.offsetX, e.offsetY, e.deltaY));
//! ```

pub mod canvas;
pub mod runner;
pub mod scheduler;

pub use canvas::CanvasSurface;
pub use runner::{drive_frame, OrreryRunner};
pub use scheduler::AnimationFrameScheduler;

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use orrery_engine::{
    BodyCatalog, Command, EditCommand, FrameScheduler, InputEvent, Orrery, OrreryConfig,
};

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner<CanvasSurface>>> = const { RefCell::new(None) };
    static SCHEDULER: RefCell<Option<AnimationFrameScheduler>> = const { RefCell::new(None) };
}

/// Run `f` against the runner. Returns `None` (and logs) before `orrery_init`.
fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner<CanvasSurface>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("orrery: not initialized, call orrery_init() first");
                None
            }
        }
    })
}

fn push(command: Command) {
    with_runner(|r| r.push(command));
}

/// Create the simulation on `canvas`. `catalog_json` replaces the default
/// planets when given.
#[wasm_bindgen]
pub fn orrery_init(canvas: HtmlCanvasElement, catalog_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let catalog = match catalog_json {
        Some(json) => BodyCatalog::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => BodyCatalog::default(),
    };
    let config = OrreryConfig {
        width: canvas.width() as f64,
        height: canvas.height() as f64,
        ..OrreryConfig::default()
    };
    let bodies = catalog.bodies.len();
    let surface = CanvasSurface::from_canvas(&canvas)?;
    let runner = OrreryRunner::new(Orrery::with_catalog(config, catalog), surface);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized with {bodies} bodies");
    Ok(())
}

/// Start the animation loop. It runs until the page goes away; if called
/// before `orrery_init` it idles until a runner exists.
#[wasm_bindgen]
pub fn orrery_start() {
    let already_running = SCHEDULER.with(|cell| cell.borrow().is_some());
    if already_running {
        log::warn!("orrery: animation loop already running");
        return;
    }

    let scheduler = AnimationFrameScheduler::new();
    let mut next = scheduler.clone();
    scheduler.set_callback(Closure::new(move || {
        RUNNER.with(|cell| {
            let mut borrow = cell.borrow_mut();
            if !drive_frame(borrow.as_mut(), &mut next) {
                log::debug!("orrery: waiting for orrery_init()");
            }
        });
    }));

    let mut first = scheduler.clone();
    SCHEDULER.with(|cell| {
        *cell.borrow_mut() = Some(scheduler);
    });
    first.request_frame();
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_wheel(x: f64, y: f64, delta_y: f64) {
    with_runner(|r| r.push_input(InputEvent::Wheel { x, y, delta_y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_up(x: f64, y: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_leave() {
    with_runner(|r| r.push_input(InputEvent::PointerLeave));
}

// ---- Controls ----

/// Apply the edit form for body `index`. Fields are raw input text; ones
/// that don't parse or break an orbital invariant leave the value unchanged.
#[wasm_bindgen]
pub fn orrery_update_body(index: usize, axis: &str, eccentricity: &str, period: &str, color: &str) {
    push(Command::Edit(EditCommand::from_fields(index, axis, eccentricity, period, color)));
}

#[wasm_bindgen]
pub fn orrery_reset() {
    push(Command::Reset);
}

#[wasm_bindgen]
pub fn orrery_set_speed(value: f64) {
    push(Command::SetSpeed(value));
}

#[wasm_bindgen]
pub fn orrery_reset_view() {
    push(Command::ResetView);
}

#[wasm_bindgen]
pub fn orrery_resize(width: f64, height: f64) {
    push(Command::Resize { width, height });
}

// ---- Display accessors ----

#[wasm_bindgen]
pub fn orrery_time_text() -> String {
    with_runner(|r| r.time_text().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn orrery_description_text() -> String {
    with_runner(|r| r.description_text().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn orrery_speed_text() -> String {
    with_runner(|r| r.speed_text().to_string()).unwrap_or_default()
}
