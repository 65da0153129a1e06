//! Browser exports for the rock-paper-scissors slot.
//!
//! The host calls `game_init` with a JSON config, then `game_tick` once per
//! animation frame, and reads the flat render, sound and event buffers
//! straight out of wasm memory after each tick.

pub mod runner;

pub use runner::SlotRunner;

use std::cell::RefCell;
use rps_slot::InputEvent;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SlotRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner. `None` before a successful `game_init`.
fn with_runner<R>(f: impl FnOnce(&mut SlotRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn push_input(event: InputEvent) {
    if with_runner(|r| r.push_input(event)).is_none() {
        log::warn!("rps-slot: input before game_init ignored");
    }
}

/// Build the session from `config_json` (empty string for the stock game).
/// Returns false when the config is rejected; the error is logged.
#[wasm_bindgen]
pub fn game_init(config_json: &str) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = if config_json.trim().is_empty() {
        SlotRunner::new(Default::default())
    } else {
        SlotRunner::from_json(config_json)
    };

    match runner {
        Ok(runner) => {
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("rps-slot: initialized");
            true
        }
        Err(e) => {
            log::error!("rps-slot: failed to initialize: {}", e);
            false
        }
    }
}

#[wasm_bindgen]
pub fn game_tick(frame_seconds: f32) {
    with_runner(|r| r.tick(frame_seconds));
}

#[wasm_bindgen]
pub fn game_spin() {
    push_input(InputEvent::Spin);
}

#[wasm_bindgen]
pub fn game_bet_up() {
    push_input(InputEvent::BetIncrease);
}

#[wasm_bindgen]
pub fn game_bet_down() {
    push_input(InputEvent::BetDecrease);
}

/// Force upcoming stops, player reels first.
#[wasm_bindgen]
pub fn game_set_gaffe(stops: Vec<u32>) {
    push_input(InputEvent::SetGaffe(stops.into_iter().map(|s| s as usize).collect()));
}

#[wasm_bindgen]
pub fn game_reset() {
    push_input(InputEvent::Reset);
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const u8 {
    with_runner(|r| r.sound_events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_sound_events_len() -> u32 {
    with_runner(|r| r.sound_events_len()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_balance() -> f64 {
    with_runner(|r| r.balance()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_bet() -> f64 {
    with_runner(|r| r.bet()).unwrap_or_default()
}

/// Asset paths in id order, for the host texture loader.
#[wasm_bindgen]
pub fn get_asset_manifest() -> js_sys::Array {
    let names = with_runner(|r| r.asset_names().to_vec()).unwrap_or_default();
    names.into_iter().map(JsValue::from).collect()
}

/// The active configuration as JSON.
#[wasm_bindgen]
pub fn get_config_json() -> String {
    with_runner(|r| r.config_json()).unwrap_or_default()
}
