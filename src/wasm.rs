//! Browser bindings
//!
//! The page owns rendering, physics and timing. It calls `launch` when the
//! ball is released and `on_throw_settled` once the pins stop moving, then
//! applies the returned reset directive and redraws from `snapshot`.

use wasm_bindgen::prelude::*;

use crate::engine::TurnEngine;
use crate::score::pins_from_f64;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Tenpin (wasm) starting...");
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Engine handle exported to JavaScript
#[wasm_bindgen]
pub struct WasmAlley {
    engine: TurnEngine,
    settle_delay_ms: u32,
    reset_delay_ms: u32,
}

#[wasm_bindgen]
impl WasmAlley {
    /// Build from a JSON settings string (`"{}"` for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<WasmAlley, JsValue> {
        let settings = Settings::from_json(settings_json).map_err(to_js)?;
        Ok(Self {
            engine: TurnEngine::new(&settings),
            settle_delay_ms: settings.settle_delay_ms,
            reset_delay_ms: settings.reset_delay_ms,
        })
    }

    /// Wait after release before calling `onThrowSettled`
    #[wasm_bindgen(getter, js_name = settleDelayMs)]
    pub fn settle_delay_ms(&self) -> u32 {
        self.settle_delay_ms
    }

    /// Wait after a throw report before applying its reset directive
    #[wasm_bindgen(getter, js_name = resetDelayMs)]
    pub fn reset_delay_ms(&self) -> u32 {
        self.reset_delay_ms
    }

    /// Ball released; fails while a throw is still in flight
    pub fn launch(&mut self) -> Result<(), JsValue> {
        self.engine.launch().map_err(to_js)
    }

    #[wasm_bindgen(js_name = isBusy)]
    pub fn is_busy(&self) -> bool {
        self.engine.is_busy()
    }

    /// Pins settled; returns the throw report as JSON
    ///
    /// Takes the raw JS number so bad counts are rejected, not wrapped.
    #[wasm_bindgen(js_name = onThrowSettled)]
    pub fn on_throw_settled(&mut self, pins: f64) -> Result<String, JsValue> {
        let pins = pins_from_f64(pins).map_err(to_js)?;
        let report = self.engine.on_throw_settled(pins).map_err(to_js)?;
        serde_json::to_string(&report).map_err(to_js)
    }

    /// Current scoreboard state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.engine.snapshot().to_json().map_err(to_js)
    }

    pub fn restart(&mut self) {
        self.engine.restart();
    }
}
