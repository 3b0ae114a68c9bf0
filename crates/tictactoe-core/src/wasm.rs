//! WebAssembly bindings for the game engine.
//!
//! This module exposes the engine to JavaScript through wasm-bindgen.
//! Cell positions coming from the page are validated here before they
//! reach the engine.

use wasm_bindgen::prelude::*;

use crate::game::{GameEngine, GameError};

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert a position received from JavaScript into a board position.
fn position_from_js(position: i32) -> Result<usize, GameError> {
    usize::try_from(position).map_err(|_| GameError::InvalidPosition(usize::MAX))
}

/// WASM-exposed game wrapper
#[wasm_bindgen]
pub struct WasmGame {
    engine: GameEngine,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a game ready to play
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            engine: GameEngine::new(),
        }
    }

    /// Start a new game, returns snapshot JSON
    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(&mut self) -> String {
        let snapshot = self.engine.new_game();
        serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    /// Apply a move, returns snapshot JSON or the error as JSON
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, position: i32) -> Result<String, JsValue> {
        let result = position_from_js(position).and_then(|p| self.engine.apply_move(p));
        match result {
            Ok(snapshot) => {
                Ok(serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string()))
            }
            Err(e) => Err(JsValue::from_str(
                &serde_json::to_string(&e).unwrap_or_else(|_| e.to_string()),
            )),
        }
    }

    /// Get the current snapshot as JSON
    #[wasm_bindgen(js_name = getSnapshot)]
    pub fn get_snapshot(&self) -> String {
        serde_json::to_string(&self.engine.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
