use wasm_bindgen::prelude::*;

use crate::config::OpponentConfig;
use crate::error::OthelloError;
use crate::game::GameInstance;

/// Browser-facing handle on a [`GameInstance`].
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config` is an optional `OpponentConfig` object; omitted means two players.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsValue> {
        Ok(Self {
            inner: GameInstance::new(parse_config(config)?),
        })
    }

    pub fn reset(&mut self, config: JsValue) -> Result<(), JsValue> {
        self.inner.reset(parse_config(config)?);
        Ok(())
    }

    /// Plays a human move and returns the new state.
    pub fn place(&mut self, x: u8, y: u8) -> Result<JsValue, JsValue> {
        self.inner.place(x, y).map_err(to_js_error)?;
        self.state()
    }

    /// Lets the computer move and returns the new state.
    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self) -> Result<JsValue, JsValue> {
        self.inner.do_ai_move().map_err(to_js_error)?;
        self.state()
    }

    #[wasm_bindgen(js_name = isComputerTurn)]
    pub fn is_computer_turn(&self) -> bool {
        self.inner.is_computer_turn()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_result())?)
    }
}

/// Menu entries as `[{ label, config }]`.
#[wasm_bindgen]
pub fn opponent_presets() -> Result<JsValue, JsValue> {
    #[derive(serde::Serialize)]
    struct Preset {
        label: String,
        config: OpponentConfig,
    }

    let presets: Vec<Preset> = OpponentConfig::PRESETS
        .iter()
        .map(|config| Preset {
            label: config.label(),
            config: *config,
        })
        .collect();
    Ok(serde_wasm_bindgen::to_value(&presets)?)
}

fn parse_config(value: JsValue) -> Result<OpponentConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(OpponentConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn to_js_error(err: OthelloError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
