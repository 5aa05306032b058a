// rs_kinematics_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the kinematics resolver.

use wasm_bindgen::prelude::*;
use rs_kinematics::apis::session::{InputMode, Session};
use rs_kinematics::quantities::QuantityId;
use rs_kinematics::utils::DEFAULT_SAMPLE_INTERVAL;

fn quantity(name: &str) -> Result<QuantityId, JsValue> {
    name.parse::<QuantityId>().map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct WasmSession {
    session: Session,
}

impl Default for WasmSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    #[wasm_bindgen]
    pub fn set_quantity(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        self.session.set_quantity(quantity(name)?, value);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn unset_quantity(&mut self, name: &str) -> Result<(), JsValue> {
        self.session.unset_quantity(quantity(name)?);
        Ok(())
    }

    /// Runs the resolver; the error carries the message shown to the user.
    #[wasm_bindgen]
    pub fn resolve(&mut self) -> Result<(), JsValue> {
        match self.session.resolve().message() {
            None => Ok(()),
            Some(message) => {
                web_sys::console::warn_1(&JsValue::from_str(message));
                Err(JsValue::from_str(message))
            }
        }
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Switches between the "scalar", "vector" and "forces" input tables.
    #[wasm_bindgen]
    pub fn switch_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode = match mode {
            "scalar" => InputMode::Scalar,
            "vector" => InputMode::Vector,
            "forces" => InputMode::Forces,
            other => return Err(JsValue::from_str(&format!("Unknown input mode: {}", other))),
        };
        self.session.switch_mode(mode);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn value(&self, name: &str) -> Option<f64> {
        name.parse::<QuantityId>().ok().and_then(|id| self.session.value(id))
    }

    #[wasm_bindgen(getter)]
    pub fn is_solved(&self) -> bool {
        self.session.is_solved()
    }

    #[wasm_bindgen(getter)]
    pub fn error_message(&self) -> String {
        self.session.error_message().to_string()
    }

    /// Flattened `[t0, x0, y0, t1, x1, y1, ...]` samples of the solved flight path, every
    /// `interval` seconds (0.1 s when omitted).
    #[wasm_bindgen]
    pub fn trajectory(&self, interval: Option<f64>) -> Result<js_sys::Float64Array, JsValue> {
        let trajectory = self.session.trajectory().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let flat: Vec<f64> = trajectory
            .sample(interval.unwrap_or(DEFAULT_SAMPLE_INTERVAL))
            .iter()
            .flat_map(|p| [p.time, p.x, p.y])
            .collect();
        Ok(js_sys::Float64Array::from(flat.as_slice()))
    }
}
