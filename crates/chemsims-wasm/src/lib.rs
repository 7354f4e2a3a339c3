//! WASM bindings for the reactor and gas-mixing demos.
//!
//! Both demos keep their state in thread-local maps keyed by opaque ids
//! (WASM is single-threaded). Functions take and return plain JS objects
//! converted with `serde-wasm-bindgen`; the page only applies what it gets.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! init();
//!
//! // Steady-state diagram
//! const reactor = cstr_create();
//! let view = cstr_update(reactor, { heatTransferCoeff: 12.5, feedTemp: 280 });
//! Plotly.react('plot', view.figure.data, view.figure.layout, view.figure.config);
//!
//! // Entropy of mixing
//! const demo = mixing_create();
//! mixing_set_state(demo, { pressureA: 1.0, pressureB: 0.4, volumeRatio: 2 });
//! mixing_animate(demo, frame => applyFrame(frame));
//! ```

use wasm_bindgen::prelude::*;

mod help;
mod logging;
mod mixing;
mod reactor;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn js_error<E: std::fmt::Display>(error: E) -> JsError {
    JsError::new(&error.to_string())
}

/// Install the panic hook and route `log` output to the browser console.
///
/// Safe to call more than once.
///
/// # Arguments
/// * `verbose` - Also show debug messages (redraws, computed outcomes)
#[wasm_bindgen]
pub fn init(verbose: Option<bool>) {
    std::panic::set_hook(Box::new(|info| {
        web_sys::console::error_1(&info.to_string().into());
    }));

    let level = if verbose.unwrap_or(false) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logging::install(level);
}
