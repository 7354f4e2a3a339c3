//! Bindings for the CSTR steady-state diagram.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::prelude::*;

use cstr::{
    ChartSurface, Parameter, ParameterStore, ReactorParameters, ReactorSliders, ReactorView,
    redraw, render,
};

use crate::{from_js, js_error, to_js};

thread_local! {
    static REACTORS: RefCell<HashMap<u32, ParameterStore>> = RefCell::new(HashMap::new());
    static NEXT_REACTOR_ID: RefCell<u32> = const { RefCell::new(0) };
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = react, catch)]
    fn plotly_react(
        element_id: &str,
        data: JsValue,
        layout: JsValue,
        config: JsValue,
    ) -> Result<JsValue, JsValue>;
}

/// Draws views with the page's global `Plotly`.
struct PlotlySurface<'a> {
    element_id: &'a str,
}

impl ChartSurface for PlotlySurface<'_> {
    type Error = JsError;

    fn present(&mut self, view: &ReactorView) -> Result<(), JsError> {
        let figure = &view.figure;
        plotly_react(
            self.element_id,
            to_js(&figure.data)?,
            to_js(&figure.layout)?,
            to_js(&figure.config)?,
        )
        .map_err(|e| JsError::new(&format!("Plotly.react failed: {:?}", e)))?;
        Ok(())
    }
}

fn insert(store: ParameterStore) -> u32 {
    let id = NEXT_REACTOR_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    REACTORS.with(|reactors| {
        reactors.borrow_mut().insert(id, store);
    });

    id
}

fn with_store<T>(
    reactor_id: u32,
    f: impl FnOnce(&mut ParameterStore) -> Result<T, JsError>,
) -> Result<T, JsError> {
    REACTORS.with(|reactors| {
        let mut reactors = reactors.borrow_mut();
        let store = reactors
            .get_mut(&reactor_id)
            .ok_or_else(|| JsError::new(&format!("Reactor {} not found", reactor_id)))?;
        f(store)
    })
}

/// Create a diagram with default parameters and slider ranges.
///
/// Returns an id for use with the other `cstr_*` functions.
#[wasm_bindgen]
pub fn cstr_create() -> u32 {
    insert(ParameterStore::new())
}

/// Create a diagram with custom slider ranges.
///
/// # Arguments
/// * `sliders` - Object with optional `heatTransferCoeff`, `reverseRateFactor`,
///   `feedTemp` and `residenceTime` entries of `{ min, max, step }`
#[wasm_bindgen]
pub fn cstr_create_with_sliders(sliders: JsValue) -> Result<u32, JsError> {
    let sliders: ReactorSliders = from_js(sliders)?;
    Ok(insert(ParameterStore::with_sliders(sliders)))
}

/// Delete a diagram to free memory.
#[wasm_bindgen]
pub fn cstr_delete(reactor_id: u32) {
    REACTORS.with(|reactors| {
        reactors.borrow_mut().remove(&reactor_id);
    });
}

/// The default parameter set (U 0, kr 0, Tf 265 K, τ 400).
#[wasm_bindgen]
pub fn cstr_default_parameters() -> Result<JsValue, JsError> {
    to_js(&ReactorParameters::default())
}

/// Slider ranges of a diagram.
#[wasm_bindgen]
pub fn cstr_sliders(reactor_id: u32) -> Result<JsValue, JsError> {
    with_store(reactor_id, |store| to_js(store.sliders()))
}

/// Replace the parameter set and return the new view.
///
/// # Arguments
/// * `reactor_id` - Diagram ID
/// * `parameters` - Object with `heatTransferCoeff`, `reverseRateFactor`,
///   `feedTemp` and `residenceTime`; missing fields take their defaults
///
/// # Returns
/// `{ parameters, figure, readouts }`
#[wasm_bindgen]
pub fn cstr_update(reactor_id: u32, parameters: JsValue) -> Result<JsValue, JsError> {
    let parameters: ReactorParameters = from_js(parameters)?;
    with_store(reactor_id, |store| {
        store.replace(parameters).map_err(js_error)?;
        to_js(&render(&store.current()))
    })
}

/// Advance one parameter by a slider step ("U", "kr", "Tf" or "tau").
#[wasm_bindgen]
pub fn cstr_step_up(reactor_id: u32, parameter: JsValue) -> Result<JsValue, JsError> {
    let parameter: Parameter = from_js(parameter)?;
    with_store(reactor_id, |store| {
        let parameters = store.step_up(parameter);
        to_js(&render(&parameters))
    })
}

/// Restore the default parameters and return the new view.
#[wasm_bindgen]
pub fn cstr_reset(reactor_id: u32) -> Result<JsValue, JsError> {
    with_store(reactor_id, |store| {
        store.reset();
        to_js(&render(&store.current()))
    })
}

/// View of the current parameters without changing anything.
#[wasm_bindgen]
pub fn cstr_view(reactor_id: u32) -> Result<JsValue, JsError> {
    with_store(reactor_id, |store| to_js(&render(&store.current())))
}

/// Draw the current view into the element with `element_id` using `Plotly.react`.
///
/// # Returns
/// The view that was drawn, for updating the readouts
#[wasm_bindgen]
pub fn cstr_draw(reactor_id: u32, element_id: &str) -> Result<JsValue, JsError> {
    with_store(reactor_id, |store| {
        let view = redraw(store, &mut PlotlySurface { element_id })?;
        to_js(&view)
    })
}
