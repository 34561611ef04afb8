//! WebAssembly bindings for split-testing in the browser.
//!
//! Assignments are kept in `window.localStorage`, so a returning visitor sees
//! the same variant across page loads.
//!
//! ```text
//! Browser JS → wasm-bindgen → ExperimentConfig → resolve_variant → localStorage
//! ```

#![cfg(target_arch = "wasm32")]

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config;
use crate::experiment::{self, ExperimentConfig, Variant};
use crate::kv::LocalStorageKvStore;

/// Initialize WASM module with panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(err: &crate::Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn variant_to_js(variant: &Variant) -> Result<JsValue, JsValue> {
    Ok(variant.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Resolve the variant of an experiment and return it.
///
/// `options` has the shape of [`ExperimentConfig`]:
/// `{ name, variants: [{ name, weight?, data? }], seed?, debug?, resolveSeedConflict? }`.
/// `on_first_pick` is called with the variant when it is first assigned.
///
/// # Errors
/// Throws a JS `Error` for malformed options, an inconsistent stored
/// assignment, or an unavailable local storage.
#[wasm_bindgen(js_name = setExperiment)]
pub fn set_experiment(
    options: JsValue,
    on_first_pick: Option<js_sys::Function>,
) -> Result<JsValue, JsValue> {
    let config: ExperimentConfig = serde_wasm_bindgen::from_value(options)?;

    let mut builder = config.into_builder();
    if let Some(callback) = on_first_pick {
        builder = builder.on_first_pick(move |variant| {
            let called = variant_to_js(variant)
                .and_then(|value| callback.call1(&JsValue::NULL, &value));
            if let Err(e) = called {
                console::error_1(&e);
            }
        });
    }

    let variant = builder.resolve().map_err(|e| to_js_error(&e))?;
    variant_to_js(&variant)
}

/// Name of the variant stored for `experiment`, or `undefined`.
///
/// # Errors
/// Throws if local storage is unavailable.
#[wasm_bindgen(js_name = getPickedVariantName)]
pub fn get_picked_variant_name(experiment: &str) -> Result<Option<String>, JsValue> {
    let store = LocalStorageKvStore::new().map_err(|e| to_js_error(&e))?;
    experiment::picked_variant_name(&store, experiment).map_err(|e| to_js_error(&e))
}

/// Stored variant of `experiment`, looked up in `variants`, or `undefined`.
///
/// `variants` has the shape `[{ name, weight?, data? }]`. Never picks.
///
/// # Errors
/// Throws for malformed variants or if local storage is unavailable.
#[wasm_bindgen(js_name = getPickedVariant)]
pub fn get_picked_variant(experiment: &str, variants: JsValue) -> Result<JsValue, JsValue> {
    let variants: Vec<Variant> = serde_wasm_bindgen::from_value(variants)?;
    let store = LocalStorageKvStore::new().map_err(|e| to_js_error(&e))?;
    match experiment::picked_variant(&store, experiment, &variants).map_err(|e| to_js_error(&e))? {
        Some(variant) => variant_to_js(&variant),
        None => Ok(JsValue::UNDEFINED),
    }
}

/// Default debug flag for experiments that don't set one.
#[wasm_bindgen(js_name = setDebugMode)]
pub fn set_debug_mode(enabled: bool) {
    config::set_default_debug(enabled);
}
