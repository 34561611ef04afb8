//! split-testing Browser Package
//!
//! Exposes `setExperiment`, `getPickedVariantName`, `getPickedVariant` and
//! `setDebugMode` to JavaScript. Assignments persist in `window.localStorage`.

use wasm_bindgen::prelude::*;

// Re-export bindings from parent crate
pub use split_testing::wasm::*;

/// Get package version
#[wasm_bindgen(js_name = packageVersion)]
pub fn package_version() -> String {
    format!("split-testing-wasm v{}", env!("CARGO_PKG_VERSION"))
}
