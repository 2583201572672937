// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! TaxMap WebAssembly Bindings
//!
//! JavaScript API for the tax map viewer built with wasm-bindgen. The page
//! supplies three bridge objects (map, page, data service) and the viewer
//! drives them from the shared selection and search state machine.

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

mod api;
mod bridge;
mod error;
mod geojson;
mod utils;

pub use api::{normalize_attributes, popup_for, TaxMapApi};
pub use bridge::{DataBridge, MapBridge, PageBridge};
pub use error::BindingError;
pub use utils::set_panic_hook as init_panic_hook;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the version of the tax map bindings
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
