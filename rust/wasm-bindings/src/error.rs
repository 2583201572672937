// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced to JavaScript as `Error` objects.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error(transparent)]
    Core(#[from] taxmap_core::Error),

    #[error("Conversion failed: {0}")]
    Convert(#[from] serde_wasm_bindgen::Error),

    #[error("Invalid viewer options: {0}")]
    Options(String),

    /// A bridge callback called back into the viewer while it was updating.
    #[error("Viewer is busy")]
    Busy,
}

impl From<BindingError> for JsValue {
    fn from(err: BindingError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
