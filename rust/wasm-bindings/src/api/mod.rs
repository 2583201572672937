// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JavaScript API for the tax map viewer
//!
//! Example:
//! ```javascript
//! const api = new TaxMapApi(mapBridge, pageBridge, dataBridge, { aliasPriority: "legacy" });
//! await api.loadParcels();
//! input.addEventListener("input", () => api.onSearchInput(input.value));
//! ```

mod loading;
mod search;
mod selection;

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use taxmap_core::{
    attributes::RawAttributes, popup_html, AliasPriority, Debouncer, ViewerSession,
};
use wasm_bindgen::prelude::*;

use crate::bridge::{DataBridge, JsMapSurface, JsPageShell, MapBridge, PageBridge};
use crate::error::BindingError;
use crate::geojson::ViewerOptions;
use crate::utils::to_js;

pub(crate) type Session = ViewerSession<JsMapSurface, JsPageShell>;
pub(crate) type SharedSession = Rc<RefCell<Session>>;

/// Main tax map viewer API
#[wasm_bindgen]
pub struct TaxMapApi {
    session: SharedSession,
    service: DataBridge,
    debouncer: Rc<RefCell<Debouncer>>,
}

#[wasm_bindgen]
impl TaxMapApi {
    /// Create a viewer around the page's bridges.
    ///
    /// `options` may carry `aliasPriority` (`"legacy"` or `"compact"`),
    /// `placeholderBounds` (`[minLon, minLat, maxLon, maxLat]`) and
    /// `debounceMs`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        map: MapBridge,
        page: PageBridge,
        service: DataBridge,
        options: JsValue,
    ) -> Result<TaxMapApi, JsValue> {
        let options: ViewerOptions = if options.is_undefined() || options.is_null() {
            ViewerOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(BindingError::from)?
        };
        let options = options.resolve().map_err(BindingError::Options)?;

        let session = ViewerSession::new(
            JsMapSurface::new(map),
            JsPageShell::new(page),
            options.priority,
            options.placeholder,
        );

        Ok(TaxMapApi {
            session: Rc::new(RefCell::new(session)),
            service,
            debouncer: Rc::new(RefCell::new(Debouncer::new(options.debounce))),
        })
    }

    /// Number of parcels in the loaded layer
    #[wasm_bindgen(getter, js_name = parcelCount)]
    pub fn parcel_count(&self) -> Result<u32, JsValue> {
        let session = borrow(&self.session)?;
        Ok(u32::try_from(session.controller().layer().len()).unwrap_or(u32::MAX))
    }
}

/// Mutable access to the session. Bridge callbacks that re-enter the API
/// while it is updating get [`BindingError::Busy`] instead of a panic.
pub(crate) fn borrow(session: &SharedSession) -> Result<RefMut<'_, Session>, BindingError> {
    session.try_borrow_mut().map_err(|_| BindingError::Busy)
}

fn parse_priority(priority: Option<String>) -> Result<AliasPriority, BindingError> {
    match priority {
        Some(text) => text.parse().map_err(BindingError::Options),
        None => Ok(AliasPriority::default()),
    }
}

/// Normalize a raw attribute object into details panel content.
///
/// ```javascript
/// normalizeAttributes({ MAP_LOT: "12-34", OWNER: "Jane Doe" });
/// // { kind: "fields", value: [{ label: "Map/Lot", value: "12-34" }, ...] }
/// ```
#[wasm_bindgen(js_name = normalizeAttributes)]
pub fn normalize_attributes(properties: JsValue, alias_priority: Option<String>) -> Result<JsValue, JsValue> {
    let priority = parse_priority(alias_priority)?;
    let raw: RawAttributes = serde_wasm_bindgen::from_value(properties).map_err(BindingError::from)?;
    let details = taxmap_core::normalize(&raw, priority).details();
    Ok(to_js(&details).map_err(BindingError::from)?)
}

/// Popup HTML for a raw attribute object.
#[wasm_bindgen(js_name = popupHtml)]
pub fn popup_for(properties: JsValue, alias_priority: Option<String>) -> Result<String, JsValue> {
    let priority = parse_priority(alias_priority)?;
    let raw: RawAttributes = serde_wasm_bindgen::from_value(properties).map_err(BindingError::from)?;
    Ok(popup_html(&taxmap_core::normalize(&raw, priority)))
}
