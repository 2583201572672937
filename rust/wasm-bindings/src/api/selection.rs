// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Click selection, highlight and hover

use taxmap_core::FeatureKey;
use wasm_bindgen::prelude::*;

use super::{borrow, TaxMapApi};
use crate::error::BindingError;
use crate::utils::to_js;

fn feature_key(key: u32) -> FeatureKey {
    FeatureKey(usize::try_from(key).unwrap_or(usize::MAX))
}

#[wasm_bindgen]
impl TaxMapApi {
    /// Select the parcel with this layer key (the GeoJSON feature `id`
    /// passed to `replaceLayer`). Call from the map's click handler.
    #[wasm_bindgen(js_name = selectParcel)]
    pub fn select_parcel(&self, key: u32) -> Result<(), JsValue> {
        borrow(&self.session)?
            .controller_mut()
            .select_parcel(feature_key(key))
            .map_err(BindingError::from)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = selectById)]
    pub fn select_by_id(&self, id: &str) -> Result<(), JsValue> {
        borrow(&self.session)?
            .controller_mut()
            .select_by_id(id)
            .map_err(BindingError::from)?;
        Ok(())
    }

    /// Highlight a parcel by identifier without moving the view. Returns
    /// `false` when no loaded parcel carries the identifier.
    #[wasm_bindgen(js_name = highlightById)]
    pub fn highlight_by_id(&self, id: &str) -> Result<bool, JsValue> {
        Ok(borrow(&self.session)?.controller_mut().highlight_by_id(id, None))
    }

    #[wasm_bindgen(js_name = clearHighlight)]
    pub fn clear_highlight(&self) -> Result<(), JsValue> {
        borrow(&self.session)?.controller_mut().clear_highlight();
        Ok(())
    }

    #[wasm_bindgen(js_name = pointerEnter)]
    pub fn pointer_enter(&self, key: u32) -> Result<(), JsValue> {
        borrow(&self.session)?.controller_mut().pointer_enter(feature_key(key));
        Ok(())
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&self, key: u32) -> Result<(), JsValue> {
        borrow(&self.session)?.controller_mut().pointer_leave(feature_key(key));
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = selectedId)]
    pub fn selected_id(&self) -> Result<Option<String>, JsValue> {
        Ok(borrow(&self.session)?.controller().selected_id())
    }

    #[wasm_bindgen(getter, js_name = highlightedId)]
    pub fn highlighted_id(&self) -> Result<Option<String>, JsValue> {
        Ok(borrow(&self.session)?.controller().highlighted_id())
    }

    /// Details panel content for a parcel, or `undefined` for unknown keys.
    #[wasm_bindgen(js_name = detailsFor)]
    pub fn details_for(&self, key: u32) -> Result<JsValue, JsValue> {
        let session = borrow(&self.session)?;
        match session.controller().details_for(feature_key(key)) {
            Some(details) => Ok(to_js(&details).map_err(BindingError::from)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}
